//! Login page for entering an access token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens are issued out of band; this client performs no network auth
//! flow. The page's job is to accept a token, hand it to the session
//! holder, and leave.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::state::session::AuthSession;
use crate::util::auth::should_redirect_authed;

/// Trimmed, non-empty token text, or the message to show the user.
pub(crate) fn validate_token_input(raw: &str) -> Result<String, &'static str> {
    let token = raw.trim();
    if token.is_empty() {
        return Err("Enter an access token first.");
    }
    Ok(token.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let state = auth.state();
    let token = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Signed in, now or already: leave for the landing page.
    let navigate = use_navigate();
    Effect::new(move || {
        if should_redirect_authed(&state.get()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_token_input(&token.get()) {
            Ok(value) => auth.sign_in(&value),
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Tracker"</h1>
                <p class="login-card__subtitle">"Paste your access token to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="access token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
