//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the guarded default route. It waits out the startup check, then
//! either renders the session chrome or hands off to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::session_badge::SessionBadge;
use crate::state::session::AuthSession;
use crate::util::auth::install_unauth_redirect;

/// Landing page — session status plus sign-out.
/// Redirects to `/login` once the startup check resolves with no session.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let state = auth.state();
    let navigate = use_navigate();

    install_unauth_redirect(&auth, navigate);

    let on_sign_out = move |_| auth.sign_out();

    view! {
        <Show
            when=move || state.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p class="home-page__status">
                            {move || if state.get().loading { "Checking session..." } else { "Redirecting to login..." }}
                        </p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <header class="home-page__header toolbar">
                    <span class="toolbar__title">"Tracker"</span>
                    <span class="toolbar__spacer"></span>
                    <SessionBadge/>
                    <button class="btn toolbar__sign-out" on:click=on_sign_out title="Sign out">
                        "Sign Out"
                    </button>
                </header>
                <main class="home-page__body">
                    <p>"You are signed in. This session will be restored on your next visit."</p>
                </main>
            </div>
        </Show>
    }
}
