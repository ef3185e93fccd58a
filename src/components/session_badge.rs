//! Header badge showing that a session is active.
//!
//! The token itself is a credential and is never rendered in full; only a
//! short masked suffix is shown so a user can tell sessions apart.

#[cfg(test)]
#[path = "session_badge_test.rs"]
mod session_badge_test;

use leptos::prelude::*;

use crate::state::session::AuthSession;

/// Characters of the token left visible at the end of the masked form.
const VISIBLE_SUFFIX: usize = 4;

/// Masked rendering of a token. Tokens at most four characters long are
/// hidden entirely.
pub(crate) fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= VISIBLE_SUFFIX {
        return "••••".to_owned();
    }
    let suffix: String = token.chars().skip(len - VISIBLE_SUFFIX).collect();
    format!("••••{suffix}")
}

/// Badge for the page header; empty while no session is held.
#[component]
pub fn SessionBadge() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let state = auth.state();
    let masked = move || {
        state
            .get()
            .session
            .token
            .map(|token| mask_token(&token))
            .unwrap_or_default()
    };

    view! {
        <span class="session-badge" title="Active session (token masked)">
            {masked}
        </span>
    }
}
