//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior on both sides of the
//! login boundary.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::session::AuthSession;

/// True when the startup check has resolved and no session is held.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.token.is_none()
}

/// True when a signed-in user is sitting on the login route.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/login` whenever the session resolves with no token.
pub fn install_unauth_redirect<F>(session: &AuthSession, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = session.state();
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&state.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
