//! Authentication session state and its pure transition function.
//!
//! DESIGN
//! ======
//! Views never mutate this state directly: `state::session::AuthSession`
//! applies tagged `AuthAction`s through `reduce`, keeping the transition
//! logic testable without a UI runtime.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Credentials for the signed-in user, if any.
///
/// `token` is `None` both before the startup check completes and after
/// sign-out; once signed in it holds a non-empty access token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
}

/// Authentication state tracking the current session and loading status.
///
/// `loading` is true only while the startup check is in flight. It drops to
/// false when the check resolves and never returns to true for the lifetime
/// of the holder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    /// The unresolved state a fresh holder starts in.
    fn default() -> Self {
        Self {
            session: Session::default(),
            loading: true,
        }
    }
}

impl AuthState {
    /// True once the startup check has resolved, in either direction.
    pub fn is_resolved(&self) -> bool {
        !self.loading
    }

    /// True when the startup check has resolved and a session token is held.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.session.token.is_some()
    }
}

/// Mutations accepted by the auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// Adopt the carried token as the current session.
    SignIn(String),
    /// Drop the current session.
    SignOut,
}

/// Pure transition function from one auth state to the next.
///
/// Every action fully determines the resulting state, so the previous state
/// is only part of the signature to keep the reducer shape stable as actions
/// grow richer. Both actions resolve `loading`; nothing sets it back.
pub fn reduce(_state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::SignIn(token) => AuthState {
            session: Session { token: Some(token) },
            loading: false,
        },
        AuthAction::SignOut => AuthState {
            session: Session::default(),
            loading: false,
        },
    }
}
