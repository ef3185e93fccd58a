//! Reactive holder for the authentication session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `AuthSession` and provides it through context. Views
//! subscribe via its signal and re-render on sign-in/sign-out; every mutation
//! runs through the persistence collaborator and then the pure reducer in
//! `state::auth`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::auth::{AuthAction, AuthState, reduce};
use crate::storage::token_store::{TokenStore, TokenStoreError};

/// Owns the auth state signal and mediates all mutations through storage.
///
/// `Copy` so event handlers and effects can capture it freely; the store
/// itself lives in arena storage behind the copyable handle.
#[derive(Clone, Copy)]
pub struct AuthSession {
    state: RwSignal<AuthState>,
    store: StoredValue<Arc<dyn TokenStore>>,
}

impl AuthSession {
    /// New holder in the unresolved state.
    ///
    /// Performs no storage calls; run [`AuthSession::spawn_restore`] once to
    /// resolve the startup check.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            store: StoredValue::new(store),
        }
    }

    /// Reactive read handle for views.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Untracked snapshot of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Adopt `token` as the current session.
    ///
    /// Persists the token, then updates state; subscribers are notified
    /// synchronously by the signal write. `token` must be non-empty; input
    /// screens validate before calling. The durable write is fire-and-forget,
    /// so this operation itself never fails.
    pub fn sign_in(&self, token: &str) {
        self.store.with_value(|store| store.save(token));
        self.apply(AuthAction::SignIn(token.to_owned()));
        log::debug!("signed in");
    }

    /// Drop the current session.
    ///
    /// Clears persisted credentials, then updates state. Idempotent
    /// state-wise; every call still issues the clear to storage.
    pub fn sign_out(&self) {
        self.store.with_value(|store| store.clear());
        self.apply(AuthAction::SignOut);
        log::debug!("signed out");
    }

    /// Launch the one-shot startup check.
    ///
    /// Reads the persisted token asynchronously and resolves the state in
    /// either direction. Fired once at holder creation; there is no
    /// cancellation, the task always runs to completion.
    pub fn spawn_restore(&self) {
        #[cfg(feature = "hydrate")]
        {
            let session = *self;
            leptos::task::spawn_local(async move {
                let loaded = session.store.with_value(|store| store.load()).await;
                session.finish_restore(loaded);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // The server renders the unresolved state; the browser finishes
            // the check after hydration.
            let _ = self;
        }
    }

    /// Resolve the startup check with the outcome of the persistence read.
    ///
    /// A found token signs the session in without re-persisting it (it is
    /// already stored). No token resolves to anonymous without issuing a
    /// clear: a cold start must not touch a key another writer may be
    /// populating. A failed read also resolves to anonymous, leaving
    /// whatever is persisted in place for a later run.
    pub fn finish_restore(&self, loaded: Result<Option<String>, TokenStoreError>) {
        match loaded {
            Ok(Some(token)) => {
                log::debug!("restored persisted session");
                self.apply(AuthAction::SignIn(token));
            }
            Ok(None) => self.apply(AuthAction::SignOut),
            Err(err) => {
                log::warn!("session restore failed: {err}; continuing signed out");
                self.apply(AuthAction::SignOut);
            }
        }
    }

    fn apply(&self, action: AuthAction) {
        self.state.update(|state| *state = reduce(state, action));
    }
}
