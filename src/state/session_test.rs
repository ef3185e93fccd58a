use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::BoxFuture;

use super::*;
use crate::storage::memory::MemoryTokenStore;

/// Recording fake for the persistence collaborator.
#[derive(Default)]
struct RecordingStore {
    saves: Mutex<Vec<String>>,
    clears: Mutex<usize>,
}

impl RecordingStore {
    fn saves(&self) -> Vec<String> {
        self.saves.lock().unwrap().clone()
    }

    fn clears(&self) -> usize {
        *self.clears.lock().unwrap()
    }
}

impl TokenStore for RecordingStore {
    fn load(&self) -> BoxFuture<'static, Result<Option<String>, TokenStoreError>> {
        futures::future::ready(Ok(None)).boxed()
    }

    fn save(&self, token: &str) {
        self.saves.lock().unwrap().push(token.to_owned());
    }

    fn clear(&self) {
        *self.clears.lock().unwrap() += 1;
    }
}

fn harness() -> (AuthSession, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::default());
    (AuthSession::new(store.clone()), store)
}

// =============================================================
// Holder creation
// =============================================================

#[test]
fn new_holder_is_unresolved_and_touches_no_storage() {
    let (session, store) = harness();
    let state = session.snapshot();
    assert!(state.loading);
    assert!(state.session.token.is_none());
    assert!(store.saves().is_empty());
    assert_eq!(store.clears(), 0);
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn sign_in_persists_the_token_exactly_once() {
    let (session, store) = harness();
    session.sign_in("xyz");
    assert_eq!(store.saves(), vec!["xyz".to_owned()]);
    let state = session.snapshot();
    assert!(!state.loading);
    assert_eq!(state.session.token.as_deref(), Some("xyz"));
}

#[test]
fn sign_in_with_a_new_token_replaces_the_session() {
    let (session, store) = harness();
    session.sign_in("first");
    session.sign_in("second");
    assert_eq!(store.saves(), vec!["first".to_owned(), "second".to_owned()]);
    assert_eq!(session.snapshot().session.token.as_deref(), Some("second"));
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_clears_storage_and_drops_the_token() {
    let (session, store) = harness();
    session.sign_in("xyz");
    session.sign_out();
    assert_eq!(store.clears(), 1);
    let state = session.snapshot();
    assert!(!state.loading);
    assert!(state.session.token.is_none());
}

#[test]
fn repeated_sign_out_keeps_state_but_clears_each_time() {
    let (session, store) = harness();
    session.sign_out();
    let after_first = session.snapshot();
    session.sign_out();
    assert_eq!(session.snapshot(), after_first);
    assert_eq!(store.clears(), 2);
}

// =============================================================
// Startup check resolution
// =============================================================

#[test]
fn restore_with_token_matches_sign_in_without_saving() {
    let (session, store) = harness();
    session.finish_restore(Ok(Some("abc123".to_owned())));

    let (reference, _) = harness();
    reference.sign_in("abc123");

    assert_eq!(session.snapshot(), reference.snapshot());
    assert!(store.saves().is_empty());
}

#[test]
fn restore_with_no_token_resolves_anonymous_without_clearing() {
    let (session, store) = harness();
    session.finish_restore(Ok(None));
    let state = session.snapshot();
    assert!(!state.loading);
    assert!(state.session.token.is_none());
    assert_eq!(store.clears(), 0);
}

#[test]
fn restore_failure_resolves_anonymous_and_leaves_storage_alone() {
    let (session, store) = harness();
    session.finish_restore(Err(TokenStoreError::Unavailable));
    let state = session.snapshot();
    assert!(state.is_resolved());
    assert!(!state.is_authenticated());
    assert_eq!(store.clears(), 0);
    assert!(store.saves().is_empty());
}

#[test]
fn startup_check_round_trips_through_the_async_contract() {
    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("abc123"));
    let session = AuthSession::new(Arc::clone(&store));
    session.finish_restore(futures::executor::block_on(store.load()));
    assert!(session.snapshot().is_authenticated());
    assert_eq!(session.snapshot().session.token.as_deref(), Some("abc123"));
}

// =============================================================
// Loading invariant
// =============================================================

#[test]
fn loading_never_returns_after_resolution() {
    let (session, _) = harness();
    session.finish_restore(Ok(None));
    assert!(!session.snapshot().loading);
    session.sign_in("abc123");
    assert!(!session.snapshot().loading);
    session.sign_out();
    assert!(!session.snapshot().loading);
}
