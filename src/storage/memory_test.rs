use super::*;
use futures::executor::block_on;

#[test]
fn load_reports_no_token_when_empty() {
    let store = MemoryTokenStore::new();
    assert_eq!(block_on(store.load()), Ok(None));
}

#[test]
fn with_token_round_trips_through_load() {
    let store = MemoryTokenStore::with_token("abc123");
    assert_eq!(block_on(store.load()), Ok(Some("abc123".to_owned())));
}

#[test]
fn save_then_load_returns_latest_token() {
    let store = MemoryTokenStore::new();
    store.save("first");
    store.save("second");
    assert_eq!(block_on(store.load()), Ok(Some("second".to_owned())));
}

#[test]
fn clear_removes_persisted_token() {
    let store = MemoryTokenStore::with_token("abc123");
    store.clear();
    assert_eq!(block_on(store.load()), Ok(None));
}
