//! Persistence contract for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth session never touches a storage backend directly; it is handed a
//! `TokenStore` at construction so the browser implementation and the test
//! fakes are interchangeable.

use futures::future::BoxFuture;
use thiserror::Error;

/// Errors surfaced by the asynchronous token read.
///
/// The durable writes (`save`/`clear`) are fire-and-forget and report
/// nothing; only the startup read has a caller that can react.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenStoreError {
    /// The storage backend cannot be reached at all.
    #[error("token storage is unavailable")]
    Unavailable,
    /// A persisted record exists but cannot be understood.
    #[error("persisted session record is corrupted")]
    Corrupted,
}

/// Durable home for the session token.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any. The caller suspends on the returned
    /// future; `Ok(None)` means no token has been persisted.
    fn load(&self) -> BoxFuture<'static, Result<Option<String>, TokenStoreError>>;

    /// Durably persist `token`. Completion is not awaited and failures are
    /// not surfaced to the caller.
    fn save(&self, token: &str);

    /// Durably remove any persisted token. Completion is not awaited.
    fn clear(&self);
}
