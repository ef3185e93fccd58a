//! `localStorage`-backed token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser is the durable home for the session token between visits.
//! Client-side (hydrate): real `localStorage` reads and writes via `web-sys`.
//! Server-side (SSR): stubs reporting no token, since the persisted session
//! only exists in the browser; hydration re-runs the startup check there.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use futures::FutureExt;
use futures::future::BoxFuture;
#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

use super::token_store::{TokenStore, TokenStoreError};

/// The one `localStorage` key this app owns.
#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "tracker.session";

#[cfg(any(test, feature = "hydrate"))]
const STORED_VERSION: u32 = 1;

/// Versioned shape of the persisted record.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize, Serialize)]
struct StoredSession {
    version: u32,
    token: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_record(token: &str) -> String {
    let record = StoredSession {
        version: STORED_VERSION,
        token: token.to_owned(),
    };
    serde_json::to_string(&record).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_record(raw: &str) -> Result<Option<String>, TokenStoreError> {
    let record: StoredSession =
        serde_json::from_str(raw).map_err(|_| TokenStoreError::Corrupted)?;
    if record.version != STORED_VERSION {
        return Err(TokenStoreError::Corrupted);
    }
    // A signed-in session always carries a non-empty token.
    if record.token.is_empty() {
        return Ok(None);
    }
    Ok(Some(record.token))
}

/// Token persistence backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> BoxFuture<'static, Result<Option<String>, TokenStoreError>> {
        futures::future::ready(read_record()).boxed()
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            match local_storage() {
                Ok(storage) => {
                    if storage.set_item(SESSION_KEY, &encode_record(token)).is_err() {
                        log::debug!("session token not persisted: localStorage write failed");
                    }
                }
                Err(err) => log::debug!("session token not persisted: {err}"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, TokenStoreError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(TokenStoreError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn read_record() -> Result<Option<String>, TokenStoreError> {
    let storage = local_storage()?;
    let raw = storage
        .get_item(SESSION_KEY)
        .map_err(|_| TokenStoreError::Unavailable)?;
    match raw {
        Some(raw) => decode_record(&raw),
        None => Ok(None),
    }
}

#[cfg(not(feature = "hydrate"))]
fn read_record() -> Result<Option<String>, TokenStoreError> {
    Ok(None)
}
