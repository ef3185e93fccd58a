//! In-process token store for tests and server-side use.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::sync::Mutex;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::token_store::{TokenStore, TokenStoreError};

/// Mutex-backed store holding the token in process memory.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token, as after an earlier signed-in run.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> BoxFuture<'static, Result<Option<String>, TokenStoreError>> {
        let loaded = match self.token.lock() {
            Ok(guard) => Ok(guard.clone()),
            Err(_) => Err(TokenStoreError::Unavailable),
        };
        futures::future::ready(loaded).boxed()
    }

    fn save(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}
