//! In-memory Token Store Adapter
//!
//! Keeps the token in process memory. Used in tests and wherever
//! persistence across restarts is not wanted. Failures can be injected
//! per direction to exercise the session layer's recovery paths.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::ports::{TokenStore, TokenStoreError};

/// In-memory storage for the session token
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    /// The single token slot
    slot: RwLock<Option<String>>,
    /// When set, `load` fails with this reason
    fail_reads: RwLock<Option<String>>,
    /// When set, `save` and `clear` fail with this reason
    fail_writes: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(token.into())),
            ..Self::default()
        }
    }

    /// Makes `load` fail with the given reason.
    pub fn failing_reads(self, reason: impl Into<String>) -> Self {
        *self.fail_reads.write().unwrap() = Some(reason.into());
        self
    }

    /// Makes `save` and `clear` fail with the given reason.
    pub fn failing_writes(self, reason: impl Into<String>) -> Self {
        *self.fail_writes.write().unwrap() = Some(reason.into());
        self
    }

    /// Clears any injected failures and returns to normal operation.
    pub fn clear_failures(&self) {
        *self.fail_reads.write().unwrap() = None;
        *self.fail_writes.write().unwrap() = None;
    }

    /// Returns the currently stored token, bypassing failure injection.
    pub fn stored(&self) -> Option<String> {
        self.slot.read().unwrap().clone()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, TokenStoreError> {
        if let Some(reason) = self.fail_reads.read().unwrap().clone() {
            return Err(TokenStoreError::Unavailable(reason));
        }
        Ok(self.slot.read().unwrap().clone())
    }

    async fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(reason) = self.fail_writes.read().unwrap().clone() {
            return Err(TokenStoreError::Unavailable(reason));
        }
        *self.slot.write().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        if let Some(reason) = self.fail_writes.read().unwrap().clone() {
            return Err(TokenStoreError::Unavailable(reason));
        }
        *self.slot.write().unwrap() = None;
        Ok(())
    }
}
