//! Persistence port for the bearer token.
//!
//! The session survives a reload through exactly one persisted value: the
//! raw token string. This port abstracts where that value lives - a file
//! in production, memory in tests. Nothing else is persisted by the
//! session core.

use async_trait::async_trait;
use thiserror::Error;

/// Failure talking to the token store.
///
/// Callers in the session layer treat these as recoverable: a load failure
/// restores an empty session, a save failure leaves the session in memory
/// only. Both are logged, neither is surfaced.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("token storage unavailable: {0}")]
    Unavailable(String),
}

/// Stores the single persisted bearer token.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(None)` from `load` when no token has been saved
/// - Make `clear` idempotent - clearing an empty store succeeds
/// - Overwrite on `save` - there is never more than one stored token
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Load the persisted token, if any.
    async fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Persist `token`, replacing any previous value.
    async fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the persisted token. Succeeds when nothing is stored.
    async fn clear(&self) -> Result<(), TokenStoreError>;
}
