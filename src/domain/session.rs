//! The client session state model.
//!
//! A [`Session`] is a value snapshot of "who is signed in right now".
//! The [`SessionManager`](crate::session::SessionManager) owns the single
//! live instance and replaces it wholesale on every transition; everything
//! else reads snapshots through accessors. There are no public mutators,
//! so a reader can never observe a token without its claims or vice versa.

use super::{Claims, Role};

/// Snapshot of the current authentication state.
///
/// Invariants, enforced by construction:
/// - `token` and `claims` are either both present or both absent;
/// - `restoration_complete` starts `false` and, once set by restoration,
///   is carried forward by every later transition (login, logout); it
///   never reverts within a process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: Option<String>,
    claims: Option<Claims>,
    restoration_complete: bool,
}

impl Session {
    /// The empty, pre-restoration session every process starts with.
    pub fn empty() -> Self {
        Self {
            token: None,
            claims: None,
            restoration_complete: false,
        }
    }

    /// A session holding a bearer token and its decoded claims.
    ///
    /// Restoration state starts `false`; the manager marks it via
    /// [`mark_restored`](Self::mark_restored) when appropriate.
    pub fn authenticated(token: impl Into<String>, claims: Claims) -> Self {
        Self {
            token: Some(token.into()),
            claims: Some(claims),
            restoration_complete: false,
        }
    }

    /// Returns this session with the restoration flag set.
    ///
    /// The flag is monotonic: there is no inverse operation.
    pub fn mark_restored(mut self) -> Self {
        self.restoration_complete = true;
        self
    }

    /// The bearer token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The decoded claims, if authenticated.
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// Shortcut for the current role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.claims.as_ref().map(|c| c.role)
    }

    /// Whether the one-time load-time restoration attempt has finished.
    ///
    /// While this is `false` the authentication state is *unknown*, not
    /// unauthenticated - no authorization decision may be based on it.
    pub fn restoration_complete(&self) -> bool {
        self.restoration_complete
    }

    /// Whether a token (and therefore claims) is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::empty()
    }
}
