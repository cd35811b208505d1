//! Decoded access-token claims.
//!
//! These are the payload fields the client actually uses, extracted from
//! the bearer token by a [`TokenDecoder`](crate::ports::TokenDecoder)
//! implementation. They have no decoder dependencies - any JWT library can
//! populate them.
//!
//! # Security
//!
//! Decoded claims are **untrusted client hints** used to pick dashboards
//! and hide UI affordances. The client cannot verify the token signature,
//! so nothing here is a security boundary: the backend re-validates the
//! bearer token on every request and remains the sole authority.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{OrgId, Role, UserId};

/// Claims decoded from an access token.
///
/// `id`, `role`, and `org_id` are required - a token missing any of them
/// (or carrying a role outside the closed set) fails decoding and is
/// discarded. `name` and `email` are optional conveniences for UI display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier. Backends vary between `id`, `sub`, and `user_id`.
    #[serde(alias = "sub", alias = "user_id")]
    pub id: UserId,

    /// Role identifier from the closed role set.
    pub role: Role,

    /// Organization the session belongs to.
    pub org_id: OrgId,

    /// Display name, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Expiry timestamp (Unix epoch seconds). Enforced by the decoder;
    /// retained so callers can inspect remaining lifetime.
    pub exp: i64,
}

impl Claims {
    /// Returns the expiry instant of the token these claims came from.
    ///
    /// Returns `None` only if the timestamp is outside the representable
    /// range, which no real backend produces.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Display name with email as fallback, for UI chrome.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

/// Failure to turn a token string into [`Claims`].
///
/// Always a catchable, local condition - restoration recovers from it by
/// discarding the token, it never propagates to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The token's `exp` claim is in the past.
    #[error("token expired")]
    Expired,

    /// The token is structurally invalid: bad segments, undecodable
    /// payload, missing required claims, or a role outside the closed set.
    #[error("malformed token: {0}")]
    Malformed(String),
}

impl DecodeError {
    /// Creates a malformed-token error with a reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        DecodeError::Malformed(reason.into())
    }
}
