//! Error types for the session core.
//!
//! Two surfaces, both domain-centric rather than transport-specific:
//! [`ApiError`] is what the auth backend collaborator reports, and
//! [`SessionError`] is what the session manager exposes to callers. The
//! mapping between them implements the error policy of the core: backend
//! messages for credential/validation failures pass through verbatim so
//! the UI can display them inline, transport trouble is folded into a
//! single "unavailable" lane, and expired-session conditions are resolved
//! locally (clear + redirect) before ever being reported.

use thiserror::Error;

/// Failure reported by the auth backend collaborator.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. `message` is the
    /// `message` field of the JSON error body when one was present.
    #[error("request rejected with status {status}{}", format_message(.message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The backend could not be reached (connect/timeout/transport).
    #[error("authentication service unreachable: {0}")]
    Network(String),

    /// The backend answered successfully but the body was not the
    /// expected shape.
    #[error("unexpected response from authentication service: {0}")]
    InvalidResponse(String),
}

fn format_message(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

impl ApiError {
    /// Creates a rejection with a backend-supplied message.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status,
            message: Some(message.into()),
        }
    }

    /// Creates a rejection without a usable message body.
    pub fn rejected_without_message(status: u16) -> Self {
        ApiError::Rejected {
            status,
            message: None,
        }
    }

    /// Whether this is a 401/403 rejection - the credential itself was
    /// refused, as opposed to the request being invalid or the service
    /// being down.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401 | 403, .. })
    }
}

/// Failure surfaced by [`SessionManager`](crate::session::SessionManager)
/// operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The backend rejected the request. The message is displayable as-is
    /// (backend-supplied, or an operation-appropriate generic fallback).
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The backend was unreachable or answered garbage.
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),

    /// The session is no longer valid. Local state has already been
    /// cleared and a redirect to login requested by the time callers see
    /// this - it is informational, never actionable.
    #[error("session expired")]
    Expired,

    /// The operation needs an authenticated session and there is none.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl SessionError {
    /// Maps a collaborator failure onto the manager surface, substituting
    /// `fallback` when a rejection carried no usable message.
    pub(crate) fn from_api(error: ApiError, fallback: &str) -> Self {
        match error {
            ApiError::Rejected { status, message } => SessionError::Rejected {
                status,
                message: message.unwrap_or_else(|| fallback.to_string()),
            },
            ApiError::Network(reason) => SessionError::Unavailable(reason),
            ApiError::InvalidResponse(reason) => SessionError::Unavailable(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_rejection_displays_status_and_message() {
        let err = ApiError::rejected(401, "Invalid credentials");
        assert_eq!(
            err.to_string(),
            "request rejected with status 401: Invalid credentials"
        );
    }

    #[test]
    fn api_rejection_without_message_displays_status_only() {
        let err = ApiError::rejected_without_message(500);
        assert_eq!(err.to_string(), "request rejected with status 500");
    }

    #[test]
    fn auth_rejection_covers_401_and_403() {
        assert!(ApiError::rejected_without_message(401).is_auth_rejection());
        assert!(ApiError::rejected_without_message(403).is_auth_rejection());
        assert!(!ApiError::rejected_without_message(400).is_auth_rejection());
        assert!(!ApiError::Network("down".into()).is_auth_rejection());
    }

    #[test]
    fn session_error_passes_backend_message_through() {
        let err = SessionError::from_api(ApiError::rejected(401, "Invalid credentials"), "login failed");
        match err {
            SessionError::Rejected { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn session_error_uses_fallback_without_backend_message() {
        let err = SessionError::from_api(ApiError::rejected_without_message(401), "login failed");
        assert_eq!(err.to_string(), "login failed");
    }

    #[test]
    fn network_failures_map_to_unavailable() {
        let err = SessionError::from_api(ApiError::Network("connection refused".into()), "x");
        assert!(matches!(err, SessionError::Unavailable(_)));
        assert_eq!(
            err.to_string(),
            "authentication service unavailable: connection refused"
        );
    }

    #[test]
    fn invalid_response_maps_to_unavailable() {
        let err = SessionError::from_api(ApiError::InvalidResponse("not json".into()), "x");
        assert!(matches!(err, SessionError::Unavailable(_)));
    }
}
