//! Auth backend port for the session REST contract.
//!
//! This port defines the contract with the authentication backend. It is
//! transport-agnostic - the production implementation speaks JSON over
//! HTTP with reqwest, and a configurable mock exists for tests.
//!
//! # Transparent refresh
//!
//! Implementations own the 401 recovery dance for bearer-carrying calls:
//! on a 401, attempt one token refresh against the refresh endpoint
//! (cookie-credentialed), retry the original request once with the fresh
//! token, and if the refresh itself fails, surface the **original** 401.
//! Anonymous calls (login, register, organization creation) never trigger
//! a refresh - their 401s are credential failures and propagate verbatim.

use async_trait::async_trait;

use crate::domain::{
    ApiError, IssuedToken, LoginCredentials, NewOrganization, OrganizationCreated, Profile,
    RegisteredUser, Registration,
};

/// Client side of the authentication REST API.
///
/// # Contract
///
/// Implementations must:
/// - Return `ApiError::Rejected` for non-success statuses, carrying the
///   backend's `message` body field when one is present
/// - Return `ApiError::Network` for transport failures (no HTTP status)
/// - Return `ApiError::InvalidResponse` when a success body fails to parse
/// - Never panic on malformed backend payloads
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an issued access token.
    ///
    /// The response may also report a role alongside the token; callers
    /// treat the decoded token as canonical and the reported role as a
    /// cross-check only.
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, ApiError>;

    /// Create a user account. Issues no token.
    async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError>;

    /// Create an organization together with its first admin account.
    async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> Result<OrganizationCreated, ApiError>;

    /// Notify the backend that the session is ending.
    ///
    /// The bearer is attached when the caller still holds one. Callers
    /// treat failures as advisory - local teardown proceeds regardless.
    async fn logout(&self, bearer: Option<&str>) -> Result<(), ApiError>;

    /// Fetch the profile of the user identified by `bearer`.
    async fn fetch_profile(&self, bearer: &str) -> Result<Profile, ApiError>;
}
