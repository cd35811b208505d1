//! Mock auth backend for testing.
//!
//! Implements the `AuthApi` port without a network. Outcomes are
//! configured per operation, every call is recorded for inspection, and
//! unconfigured lookups fail the way the real backend does (401).
//!
//! # Example
//!
//! ```ignore
//! use orgboard_session::adapters::auth::MockAuthApi;
//! use orgboard_session::domain::IssuedToken;
//!
//! let api = MockAuthApi::new()
//!     .with_issued_token(IssuedToken::bare("token-abc"));
//!
//! let issued = api.login(&credentials).await?;
//! assert_eq!(api.calls().len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{
    ApiError, IssuedToken, LoginCredentials, NewOrganization, OrganizationCreated, Profile,
    RegisteredUser, Registration, Role,
};
use crate::ports::AuthApi;

/// One observed call against the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Login { email: String },
    Register { email: String, role: Role },
    CreateOrganization { org_name: String },
    Logout { with_bearer: bool },
    FetchProfile { bearer: String },
}

/// Mock auth backend for testing.
///
/// Login succeeds once an issued token is configured; profile lookups
/// resolve against a bearer-to-profile map. Unknown bearers and
/// unconfigured logins are rejected with a 401.
#[derive(Debug, Default)]
pub struct MockAuthApi {
    /// Token issued by successful logins
    issued: RwLock<Option<IssuedToken>>,
    /// Map of bearer tokens to profiles
    profiles: RwLock<HashMap<String, Profile>>,
    /// Optional error returned by every operation (for error testing)
    force_error: RwLock<Option<ApiError>>,
    /// Optional error returned by logout only
    logout_error: RwLock<Option<ApiError>>,
    /// Calls observed so far
    calls: RwLock<Vec<RecordedCall>>,
}

impl MockAuthApi {
    /// Creates a new empty mock backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the token issued by successful logins.
    pub fn with_issued_token(self, issued: IssuedToken) -> Self {
        *self.issued.write().unwrap() = Some(issued);
        self
    }

    /// Registers a profile served for the given bearer token.
    pub fn with_profile(self, bearer: impl Into<String>, profile: Profile) -> Self {
        self.profiles.write().unwrap().insert(bearer.into(), profile);
        self
    }

    /// Forces every operation to return the specified error.
    pub fn with_error(self, error: ApiError) -> Self {
        self.set_error(error);
        self
    }

    /// Starts failing every subsequent operation with the specified error.
    pub fn set_error(&self, error: ApiError) {
        *self.force_error.write().unwrap() = Some(error);
    }

    /// Makes logout (and only logout) fail with the specified error.
    pub fn with_logout_error(self, error: ApiError) -> Self {
        *self.logout_error.write().unwrap() = Some(error);
        self
    }

    /// Clears any forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
        *self.logout_error.write().unwrap() = None;
    }

    /// Removes a bearer's profile, making that token unknown.
    pub fn revoke_bearer(&self, bearer: &str) {
        self.profiles.write().unwrap().remove(bearer);
    }

    /// Returns all calls observed so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().unwrap().clone()
    }

    /// Returns how many logout calls were observed.
    pub fn logout_count(&self) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, RecordedCall::Logout { .. }))
            .count()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.write().unwrap().push(call);
    }

    fn forced_error(&self) -> Option<ApiError> {
        self.force_error.read().unwrap().clone()
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, ApiError> {
        self.record(RecordedCall::Login {
            email: credentials.email.clone(),
        });
        if let Some(error) = self.forced_error() {
            return Err(error);
        }
        self.issued
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::rejected(401, "Invalid credentials"))
    }

    async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError> {
        self.record(RecordedCall::Register {
            email: registration.email.clone(),
            role: registration.role,
        });
        if let Some(error) = self.forced_error() {
            return Err(error);
        }
        Ok(RegisteredUser {
            id: None,
            name: Some(registration.name.clone()),
            email: Some(registration.email.clone()),
            message: Some("registered".to_string()),
        })
    }

    async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> Result<OrganizationCreated, ApiError> {
        self.record(RecordedCall::CreateOrganization {
            org_name: organization.org_name.clone(),
        });
        if let Some(error) = self.forced_error() {
            return Err(error);
        }
        Ok(OrganizationCreated {
            org_id: None,
            org_name: Some(organization.org_name.clone()),
            message: Some("organization created".to_string()),
        })
    }

    async fn logout(&self, bearer: Option<&str>) -> Result<(), ApiError> {
        self.record(RecordedCall::Logout {
            with_bearer: bearer.is_some(),
        });
        if let Some(error) = self.forced_error() {
            return Err(error);
        }
        if let Some(error) = self.logout_error.read().unwrap().clone() {
            return Err(error);
        }
        Ok(())
    }

    async fn fetch_profile(&self, bearer: &str) -> Result<Profile, ApiError> {
        self.record(RecordedCall::FetchProfile {
            bearer: bearer.to_string(),
        });
        if let Some(error) = self.forced_error() {
            return Err(error);
        }
        self.profiles
            .read()
            .unwrap()
            .get(bearer)
            .cloned()
            .ok_or_else(|| ApiError::rejected_without_message(401))
    }
}
