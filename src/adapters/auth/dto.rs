//! Wire DTOs for the auth backend REST API.
//!
//! Field names follow the backend as deployed, which is not uniform:
//! login and registration bodies use `org_id` while organization creation
//! uses camelCase keys. The backend keeps organization ids numerically,
//! so outbound `org_id` fields go out as JSON numbers whenever the id
//! parses as one. Request DTOs borrow from the domain commands so
//! passwords are exposed only while the body is serialized.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::{LoginCredentials, NewOrganization, Registration, Role};

/// Serializes an organization id as a JSON number when it parses as one,
/// falling back to a string otherwise.
fn numeric_org_id<S>(org_id: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match org_id.parse::<i64>() {
        Ok(numeric) => serializer.serialize_i64(numeric),
        Err(_) => serializer.serialize_str(org_id),
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub(super) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(serialize_with = "numeric_org_id")]
    pub org_id: &'a str,
}

impl<'a> LoginRequest<'a> {
    pub fn from_credentials(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
            org_id: credentials.org_id.as_str(),
        }
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Serialize)]
pub(super) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(serialize_with = "numeric_org_id")]
    pub org_id: &'a str,
    pub role: Role,
}

impl<'a> RegisterRequest<'a> {
    pub fn from_registration(registration: &'a Registration) -> Self {
        Self {
            name: &registration.name,
            email: &registration.email,
            password: registration.password.expose_secret(),
            org_id: registration.org_id.as_str(),
            role: registration.role,
        }
    }
}

/// Body of `POST /api/org/create`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateOrganizationRequest<'a> {
    pub org_name: &'a str,
    pub admin_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> CreateOrganizationRequest<'a> {
    pub fn from_organization(organization: &'a NewOrganization) -> Self {
        Self {
            org_name: &organization.org_name,
            admin_name: &organization.admin_name,
            email: &organization.email,
            password: organization.password.expose_secret(),
        }
    }
}

/// Success body of `POST /api/auth/login`.
///
/// `role` is advisory - an unrecognized value is dropped rather than
/// failing the login, since the decoded token is what actually drives
/// authorization.
#[derive(Debug, Deserialize)]
pub(super) struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    /// Parses the advisory role, if present and recognized.
    pub fn parsed_role(&self) -> Option<Role> {
        let raw = self.role.as_deref()?;
        match raw.parse() {
            Ok(role) => Some(role),
            Err(_) => {
                tracing::debug!(role = raw, "ignoring unrecognized role in login response");
                None
            }
        }
    }
}

/// Success body of `POST /api/auth/refresh`.
#[derive(Debug, Deserialize)]
pub(super) struct RefreshResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Error body shape shared by all endpoints: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
