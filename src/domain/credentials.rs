//! Credential-carrying command values.
//!
//! Passwords ride inside [`SecretString`] so they stay out of `Debug`
//! output and logs; the HTTP adapter exposes them only at the moment the
//! request body is built.

use secrecy::SecretString;

use super::{OrgId, Role};

/// Input to [`SessionManager::login`](crate::session::SessionManager::login).
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: SecretString,
    pub org_id: OrgId,
}

impl LoginCredentials {
    /// Creates login credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
            org_id,
        }
    }
}

/// Input to [`SessionManager::register`](crate::session::SessionManager::register).
///
/// The role defaults to [`Role::Employee`] - self-registration creates
/// employees; elevated roles are assigned by an admin.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub org_id: OrgId,
    pub role: Role,
}

impl Registration {
    /// Creates a registration for the default employee role.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        org_id: OrgId,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::new(password.into()),
            org_id,
            role: Role::Employee,
        }
    }

    /// Overrides the requested role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Input to
/// [`SessionManager::register_organization`](crate::session::SessionManager::register_organization):
/// a new organization together with its first admin account.
#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub org_name: String,
    pub admin_name: String,
    pub email: String,
    pub password: SecretString,
}

impl NewOrganization {
    /// Creates an organization registration.
    pub fn new(
        org_name: impl Into<String>,
        admin_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            org_name: org_name.into(),
            admin_name: admin_name.into(),
            email: email.into(),
            password: SecretString::new(password.into()),
        }
    }
}

/// What a successful login call yields: the issued token plus the role the
/// response body reported alongside it, when it did.
///
/// The decoded token is canonical - the manager only uses `role` to warn
/// when the two disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedToken {
    pub access_token: String,
    pub role: Option<Role>,
}

impl IssuedToken {
    /// Creates an issued token carrying a body-reported role.
    pub fn with_role(access_token: impl Into<String>, role: Role) -> Self {
        Self {
            access_token: access_token.into(),
            role: Some(role),
        }
    }

    /// Creates an issued token without a body-reported role.
    pub fn bare(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            role: None,
        }
    }
}
