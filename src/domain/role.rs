//! Role vocabulary for the OrgBoard client.
//!
//! Roles form a closed set - the backend issues tokens whose `role` claim
//! is one of these identifiers, and the dashboard routes are keyed off the
//! same strings (`/admin/dashboard`, `/manager/dashboard`,
//! `/employee/dashboard`). A token carrying anything else fails claims
//! decoding and is discarded like any other malformed token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role identifier carried in the access token's `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Organization administrator.
    Admin,
    /// Project manager.
    Manager,
    /// Regular employee.
    Employee,
}

impl Role {
    /// Returns the wire/slug form of the role (`"admin"`, `"manager"`,
    /// `"employee"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    /// Landing location for this role after a successful login.
    ///
    /// Matches the route layout of the web shell: `/{role}/dashboard`.
    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.as_str())
    }

    /// All roles, in privilege order. Useful for test fixtures and
    /// exhaustive UI listings.
    pub fn all() -> [Role; 3] {
        [Role::Admin, Role::Manager, Role::Employee]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
