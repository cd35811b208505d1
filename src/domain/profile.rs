//! Server-reported account payloads.
//!
//! These mirror whatever the backend returns for profile and registration
//! calls. Every field beyond the identifier is optional: the payloads feed
//! display surfaces only, and the session layer never makes an
//! authorization decision from them.

use serde::{Deserialize, Serialize};

use super::{OrgId, Role, UserId};

/// The authenticated user's own profile, as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(alias = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub org_id: Option<OrgId>,
}

/// Acknowledgement payload for a completed user registration.
///
/// Registration issues no token, so nothing here touches the session;
/// callers typically show `message` and redirect to the login screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement payload for a newly created organization and its
/// first admin account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationCreated {
    #[serde(default)]
    pub org_id: Option<OrgId>,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
