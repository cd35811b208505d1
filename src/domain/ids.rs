//! Strongly-typed identifier value objects.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// User identifier as issued by the auth backend.
///
/// Tokens are observed carrying this under `id`, `sub`, or `user_id`
/// depending on backend revision; the claims decoder accepts all three.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, rejecting empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyId> {
        let id = id.into();
        if id.is_empty() {
            return Err(EmptyId("user id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deserialization enforces the same non-empty rule as [`UserId::new`],
/// so a blank id claim in a token or profile body never slips through.
impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        if id.is_empty() {
            return Err(de::Error::custom("user id cannot be empty"));
        }
        Ok(UserId(id))
    }
}

/// Organization identifier.
///
/// The backend is inconsistent about the wire type: the registration form
/// submits it as a JSON number while tokens and some responses carry a
/// string. Both deserialize into the canonical string form here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrgId(String);

impl OrgId {
    /// Creates a new OrgId, rejecting empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyId> {
        let id = id.into();
        if id.is_empty() {
            return Err(EmptyId("organization id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrgId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for OrgId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(OrgId(n.to_string())),
            Raw::Text(s) if !s.is_empty() => Ok(OrgId(s)),
            Raw::Text(_) => Err(de::Error::custom("organization id cannot be empty")),
        }
    }
}

/// Error returned when constructing an identifier from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} cannot be empty")]
pub struct EmptyId(pub &'static str);
