//! Navigation value objects.
//!
//! The session core never routes; it emits navigation *requests* through
//! the [`Navigator`](crate::ports::Navigator) port and the host shell
//! performs them. The one distinction that matters is push vs replace:
//! redirects away from unauthorized state and the post-login landing use
//! replace semantics so the abandoned page is not reachable via
//! back-navigation.

use serde::{Deserialize, Serialize};

/// How a navigation affects history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Append a history entry (ordinary link-following).
    Push,
    /// Replace the current entry (redirects, post-login landing).
    Replace,
}

/// A "go to path X" request emitted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    /// Absolute path within the application, e.g. `/manager/dashboard`.
    pub path: String,
    /// History semantics to apply.
    pub mode: NavigationMode,
}

impl NavigationRequest {
    /// A push navigation to `path`.
    pub fn push(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: NavigationMode::Push,
        }
    }

    /// A replace navigation to `path`.
    pub fn replace(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: NavigationMode::Replace,
        }
    }

    /// Whether this request uses replace semantics.
    pub fn is_replace(&self) -> bool {
        self.mode == NavigationMode::Replace
    }
}

/// The application paths the core redirects to.
///
/// `unauthorized` is optional: when absent, role-denied sessions redirect
/// to the login path, matching the original shell's single-destination
/// policy. Whichever policy is configured applies consistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    login: String,
    unauthorized: Option<String>,
}

impl RoutePaths {
    /// Creates route paths with a dedicated unauthorized destination.
    pub fn new(login: impl Into<String>, unauthorized: Option<String>) -> Self {
        Self {
            login: login.into(),
            unauthorized,
        }
    }

    /// The login location.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Destination for authenticated-but-wrong-role sessions.
    pub fn unauthorized(&self) -> &str {
        self.unauthorized.as_deref().unwrap_or(&self.login)
    }
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            unauthorized: None,
        }
    }
}
