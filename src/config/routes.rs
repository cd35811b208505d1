//! Redirect route configuration

use serde::Deserialize;

use crate::domain::RoutePaths;

use super::error::ValidationError;

/// Redirect route configuration
///
/// `unauthorized_path` is optional; when absent, wrong-role sessions are
/// redirected to the login path.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    /// Path of the login page
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Path of the unauthorized page, if the application has one
    pub unauthorized_path: Option<String>,
}

impl RoutesConfig {
    /// Convert into the domain [`RoutePaths`] value
    pub fn route_paths(&self) -> RoutePaths {
        RoutePaths::new(self.login_path.clone(), self.unauthorized_path.clone())
    }

    /// Validate route configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.login_path.starts_with('/') {
            return Err(ValidationError::RelativeRoutePath("login_path"));
        }
        if let Some(path) = &self.unauthorized_path {
            if !path.starts_with('/') {
                return Err(ValidationError::RelativeRoutePath("unauthorized_path"));
            }
        }
        Ok(())
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            unauthorized_path: None,
        }
    }
}

fn default_login_path() -> String {
    "/login".to_string()
}
