//! Token storage configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;

/// Token storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Filesystem path of the persisted token file
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

impl StorageConfig {
    /// Get the token path as a [`PathBuf`]
    pub fn token_path(&self) -> PathBuf {
        PathBuf::from(&self.token_path)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.token_path.trim().is_empty() {
            return Err(ValidationError::EmptyTokenPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

fn default_token_path() -> String {
    ".orgboard/session-token".to_string()
}
