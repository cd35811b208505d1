//! File-based Token Store Adapter
//!
//! Persists the bearer token as a single plain-text file, the desktop
//! analogue of the browser's localStorage slot. Parent directories are
//! created on first save.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{TokenStore, TokenStoreError};

/// File-based storage for the session token
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    token_path: PathBuf,
}

impl FileTokenStore {
    /// Create a new file store writing to the given token file path
    ///
    /// # Example
    /// ```ignore
    /// let store = FileTokenStore::new("~/.orgboard/access_token");
    /// ```
    pub fn new<P: AsRef<Path>>(token_path: P) -> Self {
        Self {
            token_path: token_path.as_ref().to_path_buf(),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.token_path
    }

    /// Ensure the parent directory exists
    async fn ensure_parent_dir(&self) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match fs::read_to_string(&self.token_path).await {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        self.ensure_parent_dir().await?;
        fs::write(&self.token_path, token).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.token_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
