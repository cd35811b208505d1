//! Storage Adapters
//!
//! Implementations of the TokenStore port for persisting the session token.
//!
//! ## Available Adapters
//!
//! - **FileTokenStore** - Stores the token as a plain file on disk
//! - **InMemoryTokenStore** - Stores the token in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileTokenStore, InMemoryTokenStore};
//!
//! // Production: file-based storage
//! let store = FileTokenStore::new("~/.orgboard/access_token");
//!
//! // Testing: in-memory storage
//! let store = InMemoryTokenStore::new();
//! ```

mod file_token_store;
mod in_memory_token_store;

pub use file_token_store::FileTokenStore;
pub use in_memory_token_store::InMemoryTokenStore;
