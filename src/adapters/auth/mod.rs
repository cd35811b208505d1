//! Auth backend adapters.
//!
//! Implementations of the `AuthApi` port:
//!
//! - `http_api` - Production reqwest implementation of the REST contract
//! - `mock` - Test implementation that doesn't require a backend

mod dto;
mod http_api;
mod mock;

pub use http_api::{HttpApiConfig, HttpAuthApi};
pub use mock::{MockAuthApi, RecordedCall};
