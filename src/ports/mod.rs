//! Ports - Interfaces for the session core's collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the session core and the outside world. Adapters implement these ports.
//!
//! - `AuthApi` - REST contract with the authentication backend, including
//!   the transparent 401 refresh-and-retry for bearer-carrying calls
//! - `TokenStore` - persistence for the single bearer token string
//! - `TokenDecoder` - opaque token string to structured claims
//! - `Navigator` - outbound "go to path X" requests; the host routes

mod auth_api;
mod navigator;
mod token_decoder;
mod token_store;

pub use auth_api::AuthApi;
pub use navigator::Navigator;
pub use token_decoder::TokenDecoder;
pub use token_store::{TokenStore, TokenStoreError};
