//! Token decoding adapters.
//!
//! - `jwt_decoder` - Payload-only JWT decoding for the `TokenDecoder` port

mod jwt_decoder;

pub use jwt_decoder::JwtClaimsDecoder;
