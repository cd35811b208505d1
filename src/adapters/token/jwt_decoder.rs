//! JWT adapter for the `TokenDecoder` port.
//!
//! Decodes access tokens the way a browser client does: payload only,
//! no signature verification. The client holds no key material, so a
//! signature check is impossible here - and unnecessary, because the
//! decoded claims only steer UI decisions while the backend re-validates
//! the token on every request it receives.
//!
//! What *is* enforced locally:
//!
//! - `exp` must be present and in the future (with leeway), so a stale
//!   persisted token is discarded at restore instead of producing a
//!   session that fails on its first request
//! - The payload must carry the required claims with recognized values;
//!   an unknown role string fails the decode
//!
//! # Example
//!
//! ```ignore
//! use orgboard_session::adapters::token::JwtClaimsDecoder;
//! use orgboard_session::ports::TokenDecoder;
//!
//! let decoder = JwtClaimsDecoder::new();
//! let claims = decoder.decode("eyJ...")?;
//! println!("role: {}", claims.role);
//! ```

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use crate::domain::{Claims, DecodeError};
use crate::ports::TokenDecoder;

/// Default clock skew tolerance when checking `exp`, in seconds.
const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Claims decoder for JWT bearer tokens.
///
/// This is the production implementation of `TokenDecoder`.
pub struct JwtClaimsDecoder {
    validation: Validation,
    // Unused for verification (signature validation is disabled), but the
    // decode API requires a key.
    key: DecodingKey,
}

impl JwtClaimsDecoder {
    /// Create a new decoder with the default 60 second expiry leeway.
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = true;
        // No expected audience - tokens from the auth backend carry
        // whatever `aud` the backend likes, or none at all.
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = DEFAULT_LEEWAY_SECS;

        Self {
            validation,
            key: DecodingKey::from_secret(&[]),
        }
    }

    /// Set a custom expiry leeway in seconds.
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.validation.leeway = leeway_secs;
        self
    }
}

impl Default for JwtClaimsDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenDecoder for JwtClaimsDecoder {
    fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DecodeError::Expired,
                _ => DecodeError::malformed(e.to_string()),
            })
    }
}

impl std::fmt::Debug for JwtClaimsDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtClaimsDecoder")
            .field("leeway_secs", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}
