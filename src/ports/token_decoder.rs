//! Token decoding port.
//!
//! Turns an opaque bearer token string into structured [`Claims`], or
//! fails in a catchable way. Decoding is synchronous and deterministic -
//! no I/O, no clock reads beyond expiry comparison.
//!
//! The client cannot verify token signatures (it holds no key), so
//! implementations decode without signature validation and the resulting
//! claims are UI hints only. The backend re-validates the token on every
//! request it receives.

use crate::domain::{Claims, DecodeError};

/// Decodes bearer tokens into claims.
///
/// # Contract
///
/// Implementations must:
/// - Be deterministic for a given token and instant
/// - Return `DecodeError::Expired` for structurally valid but expired tokens
/// - Return `DecodeError::Malformed` for everything else that fails -
///   bad encoding, missing required claims, unknown role strings
/// - Never panic on arbitrary input
pub trait TokenDecoder: Send + Sync {
    /// Decode `token` into claims.
    fn decode(&self, token: &str) -> Result<Claims, DecodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrgId, Role, UserId};

    /// Treats the token string as a `id:role` pair - enough to exercise
    /// the trait without a real JWT.
    struct PairDecoder;

    impl TokenDecoder for PairDecoder {
        fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
            let (id, role) = token
                .split_once(':')
                .ok_or_else(|| DecodeError::malformed("expected id:role"))?;
            let role: Role = role
                .parse()
                .map_err(|_| DecodeError::malformed("unknown role"))?;
            Ok(Claims {
                id: UserId::new(id).map_err(|_| DecodeError::malformed("empty id"))?,
                role,
                org_id: OrgId::from(1),
                name: None,
                email: None,
                exp: 4_102_444_800,
            })
        }
    }

    #[test]
    fn token_decoder_decodes_and_rejects() {
        let decoder = PairDecoder;

        let claims = decoder.decode("u-7:manager").unwrap();
        assert_eq!(claims.role, Role::Manager);

        assert!(decoder.decode("garbage").is_err());
        assert!(decoder.decode("u-7:superuser").is_err());
    }

    #[test]
    fn token_decoder_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TokenDecoder>();
    }
}
