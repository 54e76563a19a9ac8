//! HMAC-SHA256 signing and verification.
//!
//! The secret's UTF-8 bytes are used directly as the raw HMAC key; no
//! minimum key length is enforced here (that is a policy decision made
//! by callers). Tag comparison goes through `constant_time_eq` so the
//! result never depends on where a mismatch occurs.

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 tag of `message` under `secret`.
///
/// Deterministic: the same `(message, secret)` pair always yields the
/// same signature.
pub fn sign(message: &[u8], secret: &str) -> Vec<u8> {
    // HMAC accepts keys of any length (RFC 2104), so this cannot fail.
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Check whether `signature` is the HMAC-SHA256 tag of `message` under
/// `secret`.
///
/// Returns `false` on any internal failure rather than erroring: the
/// caller only needs valid/invalid, and the reason (if any) is reported
/// by the codec layer.
pub fn verify(message: &[u8], signature: &[u8], secret: &str) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(message);
    let expected = mac.finalize().into_bytes();

    if signature.len() != expected.len() {
        return false;
    }

    constant_time_eq(signature, &expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::base64url;

    // Signing input of the RFC 7519 example token from jwt.io
    const EXAMPLE_SIGNING_INPUT: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
         eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ";

    #[test]
    fn test_sign_matches_known_vector() {
        let signature = sign(EXAMPLE_SIGNING_INPUT.as_bytes(), "your-256-bit-secret");
        assert_eq!(
            base64url::encode(&signature),
            "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign(b"message", "secret");
        let b = sign(b"message", "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_verify_accepts_own_signature() {
        let signature = sign(b"message", "secret");
        assert!(verify(b"message", &signature, "secret"));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let signature = sign(b"message", "secret");
        assert!(!verify(b"message", &signature, "other-secret"));
    }

    #[test]
    fn test_verify_rejects_tampered_message() {
        let signature = sign(b"message", "secret");
        assert!(!verify(b"messagE", &signature, "secret"));
    }

    #[test]
    fn test_verify_rejects_truncated_signature() {
        let signature = sign(b"message", "secret");
        assert!(!verify(b"message", &signature[..31], "secret"));
    }

    #[test]
    fn test_verify_rejects_empty_signature() {
        assert!(!verify(b"message", b"", "secret"));
    }

    #[test]
    fn test_empty_secret_is_a_valid_hmac_key() {
        // Policy against empty secrets lives in the codec and sync engine,
        // not in the cryptographic primitive.
        let signature = sign(b"message", "");
        assert!(verify(b"message", &signature, ""));
    }

    #[test]
    fn test_empty_message_signs_and_verifies() {
        let signature = sign(b"", "secret");
        assert!(verify(b"", &signature, "secret"));
    }
}
