//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims for use in
//! integration tests.
//!
//! Not every fixture is used by every test file.
#![allow(dead_code)]

/// The RFC 7519 example token from jwt.io.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"John Doe","iat":1516239022}`
/// Secret: `"your-256-bit-secret"`
pub const EXAMPLE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// The secret that [`EXAMPLE_TOKEN`] is signed with.
pub const EXAMPLE_SECRET: &str = "your-256-bit-secret";

/// A secret that does not match [`EXAMPLE_TOKEN`]'s signature.
pub const WRONG_SECRET: &str = "wrong-secret";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// Create an HS256-signed token with the given claims.
///
/// Built by hand from the same primitives the binary uses, so tests
/// don't depend on the code under test for their fixtures.
pub fn create_hs256_token(secret: &str, claims: &serde_json::Value) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_string(claims).unwrap());
    let signing_input = format!("{header}.{payload}");

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    format!("{signing_input}.{signature}")
}

/// Standard test claims used across tests.
pub fn standard_claims() -> serde_json::Value {
    serde_json::json!({
        "sub": "1234567890",
        "name": "John Doe",
        "iat": 1516239022
    })
}
