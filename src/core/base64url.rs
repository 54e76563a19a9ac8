//! Base64url encoding for JWT segments.
//!
//! JWTs use the URL-safe base64 alphabet (`A-Za-z0-9-_`) with padding
//! omitted (RFC 7515 §2). This wraps the `base64` crate's
//! `URL_SAFE_NO_PAD` engine behind the crate's error type so callers
//! see a tagged failure instead of a library-specific one.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::JwtLensError;

/// Encode bytes as an unpadded base64url string.
///
/// Inverse of [`decode`] for every byte sequence, including empty input.
pub fn encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode an unpadded base64url string to bytes.
///
/// # Errors
///
/// Returns [`JwtLensError::MalformedBase64`] on invalid characters
/// (including `+`, `/`, and `=`) or impossible lengths.
pub fn decode(input: &str) -> Result<Vec<u8>, JwtLensError> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| JwtLensError::MalformedBase64 {
            reason: e.to_string(),
        })
}
