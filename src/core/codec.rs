//! JWT HS256 encoding and decoding.
//!
//! Handles splitting a raw JWT string into its three parts (header,
//! payload, signature), base64url-decoding and JSON-parsing the header
//! and payload segments, verifying the HMAC-SHA256 signature, and
//! generating freshly signed tokens from an authored payload.
//!
//! Structural validity and signature validity are reported separately:
//! a token can decode cleanly and still carry a bad or unverifiable
//! signature.

use std::fmt;

use serde_json::Value;

use crate::core::{base64url, signer};
use crate::error::JwtLensError;

/// The header emitted for every generated token, byte for byte.
///
/// Key order matters for reproducible signing input: `alg` first,
/// then `typ`.
pub const HS256_HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// The decoded parts of a JWT.
///
/// Implements a custom `Debug` that redacts `payload` and `signature`
/// to prevent accidental leakage of sensitive claim data.
pub struct DecodedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: Value,
    /// The parsed JWT payload (claims).
    pub payload: Value,
    /// The raw base64url-encoded signature segment.
    pub signature: String,
    /// Outcome of signature verification.
    ///
    /// `Some(bool)` when HS256 verification ran; `None` when it was
    /// skipped (non-HS256 `alg` declared, or no secret supplied).
    pub signature_valid: Option<bool>,
}

/// Custom `Debug` that redacts payload and signature to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .field("signature_valid", &self.signature_valid)
            .finish()
    }
}

impl DecodedToken {
    /// Whether the signature verified successfully.
    ///
    /// Skipped verification counts as not valid.
    pub fn is_signature_valid(&self) -> bool {
        self.signature_valid == Some(true)
    }
}

/// Decode a raw JWT string and verify its signature against `secret`.
///
/// Splits the token on `.` separators, base64url-decodes the header and
/// payload segments, parses them as JSON, and recomputes the HMAC over
/// the *original* two base64url segments as received — never over a
/// re-serialized form, so semantically-equal-but-differently-formatted
/// payloads verify correctly.
///
/// If the header declares an algorithm other than HS256 (compared
/// case-insensitively), verification is skipped and reported as
/// `signature_valid: None`; the token is still structurally decodable.
/// Any failure on the verification path itself (e.g. an undecodable
/// signature segment) collapses to `Some(false)` rather than an error.
///
/// # Errors
///
/// Returns a structural error if the token doesn't have exactly three
/// parts, if base64url decoding fails, or if JSON parsing fails.
pub fn decode(token: &str, secret: &str) -> Result<DecodedToken, JwtLensError> {
    let mut decoded = decode_unverified(token)?;

    if header_declares_hs256(&decoded.header) {
        // signing input = header64 + "." + payload64, as received
        let signing_input = &token[..token.len() - decoded.signature.len() - 1];
        let valid = base64url::decode(&decoded.signature)
            .map(|sig| signer::verify(signing_input.as_bytes(), &sig, secret))
            .unwrap_or(false);
        decoded.signature_valid = Some(valid);
    }

    Ok(decoded)
}

/// Decode a raw JWT string without attempting signature verification.
///
/// Used when no secret is available; `signature_valid` is always `None`.
///
/// # Errors
///
/// Same structural errors as [`decode`].
pub fn decode_unverified(token: &str) -> Result<DecodedToken, JwtLensError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(JwtLensError::InvalidTokenFormat);
    }

    let header = decode_segment(parts[0], "header")?;
    let payload = decode_segment(parts[1], "payload")?;

    Ok(DecodedToken {
        header,
        payload,
        signature: parts[2].to_string(),
        signature_valid: None,
    })
}

/// Encode a payload as a freshly signed HS256 token.
///
/// The header is always the canonical [`HS256_HEADER_JSON`]; generating
/// a token under any other declared algorithm is not possible through
/// this codec.
///
/// # Errors
///
/// Returns [`JwtLensError::EmptySecret`] for an empty secret (a policy
/// decision, not a cryptographic limit) and
/// [`JwtLensError::SerializationError`] if the payload cannot be
/// serialized to JSON.
pub fn encode(payload: &Value, secret: &str) -> Result<String, JwtLensError> {
    if secret.is_empty() {
        return Err(JwtLensError::EmptySecret);
    }

    let payload_json =
        serde_json::to_string(payload).map_err(|e| JwtLensError::SerializationError {
            reason: e.to_string(),
        })?;

    let signing_input = format!(
        "{}.{}",
        base64url::encode(HS256_HEADER_JSON.as_bytes()),
        base64url::encode(payload_json.as_bytes())
    );
    let signature = signer::sign(signing_input.as_bytes(), secret);

    Ok(format!("{signing_input}.{}", base64url::encode(&signature)))
}

/// Base64url-decode a segment and parse it as JSON.
fn decode_segment(encoded: &str, segment_name: &str) -> Result<Value, JwtLensError> {
    let bytes = base64url::decode(encoded).map_err(|_| JwtLensError::Base64DecodeError {
        segment: segment_name.to_string(),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| JwtLensError::JsonParseError {
        segment: segment_name.to_string(),
        reason: e.to_string(),
    })
}

/// Whether the header's `alg` claim is HS256, compared case-insensitively.
fn header_declares_hs256(header: &Value) -> bool {
    header
        .get("alg")
        .and_then(Value::as_str)
        .is_some_and(|alg| alg.eq_ignore_ascii_case("HS256"))
}
