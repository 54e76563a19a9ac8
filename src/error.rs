//! Domain error types for jwt-lens.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.
//!
//! The taxonomy separates structural failures (a token that cannot be
//! decomposed), serialization failures (a payload that cannot be signed),
//! and policy failures (inputs the tool refuses on principle, like an
//! empty secret). A *bad* signature is never an error value: callers get
//! it as a boolean, because a structurally valid token with a wrong
//! signature is still a decodable token.

use thiserror::Error;

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtLensError {
    /// The provided token does not have the expected three-part structure.
    #[error("invalid token format: expected 'header.payload.signature' structure")]
    InvalidTokenFormat,

    /// A base64url string contains invalid characters or has an impossible length.
    #[error("malformed base64url: {reason}")]
    MalformedBase64 {
        /// Description of the decoding failure.
        reason: String,
    },

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64DecodeError {
        /// Which segment failed to decode (e.g., "header", "payload").
        segment: String,
    },

    /// Failed to parse decoded JSON content.
    #[error("failed to parse {segment} as JSON: {reason}")]
    JsonParseError {
        /// Which segment failed to parse (e.g., "header", "payload").
        segment: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The payload could not be serialized to JSON during encoding.
    #[error("failed to serialize payload: {reason}")]
    SerializationError {
        /// Description of the serialization failure.
        reason: String,
    },

    /// An empty secret was supplied where a signing key is required.
    #[error("empty secret: provide a non-empty signing secret")]
    EmptySecret,

    /// An algorithm other than HS256 was requested for encoding.
    #[error("unsupported algorithm '{algorithm}': only HS256 is supported")]
    UnsupportedAlgorithm {
        /// The algorithm that was requested.
        algorithm: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// No payload was provided via any input method.
    #[error("no payload provided: pass a JSON payload as an argument or through stdin")]
    NoPayloadProvided,

    /// No secret was provided where one is required.
    #[error("no secret provided: pass --secret or --secret-env")]
    NoSecretProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The specified environment variable name is not usable.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected variable name.
        name: String,
    },
}
