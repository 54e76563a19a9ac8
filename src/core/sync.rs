//! The edit-propagation engine behind an interactive debugging session.
//!
//! A session holds four pieces of view-state: the encoded token, the
//! header text, the payload text, and the signing secret. Exactly one
//! of token / payload / secret is edited at a time; this module decides
//! what the other fields must become and what error (if any) to surface.
//!
//! The header is a derived, read-only projection: it is recomputed from
//! decode results or pinned to the canonical HS256 header after a
//! re-encode, and there is deliberately no header edit event.
//!
//! Edits are strictly serialized and processed to completion — the
//! cryptographic primitives here are synchronous, so there is no
//! in-flight operation for a newer edit to race. Every applied edit
//! bumps a generation counter that is exposed in the view snapshot,
//! letting callers detect and discard anything stale they may be
//! holding.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use zeroize::Zeroizing;

use crate::core::codec;
use crate::error::JwtLensError;

/// The RFC 7519 example token from jwt.io, used to seed example sessions.
pub const EXAMPLE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// The secret that [`EXAMPLE_TOKEN`] is signed with.
pub const EXAMPLE_SECRET: &str = "your-256-bit-secret";

/// A single user edit to one of the three source fields.
#[derive(Clone)]
pub enum Edit {
    /// The encoded token text changed.
    Token(String),
    /// The payload text changed.
    Payload(String),
    /// The signing secret changed.
    Secret(String),
}

/// Custom `Debug` that redacts edit contents: token and secret edits
/// carry credentials, payload edits carry claims.
impl fmt::Debug for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Token(_) => f.write_str("Edit::Token([REDACTED])"),
            Edit::Payload(_) => f.write_str("Edit::Payload([REDACTED])"),
            Edit::Secret(_) => f.write_str("Edit::Secret([REDACTED])"),
        }
    }
}

/// Snapshot of the session view after an edit.
///
/// This is what the presentation layer renders; the secret is
/// deliberately absent.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    /// The encoded token as currently displayed.
    pub token: String,
    /// Pretty-printed header JSON (derived, read-only).
    pub header: String,
    /// Pretty-printed (or as-typed) payload JSON.
    pub payload: String,
    /// Whether the displayed token has the three-segment structure with
    /// decodable base64url/JSON header and payload.
    pub structurally_valid: bool,
    /// Whether the displayed token's signature verified under the
    /// current secret. Skipped verification counts as not valid.
    pub signature_valid: bool,
    /// Human-readable reason for the most recent failure, if any.
    pub error: Option<String>,
    /// Monotonic counter, bumped once per applied edit.
    pub generation: u64,
}

/// An interactive debugging session over one token.
pub struct Session {
    token: String,
    header_text: String,
    payload_text: String,
    secret: Zeroizing<String>,
    structurally_valid: bool,
    signature_valid: bool,
    last_error: Option<JwtLensError>,
    generation: u64,
}

/// Custom `Debug` that redacts the secret to prevent accidental leakage
/// through debug formatting or error chains.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token)
            .field("header_text", &self.header_text)
            .field("payload_text", &self.payload_text)
            .field("secret", &"[REDACTED]")
            .field("structurally_valid", &self.structurally_valid)
            .field("signature_valid", &self.signature_valid)
            .field("last_error", &self.last_error)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Session {
    /// Create an empty session with the given initial secret.
    pub fn new(secret: &str) -> Self {
        Session {
            token: String::new(),
            header_text: String::new(),
            payload_text: String::new(),
            secret: Zeroizing::new(secret.to_string()),
            structurally_valid: false,
            signature_valid: false,
            last_error: None,
            generation: 0,
        }
    }

    /// Create a session seeded with the RFC 7519 example token and its
    /// well-known secret.
    pub fn example() -> Self {
        let mut session = Session::new(EXAMPLE_SECRET);
        session.apply(Edit::Token(EXAMPLE_TOKEN.to_string()));
        session
    }

    /// Apply one edit and return the resulting view snapshot.
    ///
    /// Edits are processed to completion in call order; the returned
    /// snapshot carries a generation strictly greater than every
    /// snapshot returned before it.
    pub fn apply(&mut self, edit: Edit) -> ViewState {
        match edit {
            Edit::Token(token) => self.edit_token(token),
            Edit::Payload(text) => self.edit_payload(text),
            Edit::Secret(secret) => self.edit_secret(secret),
        }
        self.generation += 1;
        self.view()
    }

    /// Snapshot the current view without applying an edit.
    pub fn view(&self) -> ViewState {
        ViewState {
            token: self.token.clone(),
            header: self.header_text.clone(),
            payload: self.payload_text.clone(),
            structurally_valid: self.structurally_valid,
            signature_valid: self.signature_valid,
            error: self.last_error.as_ref().map(ToString::to_string),
            generation: self.generation,
        }
    }

    /// The user pasted or edited the encoded token: decode it with the
    /// current secret and project the result into the other fields.
    ///
    /// On structural failure the header/payload text keeps its last-good
    /// value so the user retains context while fixing the token.
    fn edit_token(&mut self, token: String) {
        self.token = token;
        match codec::decode(&self.token, &self.secret) {
            Ok(decoded) => {
                self.header_text = pretty(&decoded.header);
                self.payload_text = pretty(&decoded.payload);
                self.structurally_valid = true;
                self.signature_valid = decoded.is_signature_valid();
                self.last_error = None;
            }
            Err(err) => {
                self.structurally_valid = false;
                self.signature_valid = false;
                self.last_error = Some(err);
            }
        }
    }

    /// The user edited the payload text: if it parses, re-sign and
    /// replace the token. The freshly generated token is valid by
    /// construction, so both flags go true.
    ///
    /// On failure the token is left untouched and previously valid
    /// state is not cleared.
    fn edit_payload(&mut self, text: String) {
        self.payload_text = text;
        let payload = match parse_payload(&self.payload_text) {
            Ok(payload) => payload,
            Err(err) => {
                self.last_error = Some(err);
                return;
            }
        };
        self.regenerate(&payload);
    }

    /// The user edited the secret: an empty secret is a policy error and
    /// performs no re-signing; otherwise the current payload text is
    /// re-parsed and the token regenerated under the new secret.
    fn edit_secret(&mut self, secret: String) {
        self.secret = Zeroizing::new(secret);
        if self.secret.is_empty() {
            self.last_error = Some(JwtLensError::EmptySecret);
            return;
        }
        let payload = match parse_payload(&self.payload_text) {
            Ok(payload) => payload,
            Err(err) => {
                self.last_error = Some(err);
                return;
            }
        };
        self.regenerate(&payload);
    }

    /// Re-encode `payload` under the current secret, replacing the token
    /// and pinning the header to the canonical HS256 projection.
    fn regenerate(&mut self, payload: &Value) {
        match codec::encode(payload, &self.secret) {
            Ok(token) => {
                self.token = token;
                self.header_text = pretty_canonical_header();
                self.structurally_valid = true;
                self.signature_valid = true;
                self.last_error = None;
            }
            Err(err) => {
                // e.g. EmptySecret while editing the payload: the
                // displayed token stays as it was
                self.last_error = Some(err);
            }
        }
    }
}

/// Parse payload text, tagging failures as payload-specific.
fn parse_payload(text: &str) -> Result<Value, JwtLensError> {
    serde_json::from_str(text).map_err(|e| JwtLensError::JsonParseError {
        segment: "payload".to_string(),
        reason: e.to_string(),
    })
}

/// Pretty-print a JSON value for display (2-space indentation).
fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// The canonical header, pretty-printed the way decoded headers are.
fn pretty_canonical_header() -> String {
    match serde_json::from_str::<Value>(codec::HS256_HEADER_JSON) {
        Ok(header) => pretty(&header),
        Err(_) => codec::HS256_HEADER_JSON.to_string(),
    }
}
