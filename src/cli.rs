//! CLI argument definitions for jwt-lens.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! All argument structs implement custom `Debug` to redact sensitive
//! fields (tokens, payloads, and secrets) and prevent accidental
//! leakage through debug formatting, error chains, or logging.

use std::fmt;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

/// A fast, offline debugger for JSON Web Tokens (JWTs): decode and
/// verify HS256 tokens, sign authored payloads, and run interactive
/// editing sessions.
#[derive(Debug, Parser)]
#[command(name = "jwt-lens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a JWT and, if a secret is given, verify its signature.
    Decode(DecodeArgs),

    /// Sign a JSON payload as a fresh HS256 token.
    Encode(EncodeArgs),

    /// Interactive session: feed token/payload/secret edits via stdin
    /// and see the synchronized view after each one.
    Debug(DebugArgs),
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT token to decode. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// HMAC secret to verify the signature with. Without a secret the
    /// token is decoded but reported as not verified.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Output raw JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts token and secret fields.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// The JSON payload (claims) to sign. If omitted, reads from stdin.
    pub payload: Option<String>,

    /// HMAC secret to sign with. Must be non-empty.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Algorithm to sign with. Only HS256 is supported; anything else
    /// is rejected rather than silently downgraded.
    #[arg(long, value_name = "ALG", default_value = "HS256")]
    pub alg: String,

    /// Output raw JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts payload and secret fields.
impl fmt::Debug for EncodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeArgs")
            .field("payload", &self.payload.as_ref().map(|_| "[REDACTED]"))
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("alg", &self.alg)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `debug` subcommand.
#[derive(clap::Args)]
pub struct DebugArgs {
    /// Initial HMAC secret for the session.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env, or a `secret` line on stdin.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the initial HMAC secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Seed the session with the RFC 7519 example token and its
    /// well-known secret.
    #[arg(long)]
    pub example: bool,

    /// Emit one JSON view snapshot per line instead of formatted output.
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the secret field.
impl fmt::Debug for DebugArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugArgs")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("example", &self.example)
            .field("json", &self.json)
            .finish()
    }
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}
