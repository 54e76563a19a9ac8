//! Handler for the `encode` subcommand.
//!
//! Parses an authored JSON payload and signs it as a fresh HS256 token.
//! The generated header is always `{"alg":"HS256","typ":"JWT"}`; the
//! `--alg` flag exists to make the single-algorithm policy explicit and
//! reject anything else up front.

use anyhow::Result;
use serde_json::{json, Value};

use crate::cli::EncodeArgs;
use crate::commands::input;
use crate::core::codec;
use crate::error::JwtLensError;

/// Execute the `encode` subcommand with the given arguments.
pub fn execute(args: &EncodeArgs) -> Result<()> {
    if !args.alg.eq_ignore_ascii_case("HS256") {
        return Err(JwtLensError::UnsupportedAlgorithm {
            algorithm: args.alg.clone(),
        }
        .into());
    }

    let payload_text = input::resolve_payload(args.payload.as_deref())?;
    let payload: Value =
        serde_json::from_str(&payload_text).map_err(|e| JwtLensError::JsonParseError {
            segment: "payload".to_string(),
            reason: e.to_string(),
        })?;

    let secret = input::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())?
        .ok_or(JwtLensError::NoSecretProvided)?;

    let token = codec::encode(&payload, &secret)?;

    if args.json {
        println!("{}", json!({ "token": token }));
    } else {
        println!("{token}");
    }

    Ok(())
}
