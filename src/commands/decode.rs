//! Handler for the `decode` subcommand.
//!
//! Decodes a JWT's header and payload and, when a secret is supplied,
//! verifies the HS256 signature. Supports reading the token from a CLI
//! argument, environment variable, or stdin.
//!
//! Structural failures exit non-zero; an invalid signature is a
//! reported result, not a failure (use `--json` and inspect
//! `signature_valid` for scripting).

use anyhow::Result;
use serde_json::json;

use crate::cli::DecodeArgs;
use crate::commands::input;
use crate::core::codec;
use crate::display::json_printer;

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let token = input::resolve_token(args.token.as_deref(), args.token_env.as_deref())?;
    let secret = input::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())?;

    let decoded = match &secret {
        Some(secret) => codec::decode(&token, secret)?,
        None => codec::decode_unverified(&token)?,
    };

    if args.json {
        let doc = json!({
            "header": decoded.header,
            "payload": decoded.payload,
            "signature": decoded.signature,
            "signature_valid": decoded.signature_valid,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Header");
    json_printer::print_json(&decoded.header);
    println!();
    println!("Payload");
    json_printer::print_json(&decoded.payload);
    println!();
    match decoded.signature_valid {
        Some(true) => println!("Signature: verified"),
        Some(false) => println!("Signature: INVALID for the supplied secret"),
        None if secret.is_some() => {
            println!("Signature: not verified (header does not declare HS256)");
        }
        None => println!("Signature: not verified (no secret provided)"),
    }

    Ok(())
}
