//! Input resolution for tokens, payloads, and secrets.
//!
//! Each value can come from a CLI argument, a named environment
//! variable, or (for tokens and payloads) stdin, in that order of
//! precedence. Environment variable names are validated before lookup
//! so a typo like `NAME=VALUE` fails with a clear message.

use std::env;
use std::io::Read;

use zeroize::Zeroizing;

use crate::error::JwtLensError;

/// Resolve the token from argument, environment variable, or stdin.
///
/// Leading/trailing whitespace (including a trailing newline from
/// piped input) is trimmed.
///
/// # Errors
///
/// Returns [`JwtLensError::NoTokenProvided`] when every source is
/// empty, plus environment variable errors from [`read_env_var`].
pub fn resolve_token(arg: Option<&str>, env_var: Option<&str>) -> Result<String, JwtLensError> {
    if let Some(token) = arg {
        let token = token.trim();
        if token.is_empty() {
            return Err(JwtLensError::NoTokenProvided);
        }
        return Ok(token.to_string());
    }

    if let Some(name) = env_var {
        let token = read_env_var(name)?;
        if token.trim().is_empty() {
            return Err(JwtLensError::NoTokenProvided);
        }
        return Ok(token.trim().to_string());
    }

    let token = read_stdin().ok_or(JwtLensError::NoTokenProvided)?;
    Ok(token)
}

/// Resolve the payload text from argument or stdin.
///
/// # Errors
///
/// Returns [`JwtLensError::NoPayloadProvided`] when both sources are
/// empty.
pub fn resolve_payload(arg: Option<&str>) -> Result<String, JwtLensError> {
    if let Some(payload) = arg {
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(JwtLensError::NoPayloadProvided);
        }
        return Ok(payload.to_string());
    }

    read_stdin().ok_or(JwtLensError::NoPayloadProvided)
}

/// Resolve the secret from argument or environment variable.
///
/// Returns `Ok(None)` when no secret source was given at all; an
/// explicitly supplied empty secret is passed through so the policy
/// layer can report it as such.
///
/// # Errors
///
/// Environment variable errors from [`read_env_var`].
pub fn resolve_secret(
    arg: Option<&Zeroizing<String>>,
    env_var: Option<&str>,
) -> Result<Option<Zeroizing<String>>, JwtLensError> {
    if let Some(secret) = arg {
        return Ok(Some(secret.clone()));
    }

    if let Some(name) = env_var {
        return Ok(Some(Zeroizing::new(read_env_var(name)?)));
    }

    Ok(None)
}

/// Read an environment variable after validating its name.
///
/// # Errors
///
/// Returns [`JwtLensError::InvalidEnvVarName`] for unusable names and
/// [`JwtLensError::EnvVarNotFound`] when the variable is unset or not
/// valid Unicode.
fn read_env_var(name: &str) -> Result<String, JwtLensError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(JwtLensError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }

    env::var(name).map_err(|_| JwtLensError::EnvVarNotFound {
        name: name.to_string(),
    })
}

/// Read all of stdin as trimmed text; `None` if empty or unreadable.
fn read_stdin() -> Option<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer).ok()?;
    let text = buffer.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
