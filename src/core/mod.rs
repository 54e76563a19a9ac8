//! Core business logic for JWT operations.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.
//!
//! Layering, leaf to root: `base64url` and `signer` are self-contained
//! primitives, `codec` composes them into token decode/encode, and `sync`
//! is the edit-propagation state machine that keeps an encoded token and
//! its decomposed header/payload/secret view consistent.

pub mod base64url;
pub mod codec;
pub mod signer;
pub mod sync;
