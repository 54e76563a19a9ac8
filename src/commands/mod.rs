//! Command handlers for each CLI subcommand.
//!
//! Each subcommand is implemented in its own module and exposes
//! a single `execute` function that receives the parsed arguments.
//! Shared token/payload/secret input resolution lives in `input`.

pub mod debug;
pub mod decode;
pub mod encode;
pub mod input;
