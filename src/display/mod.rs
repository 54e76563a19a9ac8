//! Terminal display and formatting utilities.
//!
//! Handles JSON pretty-printing and session view rendering for
//! human-readable terminal output.

pub mod json_printer;
pub mod session_view;
