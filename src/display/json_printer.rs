//! JSON pretty-printing for terminal output.

use serde_json::Value;

/// Print a JSON value with 2-space indentation.
///
/// Falls back to compact output if pretty-printing fails (which for
/// parsed values it cannot).
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}
