//! Human-readable rendering of a debugging session snapshot.

use crate::core::sync::ViewState;

/// Print one session view: token, derived header/payload, validity
/// flags, and the most recent error if any.
pub fn print_view(view: &ViewState) {
    println!("--- generation {} ---", view.generation);
    println!("Token");
    println!("{}", view.token);
    println!();
    println!("Header");
    println!("{}", view.header);
    println!();
    println!("Payload");
    println!("{}", view.payload);
    println!();
    println!(
        "Structure: {}",
        if view.structurally_valid {
            "valid"
        } else {
            "invalid"
        }
    );
    println!(
        "Signature: {}",
        if view.signature_valid {
            "verified"
        } else {
            "not verified"
        }
    );
    if let Some(error) = &view.error {
        println!("Error: {error}");
    }
}
