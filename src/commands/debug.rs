//! Handler for the `debug` subcommand.
//!
//! Runs an interactive debugging session: each stdin line is an edit
//! event (`token …`, `payload …`, `secret …`) applied to the sync
//! engine, and the resulting view is printed after each one. Blank
//! lines and `#` comments are skipped; `quit` or `exit` ends the
//! session.
//!
//! With `--json`, every snapshot is emitted as a single JSON line,
//! which makes the session scriptable.

use std::io::{self, BufRead};

use anyhow::Result;

use crate::cli::DebugArgs;
use crate::commands::input;
use crate::core::sync::{Edit, Session, ViewState};
use crate::display::session_view;

/// One parsed line of session input.
enum Command {
    Edit(Edit),
    Quit,
    Noop,
    Unknown(String),
}

/// Execute the `debug` subcommand with the given arguments.
pub fn execute(args: &DebugArgs) -> Result<()> {
    let secret = input::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())?;

    let mut session = if args.example {
        Session::example()
    } else {
        Session::new(secret.as_ref().map(|s| s.as_str()).unwrap_or(""))
    };
    if args.example {
        if let Some(secret) = &secret {
            session.apply(Edit::Secret(secret.to_string()));
        }
    }

    render(&session.view(), args.json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::Noop => continue,
            Command::Edit(edit) => {
                let view = session.apply(edit);
                render(&view, args.json)?;
            }
            Command::Unknown(word) => {
                eprintln!("unknown command '{word}' (expected token, payload, secret, or quit)");
            }
        }
    }

    Ok(())
}

/// Parse one stdin line into a session command.
fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Command::Noop;
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match word {
        "token" => Command::Edit(Edit::Token(rest.to_string())),
        "payload" => Command::Edit(Edit::Payload(rest.to_string())),
        "secret" => Command::Edit(Edit::Secret(rest.to_string())),
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Print a view snapshot in the requested format.
fn render(view: &ViewState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(view)?);
    } else {
        session_view::print_view(view);
    }
    Ok(())
}
