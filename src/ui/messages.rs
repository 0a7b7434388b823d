//! Console feedback for triplog commands: one icon-prefixed line per
//! outcome, errors on stderr.

use std::fmt;

// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Neutral notes, e.g. "No trips yet".
pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

/// A trip was stored, changed, deleted or exported.
pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

/// Needs the user's attention before going on (confirmations, skipped log rows).
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// Fatal command error, printed by `main` before exiting with code 1.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Title of a trip group (current / upcoming / past) with its size.
pub fn header<T: fmt::Display>(msg: T, count: usize) {
    println!("\n{}{}{} ({}){}", FG_BLUE, BOLD, msg, count, RESET);
}
