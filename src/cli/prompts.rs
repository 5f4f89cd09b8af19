//! Centralized warning and status messages for CLI output.
//!
//! Passwords go to stdout; everything here goes to stderr so output can be
//! piped.

use std::path::Path;

use crossterm::style::Stylize;

use super::quiet;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if quiet::enabled() {
        return;
    }
    if quiet::stderr_is_terminal() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    if quiet::stderr_is_terminal() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

pub fn usage_hint() {
    eprintln!("Run 'pwgenie --help' for usage.");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - suppressed in quiet mode, output was already printed
pub fn clipboard_error(err: &str) {
    warn(&format!("Clipboard unavailable: {err}"));
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Defaults saved \u{2192} {}", path.display());
    }
}
