// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Diagnostics always go to stderr so they never end up in a report
//! transcript. ANSI color is used only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_tagged(&mut io::stderr(), "Error", RED, msg, is_tty);
}

/// Print a warning message to stderr.
///
/// Used for conditions that skip work without aborting the run,
/// like a category directory that does not exist.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_tagged(&mut io::stderr(), "Warning", YELLOW, msg, is_tty);
}

/// Print a verbose-mode note to stderr.
pub fn print_note(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_tagged(&mut io::stderr(), "note", DIM, msg, is_tty);
}

fn write_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    color: &str,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "{}{}: {}\x1b[0m", color, tag, msg);
    } else {
        let _ = writeln!(writer, "{}: {}", tag, msg);
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
