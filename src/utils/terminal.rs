//! Terminal utilities for title setting and output management

use std::io::{self, IsTerminal, Write};

/// Sets the terminal title to the specified text
///
/// Nothing is written when stdout is redirected, so piped reports stay free
/// of escape sequences.
pub fn set_terminal_title(title: &str) {
    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    // Non-critical output
    let _ = write_terminal_title(&mut stdout.lock(), title, is_terminal);
}

/// Sets the terminal title and ensures it's flushed to the terminal
pub fn set_terminal_title_and_flush(title: &str) {
    set_terminal_title(title);
    let _ = io::stdout().flush();
}

/// Writes the title escape sequence to `out` when it is a terminal
pub(crate) fn write_terminal_title<W: Write>(
    out: &mut W,
    title: &str,
    is_terminal: bool,
) -> io::Result<()> {
    if !is_terminal {
        return Ok(());
    }
    // ANSI escape sequence to set terminal title
    write!(out, "\x1b]0;{}\x07", title)
}
