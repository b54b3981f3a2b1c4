// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operator-facing output.
//!
//! Subprocess output arrives through `FnMut(&str)` callbacks that cannot
//! return errors, so [`Console`] keeps the first write error and hands it
//! back from [`Console::check`].

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented writer for the operator protocol.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Console<W> {
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Writes `text` followed by a newline.
    pub fn line(&mut self, text: impl Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{text}") {
            self.error = Some(e);
        }
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.line("");
    }

    /// Flushes so a prompt is visible before blocking on input.
    pub fn flush(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.flush() {
            self.error = Some(e);
        }
    }

    /// Returns the first write error since the last check.
    ///
    /// # Errors
    ///
    /// Returns the recorded `io::Error`, if any.
    pub fn check(&mut self) -> io::Result<()> {
        self.error.take().map_or(Ok(()), Err)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Prints "Press any key to continue..." and waits.
///
/// With a terminal on stdin a single key press is read in raw mode;
/// otherwise one line is consumed from `input` (EOF counts as the key).
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched to raw mode or the
/// input cannot be read.
pub fn pause<W: Write, I: BufRead>(
    console: &mut Console<W>,
    input: &mut I,
    interactive: bool,
) -> io::Result<()> {
    console.line("Press any key to continue...");
    console.flush();
    console.check()?;

    if interactive {
        wait_for_key()
    } else {
        let mut discard = String::new();
        input.read_line(&mut discard).map(|_| ())
    }
}

fn wait_for_key() -> io::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};
    use crossterm::terminal;

    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    result
}
