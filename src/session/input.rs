// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operator input.
//!
//! ```text
//! "a <msg>"   AddCommit    add ., commit -a -m <msg>, push
//! "c <msg>"   Commit       commit -a -m <msg>, push
//! "r"         Refresh      recompute status
//! otherwise   Passthrough  <program> <args...> in the module directory
//! ```

use std::io::{self, BufRead};

use crate::error::ProcessError;

/// One line typed by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorCommand {
    AddCommit(String),
    Commit(String),
    Refresh,
    Passthrough(String),
}

impl OperatorCommand {
    /// Classify a line (without its line terminator).
    ///
    /// The message is everything after the two-character prefix, kept as
    /// typed.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        if let Some(message) = line.strip_prefix("a ") {
            Self::AddCommit(message.to_string())
        } else if let Some(message) = line.strip_prefix("c ") {
            Self::Commit(message.to_string())
        } else if line.trim() == "r" {
            Self::Refresh
        } else {
            Self::Passthrough(line.to_string())
        }
    }
}

/// Split a passthrough line into program and arguments.
///
/// Words are separated by whitespace; `'...'` and `"..."` group words and
/// may produce empty arguments. There are no escape sequences.
///
/// # Errors
///
/// Returns `ProcessError::UnterminatedQuote` if a quote is not closed.
pub fn split_command_line(line: &str) -> Result<Vec<String>, ProcessError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(ProcessError::UnterminatedQuote {
            line: line.to_string(),
        });
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Read one line, without its terminator. `None` at end of input.
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns the underlying read error.
pub fn read_command<I: BufRead + ?Sized>(input: &mut I) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let mut end = buf.len();
    if end > 0 && buf[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && buf[end - 1] == b'\r' {
        end -= 1;
    }
    Ok(Some(String::from_utf8_lossy(&buf[..end]).into_owned()))
}
