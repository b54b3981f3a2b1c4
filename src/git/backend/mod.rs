// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitRunner
//!   .git(cwd, args, on_line)               --> git <args>
//!   .external(cwd, program, args, on_line) --> passthrough command
//!        |
//!        v
//!   ShellRunner --> ProcessBuilder::run_lines
//! ```
//!
//! Everything above this seam (discovery, status, session) only sees
//! stdout lines, which keeps it testable with a scripted runner.

use std::path::{Path, PathBuf};

use crate::core::process::builder::ProcessBuilder;
use crate::error::ModResult;

/// Runs external programs on behalf of discovery, status and the session.
pub trait GitRunner {
    /// Run git with `args` in `cwd`, handing every stdout line to `on_line`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be started. A non-zero exit
    /// status is not an error.
    fn git(&self, cwd: &Path, args: &[&str], on_line: &mut dyn FnMut(&str)) -> ModResult<()>;

    /// Run an operator-typed program in `cwd`, handing every stdout line to
    /// `on_line`. The program may read from the terminal.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the program cannot be started.
    fn external(
        &self,
        cwd: &Path,
        program: &str,
        args: &[String],
        on_line: &mut dyn FnMut(&str),
    ) -> ModResult<()>;
}

/// Shell-based backend spawning the git CLI.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    program: PathBuf,
}

impl ShellRunner {
    /// Create a runner using `program` for every git invocation.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Create a runner for `program` resolved through PATH.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if `program` is not in PATH.
    pub fn locate(program: &str) -> ModResult<Self> {
        let builder = ProcessBuilder::which(program)?;
        Ok(Self::new(builder.program().clone()))
    }

    /// The git executable this runner spawns.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for ShellRunner {
    fn git(&self, cwd: &Path, args: &[&str], on_line: &mut dyn FnMut(&str)) -> ModResult<()> {
        ProcessBuilder::new(&self.program)
            .args(args)
            .cwd(cwd)
            .name("git")
            .run_lines(on_line)?;
        Ok(())
    }

    fn external(
        &self,
        cwd: &Path,
        program: &str,
        args: &[String],
        on_line: &mut dyn FnMut(&str),
    ) -> ModResult<()> {
        ProcessBuilder::new(program)
            .args(args)
            .cwd(cwd)
            .inherit_stdin()
            .run_lines(on_line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
