// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution with line-by-line stdout delivery.
//!
//! ```text
//! run_lines(on_line)
//!        |
//!        v
//!  build_command()
//!  args, cwd, stdio
//!        |
//!        v
//!     spawn()  --err--> ProcessError::SpawnFailed
//!        |
//!        v
//!  read stdout lines --> on_line(line), in order
//!        |
//!        v
//!     wait()  (exit code logged, never checked)
//!        |
//!        v
//!   ProcessOutput { exit_code, lines }
//! ```

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ModResult, ProcessError};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging and errors).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') || arg.is_empty() {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and hands every stdout line to `on_line`.
    ///
    /// Blocks until stdout is closed and the child has exited. The exit code
    /// is reported in the returned [`ProcessOutput`] but is not treated as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::SpawnFailed` if the program cannot be started
    /// (not found, permission denied, missing working directory), or a
    /// `ProcessError::OutputError` if waiting for the child fails.
    pub fn run_lines<F>(self, mut on_line: F) -> ModResult<ProcessOutput>
    where
        F: FnMut(&str),
    {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child =
            self.build_command()
                .spawn()
                .map_err(|source| ProcessError::SpawnFailed {
                    command: cmd_line.clone(),
                    source,
                })?;

        trace!(process = %name, pid = child.id(), "spawned");

        let mut lines = 0usize;
        if let Some(stdout) = child.stdout.take() {
            let forward = self.stdout_config().contains(StreamFlags::FORWARD_TO_LOG);
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = decode_line(&buf);
                        if forward {
                            trace!(process = %name, stream = "stdout", line = %line, "output");
                        }
                        on_line(&line);
                        lines += 1;
                    }
                    Err(e) => {
                        warn!(process = %name, error = %e, "error reading stream");
                        break;
                    }
                }
            }
        }

        let status = child.wait().map_err(|e| ProcessError::OutputError {
            command: cmd_line,
            message: e.to_string(),
        })?;
        let exit_code = status.code().unwrap_or(-1);

        debug!(process = %name, exit_code, lines, "completed");
        Ok(ProcessOutput::new(exit_code, lines))
    }

    /// Builds the `std::process::Command` from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        if self.stdin_inherited() {
            command.stdin(Stdio::inherit());
        } else {
            command.stdin(Stdio::null());
        }

        command.stdout(Stdio::piped());
        command.stderr(Self::stdio_from_flags(self.stderr_config()));

        command
    }

    /// Converts `StreamFlags` to Stdio configuration.
    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::inherit()
        }
    }
}

/// Strips the line terminator and decodes lossily; git output is not
/// guaranteed to be UTF-8 (paths, diff content).
fn decode_line(buf: &[u8]) -> String {
    let mut end = buf.len();
    if end > 0 && buf[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && buf[end - 1] == b'\r' {
        end -= 1;
    }
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
