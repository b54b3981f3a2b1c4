// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous process spawning.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .stderr_flags() .inherit_stdin()
//!   .run_lines(|line| ...)
//!       --> std::process::Command (fresh per run)
//!           stdout read line by line, stderr inherited
//!       --> ProcessOutput { exit_code, lines }
//! ```

pub mod builder;
mod runner;
