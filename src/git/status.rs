// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Change status of a single module.
//!
//! ```text
//! ls-files --others   --> "Untracked file: <name>"   untracked = true
//! diff --staged       --> echoed verbatim            modified  = true
//! diff                --> echoed verbatim            modified  = true
//!                         (blank line before each "diff --git")
//! ```

use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::ModResult;
use crate::utility::console::Console;

use super::backend::GitRunner;
use super::cmd;

const DIFF_HEADER: &str = "diff --git";

/// What a status report found. Recomputed on every refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeStatus {
    pub untracked: bool,
    pub modified: bool,
}

impl ChangeStatus {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        !self.untracked && !self.modified
    }
}

/// Print untracked files and both diffs of `dir` and return what was found.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started, or an I/O error if the
/// console cannot be written.
pub fn report_status<R, W>(
    runner: &R,
    dir: &Path,
    console: &mut Console<W>,
) -> ModResult<ChangeStatus>
where
    R: GitRunner + ?Sized,
    W: Write,
{
    let mut status = ChangeStatus::default();

    cmd::list_untracked(runner, dir, &mut |name| {
        status.untracked = true;
        console.line(format_args!("Untracked file: {name}"));
    })?;

    let mut echo_diff = |line: &str| {
        status.modified = true;
        if line.starts_with(DIFF_HEADER) {
            console.blank();
        }
        console.line(line);
    };
    cmd::diff_staged(runner, dir, &mut echo_diff)?;
    cmd::diff_unstaged(runner, dir, &mut echo_diff)?;

    if status.modified {
        console.blank();
    }
    if status.is_clean() {
        console.line("No changes");
        console.blank();
    }
    console.check()?;

    debug!(dir = %dir.display(), ?status, "status");
    Ok(status)
}
