// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git commands used by modpush.
//!
//! ```text
//! list_untracked  ls-files . --exclude-standard --others
//! diff_staged     diff --staged
//! diff_unstaged   diff
//! list_manifest   config --file <manifest> -l
//! add_all         add .
//! commit_all      commit -a -m <message>
//! push            push
//! ```
//!
//! The commit message is a single argument; nothing is quoted or escaped.

use crate::error::ModResult;
use std::path::Path;

use super::backend::GitRunner;

/// List files that are neither tracked nor ignored.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn list_untracked<R: GitRunner + ?Sized>(
    runner: &R,
    dir: &Path,
    on_line: &mut dyn FnMut(&str),
) -> ModResult<()> {
    runner.git(dir, &["ls-files", ".", "--exclude-standard", "--others"], on_line)
}

/// Diff of changes staged in the index.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn diff_staged<R: GitRunner + ?Sized>(
    runner: &R,
    dir: &Path,
    on_line: &mut dyn FnMut(&str),
) -> ModResult<()> {
    runner.git(dir, &["diff", "--staged"], on_line)
}

/// Diff of working tree changes not yet staged.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn diff_unstaged<R: GitRunner + ?Sized>(
    runner: &R,
    dir: &Path,
    on_line: &mut dyn FnMut(&str),
) -> ModResult<()> {
    runner.git(dir, &["diff"], on_line)
}

/// List `key=value` entries of a submodule manifest in `dir`.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn list_manifest<R: GitRunner + ?Sized>(
    runner: &R,
    dir: &Path,
    manifest: &str,
    on_line: &mut dyn FnMut(&str),
) -> ModResult<()> {
    runner.git(dir, &["config", "--file", manifest, "-l"], on_line)
}

/// Stage everything, untracked files included.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn add_all<R: GitRunner + ?Sized>(
    runner: &R,
    dir: &Path,
    on_line: &mut dyn FnMut(&str),
) -> ModResult<()> {
    runner.git(dir, &["add", "."], on_line)
}

/// Commit all tracked changes with `message`.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn commit_all<R: GitRunner + ?Sized>(
    runner: &R,
    dir: &Path,
    message: &str,
    on_line: &mut dyn FnMut(&str),
) -> ModResult<()> {
    runner.git(dir, &["commit", "-a", "-m", message], on_line)
}

/// Push the current branch to its configured remote.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn push<R: GitRunner + ?Sized>(
    runner: &R,
    dir: &Path,
    on_line: &mut dyn FnMut(&str),
) -> ModResult<()> {
    runner.git(dir, &["push"], on_line)
}
