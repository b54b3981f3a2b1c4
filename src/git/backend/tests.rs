// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitRunner, ShellRunner};
use crate::error::{ModError, ProcessError};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_shell_runner_streams_git_output() {
    let temp = temp_dir();
    let mut lines = Vec::new();
    ShellRunner::default()
        .git(temp.path(), &["--version"], &mut |line| {
            lines.push(line.to_string());
        })
        .expect("git should be installed");

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("git version"), "got {lines:?}");
}

#[test]
fn test_shell_runner_non_zero_exit_is_ok() {
    // not a repository: git fails, but it started
    let temp = temp_dir();
    let result = ShellRunner::default().git(temp.path(), &["diff", "--staged"], &mut |_| {});
    assert!(result.is_ok());
}

#[test]
fn test_shell_runner_missing_git_program() {
    let temp = temp_dir();
    let runner = ShellRunner::new("nonexistent_git_12345");
    assert_eq!(runner.program(), Path::new("nonexistent_git_12345"));

    let err = runner
        .git(temp.path(), &["status"], &mut |_| {})
        .expect_err("spawn should fail");
    assert!(err.to_string().contains("nonexistent_git_12345"));
}

#[cfg(not(windows))]
#[test]
fn test_shell_runner_external_program() {
    let temp = temp_dir();
    let mut lines = Vec::new();
    ShellRunner::default()
        .external(
            temp.path(),
            "echo",
            &["hello".to_string(), "world".to_string()],
            &mut |line| lines.push(line.to_string()),
        )
        .expect("echo should run");

    assert_eq!(lines, ["hello world"]);
}

#[test]
fn test_shell_runner_external_missing_program() {
    let temp = temp_dir();
    let result =
        ShellRunner::default().external(temp.path(), "no_such_tool_12345", &[], &mut |_| {});
    assert!(result.is_err());
}

#[test]
fn test_locate_resolves_git() {
    let runner = ShellRunner::locate("git").expect("git should be installed");
    assert!(runner.program().is_absolute());
}

#[test]
fn test_locate_missing_program() {
    let err = ShellRunner::locate("nonexistent_git_12345").unwrap_err();
    assert!(matches!(
        err,
        ModError::Process(ref e) if matches!(**e, ProcessError::ExecutableNotFound { .. })
    ));
}
