// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the interactive session.
//!
//! Drives `process_modules` with scripted operator input against real
//! repositories and a local bare remote.

use modpush::git::backend::ShellRunner;
use modpush::git::discovery::ModuleList;
use modpush::session::{RunSummary, SessionOptions, process_modules};
use modpush::utility::console::Console;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// A working repository tracking a bare remote, with one pushed commit.
struct Fixture {
    _temp: TempDir,
    work: PathBuf,
    remote: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = temp_dir();
        let remote = temp.path().join("remote.git");
        let work = temp.path().join("work");
        fs::create_dir_all(&remote).unwrap();
        fs::create_dir_all(&work).unwrap();

        git(&remote, &["init", "--quiet", "--bare"]);
        git(&work, &["init", "--quiet"]);
        git(&work, &["config", "user.email", "test@example.com"]);
        git(&work, &["config", "user.name", "Test"]);
        git(&work, &["config", "commit.gpgsign", "false"]);
        fs::write(work.join("README.md"), "readme\n").unwrap();
        git(&work, &["add", "README.md"]);
        git(&work, &["commit", "--quiet", "-m", "Initial commit"]);
        git(
            &work,
            &["remote", "add", "origin", &remote.display().to_string()],
        );
        git(&work, &["push", "--quiet", "-u", "origin", "HEAD"]);

        Self {
            _temp: temp,
            work,
            remote,
        }
    }

    fn remote_subject(&self) -> String {
        git(&self.remote, &["log", "-1", "--format=%s"])
    }

    fn work_subject(&self) -> String {
        git(&self.work, &["log", "-1", "--format=%s"])
    }
}

fn options() -> SessionOptions {
    SessionOptions::builder().shell("sh").build()
}

fn run(modules: &[PathBuf], options: &SessionOptions, input: &str) -> (RunSummary, String) {
    let modules = ModuleList::from(modules.to_vec());
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut console = Console::new(Vec::new());
    let summary = process_modules(
        &ShellRunner::default(),
        &modules,
        options,
        &mut input,
        &mut console,
    )
    .unwrap();
    (summary, String::from_utf8(console.into_inner()).unwrap())
}

#[test]
fn session_commit_and_push() {
    let fx = Fixture::new();
    fs::write(fx.work.join("README.md"), "changed\n").unwrap();

    let (summary, out) = run(&[fx.work.clone()], &options(), "c update readme\n");

    assert_eq!(summary.committed, 1);
    assert!(out.starts_with(&format!("Processing: {}\n", fx.work.display())));
    assert_eq!(fx.work_subject(), "update readme");
    assert_eq!(fx.remote_subject(), "update readme");
}

#[test]
fn session_commit_message_with_quotes() {
    let fx = Fixture::new();
    fs::write(fx.work.join("README.md"), "changed\n").unwrap();

    run(&[fx.work.clone()], &options(), "c say \"hi\" to 'everyone'\n");

    assert_eq!(fx.remote_subject(), "say \"hi\" to 'everyone'");
}

#[test]
fn session_add_commits_untracked_files() {
    let fx = Fixture::new();
    fs::write(fx.work.join("new.txt"), "new\n").unwrap();

    let (_, out) = run(&[fx.work.clone()], &options(), "a add new file\n");

    assert!(out.contains("Untracked file: new.txt\n"));
    assert!(out.contains("\"a <msg>\""));
    assert_eq!(fx.remote_subject(), "add new file");
    assert_eq!(git(&fx.work, &["ls-files", "new.txt"]), "new.txt");
}

#[test]
fn session_commit_without_push() {
    let fx = Fixture::new();
    fs::write(fx.work.join("README.md"), "changed\n").unwrap();
    let options = SessionOptions::builder().push(false).shell("sh").build();

    run(&[fx.work.clone()], &options, "c local only\n");

    assert_eq!(fx.work_subject(), "local only");
    assert_eq!(fx.remote_subject(), "Initial commit");
}

#[test]
fn session_refresh_after_external_fix() {
    let fx = Fixture::new();
    fs::write(fx.work.join("README.md"), "changed\n").unwrap();

    // the passthrough restores the file, the refresh sees a clean tree
    let (summary, out) = run(
        &[fx.work.clone()],
        &options(),
        "git checkout -- README.md\nr\n",
    );

    assert_eq!(summary.sessions, 1);
    assert_eq!(summary.committed, 0);
    assert!(!summary.input_closed);
    assert!(out.ends_with("No changes\n\n\n"));
    assert_eq!(fx.remote_subject(), "Initial commit");
}

#[test]
fn session_missing_program_reprompts() {
    let fx = Fixture::new();
    fs::write(fx.work.join("README.md"), "changed\n").unwrap();

    let (summary, out) = run(
        &[fx.work.clone()],
        &options(),
        "no_such_program_12345 --help\nc after error\n",
    );

    assert!(out.contains("failed to spawn process 'no_such_program_12345 --help'"));
    assert_eq!(out.matches("Use \"c <msg>\"").count(), 2);
    assert_eq!(summary.committed, 1);
    assert_eq!(fx.remote_subject(), "after error");
}

#[test]
fn session_clean_module_needs_no_input() {
    let fx = Fixture::new();

    let (summary, out) = run(&[fx.work.clone()], &options(), "");

    assert_eq!(summary.sessions, 0);
    assert!(!summary.input_closed);
    assert_eq!(
        out,
        format!("Processing: {}\nNo changes\n\n", fx.work.display())
    );
}

#[test]
fn session_end_of_input_stops_run() {
    let first = Fixture::new();
    let second = Fixture::new();
    fs::write(first.work.join("README.md"), "changed\n").unwrap();
    fs::write(second.work.join("README.md"), "changed\n").unwrap();

    let (summary, out) = run(
        &[first.work.clone(), second.work.clone()],
        &options(),
        "",
    );

    assert!(summary.input_closed);
    assert_eq!(summary.processed, 1);
    assert!(!out.contains(&second.work.display().to_string()));
}
