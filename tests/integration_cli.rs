// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use modpush::cli::Cli;
use std::path::PathBuf;

#[test]
fn cli_defaults() {
    let cli = Cli::try_parse_from(["modpush"]).unwrap();
    insta::assert_debug_snapshot!(cli, @r"
    Cli {
        global: GlobalOptions {
            config: None,
            log_level: None,
            file_log_level: None,
            log_file: None,
            no_pause: false,
            options: [],
        },
        list: false,
        dir: None,
    }
    ");
}

#[test]
fn cli_directory_and_flags() {
    let cli = Cli::try_parse_from([
        "modpush",
        "--config",
        "team.toml",
        "--no-pause",
        "--set",
        "discovery.include_root=false",
        "--set",
        "git.program=git2",
        "../superproject",
    ])
    .unwrap();

    assert_eq!(cli.dir, Some(PathBuf::from("../superproject")));
    assert_eq!(cli.global.config, Some(PathBuf::from("team.toml")));
    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "discovery.include_root=false",
            "git.program=git2",
            "session.pause_on_exit=false"
        ]
    );
}

#[test]
fn cli_list_mode() {
    let cli = Cli::try_parse_from(["modpush", "--list", "."]).unwrap();
    assert!(cli.list);
    assert_eq!(cli.dir, Some(PathBuf::from(".")));
}

#[test]
fn cli_rejects_unknown_flag() {
    let err = Cli::try_parse_from(["modpush", "--dry"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn cli_version_flag() {
    let err = Cli::try_parse_from(["modpush", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
