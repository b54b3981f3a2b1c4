// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations and the
//! layering used by the binary.

use clap::Parser;
use modpush::cli::Cli;
use modpush::config::loader::ConfigLoader;
use modpush::config::{CONFIG_FILE_NAME, Config};
use modpush::logging::LogLevel;
use std::fs;
use std::path::PathBuf;

const FULL: &str = r#"
[global]
output_log_level = 3
file_log_level = 6
log_file = "modpush.log"

[git]
program = "/usr/local/bin/git"
push = false

[discovery]
manifest = ".gitmodules"
include_root = false

[session]
pause_on_exit = false
shell = "pwsh"
"#;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_full() {
    let config = Config::parse(FULL).unwrap();
    insta::assert_debug_snapshot!(config.format_options(), @r#"
    [
        "discovery.include_root  = false",
        "discovery.manifest      = .gitmodules",
        "git.program             = /usr/local/bin/git",
        "git.push                = false",
        "global.file_log_level   = 6",
        "global.log_file         = modpush.log",
        "global.output_log_level = 3",
        "session.pause_on_exit   = false",
        "session.shell           = pwsh",
    ]
    "#);
}

#[test]
fn config_parse_partial_keeps_defaults() {
    let config = Config::parse("[git]\npush = false\n").unwrap();

    assert!(!config.git.push);
    assert_eq!(config.git.program, "git");
    assert_eq!(config.discovery.manifest, ".gitmodules");
    assert!(!config.discovery.include_root);
    assert!(config.session.pause_on_exit);
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
}

#[test]
fn config_parse_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

#[test]
fn config_parse_rejects_empty_manifest() {
    let err = Config::parse("[discovery]\nmanifest = \"\"\n").unwrap_err();
    assert!(format!("{err:#}").contains("manifest"));
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_layers_root_file_then_explicit_file_then_cli() {
    let temp = tempfile::tempdir().unwrap();
    let root_file = temp.path().join(CONFIG_FILE_NAME);
    let extra_file = temp.path().join("extra.toml");
    fs::write(&root_file, "[git]\npush = false\nprogram = \"git\"\n").unwrap();
    fs::write(&extra_file, "[git]\nprogram = \"git2\"\n").unwrap();

    let cli = Cli::try_parse_from(["modpush", "--no-pause", "-l", "4", "-s", "git.push=true"])
        .unwrap();

    let config = ConfigLoader::new()
        .add_toml_file_optional(&root_file)
        .add_toml_file(&extra_file)
        .set_all(cli.global.to_config_overrides())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.git.program, "git2");
    assert!(config.git.push);
    assert!(!config.session.pause_on_exit);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
}

#[test]
fn config_missing_root_file_is_fine() {
    let temp = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(temp.path().join(CONFIG_FILE_NAME));

    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn config_missing_explicit_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(temp.path().join("absent.toml"))
        .build();

    assert!(result.is_err());
}

#[test]
fn config_log_file_from_cli() {
    let cli = Cli::try_parse_from(["modpush", "--log-file", "out/run.log"]).unwrap();

    let config = ConfigLoader::new()
        .set_all(cli.global.to_config_overrides())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.log_file, Some(PathBuf::from("out/run.log")));
}
