// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogContext, LogLevel};

#[test]
fn test_log_context_clear_step() {
    let mut ctx = LogContext::with_module("libs/core");
    ctx.set_step("commit");

    let results: Vec<_> = [("with_step", ctx.prefix()), {
        ctx.clear_step();
        ("after_clear", ctx.prefix())
    }]
    .into_iter()
    .collect();

    insta::assert_debug_snapshot!(results, @r#"
    [
        (
            "with_step",
            "[libs/core/commit] ",
        ),
        (
            "after_clear",
            "[libs/core] ",
        ),
    ]
    "#);
    assert!(ctx.step().is_none(), "step should be None after clear_step");
}

#[test]
fn test_log_context_prefix_empty() {
    assert_eq!(LogContext::default().prefix(), "");
    assert_eq!(LogContext::with_module("a").module(), Some("a"));
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(
        filters,
        ["off", "error", "warn", "info", "debug", "trace", "trace"]
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
