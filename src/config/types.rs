// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for modpush.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, GitConfig, DiscoveryConfig, SessionConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Git executable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Program used for every git invocation.
    pub program: String,
    /// Run `git push` after a commit.
    pub push: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            push: true,
        }
    }
}

/// Module discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Name of the manifest file declaring nested modules.
    pub manifest: String,
    /// Also process the root directory, after all nested modules.
    pub include_root: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            manifest: ".gitmodules".to_string(),
            include_root: false,
        }
    }
}

/// Interactive session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Wait for a key press before exiting.
    pub pause_on_exit: bool,
    /// Shell suggested in the prompt for fixing things by hand.
    pub shell: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pause_on_exit: true,
            shell: default_shell(),
        }
    }
}

/// Platform shell named in the prompt.
#[must_use]
pub fn default_shell() -> String {
    if cfg!(windows) {
        "cmd".to_string()
    } else {
        std::env::var("SHELL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "sh".to_string())
    }
}

/// Reject values that would make every git invocation fail.
pub(super) fn require_non_empty(
    section: &str,
    key: &str,
    value: &str,
) -> std::result::Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
