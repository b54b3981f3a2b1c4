// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modpush.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modpush.toml (root directory)
//! 3. --config FILE
//! 4. MODPUSH_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODPUSH_GIT__PROGRAM=git2               → git.program = "git2"
//! MODPUSH_DISCOVERY__INCLUDE_ROOT=true    → discovery.include_root = true
//! MODPUSH_SESSION__PAUSE_ON_EXIT=false    → session.pause_on_exit = false
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

use loader::ConfigLoader;
use types::{DiscoveryConfig, GitConfig, GlobalConfig, SessionConfig, require_non_empty};

/// File name looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "modpush.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "MODPUSH";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git executable.
    pub git: GitConfig,
    /// Module discovery.
    pub discovery: DiscoveryConfig,
    /// Interactive session.
    pub session: SessionConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modpush::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modpush.toml")
    ///     .with_env_prefix("MODPUSH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that the rest of the program relies on.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if `git.program` or
    /// `discovery.manifest` is empty.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("git", "program", &self.git.program)?;
        require_non_empty("discovery", "manifest", &self.discovery.manifest)?;
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_git_options(&mut options);
        self.format_discovery_options(&mut options);
        self.format_session_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.program".into(), self.git.program.clone());
        options.insert("git.push".into(), self.git.push.to_string());
    }

    fn format_discovery_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "discovery.manifest".into(),
            self.discovery.manifest.clone(),
        );
        options.insert(
            "discovery.include_root".into(),
            self.discovery.include_root.to_string(),
        );
    }

    fn format_session_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "session.pause_on_exit".into(),
            self.session.pause_on_exit.to_string(),
        );
        options.insert("session.shell".into(), self.session.shell.clone());
    }
}
