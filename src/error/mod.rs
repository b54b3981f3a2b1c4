// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          ModError (~16 bytes)
//!                 |
//!   +---------+---+------+------+
//!   |         |          |      |
//!   v         v          v      v
//! Process  Discovery   Config   Io
//!   Box       Box        Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Process    ExecutableNotFound, SpawnFailed, MissingProgram,
//!              UnterminatedQuote, OutputError
//!   Discovery  RootNotFound, NotADirectory
//!   Config     InvalidValue
//!
//! All variants boxed => ModError stays small.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModError`].
pub type ModResult<T> = std::result::Result<T, ModError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum ModError {
    /// External program could not be run.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Module discovery failed.
    #[error("discovery error: {0}")]
    Discovery(#[from] Box<DiscoveryError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModError {
                fn from(err: $error) -> Self {
                    ModError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    DiscoveryError => Discovery,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Command line did not name a program.
    #[error("no program given")]
    MissingProgram,

    /// Command line has an unbalanced quote.
    #[error("unterminated quote in '{line}'")]
    UnterminatedQuote { line: String },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Discovery Errors ---

/// Module discovery errors.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Root directory does not exist.
    #[error("root directory not found: {path}")]
    RootNotFound { path: String },

    /// Root path exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
