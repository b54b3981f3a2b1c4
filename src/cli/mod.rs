// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modpush using clap derive.
//!
//! ```text
//! modpush [global options] [--list] [DIR]
//!
//! DIR      root repository (default: current directory)
//! --list   print the processing plan and exit
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;
use std::path::PathBuf;

/// Nested Repository Commit Tool
///
/// Walks a repository and its nested submodules, innermost first, shows the
/// changes of each and lets you commit and push them.
#[derive(Debug, Parser)]
#[command(
    name = "modpush",
    author,
    version,
    about = "Nested Repository Commit Tool",
    long_about = "modpush Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Walks a repository and its nested submodules, innermost first,\n\
                  shows untracked files and diffs of each, and asks what to do\n\
                  with every module that has changes:\n\n  \
                  c <msg>   commit all tracked changes and push\n  \
                  a <msg>   add untracked files too, then commit and push\n  \
                  r         refresh the status\n  \
                  anything  run it as a command in the module directory\n\n\
                  Only declared submodules are processed; the root itself is\n\
                  included with --set discovery.include_root=true.",
    after_help = "CONFIGURATION:\n\n\
                  modpush reads `modpush.toml` from the root directory if present,\n\
                  then the file given with --config, then MODPUSH_* environment\n\
                  variables (MODPUSH_GIT__PROGRAM=...), then --set and the other\n\
                  flags. Later sources override earlier ones."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Prints the modules that would be processed, innermost first, and exits.
    #[arg(long)]
    pub list: bool,

    /// Root repository directory; defaults to the current directory.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
