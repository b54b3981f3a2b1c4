// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Default command: report and commit every module.

use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::git::backend::ShellRunner;
use crate::session::{SessionOptions, process_modules};
use crate::utility::console::{Console, pause};

use super::list::plan_modules;

/// Main handler for the sweep over `root` and its modules.
///
/// # Errors
///
/// Returns an error if git is not found, cannot be started for a status,
/// commit or push, or if the terminal fails.
pub fn run_sweep_command(root: &Path, config: &Config) -> Result<()> {
    let runner = ShellRunner::locate(&config.git.program)?;
    let modules = plan_modules(&runner, root, config)?;
    info!(root = %root.display(), modules = modules.len(), "plan ready");

    let options = SessionOptions::from_config(config);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let mut console = Console::new(io::stdout().lock());

    process_modules(&runner, &modules, &options, &mut input, &mut console)?;

    if config.session.pause_on_exit {
        pause(&mut console, &mut input, interactive)?;
    }
    Ok(())
}
