// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for modpush.

use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{ModResult, Result};
use crate::git::backend::{GitRunner, ShellRunner};
use crate::git::discovery::ModuleList;

/// Discover the modules under `root` and order them for processing.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started to read a manifest.
pub fn plan_modules<R: GitRunner + ?Sized>(
    runner: &R,
    root: &Path,
    config: &Config,
) -> ModResult<ModuleList> {
    let modules = ModuleList::discover(runner, root, &config.discovery.manifest)?;
    Ok(modules.plan(root, config.discovery.include_root))
}

/// Write the plan, one path per line.
///
/// # Errors
///
/// Returns the write error, if any.
pub fn write_plan<W: Write>(modules: &ModuleList, out: &mut W) -> io::Result<()> {
    if modules.is_empty() {
        writeln!(out, "No modules found")?;
    }
    for module in modules {
        writeln!(out, "{}", module.display())?;
    }
    out.flush()
}

/// Main handler for `--list`.
///
/// # Errors
///
/// Returns an error if git is not found or stdout cannot be written.
pub fn run_list_command(root: &Path, config: &Config) -> Result<()> {
    let runner = ShellRunner::locate(&config.git.program)?;
    let modules = plan_modules(&runner, root, config)?;
    write_plan(&modules, &mut io::stdout().lock())?;
    Ok(())
}
