// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive commit session.
//!
//! ```text
//! process_modules
//!   for module in plan:
//!     "Processing: <path>"
//!     report_status ---- clean ----> next module
//!          |
//!          v
//!     run_session
//!       ,-> prompt, read line
//!       |     a <msg>  --> add ., commit, push   --> Committed
//!       |     c <msg>  --> commit, push          --> Committed
//!       |     r        --> report_status --clean--> Clean
//!       |     other    --> passthrough (errors printed)
//!       |     EOF      --> InputClosed (remaining modules skipped)
//!       '-----'
//! ```

pub mod input;

use bon::Builder;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::config::types::default_shell;
use crate::error::{ModResult, ProcessError};
use crate::git::backend::GitRunner;
use crate::git::cmd;
use crate::git::discovery::ModuleList;
use crate::git::status::{ChangeStatus, report_status};
use crate::logging::LogContext;
use crate::utility::console::Console;

use input::{OperatorCommand, read_command, split_command_line};

/// Session behavior taken from configuration.
#[derive(Debug, Clone, Builder)]
pub struct SessionOptions {
    /// Push after every commit.
    #[builder(default = true)]
    push: bool,
    /// Shell named in the prompt.
    #[builder(into, default = default_shell())]
    shell: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SessionOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::builder()
            .push(config.git.push)
            .shell(config.session.shell.clone())
            .build()
    }

    #[must_use]
    pub const fn push(&self) -> bool {
        self.push
    }

    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }
}

/// How a session for one module ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// `a` or `c` ran commit (and push).
    Committed,
    /// A refresh found nothing left to commit.
    Clean,
    /// Operator input reached end of file.
    InputClosed,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Modules whose status was reported.
    pub processed: usize,
    /// Modules that needed a session.
    pub sessions: usize,
    /// Sessions that ended in a commit.
    pub committed: usize,
    /// Input closed before every module was processed.
    pub input_closed: bool,
}

/// Prompt shown before every operator command.
#[must_use]
pub fn prompt_text(status: ChangeStatus, options: &SessionOptions) -> String {
    let action = if options.push {
        "commit and push"
    } else {
        "commit"
    };
    let add = if status.untracked {
        ", \"a <msg>\" to also add untracked files"
    } else {
        ""
    };
    format!(
        "Use \"c <msg>\" to {action}{add}, r to refresh.\n\
         To fix issues use git as normal, or {} to enter a shell (exit to leave):",
        options.shell
    )
}

/// Report every module in `modules` and run a session for each one with
/// changes.
///
/// # Errors
///
/// Returns an error if git cannot be started for a status, commit or push,
/// or if the console or `input` fails.
pub fn process_modules<R, I, W>(
    runner: &R,
    modules: &ModuleList,
    options: &SessionOptions,
    input: &mut I,
    console: &mut Console<W>,
) -> ModResult<RunSummary>
where
    R: GitRunner + ?Sized,
    I: BufRead + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    for module in modules {
        console.line(format_args!("Processing: {}", module.display()));
        summary.processed += 1;

        let status = report_status(runner, module, console)?;
        if status.is_clean() {
            continue;
        }

        summary.sessions += 1;
        let outcome = run_session(runner, module, status, options, input, console)?;
        console.blank();

        match outcome {
            SessionOutcome::Committed => summary.committed += 1,
            SessionOutcome::Clean => {}
            SessionOutcome::InputClosed => {
                warn!(
                    remaining = modules.len() - summary.processed,
                    "input closed, skipping remaining modules"
                );
                summary.input_closed = true;
                break;
            }
        }
    }

    console.check()?;
    info!(?summary, "run complete");
    Ok(summary)
}

/// Prompt for commands in `dir` until it is committed, clean, or input ends.
///
/// `status` is the status already reported for `dir`.
///
/// # Errors
///
/// Returns an error if git cannot be started for add, commit, push or a
/// refresh. Passthrough failures are printed and do not end the session.
pub fn run_session<R, I, W>(
    runner: &R,
    dir: &Path,
    mut status: ChangeStatus,
    options: &SessionOptions,
    input: &mut I,
    console: &mut Console<W>,
) -> ModResult<SessionOutcome>
where
    R: GitRunner + ?Sized,
    I: BufRead + ?Sized,
    W: Write,
{
    let mut ctx = LogContext::with_module(dir.display().to_string());

    loop {
        console.line(prompt_text(status, options));
        console.flush();
        console.check()?;

        let Some(line) = read_command(input)? else {
            debug!("{}end of input", ctx.prefix());
            return Ok(SessionOutcome::InputClosed);
        };

        match OperatorCommand::parse(&line) {
            OperatorCommand::AddCommit(message) => {
                ctx.set_step("add");
                info!("{}staging all files", ctx.prefix());
                echo(console, |on_line| cmd::add_all(runner, dir, on_line))?;
                commit(runner, dir, &message, options, console, &mut ctx)?;
                return Ok(SessionOutcome::Committed);
            }
            OperatorCommand::Commit(message) => {
                commit(runner, dir, &message, options, console, &mut ctx)?;
                return Ok(SessionOutcome::Committed);
            }
            OperatorCommand::Refresh => {
                ctx.clear_step();
                status = report_status(runner, dir, console)?;
                if status.is_clean() {
                    info!("{}clean after refresh", ctx.prefix());
                    return Ok(SessionOutcome::Clean);
                }
            }
            OperatorCommand::Passthrough(line) => {
                ctx.set_step("run");
                if let Err(e) = passthrough(runner, dir, &line, console) {
                    warn!("{}{e}", ctx.prefix());
                    console.line(&e);
                    console.blank();
                    console.check()?;
                }
            }
        }
    }
}

fn commit<R, W>(
    runner: &R,
    dir: &Path,
    message: &str,
    options: &SessionOptions,
    console: &mut Console<W>,
    ctx: &mut LogContext,
) -> ModResult<()>
where
    R: GitRunner + ?Sized,
    W: Write,
{
    ctx.set_step("commit");
    info!("{}committing", ctx.prefix());
    echo(console, |on_line| cmd::commit_all(runner, dir, message, on_line))?;

    if options.push {
        ctx.set_step("push");
        info!("{}pushing", ctx.prefix());
        echo(console, |on_line| cmd::push(runner, dir, on_line))?;
    }
    Ok(())
}

fn passthrough<R, W>(
    runner: &R,
    dir: &Path,
    line: &str,
    console: &mut Console<W>,
) -> ModResult<()>
where
    R: GitRunner + ?Sized,
    W: Write,
{
    let words = split_command_line(line)?;
    let (program, args) = words.split_first().ok_or(ProcessError::MissingProgram)?;
    echo(console, |on_line| runner.external(dir, program, args, on_line))
}

/// Run a command echoing its output, followed by a blank line.
fn echo<W, F>(console: &mut Console<W>, run: F) -> ModResult<()>
where
    W: Write,
    F: FnOnce(&mut dyn FnMut(&str)) -> ModResult<()>,
{
    console.flush();
    run(&mut |line| console.line(line))?;
    console.blank();
    console.check()?;
    Ok(())
}
