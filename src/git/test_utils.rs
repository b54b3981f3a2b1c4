// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted `GitRunner` for unit tests.
//!
//! Responses are keyed by directory and command line (`git diff --staged`).
//! Each call consumes the next scripted response; the last one repeats.
//! Unscripted commands produce no output.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::error::{ModResult, ProcessError};
use crate::git::backend::GitRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub(crate) dir: PathBuf,
    pub(crate) command: String,
}

#[derive(Debug, Default)]
pub(crate) struct FakeRunner {
    responses: RefCell<BTreeMap<(PathBuf, String), VecDeque<Vec<String>>>>,
    missing: BTreeSet<String>,
    calls: RefCell<Vec<Call>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue `lines` as the output of `command` run in `dir`.
    pub(crate) fn respond(self, dir: &Path, command: &str, lines: &[&str]) -> Self {
        self.responses
            .borrow_mut()
            .entry((dir.to_path_buf(), command.to_string()))
            .or_default()
            .push_back(lines.iter().map(ToString::to_string).collect());
        self
    }

    /// Make every spawn of `program` fail.
    pub(crate) fn missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.command.clone()).collect()
    }

    fn run(
        &self,
        cwd: &Path,
        program: &str,
        args: &[&str],
        on_line: &mut dyn FnMut(&str),
    ) -> ModResult<()> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");

        self.calls.borrow_mut().push(Call {
            dir: cwd.to_path_buf(),
            command: command.clone(),
        });

        if self.missing.contains(program) {
            return Err(ProcessError::SpawnFailed {
                command,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            }
            .into());
        }

        let lines = {
            let mut responses = self.responses.borrow_mut();
            match responses.get_mut(&(cwd.to_path_buf(), command)) {
                Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
                Some(queue) => queue.front().cloned().unwrap_or_default(),
                None => Vec::new(),
            }
        };

        for line in &lines {
            on_line(line);
        }
        Ok(())
    }
}

impl GitRunner for FakeRunner {
    fn git(&self, cwd: &Path, args: &[&str], on_line: &mut dyn FnMut(&str)) -> ModResult<()> {
        self.run(cwd, "git", args, on_line)
    }

    fn external(
        &self,
        cwd: &Path,
        program: &str,
        args: &[String],
        on_line: &mut dyn FnMut(&str),
    ) -> ModResult<()> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(cwd, program, &args, on_line)
    }
}
