// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module discovery.
//!
//! ```text
//! root/                      .gitmodules: libs/core, tools
//!   libs/core/               .gitmodules: vendor/zlib
//!     vendor/zlib/           (no manifest, not expanded)
//!   tools/                   (no manifest, not expanded)
//!
//! visit order:  libs/core, tools, libs/core/vendor/zlib
//! module list:  libs/core/vendor/zlib, tools, libs/core   (+ root when planned)
//! ```
//!
//! Breadth-first from the root. A directory without a manifest is a leaf.
//! The visit order is reversed so nested modules are committed before the
//! repositories that reference them.

use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::error::{DiscoveryError, ModResult};

use super::backend::GitRunner;
use super::cmd;

/// Ordered list of module directories, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleList {
    modules: Vec<PathBuf>,
}

impl ModuleList {
    /// Discover every module declared under `root`, directly or through
    /// nested manifests.
    ///
    /// The root itself is never part of the result; see [`ModuleList::plan`].
    /// A declared path is listed once even if several manifests name it.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be started to read a manifest.
    pub fn discover<R: GitRunner + ?Sized>(
        runner: &R,
        root: &Path,
        manifest: &str,
    ) -> ModResult<Self> {
        let mut modules = Vec::new();
        let mut seen = BTreeSet::from([root.to_path_buf()]);
        let mut pending = VecDeque::from([root.to_path_buf()]);

        while let Some(dir) = pending.pop_front() {
            if !dir.join(manifest).is_file() {
                trace!(dir = %dir.display(), "no manifest");
                continue;
            }

            let mut declared = Vec::new();
            cmd::list_manifest(runner, &dir, manifest, &mut |line| {
                if let Some(path) = parse_manifest_line(line) {
                    declared.push(dir.join(path));
                }
            })?;
            debug!(dir = %dir.display(), count = declared.len(), "manifest read");

            for path in declared {
                if !seen.insert(path.clone()) {
                    continue;
                }
                if !path.is_dir() {
                    warn!(path = %path.display(), "declared module directory does not exist");
                }
                pending.push_back(path.clone());
                modules.push(path);
            }
        }

        modules.reverse();
        Ok(Self { modules })
    }

    /// Build the processing plan: the discovered modules, followed by the
    /// root when `include_root` is set.
    #[must_use]
    pub fn plan(mut self, root: &Path, include_root: bool) -> Self {
        if include_root && !self.modules.iter().any(|m| m == root) {
            self.modules.push(root.to_path_buf());
        }
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.modules.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.modules
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.modules
    }
}

impl<'a> IntoIterator for &'a ModuleList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}

impl From<Vec<PathBuf>> for ModuleList {
    fn from(modules: Vec<PathBuf>) -> Self {
        Self { modules }
    }
}

/// Extract the relative path from a `git config -l` line such as
/// `submodule.libs/core.path=libs/core`.
///
/// Returns `None` for keys not ending in `.path` and for empty values.
#[must_use]
pub fn parse_manifest_line(line: &str) -> Option<&str> {
    let (key, value) = line.split_once('=')?;
    (key.ends_with(".path") && !value.is_empty()).then_some(value)
}

/// Resolve the directory to start from: `dir` or the current directory,
/// made absolute.
///
/// # Errors
///
/// Returns `DiscoveryError::RootNotFound` if the directory does not exist
/// and `DiscoveryError::NotADirectory` if it names a file.
pub fn resolve_root(dir: Option<&Path>) -> ModResult<PathBuf> {
    let candidate = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let root = candidate
        .canonicalize()
        .map_err(|_| DiscoveryError::RootNotFound {
            path: candidate.display().to_string(),
        })?;

    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: root.display().to_string(),
        }
        .into());
    }

    Ok(root)
}
