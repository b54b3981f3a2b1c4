// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git layer.
//!
//! ```text
//!   discovery.rs       status.rs
//!   ModuleList         report_status
//!         \              /
//!          v            v
//!       cmd.rs (typed git commands)
//!                |
//!                v
//!      ,--------------------,
//!      | backend::GitRunner |
//!      '---------+----------'
//!                |
//!                v
//!           ShellRunner --> git CLI
//! ```

pub mod backend;
pub mod cmd;
pub mod discovery;
pub mod status;

#[cfg(test)]
pub(crate) mod test_utils;
