// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process management.
//!
//! ```text
//!    core
//!     |
//!     v
//!  process
//!     |
//!  ProcessBuilder --> run_lines(callback) --> ProcessOutput
//! ```

pub mod process;
