// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! console
//!   Console<W>   line/blank/prompt writer, first error kept
//!   pause()      "Press any key to continue..."
//! ```

pub mod console;
