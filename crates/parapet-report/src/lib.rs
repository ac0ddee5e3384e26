// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! parapet_report - Diagnostic rendering and the process-wide log sink
//!
//! The container core only assembles structured reports; this crate turns
//! them into human-readable dumps and owns the logging lifecycle: an
//! append-mode log file plus a colorized console mirror, opened once per
//! process and flushed when the returned guard drops.

#[cfg(test)]
mod tests;

mod reporter;
mod sink;

pub use reporter::{render_raw, render_report, LogReporter};
pub use sink::{init, LogGuard, LogInitError};
