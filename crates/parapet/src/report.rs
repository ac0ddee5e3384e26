// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Structured diagnostic reports and the sink they are delivered to.
//!
//! The container never formats or prints anything itself: it assembles a
//! [`StackReport`] and hands it to an injected [`DiagnosticSink`].
//! Rendering, colors, timestamps and file output are the sink's problem
//! (see the `parapet-report` crate).

use crate::fault::Faults;
use crate::info::Status;

/// Severity of a free-form diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational.
    Info,
    /// Something degraded but the operation carried on.
    Warning,
    /// An operation was refused or left the container unhealthy.
    Error,
}

/// One payload slot as seen at dump time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    /// Slot index.
    pub index: usize,
    /// Whether the slot is below the live size.
    pub occupied: bool,
    /// Whether the slot holds the poison constant.
    pub poisoned: bool,
    /// Rendered element value.
    pub value: String,
}

/// Stored/recomputed pair for one checksum.
///
/// `computed` is `None` when recomputation was not safe (payload
/// unreachable or untrusted); the stored value is then suspect rather
/// than confirmed bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    /// Checksum as stored in the container.
    pub stored: u64,
    /// Freshly recomputed checksum, when obtainable.
    pub computed: Option<u64>,
}

/// Everything a reporter needs to render one container snapshot.
#[derive(Debug, Clone)]
pub struct StackReport {
    /// Verification verdict at dump time.
    pub faults: Faults,
    /// Display name given at creation.
    pub name: &'static str,
    /// Creation-site file.
    pub file: &'static str,
    /// Creation-site line.
    pub line: u32,
    /// Lifecycle status.
    pub status: Status,
    /// Live element count.
    pub size: usize,
    /// Allocated element count.
    pub capacity: usize,
    /// Base address of the guarded block, when one exists.
    pub buffer_addr: Option<usize>,
    /// Guard-word verdicts `(left, right)`; `None` when the block was not
    /// safe to read.
    pub guards: Option<(bool, bool)>,
    /// Struct checksum pair.
    pub struct_checksum: ChecksumReport,
    /// Data checksum pair.
    pub data_checksum: ChecksumReport,
    /// Interpreted slot listing; `None` when the payload was unreachable
    /// or not trustworthy.
    pub slots: Option<Vec<SlotReport>>,
    /// Raw block bytes, offered instead of `slots` when the struct is
    /// untrusted but the block still probes readable (and unverified
    /// printing is permitted).
    pub raw_block: Option<Vec<u8>>,
}

/// Rendering choices for a dump.
#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
    /// Whether regions whose checksums could not be verified may still be
    /// printed as raw bytes. On by default; switch off for environments
    /// where even reading suspect memory through a validity-probed
    /// pointer is unwanted.
    pub print_unverified: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            print_unverified: true,
        }
    }
}

/// Receiver of diagnostic output.
///
/// Injected into the container at construction; implementations must be
/// best-effort and non-panicking, since they run exactly when the
/// container is in its worst state.
pub trait DiagnosticSink {
    /// Emits a free-form message.
    fn message(&self, severity: Severity, text: &str);

    /// Emits a structured container snapshot.
    fn report(&self, report: &StackReport);
}

/// Sink that discards everything. Default for containers constructed
/// without diagnostics wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn message(&self, _severity: Severity, _text: &str) {}

    fn report(&self, _report: &StackReport) {}
}
