// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Report rendering.
//!
//! Pure formatting of [`StackReport`] snapshots into the dump layout, and
//! a [`DiagnosticSink`] implementation that emits the result through
//! `tracing` (healthy dumps at info, anything faulted at error).

use std::fmt::Write;

use parapet::{ChecksumReport, DiagnosticSink, Faults, Severity, StackReport};

/// Sink that renders reports and routes them into the `tracing`
/// pipeline installed by [`init`](crate::init).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl DiagnosticSink for LogReporter {
    fn message(&self, severity: Severity, text: &str) {
        match severity {
            Severity::Info => tracing::info!("{text}"),
            Severity::Warning => tracing::warn!("{text}"),
            Severity::Error => tracing::error!("{text}"),
        }
    }

    fn report(&self, report: &StackReport) {
        let rendered = render_report(report);
        if report.faults.is_healthy() {
            tracing::info!("{rendered}");
        } else {
            tracing::error!("{rendered}");
        }
    }
}

/// Renders one container snapshot as a multi-line dump.
pub fn render_report(report: &StackReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "stack dump: \"{}\" (created at {}:{})",
        report.name, report.file, report.line
    );
    let _ = writeln!(out, "      status: {}", report.status.as_str());
    let _ = writeln!(out, "      faults: {}", report.faults);
    let _ = writeln!(out, "      {}/{} elements", report.size, report.capacity);
    match report.buffer_addr {
        Some(addr) => {
            let _ = writeln!(out, "      buffer at {addr:#x}");
        }
        None => {
            let _ = writeln!(out, "      buffer absent");
        }
    }

    if report.faults.contains(Faults::DEAD) {
        let _ = writeln!(out, "      (BAD)  stack was already destructed");
        return out;
    }

    match report.guards {
        Some((true, true)) => {
            let _ = writeln!(out, "      buffer guards intact");
        }
        Some((left, right)) => {
            if !left {
                let _ = writeln!(out, "      (BAD)  left buffer guard overwritten");
            }
            if !right {
                let _ = writeln!(out, "      (BAD)  right buffer guard overwritten");
            }
        }
        None => {
            if report.buffer_addr.is_some() {
                let _ = writeln!(out, "      (BAD)  payload region unreachable, guards unchecked");
            }
        }
    }

    render_checksum(&mut out, "struct", &report.struct_checksum);
    render_checksum(&mut out, "data", &report.data_checksum);

    if let Some(slots) = &report.slots {
        let _ = writeln!(out);
        for slot in slots {
            let marker = if slot.occupied { '*' } else { ' ' };
            let poison = if slot.poisoned { " (POISON)" } else { "" };
            let _ = writeln!(out, "    {marker}[{}] {}{poison}", slot.index, slot.value);
        }
    } else if let Some(raw) = &report.raw_block {
        let _ = writeln!(out, "      raw block dump ({} bytes):", raw.len());
        out.push_str(&render_raw(raw));
    }

    out
}

/// Renders raw bytes as indented hex rows of sixteen.
pub fn render_raw(bytes: &[u8]) -> String {
    let mut out = String::new();
    for row in bytes.chunks(16) {
        out.push_str("     ");
        for byte in row {
            let _ = write!(out, " {byte:02x}");
        }
        out.push('\n');
    }
    out
}

fn render_checksum(out: &mut String, label: &str, checksum: &ChecksumReport) {
    match checksum.computed {
        Some(computed) if computed == checksum.stored => {
            let _ = writeln!(
                out,
                "      {label} checksum stored {:#018x} computed {computed:#018x}",
                checksum.stored
            );
        }
        Some(computed) => {
            let _ = writeln!(
                out,
                "      (BAD)  {label} checksum stored {:#018x} computed {computed:#018x}",
                checksum.stored
            );
        }
        None => {
            let _ = writeln!(
                out,
                "      {label} checksum stored {:#018x} (not recomputed)",
                checksum.stored
            );
        }
    }
}
