// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-crate test support: a sink that records everything it receives,
//! for assertions on the diagnostic path.

use std::cell::RefCell;

use crate::report::{DiagnosticSink, Severity, StackReport};

#[derive(Debug, Default)]
pub struct CapturingSink {
    messages: RefCell<Vec<(Severity, String)>>,
    reports: RefCell<Vec<StackReport>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.borrow().clone()
    }

    pub fn report_count(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn last_report(&self) -> Option<StackReport> {
        self.reports.borrow().last().cloned()
    }
}

impl DiagnosticSink for CapturingSink {
    fn message(&self, severity: Severity, text: &str) {
        self.messages.borrow_mut().push((severity, text.to_owned()));
    }

    fn report(&self, report: &StackReport) {
        self.reports.borrow_mut().push(report.clone());
    }
}
