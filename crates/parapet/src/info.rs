// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Creation-site metadata and lifecycle status. Diagnostic only: nothing
//! here influences container behavior beyond the dead-state gate.

use core::panic::Location;

/// Where and under what name a stack was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackInfo {
    name: &'static str,
    file: &'static str,
    line: u32,
    column: u32,
}

impl StackInfo {
    /// Captures the caller's source location together with a display
    /// name.
    #[track_caller]
    pub fn capture(name: &'static str) -> Self {
        let location = Location::caller();
        Self {
            name,
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Display name given at creation.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Source file of the creation site.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the creation site.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source column of the creation site.
    pub fn column(&self) -> u32 {
        self.column
    }
}

/// Lifecycle status of a stack.
///
/// `Dead` is terminal: destruction sets it in a single assignment and no
/// later operation may revive the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum Status {
    /// Declared but never constructed. Not producible through the safe
    /// API; exists so reports over raw handles can name the state.
    Uninitialized,
    /// Constructed and usable.
    Active,
    /// Destructed; every further operation is refused.
    Dead,
}

impl Status {
    /// Human-readable name for reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Active => "active",
            Self::Dead => "dead",
        }
    }
}
