// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Probe fakes for exercising the validate-before-dereference paths
//! without real broken mappings.

use parapet_probe::MemProbe;

/// Probe that accepts reads but rejects every write probe, making any
/// payload block look unreachable while handles stay inspectable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnlyProbe;

impl MemProbe for ReadOnlyProbe {
    fn can_read(&self, _ptr: *const u8, _len: usize) -> bool {
        true
    }

    fn can_write(&self, _ptr: *const u8, _len: usize) -> bool {
        false
    }
}

/// Probe that rejects everything, making even the handle itself look
/// unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllProbe;

impl MemProbe for DenyAllProbe {
    fn can_read(&self, _ptr: *const u8, _len: usize) -> bool {
        false
    }

    fn can_write(&self, _ptr: *const u8, _len: usize) -> bool {
        false
    }
}
