// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for buffer allocation.
use thiserror::Error;

/// Errors from [`GuardedBuffer`](crate::GuardedBuffer) allocation.
///
/// All of them leave any pre-existing buffer untouched; the container
/// surfaces them as the `OP_FAILED` fault and keeps its prior state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    /// A guarded buffer always holds at least one slot; capacity zero is
    /// represented by having no buffer at all.
    #[error("guarded buffer capacity must be non-zero")]
    ZeroCapacity,

    /// The requested capacity does not fit in an allocatable block.
    #[error("guarded block size overflows for capacity {capacity}")]
    Overflow {
        /// Requested element capacity.
        capacity: usize,
    },

    /// The underlying allocator refused the block.
    #[error("allocation of {bytes} byte guarded block failed")]
    AllocationFailed {
        /// Size of the refused block in bytes.
        bytes: usize,
    },
}
