// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Composable fault bitmask.
//!
//! Multiple simultaneous corruptions must all be visible at once, so the
//! checker reports a union of independently-detectable faults rather than
//! the first one it meets. `DEAD` is the single exception: a destructed
//! instance's fields are meaningless and it is reported alone.

use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Union of independently-detectable container faults.
    ///
    /// An empty set means fully healthy. Operation results carry this as
    /// their error type; callers branch on bits explicitly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Faults: u32 {
        /// The handle itself is absent.
        const NULL = 1 << 0;
        /// The handle's own memory region failed the validity probe; no
        /// field was read.
        const INVALID_HANDLE = 1 << 1;
        /// The instance was destructed; reported alone, all other state
        /// is meaningless.
        const DEAD = 1 << 2;
        /// Buffer absent although capacity is non-zero.
        const DATA_NULL_MISMATCH = 1 << 3;
        /// The payload block failed the validity probe.
        const DATA_REGION = 1 << 4;
        /// `size > capacity`.
        const SIZE_EXCEEDS_CAPACITY = 1 << 5;
        /// Left struct canary no longer matches its constant.
        const STRUCT_CANARY_LEFT = 1 << 8;
        /// Right struct canary no longer matches its constant.
        const STRUCT_CANARY_RIGHT = 1 << 9;
        /// Left buffer guard word no longer matches its constant.
        const DATA_CANARY_LEFT = 1 << 10;
        /// Right buffer guard word no longer matches its constant.
        const DATA_CANARY_RIGHT = 1 << 11;
        /// Stored struct checksum disagrees with recomputation.
        const STRUCT_CHECKSUM = 1 << 16;
        /// Stored data checksum disagrees with recomputation, or exists
        /// but could not be corroborated because the payload is not
        /// trustworthy (suspect, not confirmed).
        const DATA_CHECKSUM = 1 << 17;
        /// The requested operation is invalid in the current state
        /// (pop/top on empty, resize below the live size).
        const OP_INVALID = 1 << 24;
        /// The operation itself failed (allocation failure); prior state
        /// is intact.
        const OP_FAILED = 1 << 25;
    }
}

impl Faults {
    /// Whether no fault at all was detected.
    pub fn is_healthy(self) -> bool {
        self.is_empty()
    }
}

impl fmt::Display for Faults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("healthy");
        }

        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
