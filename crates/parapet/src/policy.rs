// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity growth and shrink policy.
//!
//! Growth doubles (from [`MIN_CAPACITY`]). Shrinking waits until the
//! stack is under a quarter full and then lands exactly half full, so no
//! adjacent push or pop can immediately trigger another resize; the
//! `capacity > 2 * MIN_CAPACITY` guard stops all shrinking near the
//! minimum.

use crate::config::MIN_CAPACITY;

/// Target capacity when a push finds the stack full.
pub fn grow_target(capacity: usize) -> usize {
    if capacity == 0 {
        MIN_CAPACITY
    } else {
        capacity.saturating_mul(2)
    }
}

/// Target capacity after a pop, if the occupancy dropped far enough to
/// warrant shrinking. `None` means keep the current capacity.
pub fn shrink_target(size: usize, capacity: usize) -> Option<usize> {
    if size.saturating_mul(4) < capacity && capacity > 2 * MIN_CAPACITY {
        Some(size.saturating_mul(2).max(MIN_CAPACITY))
    } else {
        None
    }
}
