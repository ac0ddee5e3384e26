// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::config::MIN_CAPACITY;
use crate::policy::{grow_target, shrink_target};

// grow_target

#[test]
fn test_grow_from_empty_yields_minimum() {
    assert_eq!(grow_target(0), MIN_CAPACITY);
}

#[test]
fn test_grow_doubles() {
    assert_eq!(grow_target(MIN_CAPACITY), 2 * MIN_CAPACITY);
    assert_eq!(grow_target(20), 40);
    assert_eq!(grow_target(40), 80);
}

#[test]
fn test_grow_saturates_instead_of_overflowing() {
    assert_eq!(grow_target(usize::MAX), usize::MAX);
}

// shrink_target

#[test]
fn test_no_shrink_above_quarter_occupancy() {
    assert_eq!(shrink_target(10, 40), None);
    assert_eq!(shrink_target(19, 40), None);
    assert_eq!(shrink_target(40, 40), None);
}

#[test]
fn test_shrink_below_quarter_occupancy_lands_half_full() {
    assert_eq!(shrink_target(9, 40), Some(18));
    assert_eq!(shrink_target(20, 100), Some(40));
}

#[test]
fn test_shrink_never_goes_below_minimum() {
    assert_eq!(shrink_target(0, 40), Some(MIN_CAPACITY));
    assert_eq!(shrink_target(2, 100), Some(MIN_CAPACITY));
}

#[test]
fn test_hysteresis_guard_blocks_near_minimum() {
    // Under a quarter full, but the capacity is already at the guard.
    assert_eq!(shrink_target(4, 2 * MIN_CAPACITY), None);
    assert_eq!(shrink_target(0, 2 * MIN_CAPACITY), None);
    assert_eq!(shrink_target(4, 18), None);
}

#[test]
fn test_shrink_result_cannot_immediately_retrigger() {
    // A shrink lands exactly half full; popping once more from there must
    // not warrant another shrink.
    let target = shrink_target(9, 40).expect("Failed to shrink_target(..)");
    assert_eq!(shrink_target(8, target), None);
}
