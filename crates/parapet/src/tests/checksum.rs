// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::checksum::{checksum_bytes, Checksum};
use crate::config::CHECKSUM_SEED;

#[test]
fn test_empty_range_yields_seed() {
    assert_eq!(checksum_bytes(&[]), CHECKSUM_SEED);
}

#[test]
fn test_single_byte_follows_rolling_rule() {
    let expected = CHECKSUM_SEED.wrapping_mul(33).wrapping_add(7);
    assert_eq!(checksum_bytes(&[7]), expected);
}

#[test]
fn test_two_bytes_follow_rolling_rule() {
    let expected = CHECKSUM_SEED
        .wrapping_mul(33)
        .wrapping_add(0xAB)
        .wrapping_mul(33)
        .wrapping_add(0xCD);
    assert_eq!(checksum_bytes(&[0xAB, 0xCD]), expected);
}

#[test]
fn test_deterministic() {
    let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(checksum_bytes(&bytes), checksum_bytes(&bytes));
}

#[test]
fn test_last_byte_change_is_visible() {
    let mut bytes = [0u8; 32];
    let before = checksum_bytes(&bytes);
    bytes[31] ^= 0x01;
    assert_ne!(checksum_bytes(&bytes), before);
}

#[test]
fn test_incremental_matches_one_shot() {
    let left = [10u8, 20, 30];
    let right = [40u8, 50];
    let joined = [10u8, 20, 30, 40, 50];

    let mut checksum = Checksum::new();
    checksum.update(&left);
    checksum.update(&right);

    assert_eq!(checksum.finish(), checksum_bytes(&joined));
}

#[test]
fn test_update_u64_matches_le_bytes() {
    let value = 0x0123_4567_89AB_CDEFu64;

    let mut via_u64 = Checksum::new();
    via_u64.update_u64(value);

    let mut via_bytes = Checksum::new();
    via_bytes.update(&value.to_le_bytes());

    assert_eq!(via_u64.finish(), via_bytes.finish());
}

#[test]
fn test_all_zero_region_is_distinguishable_from_empty() {
    assert_ne!(checksum_bytes(&[0u8; 16]), checksum_bytes(&[]));
}
