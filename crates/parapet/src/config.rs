// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed configuration constants of the integrity model.
//!
//! Every sentinel here is a reserved value that must never appear in
//! legitimate container state; detection quality degrades to chance if a
//! stray write happens to reproduce one of them.

/// Sentinel bracketing the low end of a [`Stack`](crate::Stack) struct.
pub const STRUCT_CANARY_LEFT: u64 = 0xDEAD_BEEF_DEAD_BEEF;

/// Sentinel bracketing the high end of a [`Stack`](crate::Stack) struct.
pub const STRUCT_CANARY_RIGHT: u64 = 0xFACE_FEED_FACE_FEED;

/// Guard word stamped immediately before the payload of a
/// [`GuardedBuffer`](crate::GuardedBuffer). Distinct from the struct
/// canaries so a dump tells the two regions apart.
pub const DATA_GUARD_LEFT: u64 = 0xCAFE_BABE_CAFE_BABE;

/// Guard word stamped immediately after the payload of a
/// [`GuardedBuffer`](crate::GuardedBuffer).
pub const DATA_GUARD_RIGHT: u64 = 0xF00D_FEED_F00D_FEED;

/// Seed of the rolling checksum. Non-zero so a never-initialized or
/// all-zero region still hashes to a distinguishable value.
pub const CHECKSUM_SEED: u64 = 0xDEFE_C8ED_BAAD_BEEF;

/// Byte repeated to the element width to form each poison value.
pub const POISON_BYTE: u8 = 0xBD;

/// Smallest non-zero capacity the growth policy will produce.
pub const MIN_CAPACITY: usize = 10;
