// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Rolling byte-range checksum shared by the struct and payload checks.
//!
//! `h = h * 33 + byte`, seeded with [`CHECKSUM_SEED`]. The caller selects
//! the byte range; the algorithm never differs between uses. This is a
//! corruption detector, not a cryptographic hash: it only has to make an
//! accidental stray write visible, cheaply and deterministically.

use crate::config::CHECKSUM_SEED;

/// Incremental accumulator over multiple byte ranges.
#[derive(Debug, Clone, Copy)]
pub struct Checksum {
    state: u64,
}

impl Checksum {
    /// Starts a fresh accumulation at the seed.
    pub fn new() -> Self {
        Self {
            state: CHECKSUM_SEED,
        }
    }

    /// Folds a byte slice into the running state.
    pub fn update(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_mul(33).wrapping_add(u64::from(*byte));
        }
    }

    /// Folds a `u64` (little-endian bytes) into the running state.
    pub fn update_u64(&mut self, value: u64) {
        self.update(&value.to_le_bytes());
    }

    /// Folds a `usize` into the running state, widened so the encoding is
    /// identical across pointer widths.
    pub fn update_usize(&mut self, value: usize) {
        self.update_u64(value as u64);
    }

    /// Returns the accumulated checksum.
    pub fn finish(self) -> u64 {
        self.state
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot checksum of a single byte range. An empty range yields the
/// seed itself, which doubles as the "no payload was ever hashed" marker.
pub fn checksum_bytes(bytes: &[u8]) -> u64 {
    let mut checksum = Checksum::new();
    checksum.update(bytes);
    checksum.finish()
}
