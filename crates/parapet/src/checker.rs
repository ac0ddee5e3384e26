// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Integrity verification.
//!
//! Checks are ordered so that no field is read before the memory holding
//! it has been confirmed reachable: handle first, then the struct fields,
//! and the payload block only once the struct metadata describing it is
//! trusted. Within a stage every check runs and the faults are OR-ed;
//! nothing short-circuits except the hard gates (absent handle,
//! unreachable handle, dead instance).

use core::ptr::NonNull;

use parapet_probe::MemProbe;

use crate::checksum;
use crate::config::{CHECKSUM_SEED, STRUCT_CANARY_LEFT, STRUCT_CANARY_RIGHT};
use crate::element::Element;
use crate::fault::Faults;
use crate::info::Status;
use crate::stack::Stack;

/// Verifies a possibly-absent, possibly-wild stack handle.
///
/// This is the full validate-before-dereference path: an absent handle
/// reports [`Faults::NULL`], a handle whose own memory fails the probe
/// reports [`Faults::INVALID_HANDLE`], and only then are the fields
/// themselves inspected. [`Stack::verify`] routes through here so the
/// probe discipline also covers the struct region of live containers.
pub fn verify_handle<T: Element>(
    handle: Option<NonNull<Stack<T>>>,
    probe: &dyn MemProbe,
) -> Faults {
    let Some(handle) = handle else {
        return Faults::NULL;
    };

    if !probe.can_read(handle.as_ptr() as *const u8, size_of::<Stack<T>>()) {
        return Faults::INVALID_HANDLE;
    }

    // SAFETY: the probe confirmed the handle's region is readable, and
    // callers hand in handles derived from live references or probed
    // allocations.
    let stack = unsafe { handle.as_ref() };
    verify_fields(stack, probe)
}

/// Verifies the fields of a reachable stack.
pub(crate) fn verify_fields<T: Element>(stack: &Stack<T>, probe: &dyn MemProbe) -> Faults {
    // A dead instance is not further diagnosed; its fields mean nothing.
    if stack.status() == Status::Dead {
        return Faults::DEAD;
    }

    let mut faults = Faults::empty();

    // Independent, combinable structure checks.
    if stack.buffer().is_none() && stack.capacity() != 0 {
        faults |= Faults::DATA_NULL_MISMATCH;
    }
    if stack.size() > stack.capacity() {
        faults |= Faults::SIZE_EXCEEDS_CAPACITY;
    }

    let (left, right) = stack.struct_canaries();
    if left != STRUCT_CANARY_LEFT {
        faults |= Faults::STRUCT_CANARY_LEFT;
    }
    if right != STRUCT_CANARY_RIGHT {
        faults |= Faults::STRUCT_CANARY_RIGHT;
    }

    if stack.stored_struct_checksum() != stack.compute_struct_checksum() {
        faults |= Faults::STRUCT_CHECKSUM;
    }

    // Payload trust gate: the block is dereferenced only if the struct
    // metadata describing it checks out and the probe accepts the region.
    let region_ok = match stack.buffer() {
        Some(buffer) => {
            let ok = probe.can_write(buffer.block_ptr(), buffer.block_len());
            if !ok {
                faults |= Faults::DATA_REGION;
            }
            ok
        }
        None => false,
    };

    if faults.contains(Faults::STRUCT_CHECKSUM) || !region_ok {
        // The stored data checksum exists (differs from the bare seed)
        // but cannot be corroborated: report it suspect.
        if stack.stored_data_checksum() != CHECKSUM_SEED {
            faults |= Faults::DATA_CHECKSUM;
        }
        return faults;
    }

    let buffer = stack
        .buffer()
        .expect("infallible: region_ok is only true for a present buffer");

    let (left_ok, right_ok) = buffer.check_guards();
    if !left_ok {
        faults |= Faults::DATA_CANARY_LEFT;
    }
    if !right_ok {
        faults |= Faults::DATA_CANARY_RIGHT;
    }

    if stack.stored_data_checksum() != checksum::checksum_bytes(buffer.payload_bytes()) {
        faults |= Faults::DATA_CHECKSUM;
    }

    faults
}
