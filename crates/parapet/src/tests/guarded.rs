// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::checksum::checksum_bytes;
use crate::element::Element;
use crate::error::AllocError;
use crate::guarded::GuardedBuffer;

#[test]
fn test_allocate_zero_capacity_is_rejected() {
    let result = GuardedBuffer::<i32>::allocate(0);
    assert_eq!(result.err(), Some(AllocError::ZeroCapacity));
}

#[test]
fn test_allocate_overflowing_capacity_is_rejected() {
    let result = GuardedBuffer::<i64>::allocate(usize::MAX / 2);
    assert!(matches!(result, Err(AllocError::Overflow { .. })));
}

#[test]
fn test_allocate_poisons_every_slot() {
    let buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");

    assert_eq!(buffer.capacity(), 4);
    assert!(buffer.as_slice().iter().all(|slot| slot.is_poison()));
}

#[test]
fn test_allocate_stamps_both_guards() {
    let buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    assert_eq!(buffer.check_guards(), (true, true));
}

#[test]
fn test_block_len_covers_payload_and_guards() {
    let buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    assert_eq!(buffer.block_len(), 4 * size_of::<i32>() + 16);
    assert_eq!(buffer.block_bytes().len(), buffer.block_len());
}

#[test]
fn test_reallocate_grow_preserves_prefix_and_poisons_tail() {
    let mut buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    buffer.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);

    buffer.reallocate(8).expect("Failed to reallocate(..)");

    assert_eq!(buffer.capacity(), 8);
    assert_eq!(&buffer.as_slice()[..4], &[1, 2, 3, 4]);
    assert!(buffer.as_slice()[4..].iter().all(|slot| slot.is_poison()));
    assert_eq!(buffer.check_guards(), (true, true));
}

#[test]
fn test_reallocate_shrink_preserves_prefix() {
    let mut buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    buffer.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);

    buffer.reallocate(2).expect("Failed to reallocate(..)");

    assert_eq!(buffer.capacity(), 2);
    assert_eq!(buffer.as_slice(), &[1, 2]);
    assert_eq!(buffer.check_guards(), (true, true));
}

#[test]
fn test_reallocate_same_capacity_is_a_no_op() {
    let mut buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    buffer.as_mut_slice()[0] = 42;
    let addr = buffer.block_ptr() as usize;

    buffer.reallocate(4).expect("Failed to reallocate(..)");

    assert_eq!(buffer.block_ptr() as usize, addr);
    assert_eq!(buffer.as_slice()[0], 42);
}

#[test]
fn test_left_guard_corruption_is_detected() {
    let mut buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    buffer.__flip_left_guard_byte();
    assert_eq!(buffer.check_guards(), (false, true));
}

#[test]
fn test_right_guard_corruption_is_detected() {
    let mut buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    buffer.__flip_right_guard_byte();
    assert_eq!(buffer.check_guards(), (true, false));
}

#[test]
fn test_payload_corruption_leaves_guards_intact() {
    let mut buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    let before = checksum_bytes(buffer.payload_bytes());

    buffer.__flip_payload_byte(5);

    assert_ne!(checksum_bytes(buffer.payload_bytes()), before);
    assert_eq!(buffer.check_guards(), (true, true));
}

#[test]
fn test_narrow_elements_keep_guards_flush() {
    // Three u8 slots put the right guard on an odd byte offset.
    let mut buffer = GuardedBuffer::<u8>::allocate(3).expect("Failed to allocate(..)");

    assert_eq!(buffer.block_len(), 3 + 16);
    assert_eq!(buffer.check_guards(), (true, true));

    buffer.__flip_right_guard_byte();
    assert_eq!(buffer.check_guards(), (true, false));
}

#[test]
fn test_poison_range_is_partial() {
    let mut buffer = GuardedBuffer::<i32>::allocate(4).expect("Failed to allocate(..)");
    buffer.as_mut_slice().copy_from_slice(&[1, 2, 3, 4]);

    buffer.poison_range(2, 4);

    assert_eq!(&buffer.as_slice()[..2], &[1, 2]);
    assert!(buffer.as_slice()[2..].iter().all(|slot| slot.is_poison()));
}
