// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element type contract.
//!
//! The container is specialized to one element type at a time. An element
//! must be a plain copyable value with a reserved poison constant that
//! legitimate application data never uses; poisoned slots are what make
//! use-after-pop visible in dumps.

use core::fmt;

use crate::config::POISON_BYTE;

/// Types that can be stored in a [`Stack`](crate::Stack).
///
/// Implementations are provided for the primitive integer types. The
/// poison value is [`POISON_BYTE`] repeated to the element width, so
/// poisoned slots are also recognizable in raw byte dumps. Implementors
/// must not have an alignment above 8: the buffer guard words sit flush
/// against the payload.
pub trait Element: Copy + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// Reserved value written into every logically-unoccupied slot.
    const POISON: Self;

    /// Whether this value is the poison constant.
    fn is_poison(&self) -> bool {
        *self == Self::POISON
    }
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const POISON: Self =
                    <$ty>::from_le_bytes([POISON_BYTE; size_of::<$ty>()]);
            }
        )*
    };
}

impl_element!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
