// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Parapet - a self-verifying stack container
//!
//! A LIFO container built for catching memory-corruption bugs during
//! development rather than for throughput: every operation re-validates
//! the container's own integrity through redundant protections (boundary
//! sentinels bracketing both the struct and the payload, plus rolling
//! checksums over each) before trusting any of its state, and reports a
//! precise, composable fault diagnosis when corruption is found.
//!
//! Nothing is ever repaired silently; detection is the contract. A
//! refused operation dumps the last known state through the injected
//! diagnostic sink and leaves the container untouched.
//!
//! Not thread-safe by design: a stack has exactly one owner, and internal
//! locking would only mask the corruption this container exists to catch.

mod checker;
mod checksum;
mod config;
mod element;
mod error;
mod fault;
mod guarded;
mod info;
mod policy;
mod report;
mod stack;

pub use checker::verify_handle;
pub use checksum::{checksum_bytes, Checksum};
pub use config::{
    CHECKSUM_SEED, DATA_GUARD_LEFT, DATA_GUARD_RIGHT, MIN_CAPACITY, POISON_BYTE,
    STRUCT_CANARY_LEFT, STRUCT_CANARY_RIGHT,
};
pub use element::Element;
pub use error::AllocError;
pub use fault::Faults;
pub use guarded::GuardedBuffer;
pub use info::{StackInfo, Status};
pub use policy::{grow_target, shrink_target};
pub use report::{
    ChecksumReport, DiagnosticSink, DumpOptions, NullSink, Severity, SlotReport, StackReport,
};
pub use stack::Stack;

#[cfg(any(test, feature = "test_utils"))]
pub use stack::StackBehaviour;

#[cfg(test)]
mod tests;
