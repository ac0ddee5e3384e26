// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The self-verifying stack.
//!
//! Every public operation verifies the container before trusting any of
//! its state, refuses to touch an unhealthy instance (dumping it first),
//! and recomputes both checksums after a successful mutation. Detection,
//! not recovery: no fault is ever silently repaired.

use core::ptr::NonNull;
use std::rc::Rc;

use parapet_probe::{MemProbe, OsProbe};

use crate::checker;
use crate::checksum::{self, Checksum};
use crate::config::{STRUCT_CANARY_LEFT, STRUCT_CANARY_RIGHT};
use crate::element::Element;
use crate::fault::Faults;
use crate::guarded::GuardedBuffer;
use crate::info::{StackInfo, Status};
use crate::policy;
use crate::report::{
    ChecksumReport, DiagnosticSink, DumpOptions, NullSink, Severity, SlotReport, StackReport,
};

/// Test behaviour for injecting failures into stack operations.
///
/// Only available with the `test_utils` feature. The behaviour is sticky
/// until changed, so a test can make every resize fail and observe the
/// refusal paths without exhausting real memory.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every capacity change fails as if allocation had been refused.
    FailResize,
}

/// Self-verifying LIFO container for one [`Element`] type.
///
/// The struct's own fields are bracketed by two canary words and covered
/// by a checksum; the payload lives in a [`GuardedBuffer`] with its own
/// guard words and checksum. Single-threaded by construction (the
/// injected collaborator handles are [`Rc`]), single owner per instance.
///
/// # Example
///
/// ```rust
/// use parapet::{Faults, Stack};
///
/// fn example() -> Result<(), Faults> {
///     let mut stack = Stack::<i32>::new("example");
///     stack.push(1)?;
///     stack.push(2)?;
///
///     assert_eq!(stack.top()?, 2);
///     assert_eq!(stack.pop()?, 2);
///     assert_eq!(stack.pop()?, 1);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[repr(C)]
pub struct Stack<T: Element> {
    left_canary: u64,
    buffer: Option<GuardedBuffer<T>>,
    size: usize,
    // Stored redundantly with the buffer's own capacity so an absent
    // buffer with a non-zero capacity is itself detectable.
    capacity: usize,
    info: StackInfo,
    status: Status,
    data_checksum: u64,
    struct_checksum: u64,
    right_canary: u64,
    // Diagnostic collaborators live outside the guarded span: they must
    // stay usable while the span between the canaries is corrupt.
    probe: Rc<dyn MemProbe>,
    sink: Rc<dyn DiagnosticSink>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: StackBehaviour,
}

impl<T: Element> Stack<T> {
    /// Constructs an empty stack: no buffer, canaries stamped, checksums
    /// computed, status active. The creation site is captured for
    /// diagnostics.
    ///
    /// Uses the OS memory-validity probe and discards diagnostics; wire
    /// both explicitly with [`Stack::with_diagnostics`].
    #[track_caller]
    pub fn new(name: &'static str) -> Self {
        Self::with_diagnostics(name, Rc::new(OsProbe::new()), Rc::new(NullSink))
    }

    /// Constructs an empty stack with an injected memory-validity probe
    /// and diagnostic sink.
    #[track_caller]
    pub fn with_diagnostics(
        name: &'static str,
        probe: Rc<dyn MemProbe>,
        sink: Rc<dyn DiagnosticSink>,
    ) -> Self {
        let mut stack = Self {
            left_canary: STRUCT_CANARY_LEFT,
            buffer: None,
            size: 0,
            capacity: 0,
            info: StackInfo::capture(name),
            status: Status::Active,
            data_checksum: 0,
            struct_checksum: 0,
            right_canary: STRUCT_CANARY_RIGHT,
            probe,
            sink,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: StackBehaviour::default(),
        };
        stack.update_checksums();
        stack
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether no live element is stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Display name given at creation.
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Runs the full integrity check and returns the fault union; an
    /// empty set means healthy. Read-only and safe to call at any time,
    /// including on a dead instance.
    pub fn verify(&self) -> Faults {
        checker::verify_handle(Some(NonNull::from(self)), self.probe.as_ref())
    }

    /// Pushes a value, growing the buffer when full.
    ///
    /// # Errors
    ///
    /// Any precondition fault (nothing is mutated, a dump is emitted),
    /// [`Faults::OP_FAILED`] when growth allocation fails (prior state
    /// intact), or any fault the postcondition re-verification surfaces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parapet::{Faults, Stack};
    ///
    /// fn example() -> Result<(), Faults> {
    ///     let mut stack = Stack::<u64>::new("grows");
    ///     for value in 0..100 {
    ///         stack.push(value)?;
    ///     }
    ///     assert_eq!(stack.size(), 100);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), Faults> {
        self.ensure_healthy("push refused")?;

        if self.size == self.capacity {
            self.apply_resize(policy::grow_target(self.capacity))?;
        }

        let slot = self.size;
        self.buffer
            .as_mut()
            .expect("infallible: grow target is never zero, so a buffer exists here")
            .as_mut_slice()[slot] = value;
        self.size += 1;

        self.update_checksums();
        self.ensure_healthy("push postcondition failed")
    }

    /// Pops the most recently pushed value, poisoning the vacated slot
    /// and shrinking the buffer when occupancy drops far enough.
    ///
    /// # Errors
    ///
    /// Any precondition fault, or [`Faults::OP_INVALID`] on an empty
    /// stack. A failed shrink allocation does not fail the pop: the
    /// container keeps its prior capacity (still valid) and the failure
    /// is reported through the sink.
    pub fn pop(&mut self) -> Result<T, Faults> {
        self.ensure_healthy("pop refused")?;

        if self.size == 0 {
            return Err(Faults::OP_INVALID);
        }

        self.size -= 1;
        let slot = self.size;
        let buffer = self
            .buffer
            .as_mut()
            .expect("infallible: a non-zero size implies an allocated buffer");
        let value = buffer.as_slice()[slot];
        buffer.as_mut_slice()[slot] = T::POISON;
        self.update_checksums();

        if let Some(target) = policy::shrink_target(self.size, self.capacity) {
            if self.apply_resize(target).is_ok() {
                self.update_checksums();
            }
        }

        self.ensure_healthy("pop postcondition failed")?;
        Ok(value)
    }

    /// Reads the most recently pushed value without mutating anything.
    ///
    /// # Errors
    ///
    /// Any precondition fault, or [`Faults::OP_INVALID`] on an empty
    /// stack.
    pub fn top(&self) -> Result<T, Faults> {
        self.ensure_healthy("top refused")?;

        if self.size == 0 {
            return Err(Faults::OP_INVALID);
        }

        Ok(self
            .buffer
            .as_ref()
            .expect("infallible: a non-zero size implies an allocated buffer")
            .as_slice()[self.size - 1])
    }

    /// Sets the capacity explicitly. Capacity 0 releases the buffer
    /// (only reachable when the stack is empty).
    ///
    /// # Errors
    ///
    /// Any precondition fault, [`Faults::OP_INVALID`] when `new_capacity`
    /// would truncate live elements, or [`Faults::OP_FAILED`] when the
    /// allocation fails; the prior, still-valid state is kept.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), Faults> {
        self.ensure_healthy("resize refused")?;

        if new_capacity < self.size {
            return Err(Faults::OP_INVALID);
        }

        self.apply_resize(new_capacity)?;
        self.update_checksums();
        self.ensure_healthy("resize postcondition failed")
    }

    /// Destructs the stack: poisons and releases the payload, then makes
    /// the dead state terminal. Every later operation (including another
    /// destruct) reports [`Faults::DEAD`] and performs no mutation.
    ///
    /// # Errors
    ///
    /// Any precondition fault; destructing an already-dead instance is
    /// detected and reported, never re-executed.
    pub fn destruct(&mut self) -> Result<(), Faults> {
        self.ensure_healthy("destruct refused")?;

        // GuardedBuffer re-poisons its payload before releasing the block.
        self.buffer = None;
        self.size = 0;
        self.capacity = 0;
        self.status = Status::Dead;
        self.update_checksums();
        Ok(())
    }

    /// Emits a full diagnostic snapshot through the sink, with default
    /// rendering options. Read-only; works on corrupt and dead instances.
    pub fn dump(&self) {
        self.dump_with(DumpOptions::default());
    }

    /// Emits a full diagnostic snapshot with explicit rendering options.
    pub fn dump_with(&self, options: DumpOptions) {
        let report = self.build_report(options);
        self.sink.report(&report);
    }

    /// Changes the injected test behaviour (see [`StackBehaviour`]).
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: StackBehaviour) {
        self.behaviour = behaviour;
    }

    pub(crate) fn buffer(&self) -> Option<&GuardedBuffer<T>> {
        self.buffer.as_ref()
    }

    pub(crate) fn struct_canaries(&self) -> (u64, u64) {
        (self.left_canary, self.right_canary)
    }

    pub(crate) fn stored_struct_checksum(&self) -> u64 {
        self.struct_checksum
    }

    pub(crate) fn stored_data_checksum(&self) -> u64 {
        self.data_checksum
    }

    /// Canonical struct checksum: every field between the canaries except
    /// the two checksum fields themselves, folded in a fixed order. A
    /// canonical encoding (rather than raw struct bytes) keeps the value
    /// independent of padding.
    pub(crate) fn compute_struct_checksum(&self) -> u64 {
        let mut checksum = Checksum::new();
        checksum.update_usize(
            self.buffer
                .as_ref()
                .map(|buffer| buffer.block_ptr() as usize)
                .unwrap_or(0),
        );
        checksum.update_usize(self.size);
        checksum.update_usize(self.capacity);
        checksum.update_usize(self.info.name().len());
        checksum.update(self.info.name().as_bytes());
        checksum.update_usize(self.info.file().len());
        checksum.update(self.info.file().as_bytes());
        checksum.update_u64(u64::from(self.info.line()));
        checksum.update_u64(u64::from(self.info.column()));
        checksum.update_u64(self.status as u64);
        checksum.finish()
    }

    fn compute_data_checksum(&self) -> u64 {
        match &self.buffer {
            Some(buffer) => checksum::checksum_bytes(buffer.payload_bytes()),
            None => checksum::checksum_bytes(&[]),
        }
    }

    fn update_checksums(&mut self) {
        self.data_checksum = self.compute_data_checksum();
        self.struct_checksum = self.compute_struct_checksum();
    }

    /// Verifies, and on any fault dumps the last known state and refuses.
    fn ensure_healthy(&self, context: &str) -> Result<(), Faults> {
        let faults = self.verify();
        if faults.is_healthy() {
            return Ok(());
        }

        self.sink
            .message(Severity::Error, &format!("{context}: {faults}"));
        self.dump();
        Err(faults)
    }

    /// Applies a capacity change without precondition checks; callers
    /// have already verified the container and validated the target.
    fn apply_resize(&mut self, new_capacity: usize) -> Result<(), Faults> {
        debug_assert!(new_capacity >= self.size);

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, StackBehaviour::FailResize) {
            self.sink.message(
                Severity::Error,
                &format!("capacity change to {new_capacity} failed: injected failure"),
            );
            return Err(Faults::OP_FAILED);
        }

        let outcome = if new_capacity == 0 {
            self.buffer = None;
            Ok(())
        } else if let Some(buffer) = self.buffer.as_mut() {
            buffer.reallocate(new_capacity)
        } else {
            GuardedBuffer::allocate(new_capacity).map(|buffer| {
                self.buffer = Some(buffer);
            })
        };

        match outcome {
            Ok(()) => {
                self.capacity = new_capacity;
                Ok(())
            }
            Err(error) => {
                self.sink.message(
                    Severity::Error,
                    &format!("capacity change to {new_capacity} failed: {error}"),
                );
                Err(Faults::OP_FAILED)
            }
        }
    }

    fn build_report(&self, options: DumpOptions) -> StackReport {
        let faults = self.verify();

        let mut report = StackReport {
            faults,
            name: self.info.name(),
            file: self.info.file(),
            line: self.info.line(),
            status: self.status,
            size: self.size,
            capacity: self.capacity,
            buffer_addr: self
                .buffer
                .as_ref()
                .map(|buffer| buffer.block_ptr() as usize),
            guards: None,
            struct_checksum: ChecksumReport {
                stored: self.struct_checksum,
                computed: None,
            },
            data_checksum: ChecksumReport {
                stored: self.data_checksum,
                computed: None,
            },
            slots: None,
            raw_block: None,
        };

        // A dead instance is not further diagnosed.
        if self.status == Status::Dead {
            return report;
        }

        report.struct_checksum.computed = Some(self.compute_struct_checksum());

        let Some(buffer) = self.buffer.as_ref() else {
            return report;
        };
        let region_ok = !faults.contains(Faults::DATA_REGION);
        if !region_ok {
            // Payload region failed the probe: render no value at all.
            return report;
        }

        report.guards = Some(buffer.check_guards());
        report.data_checksum.computed = Some(self.compute_data_checksum());

        if faults.contains(Faults::STRUCT_CHECKSUM) {
            // Struct metadata (size among it) is untrusted; offer the
            // block raw instead of interpreting slots, if permitted.
            if options.print_unverified {
                report.raw_block = Some(buffer.block_bytes().to_vec());
            }
            return report;
        }

        report.slots = Some(
            buffer
                .as_slice()
                .iter()
                .enumerate()
                .map(|(index, value)| SlotReport {
                    index,
                    occupied: index < self.size,
                    poisoned: value.is_poison(),
                    value: value.to_string(),
                })
                .collect(),
        );

        report
    }

    #[cfg(test)]
    pub(crate) fn __left_canary_mut(&mut self) -> &mut u64 {
        &mut self.left_canary
    }

    #[cfg(test)]
    pub(crate) fn __right_canary_mut(&mut self) -> &mut u64 {
        &mut self.right_canary
    }

    #[cfg(test)]
    pub(crate) fn __size_mut(&mut self) -> &mut usize {
        &mut self.size
    }

    #[cfg(test)]
    pub(crate) fn __capacity_mut(&mut self) -> &mut usize {
        &mut self.capacity
    }

    #[cfg(test)]
    pub(crate) fn __struct_checksum_mut(&mut self) -> &mut u64 {
        &mut self.struct_checksum
    }

    #[cfg(test)]
    pub(crate) fn __buffer_mut(&mut self) -> Option<&mut GuardedBuffer<T>> {
        self.buffer.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn __recompute_checksums(&mut self) {
        self.update_checksums();
    }
}
