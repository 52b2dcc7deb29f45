// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage and lifecycle primitives.
//!
//! Every mutator is built from these: construct a value in a vacant slot, drop
//! or move a value out of a live slot, and relocate a run of live slots by one
//! position. None of them touch `len`; callers update it once the slots are
//! back in the `[live prefix | uninitialized tail]` shape.

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::ptr;

impl<T, const N: usize> FixedVector<T, N> {
    /// Writes `value` into slot `i`.
    ///
    /// Panics if `i >= N`. A live value already in slot `i` is overwritten
    /// without being dropped, so callers only target vacant slots.
    #[inline]
    pub(crate) fn construct_at(&mut self, i: usize, value: T) {
        self.buf[i].write(value);
    }

    /// Drops the value in slot `i` in place, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// Slot `i` must hold a live value, and the caller must no longer count it
    /// in `len` (or restore it) afterwards.
    #[inline]
    pub(crate) unsafe fn destroy_at(&mut self, i: usize) {
        // SAFETY: the caller guarantees slot `i` is initialized.
        unsafe { self.buf[i].assume_init_drop() }
    }

    /// Moves the value out of slot `i`, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// Slot `i` must hold a live value, and the caller must treat the slot as
    /// uninitialized afterwards.
    #[inline]
    pub(crate) unsafe fn take_at(&mut self, i: usize) -> T {
        // SAFETY: the caller guarantees slot `i` is initialized; ownership of
        // the bits moves to the returned value.
        unsafe { self.buf[i].assume_init_read() }
    }

    /// Relocates the live slots `[from, len)` to `[from + 1, len + 1)`.
    ///
    /// Afterwards slot `from` is vacant and slot `len` is live; `len` itself is
    /// not updated. The move is a bitwise copy of the whole run (highest slot
    /// first in effect), so no user code runs and nothing can fail part-way.
    ///
    /// # Safety
    ///
    /// `from <= len < N` must hold.
    #[inline]
    pub(crate) unsafe fn shift_toward_tail(&mut self, from: usize) {
        debug_assert!(from <= self.len && self.len < N);
        let count = self.len - from;
        if count == 0 {
            return;
        }
        log::trace!("relocating {count} element(s) toward the tail from slot {from}");
        let base = self.buf.as_mut_ptr();
        // SAFETY: `from + count == len < N`, so both ranges lie inside `buf`.
        // `ptr::copy` handles the one-slot overlap.
        unsafe { ptr::copy(base.add(from), base.add(from + 1), count) }
    }

    /// Relocates the live slots `(at, len)` to `[at, len - 1)`.
    ///
    /// Slot `at` must already be vacant (dropped or moved out). Afterwards slot
    /// `len - 1` is vacant; `len` itself is not updated.
    ///
    /// # Safety
    ///
    /// `at < len` must hold and slot `at` must be vacant.
    #[inline]
    pub(crate) unsafe fn shift_toward_head(&mut self, at: usize) {
        debug_assert!(at < self.len);
        let count = self.len - at - 1;
        if count == 0 {
            return;
        }
        log::trace!("relocating {count} element(s) toward the head into slot {at}");
        let base = self.buf.as_mut_ptr();
        // SAFETY: `at + 1 + count == len <= N`, so both ranges lie inside `buf`.
        unsafe { ptr::copy(base.add(at + 1), base.add(at), count) }
    }
}
