// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Removes and returns the last element, if any. `O(1)`.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
            // initialized by invariant, so `buf[self.len]` (the old last slot)
            // still contains an initialized `T`, which is no longer counted.
            let out = unsafe { self.take_at(self.len) };
            Some(out)
        }
    }

    /// Removes and returns the first element, if any, relocating the remaining
    /// elements one slot toward the head. `O(len)`.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: `len > 0`, so slot 0 is live; after the read it is vacant and
        // the shift refills it from slot 1 onwards.
        let out = unsafe {
            let out = self.take_at(0);
            self.shift_toward_head(0);
            out
        };

        self.len -= 1;
        Some(out)
    }
}
