// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Drops every live element and sets `len = 0`. `O(len)`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements in `[new_len, len)` if `new_len < len`; otherwise a no-op.
    ///
    /// Elements are dropped from the back. `len` is lowered before each drop,
    /// so a panicking `Drop` leaves the not-yet-dropped prefix live and owned
    /// by the vector.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;
            // SAFETY: the slot at the old `len - 1` is live and is no longer counted.
            unsafe { self.destroy_at(self.len) };
        }
    }
}

impl<T, const N: usize> Drop for FixedVector<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}
