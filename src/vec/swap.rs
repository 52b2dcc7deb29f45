// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::mem;

impl<T, const N: usize> FixedVector<T, N> {
    /// Exchanges the storage blocks and lengths of `self` and `other`.
    ///
    /// This is a block-level exchange of the raw slots, not an element-wise
    /// swap; no element is cloned or dropped. Never fails.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }
}

/// Exchanges the contents of two vectors. See [`FixedVector::swap_with`].
#[inline]
pub fn swap<T, const N: usize>(a: &mut FixedVector<T, N>, b: &mut FixedVector<T, N>) {
    a.swap_with(b);
}
