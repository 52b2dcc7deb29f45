// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

impl<T: Clone, const N: usize> Clone for FixedVector<T, N> {
    /// Deep copy: clones every live element, in order, into a fresh vector.
    ///
    /// If an element's `clone` panics, the elements cloned so far are dropped
    /// with the partially built vector.
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self.as_slice() {
            out.construct_at(out.len, item.clone());
            out.len += 1;
        }
        out
    }

    /// Copy-and-swap: clones `source` into a temporary, swaps it into `self`,
    /// then drops the temporary holding the previous contents.
    ///
    /// If cloning panics, `self` is left untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        self.swap_with(&mut tmp);
    }
}
