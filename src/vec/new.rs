// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> FixedVector<T, N> {
    /// Constructs an empty vector.
    ///
    /// No element is constructed; every slot starts uninitialized.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }
}

impl<T, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
