// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedVector<T, N> {
    type Error = Error;

    /// Clones `src` into a new vector, or returns [`Error::CapacityExceeded`]
    /// if `src.len() > N`.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Tries to construct from an iterator, erroring with
    /// [`Error::CapacityExceeded`] if it would overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns the error.
    /// - Any elements pushed before the overflow are dropped; the returned `Err`
    ///   does *not* include the partially filled vector.
    /// - The source iterator may be left partially consumed (it stops at the first overflow).
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            v.push_back(item)?; // returns Err(CapacityExceeded) on overflow → we bail out immediately
        }
        Ok(v)
    }
}
