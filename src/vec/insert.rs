// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::CursorMut, error::Error, vec::FixedVector};

impl<T, const N: usize> FixedVector<T, N> {
    /// Inserts `value` at `index`, relocating `[index, len)` one slot toward
    /// the tail, and returns a cursor referencing the new element.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::CapacityExceeded`] if at capacity.
    ///
    /// On error `value` is dropped and the vector is unchanged.
    /// `O(len - index)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVector;
    /// let mut v: FixedVector<i32, 4> = FixedVector::new();
    /// v.push_back(1).unwrap();
    /// v.push_back(3).unwrap();
    ///
    /// let mut at = v.insert(1, 2).unwrap();
    /// assert_eq!(at.position(), 1);
    /// assert_eq!(at.get(), Some(&2));
    /// at.move_next();
    /// assert_eq!(at.get(), Some(&3));
    ///
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<CursorMut<'_, T, N>, Error> {
        self.insert_at(index, value)?;
        Ok(CursorMut::new(self, index))
    }

    /// Insertion shared by [`insert`](FixedVector::insert) and
    /// [`CursorMut::insert`].
    pub(crate) fn insert_at(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        if self.len == N {
            log::debug!("insert at {index} rejected: vector is full (capacity {N})");
            return Err(Error::CapacityExceeded);
        }

        // SAFETY: `index <= len < N`.
        unsafe { self.shift_toward_tail(index) };
        self.construct_at(index, value);

        self.len += 1;
        Ok(())
    }
}
