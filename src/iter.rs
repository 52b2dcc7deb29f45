// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedVector`](crate::FixedVector).
//!
//! - `Iter<'a, T, N>` walks between two [`Cursor`]s and is double-ended, so
//!   `.rev()` gives reverse iteration.
//! - `IntoIter<T, N>` yields by value and drops whatever it did not yield.
//! - `&mut FixedVector` iterates as a mutable slice.

// Crate imports
use crate::{cursor::Cursor, vec::FixedVector};

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

/// Borrowing iterator over the elements between two cursors.
///
/// Returned by [`FixedVector::iter`] and by `(&FixedVector).into_iter()`.
pub struct Iter<'a, T, const N: usize> {
    front: Cursor<'a, T, N>,
    back: Cursor<'a, T, N>, // exclusive
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    /// Iterates over `[first, last)`.
    ///
    /// If `last` precedes `first` the iterator is empty.
    ///
    /// ```
    /// # use fixed_vector::{FixedVector, Iter};
    /// let v: FixedVector<i32, 5> = FixedVector::try_from(&[1, 2, 3, 4][..]).unwrap();
    /// let middle: Vec<_> = Iter::between(v.begin() + 1, v.end() - 1).copied().collect();
    /// assert_eq!(middle, [2, 3]);
    /// ```
    #[inline]
    pub fn between(first: Cursor<'a, T, N>, last: Cursor<'a, T, N>) -> Self {
        Self {
            front: first,
            back: last.max(first),
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            let item = self.front.get();
            self.front.move_next();
            item
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back.position() - self.front.position();
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        let rem = self.back.position() - self.front.position();
        if n >= rem {
            self.front = self.back;
            return None;
        }
        self.front += n as isize; // n < rem <= N
        self.next()
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            self.back.move_prev();
            self.back.get()
        } else {
            None
        }
    }
}
impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}
impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Iter<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owned iterator returned by `FixedVector::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements that are never yielded are
/// dropped with the iterator.
pub struct IntoIter<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `buf[front..back]` holds the unyielded elements; slot `i`
            // leaves that range before it is read, so it is read exactly once.
            Some(unsafe { self.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`, slot `back` was unyielded and is now outside the range.
            Some(unsafe { self.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        let start = self.front;
        self.front = self.back;
        // SAFETY: `buf[start..start + remaining]` holds the unyielded elements,
        // and the range was emptied above so none of them is observed again.
        unsafe {
            let first = self.buf.as_mut_ptr().add(start) as *mut T;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, remaining));
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        let v = ManuallyDrop::new(self);
        // SAFETY: `v` is never dropped, so ownership of the live prefix moves
        // to the iterator together with the storage block.
        let buf = unsafe { ptr::read(&v.buf) };
        IntoIter {
            buf,
            front: 0,
            back: v.len,
        }
    }
}
