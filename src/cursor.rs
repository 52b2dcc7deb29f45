// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random-access cursors over a [`FixedVector`](crate::FixedVector).
//!
//! A cursor is a (vector reference, logical position) pair. Valid positions are
//! `0..=len`; position `len` is the sentinel returned by
//! [`FixedVector::end`](crate::FixedVector::end) and is never dereferenceable.
//!
//! - [`Cursor`] borrows the vector shared. It is `Copy`, supports offset
//!   arithmetic with `isize`, differences, and ordering.
//! - [`CursorMut`] borrows the vector exclusively and can insert and erase at
//!   its position.
//! - [`RevCursor`] is the reverse adaptor: it wraps a forward cursor and reads
//!   the element just before it, so `rbegin` wraps `end` and `rend` wraps `begin`.
//!
//! Arithmetic is bounded, never modular: moving past either end stops at that
//! end, so `end() + 1 == end()` and `begin() - 1 == begin()`. Use
//! [`Cursor::checked_offset`] to detect the overflow instead.
//!
//! Equality and ordering compare positions only. Comparing cursors of two
//! different vectors is allowed but meaningless.

// Crate imports
use crate::{error::Error, vec::FixedVector};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Moves `pos` by `n` slots toward the tail (`forward`) or the head, clamped to `[0, len]`.
#[inline]
fn clamp_step(pos: usize, len: usize, n: usize, forward: bool) -> usize {
    if forward {
        pos.saturating_add(n).min(len)
    } else {
        pos.saturating_sub(n)
    }
}

/// Shared random-access cursor into a [`FixedVector`].
///
/// # Examples
///
/// ```
/// # use fixed_vector::FixedVector;
/// let v: FixedVector<char, 4> = FixedVector::try_from(&['a', 'b', 'c'][..]).unwrap();
///
/// let mut c = v.begin();
/// assert_eq!(c.get(), Some(&'a'));
/// c += 2;
/// assert_eq!(c.get(), Some(&'c'));
/// c.move_next();
/// assert_eq!(c, v.end());
/// assert_eq!(c.get(), None);
///
/// // The sentinel stays put.
/// c.move_next();
/// assert_eq!(c, v.end());
/// assert_eq!(v.end() - v.begin(), 3);
/// ```
pub struct Cursor<'a, T, const N: usize> {
    vec: &'a FixedVector<T, N>,
    pos: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    #[inline]
    pub(crate) fn new(vec: &'a FixedVector<T, N>, pos: usize) -> Self {
        debug_assert!(pos <= vec.len());
        Self { vec, pos }
    }

    /// Returns the logical position (`0..=len`).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` at the sentinel position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == self.vec.len()
    }

    /// Returns the referenced element, or `None` at the sentinel.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.vec.get(self.pos)
    }

    /// Advances by one position; a no-op at the sentinel.
    #[inline]
    pub fn move_next(&mut self) {
        self.pos = clamp_step(self.pos, self.vec.len(), 1, true);
    }

    /// Steps back by one position; a no-op at position 0.
    #[inline]
    pub fn move_prev(&mut self) {
        self.pos = clamp_step(self.pos, self.vec.len(), 1, false);
    }

    /// Returns a cursor moved by `delta`, saturating at `0` and `len`.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: isize) -> Self {
        self.stepped(delta.unsigned_abs(), delta >= 0)
    }

    /// Returns a cursor moved by `delta`, or `None` if it would leave `[0, len]`.
    #[inline]
    pub fn checked_offset(self, delta: isize) -> Option<Self> {
        let pos = if delta >= 0 {
            self.pos.checked_add(delta.unsigned_abs())
        } else {
            self.pos.checked_sub(delta.unsigned_abs())
        }?;
        (pos <= self.vec.len()).then_some(Self { pos, ..self })
    }

    /// Signed distance `self - origin`, in positions.
    #[inline]
    pub fn distance_from(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }

    #[inline]
    fn stepped(self, n: usize, forward: bool) -> Self {
        Self {
            pos: clamp_step(self.pos, self.vec.len(), n, forward),
            ..self
        }
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}
impl<T, const N: usize> Eq for Cursor<'_, T, N> {}
impl<T, const N: usize> PartialOrd for Cursor<'_, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T, const N: usize> Ord for Cursor<'_, T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<'a, T, const N: usize> Sub for Cursor<'a, T, N> {
    type Output = isize;
    fn sub(self, origin: Self) -> isize {
        self.distance_from(&origin)
    }
}

/// Reverse adaptor over a forward [`Cursor`].
///
/// A `RevCursor` wrapping forward position `p` refers to the element at
/// `p - 1`; moving it forward moves the wrapped cursor backward.
pub struct RevCursor<'a, T, const N: usize> {
    base: Cursor<'a, T, N>,
}

impl<'a, T, const N: usize> RevCursor<'a, T, N> {
    #[inline]
    pub(crate) fn new(base: Cursor<'a, T, N>) -> Self {
        Self { base }
    }

    /// Returns the wrapped forward cursor.
    #[inline]
    pub fn base(&self) -> Cursor<'a, T, N> {
        self.base
    }

    /// Returns the referenced element, or `None` at the reverse sentinel.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        let i = self.base.pos.checked_sub(1)?;
        self.base.vec.get(i)
    }

    /// Returns `true` at the reverse sentinel (forward position 0).
    #[inline]
    pub fn is_end(&self) -> bool {
        self.base.pos == 0
    }

    /// Advances toward the front of the vector; a no-op at the reverse sentinel.
    #[inline]
    pub fn move_next(&mut self) {
        self.base.move_prev();
    }

    /// Steps back toward the end of the vector; a no-op at `rbegin`.
    #[inline]
    pub fn move_prev(&mut self) {
        self.base.move_next();
    }

    /// Returns a reverse cursor moved by `delta`, saturating at both ends.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: isize) -> Self {
        Self::new(self.base.stepped(delta.unsigned_abs(), delta < 0))
    }

    #[inline]
    fn stepped(self, n: usize, forward: bool) -> Self {
        Self::new(self.base.stepped(n, !forward))
    }
}

impl<T, const N: usize> Clone for RevCursor<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for RevCursor<'_, T, N> {}

impl<T, const N: usize> fmt::Debug for RevCursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevCursor").field(&self.base).finish()
    }
}

impl<T, const N: usize> PartialEq for RevCursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}
impl<T, const N: usize> Eq for RevCursor<'_, T, N> {}
impl<T, const N: usize> PartialOrd for RevCursor<'_, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T, const N: usize> Ord for RevCursor<'_, T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}

impl<'a, T, const N: usize> Sub for RevCursor<'a, T, N> {
    type Output = isize;
    fn sub(self, origin: Self) -> isize {
        origin.base.distance_from(&self.base)
    }
}

// `+`, `-`, `+=` and `-=` by an `isize` offset, saturating at both ends.
macro_rules! impl_offset_ops {
    ($cursor:ident) => {
        impl<'a, T, const N: usize> Add<isize> for $cursor<'a, T, N> {
            type Output = Self;
            fn add(self, delta: isize) -> Self {
                self.stepped(delta.unsigned_abs(), delta >= 0)
            }
        }
        impl<'a, T, const N: usize> Sub<isize> for $cursor<'a, T, N> {
            type Output = Self;
            fn sub(self, delta: isize) -> Self {
                self.stepped(delta.unsigned_abs(), delta < 0)
            }
        }
        impl<'a, T, const N: usize> AddAssign<isize> for $cursor<'a, T, N> {
            fn add_assign(&mut self, delta: isize) {
                *self = *self + delta;
            }
        }
        impl<'a, T, const N: usize> SubAssign<isize> for $cursor<'a, T, N> {
            fn sub_assign(&mut self, delta: isize) {
                *self = *self - delta;
            }
        }
    };
}

impl_offset_ops!(Cursor);
impl_offset_ops!(RevCursor);

/// Exclusive cursor into a [`FixedVector`] that can edit at its position.
///
/// After [`insert`](CursorMut::insert) the cursor references the inserted
/// element; after [`erase`](CursorMut::erase) it references the element that
/// followed the removed one (or the sentinel).
///
/// # Examples
///
/// ```
/// # use fixed_vector::FixedVector;
/// let mut v: FixedVector<i32, 8> = FixedVector::try_from(&[1, 2, 3, 4][..]).unwrap();
///
/// // Remove the even numbers in one pass.
/// let mut c = v.begin_mut();
/// while let Some(&x) = c.get() {
///     if x % 2 == 0 {
///         c.erase().unwrap();
///     } else {
///         c.move_next();
///     }
/// }
/// assert_eq!(v.as_slice(), &[1, 3]);
/// ```
pub struct CursorMut<'a, T, const N: usize> {
    vec: &'a mut FixedVector<T, N>,
    pos: usize,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(vec: &'a mut FixedVector<T, N>, pos: usize) -> Self {
        debug_assert!(pos <= vec.len());
        Self { vec, pos }
    }

    /// Returns the logical position (`0..=len`).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` at the sentinel position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == self.vec.len()
    }

    /// Returns the referenced element, or `None` at the sentinel.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.vec.get(self.pos)
    }

    /// Returns the referenced element mutably, or `None` at the sentinel.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.vec.get_mut(self.pos)
    }

    /// Consumes the cursor, returning the referenced element for the whole borrow.
    #[inline]
    pub fn into_mut(self) -> Option<&'a mut T> {
        let Self { vec, pos } = self;
        vec.get_mut(pos)
    }

    /// Returns a shared cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.vec, self.pos)
    }

    /// Advances by one position; a no-op at the sentinel.
    #[inline]
    pub fn move_next(&mut self) {
        self.pos = clamp_step(self.pos, self.vec.len(), 1, true);
    }

    /// Steps back by one position; a no-op at position 0.
    #[inline]
    pub fn move_prev(&mut self) {
        self.pos = clamp_step(self.pos, self.vec.len(), 1, false);
    }

    /// Moves by `delta`, saturating at `0` and `len`.
    #[inline]
    pub fn seek(&mut self, delta: isize) {
        self.pos = clamp_step(self.pos, self.vec.len(), delta.unsigned_abs(), delta >= 0);
    }

    /// Inserts `value` at the cursor, which then references it.
    ///
    /// Returns [`Error::CapacityExceeded`] if the vector is full.
    #[inline]
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        self.vec.insert_at(self.pos, value)
    }

    /// Removes and returns the referenced element; the cursor then references
    /// the next element.
    ///
    /// Returns [`Error::OutOfBounds`] at the sentinel.
    #[inline]
    pub fn erase(&mut self) -> Result<T, Error> {
        self.vec.erase(self.pos)
    }
}

impl<T, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.pos)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T, const N: usize> AddAssign<isize> for CursorMut<'_, T, N> {
    fn add_assign(&mut self, delta: isize) {
        self.seek(delta);
    }
}
impl<T, const N: usize> SubAssign<isize> for CursorMut<'_, T, N> {
    fn sub_assign(&mut self, delta: isize) {
        self.pos = clamp_step(self.pos, self.vec.len(), delta.unsigned_abs(), delta < 0);
    }
}
