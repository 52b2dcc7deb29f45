// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedVector` type and its inherent API.
//!
//! `FixedVector<T, N>` is a fixed-capacity vector over arbitrary element types.
//! It stores elements inline in a block of `N` uninitialized slots and tracks a
//! logical length. Every mutator is written in terms of the slot primitives in
//! [`slot`], which construct, drop and relocate single elements in place.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= N` always holds.
// - Slots in `buf[..len]` hold initialized `T` values.
// - Slots in `buf[len..N]` are logically uninitialized and must never be read
//   as `T` or dropped.
// - All public methods restore these invariants before returning, including
//   when a user `Clone` or `Drop` implementation panics.

mod clear;
mod clone;
mod erase;
mod insert;
mod new;
mod pop;
mod push;
mod slice;
mod slot;
mod swap;
mod try_from;

pub use self::swap::swap;

// Crate imports
use crate::{
    cursor::{Cursor, CursorMut, RevCursor},
    iter::Iter,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity vector whose elements live inline in uninitialized storage.
///
/// `FixedVector<T, N>` owns a block of `N` slots and a logical length
/// `len ∈ 0..=N`. Conceptually it is a `Vec<T>` that can never reallocate:
///
/// - capacity is known at compile time (`N`);
/// - the buffer is stored inline (typically on the stack);
/// - any `T` is accepted, and each element is dropped exactly once;
/// - elements can be added and removed at both ends and in the middle;
/// - no heap allocations are performed.
///
/// # Layout and invariants
///
/// Internally, `FixedVector<T, N>` maintains:
///
/// - a backing buffer `[MaybeUninit<T>; N]`; and
/// - a logical length `len` with `0 <= len <= N`.
///
/// Only the prefix `buf[..len]` holds live elements, and only that prefix is
/// visible through [`as_slice`](FixedVector::as_slice), indexing, iteration and
/// cursors. The remaining slots are uninitialized and owe no destructor.
///
/// # Complexity characteristics
///
/// - [`push_back`](FixedVector::push_back) and
///   [`pop_back`](FixedVector::pop_back) are `O(1)`.
/// - [`push_front`](FixedVector::push_front),
///   [`pop_front`](FixedVector::pop_front), [`insert`](FixedVector::insert) and
///   [`erase`](FixedVector::erase) relocate every element after the affected
///   position, so they are `O(len)` in the worst case.
/// - Relocation is a bitwise move; it never calls user code and cannot fail.
/// - Moving a `FixedVector` copies the whole buffer (`O(N)` in the capacity).
///
/// # Capacity and bounds
///
/// - Adding to a full vector returns [`Error::CapacityExceeded`](crate::Error)
///   and leaves the vector unchanged.
/// - Positional operations outside the live range return
///   [`Error::OutOfBounds`](crate::Error).
/// - Removing from an empty vector returns `None`.
/// - `v[i]` panics when `i >= len`, like a slice.
///
/// # Examples
///
/// ```rust
/// use fixed_vector::FixedVector;
///
/// let mut v: FixedVector<String, 3> = FixedVector::new();
/// v.push_back("b".to_string()).unwrap();
/// v.push_front("a".to_string()).unwrap();
/// v.push_back("c".to_string()).unwrap();
/// assert!(v.is_full());
/// assert!(v.push_back("d".to_string()).is_err());
///
/// assert_eq!(v.pop_front().as_deref(), Some("a"));
/// assert_eq!(v.as_slice(), &["b", "c"]);
/// ```
pub struct FixedVector<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> FixedVector<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest length this vector can reach (always `N`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](FixedVector::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alias of [`is_empty`](FixedVector::is_empty).
    #[inline]
    pub const fn empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the element in slot 0, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the element in slot `len - 1`, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    // iterators
    /// Returns a double-ended iterator from [`begin`](FixedVector::begin) to
    /// [`end`](FixedVector::end).
    ///
    /// Use `.rev()` to walk from the back, which visits the same elements as
    /// [`rbegin`](FixedVector::rbegin) to [`rend`](FixedVector::rend).
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::between(self.begin(), self.end())
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // cursors
    /// Returns a cursor at position 0.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor at the sentinel position `len`.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len)
    }

    /// Returns a reverse cursor at the last element (wraps [`end`](FixedVector::end)).
    #[inline]
    pub fn rbegin(&self) -> RevCursor<'_, T, N> {
        RevCursor::new(self.end())
    }

    /// Returns the reverse sentinel (wraps [`begin`](FixedVector::begin)).
    #[inline]
    pub fn rend(&self) -> RevCursor<'_, T, N> {
        RevCursor::new(self.begin())
    }

    /// Returns a mutable cursor at position 0.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutable cursor at the sentinel position `len`.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T, N> {
        let len = self.len;
        CursorMut::new(self, len)
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVector")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for FixedVector<T, N> {}
impl<T: Ord, const N: usize> Ord for FixedVector<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for FixedVector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for FixedVector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for FixedVector<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for FixedVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for FixedVector<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedVector<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
