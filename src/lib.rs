// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-vector`
//!
//! A `no_std`, fixed-capacity, inline vector type for arbitrary elements.
//!
//! The core type, [`FixedVector<T, N>`], stores up to `N` elements in a single
//! inline block of uninitialized storage and tracks a logical length
//! `len ∈ 0..=N`. Elements are constructed in place when they enter the vector
//! and dropped in place when they leave it; nothing is ever allocated on the heap
//! and the vector never grows past `N`.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know the maximum number of elements at compile time.
//! - Elements own resources (`String`, `Box`, handles) and need real drop
//!   semantics, so a `Copy`-only buffer does not fit.
//! - You want vector-style operations at both ends and in the middle, plus a
//!   random-access cursor for positional edits.
//!
//! It may not be the best fit if:
//!
//! - You need the container to grow.
//! - You frequently insert at the front of large vectors (`push_front`,
//!   `pop_front`, `insert` and `erase` are `O(len)`).
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`FixedVector::<T, N>::CAPACITY == N`).
//! - Only the prefix `[0..len)` holds live elements; the tail is uninitialized.
//! - Operations that would exceed capacity return [`Error::CapacityExceeded`]
//!   and leave the vector unchanged.
//! - Positional operations outside the live range return [`Error::OutOfBounds`].
//! - Removing from an empty vector returns `None`.
//! - Indexing (`v[i]`) **panics** out of bounds, exactly like slices.
//!
//! ## Cursors
//!
//! [`Cursor`] and [`CursorMut`] are random-access positions over `[0, len]`,
//! where `len` is the one-past-the-end sentinel returned by
//! [`FixedVector::end`]. Cursor arithmetic is bounded: it never wraps and never
//! leaves `[0, len]`. [`RevCursor`] is the reverse adaptor used by
//! [`FixedVector::rbegin`] / [`FixedVector::rend`].
//!
//! A `Cursor` borrows the vector, so the borrow checker rules out using a cursor
//! after a mutation has shifted the elements it refers to.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `FixedVector<T, N>`.
//!   - Deserializing more than `N` elements is an error.
//!
//! ## Logging
//!
//! The crate emits `trace`-level records through the [`log`] facade whenever
//! elements are relocated inside the storage block, and a `debug` record when
//! an operation is rejected for lack of capacity. Install any `log`
//! implementation to see them.
//!
//! ## Example
//!
//! ```rust
//! use fixed_vector::FixedVector;
//!
//! let mut v: FixedVector<i32, 4> = FixedVector::new();
//! v.push_back(1).unwrap();
//! v.push_back(2).unwrap();
//! v.push_front(0).unwrap();
//! assert_eq!(v.as_slice(), &[0, 1, 2]);
//!
//! v.erase(1).unwrap();
//! assert_eq!(v.as_slice(), &[0, 2]);
//!
//! v.insert(1, 9).unwrap();
//! assert_eq!(v.as_slice(), &[0, 9, 2]);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod cursor;
mod error;
mod index;
mod iter;
#[cfg(test)]
mod proptests;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut, RevCursor};
pub use error::Error;
pub use iter::{IntoIter, Iter};
pub use vec::{swap, FixedVector};
