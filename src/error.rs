// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedVector`.
//!
//! These errors represent caller precondition violations: running out of
//! capacity and addressing a position outside the live range. They are `Copy`
//! and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`FixedVector`](crate::FixedVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    ///
    /// The vector is left unchanged and the rejected value is dropped.
    CapacityExceeded,
    /// An index or cursor position was outside the current logical bounds.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}
