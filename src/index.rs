// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedVector`](crate::FixedVector).
//!
//! `Index` and `IndexMut` forward to the live prefix `[0..len)` for every index
//! type slices accept (`usize` and all range forms). Out-of-bounds indices
//! **panic**; they are never clamped and never reach the uninitialized tail.

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedVector<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::FixedVector;
    use alloc::string::{String, ToString};

    #[test]
    fn test_index_reads_and_writes_live_elements() {
        let mut v: FixedVector<String, 4> = FixedVector::new();
        v.push_back("a".to_string()).unwrap();
        v.push_back("b".to_string()).unwrap();
        assert_eq!(v[1], "b");
        v[0].push('!');
        v[1] = "c".to_string();
        assert_eq!(v.as_slice(), &["a!", "c"]);
    }

    #[test]
    fn test_ranges() {
        let mut v: FixedVector<i32, 6> = FixedVector::try_from(&[0, 1, 2, 3, 4][..]).unwrap();
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[3..], &[3, 4]);
        assert_eq!(&v[..=1], &[0, 1]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);
        v[1..3].copy_from_slice(&[10, 20]);
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn test_index_at_len_panics_even_with_spare_capacity() {
        let v: FixedVector<i32, 4> = FixedVector::try_from(&[1, 2][..]).unwrap();
        let _ = v[2];
    }

    #[test]
    #[should_panic]
    fn test_index_on_empty_panics() {
        let mut v: FixedVector<i32, 2> = FixedVector::default();
        v[0] = 1;
    }

    #[test]
    #[should_panic]
    fn test_range_past_len_panics() {
        let v: FixedVector<i32, 8> = FixedVector::try_from(&[1, 2, 3][..]).unwrap();
        let _ = &v[..4];
    }
}
