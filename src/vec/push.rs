// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

impl<T, const N: usize> FixedVector<T, N> {
    /// Appends `value` at slot `len`.
    ///
    /// Returns [`Error::CapacityExceeded`] if the vector is full; `value` is
    /// dropped and the vector is unchanged. `O(1)`.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        if self.len == N {
            log::debug!("push_back rejected: vector is full (capacity {N})");
            return Err(Error::CapacityExceeded);
        }

        self.construct_at(self.len, value);

        self.len += 1;
        Ok(())
    }

    /// Prepends `value` at slot 0, relocating every element one slot toward
    /// the tail.
    ///
    /// Returns [`Error::CapacityExceeded`] if the vector is full; `value` is
    /// dropped and the vector is unchanged. `O(len)`.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<(), Error> {
        if self.len == N {
            log::debug!("push_front rejected: vector is full (capacity {N})");
            return Err(Error::CapacityExceeded);
        }

        // SAFETY: `0 <= len < N`.
        unsafe { self.shift_toward_tail(0) };
        self.construct_at(0, value);

        self.len += 1;
        Ok(())
    }

    /// Clones every element of `src` onto the back if they all fit; otherwise
    /// no-op and returns [`Error::CapacityExceeded`].
    ///
    /// If a `clone` panics, the elements appended so far stay in the vector.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > N - self.len {
            log::debug!(
                "extend_from_slice rejected: {} element(s) do not fit in {} free slot(s)",
                src.len(),
                N - self.len
            );
            return Err(Error::CapacityExceeded);
        }

        for item in src {
            self.construct_at(self.len, item.clone());
            self.len += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        testing::{counter, drops, DropCounter},
        vec::FixedVector,
        Error,
    };
    use alloc::string::{String, ToString};

    #[test]
    fn test_push_back_keeps_insertion_order() {
        let mut v: FixedVector<i32, 5> = FixedVector::new();
        for i in 0..5 {
            assert_eq!(v.len(), i as usize);
            v.push_back(i * 10).unwrap();
        }
        for i in 0..5 {
            assert_eq!(v[i], i as i32 * 10);
        }
    }

    #[test]
    fn test_push_front_reverses_order() {
        let mut v: FixedVector<String, 3> = FixedVector::new();
        v.push_front("c".to_string()).unwrap();
        v.push_front("b".to_string()).unwrap();
        v.push_front("a".to_string()).unwrap();
        assert_eq!(v.as_slice(), &["a", "b", "c"]);
        assert_eq!(v.push_front("z".to_string()), Err(Error::CapacityExceeded));
        assert_eq!(v.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn test_rejected_push_drops_the_value_once() {
        let c = counter();
        let mut v: FixedVector<DropCounter, 1> = FixedVector::new();
        v.push_back(DropCounter::new(1, &c)).unwrap();
        assert!(v.push_back(DropCounter::new(2, &c)).is_err());
        assert!(v.push_front(DropCounter::new(3, &c)).is_err());
        assert_eq!(drops(&c), 2);
        drop(v);
        assert_eq!(drops(&c), 3);
    }

    #[test]
    fn test_push_front_relocates_without_dropping() {
        let c = counter();
        let mut v: FixedVector<DropCounter, 4> = FixedVector::new();
        for id in 0..4 {
            v.push_front(DropCounter::new(id, &c)).unwrap();
        }
        assert_eq!(drops(&c), 0);
        assert_eq!(v.iter().map(|d| d.id).collect::<alloc::vec::Vec<_>>(), [3, 2, 1, 0]);
    }

    #[test]
    fn test_extend_from_slice_is_all_or_nothing() {
        let mut v: FixedVector<i32, 4> = FixedVector::new();
        v.extend_from_slice(&[1, 2]).unwrap();
        assert_eq!(v.extend_from_slice(&[3, 4, 5]), Err(Error::CapacityExceeded));
        assert_eq!(v.as_slice(), &[1, 2]);
        v.extend_from_slice(&[3, 4]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        v.extend_from_slice(&[]).unwrap();
    }

    #[test]
    fn test_extend_from_slice_panicking_clone_keeps_prefix() {
        let c = counter();
        let src = [
            DropCounter::new(1, &c),
            DropCounter::new(-1, &c),
            DropCounter::new(3, &c),
        ];
        let mut v: FixedVector<DropCounter, 4> = FixedVector::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            v.extend_from_slice(&src).unwrap();
        }));
        assert!(result.is_err());
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].id, 1);
        drop(v);
        assert_eq!(drops(&c), 1);
    }
}
