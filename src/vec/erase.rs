// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

impl<T, const N: usize> FixedVector<T, N> {
    /// Removes and returns the element at `index`, relocating `(index, len)`
    /// one slot toward the head.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len` (including any index
    /// into an empty vector). `O(len - index)`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::OutOfBounds);
        }

        // SAFETY: `index < len`, so the slot is live; after the read it is
        // vacant and the shift refills it from `index + 1` onwards.
        let out = unsafe {
            let out = self.take_at(index);
            self.shift_toward_head(index);
            out
        };

        self.len -= 1;
        Ok(out)
    }
}
