// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedVector`](crate::FixedVector).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence of at most `N` elements. Longer input
//!   is rejected as soon as element `N + 1` is seen (or up front, when the
//!   format reports the length).
//!
//! No extra bounds are placed on `T` beyond `Serialize` / `Deserialize`.

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for FixedVector<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.as_slice())
    }
}

struct FixedVectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> de::Visitor<'de> for FixedVectorVisitor<T, N> {
    type Value = FixedVector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        if let Some(hint) = a.size_hint() {
            if hint > N {
                return Err(de::Error::invalid_length(hint, &self));
            }
        }

        let mut out = FixedVector::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedVector<T, N> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(FixedVectorVisitor::<T, N>(PhantomData))
    }
}
