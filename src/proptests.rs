// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests: `FixedVector` against `Vec` as a reference model.

use crate::{
    testing::{counter, drops, DropCounter},
    Error, FixedVector,
};
use alloc::vec::Vec;
use proptest::prelude::*;

const TEST_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
enum Op {
    PushBack(u32),
    PushFront(u32),
    PopBack,
    PopFront,
    Insert(usize, u32),
    Erase(usize),
    Truncate(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::PushBack),
        3 => any::<u32>().prop_map(Op::PushFront),
        2 => Just(Op::PopBack),
        2 => Just(Op::PopFront),
        3 => (0..TEST_CAPACITY + 2, any::<u32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0..TEST_CAPACITY + 2).prop_map(Op::Erase),
        1 => (0..TEST_CAPACITY + 2).prop_map(Op::Truncate),
        1 => Just(Op::Clear),
    ]
}

fn apply(v: &mut FixedVector<u32, TEST_CAPACITY>, model: &mut Vec<u32>, op: &Op) {
    let full = model.len() == TEST_CAPACITY;
    match *op {
        Op::PushBack(x) => {
            let r = v.push_back(x);
            if full {
                assert_eq!(r, Err(Error::CapacityExceeded));
            } else {
                assert_eq!(r, Ok(()));
                model.push(x);
            }
        }
        Op::PushFront(x) => {
            let r = v.push_front(x);
            if full {
                assert_eq!(r, Err(Error::CapacityExceeded));
            } else {
                assert_eq!(r, Ok(()));
                model.insert(0, x);
            }
        }
        Op::PopBack => assert_eq!(v.pop_back(), model.pop()),
        Op::PopFront => {
            let expected = (!model.is_empty()).then(|| model.remove(0));
            assert_eq!(v.pop_front(), expected);
        }
        Op::Insert(i, x) => {
            let r = v.insert(i, x).map(|c| c.position());
            if i > model.len() {
                assert_eq!(r, Err(Error::OutOfBounds));
            } else if full {
                assert_eq!(r, Err(Error::CapacityExceeded));
            } else {
                assert_eq!(r, Ok(i));
                model.insert(i, x);
            }
        }
        Op::Erase(i) => {
            let r = v.erase(i);
            if i < model.len() {
                assert_eq!(r, Ok(model.remove(i)));
            } else {
                assert_eq!(r, Err(Error::OutOfBounds));
            }
        }
        Op::Truncate(n) => {
            v.truncate(n);
            model.truncate(n);
        }
        Op::Clear => {
            v.clear();
            model.clear();
        }
    }
}

proptest! {
    /// Property: any operation sequence keeps the vector equal to the model.
    #[test]
    fn ops_match_vec_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut v: FixedVector<u32, TEST_CAPACITY> = FixedVector::new();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut v, &mut model, op);
            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.as_slice(), model.as_slice());
        }
    }

    /// Property: push_back increases len by 1 until capacity, keeping insertion order.
    #[test]
    fn push_back_increments_len(values in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY)) {
        let mut v: FixedVector<u32, TEST_CAPACITY> = FixedVector::new();
        for (i, &x) in values.iter().enumerate() {
            prop_assert_eq!(v.len(), i);
            v.push_back(x).unwrap();
            prop_assert_eq!(v.len(), i + 1);
        }
        for (i, &x) in values.iter().enumerate() {
            prop_assert_eq!(v[i], x);
        }
    }

    /// Property: push_front then pop_front restores the sequence.
    #[test]
    fn push_front_pop_front_round_trip(
        values in prop::collection::vec(any::<u32>(), 0..TEST_CAPACITY),
        x in any::<u32>(),
    ) {
        let mut v = FixedVector::<u32, TEST_CAPACITY>::try_from(values.as_slice()).unwrap();
        v.push_front(x).unwrap();
        prop_assert_eq!(v.pop_front(), Some(x));
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    /// Property: insert at k puts x at k and moves the old element k to k + 1.
    #[test]
    fn insert_shifts_tail(
        values in prop::collection::vec(any::<u32>(), 0..TEST_CAPACITY),
        k in any::<prop::sample::Index>(),
        x in any::<u32>(),
    ) {
        let k = k.index(values.len() + 1);
        let mut v = FixedVector::<u32, TEST_CAPACITY>::try_from(values.as_slice()).unwrap();
        let p = (v.begin() + k as isize).position();
        v.insert(p, x).unwrap();
        prop_assert_eq!(v[k], x);
        if k < values.len() {
            prop_assert_eq!(v[k + 1], values[k]);
        }
        prop_assert_eq!(v.len(), values.len() + 1);
    }

    /// Property: erase at k removes exactly element k.
    #[test]
    fn erase_removes_one(
        values in prop::collection::vec(any::<u32>(), 1..=TEST_CAPACITY),
        k in any::<prop::sample::Index>(),
    ) {
        let k = k.index(values.len());
        let mut v = FixedVector::<u32, TEST_CAPACITY>::try_from(values.as_slice()).unwrap();
        prop_assert_eq!(v.erase(k), Ok(values[k]));
        let mut expected = values.clone();
        expected.remove(k);
        prop_assert_eq!(v.as_slice(), expected.as_slice());
    }

    /// Property: forward and reverse iteration agree with the slice.
    #[test]
    fn iteration_orders(values in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY)) {
        let v = FixedVector::<u32, TEST_CAPACITY>::try_from(values.as_slice()).unwrap();
        let forward: Vec<u32> = v.iter().copied().collect();
        let backward: Vec<u32> = v.iter().rev().copied().collect();
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(forward.len(), v.len());
        prop_assert_eq!(forward, values);
        prop_assert_eq!(backward, reversed);
    }

    /// Property: cursor arithmetic never leaves [0, len].
    #[test]
    fn cursor_positions_stay_bounded(
        len in 0..=TEST_CAPACITY,
        deltas in prop::collection::vec(any::<isize>(), 0..16),
    ) {
        let v = FixedVector::<u32, TEST_CAPACITY>::try_from_iter(0..len as u32).unwrap();
        let mut c = v.begin();
        for d in deltas {
            let expected = c.checked_offset(d);
            c += d;
            prop_assert!(c.position() <= v.len());
            if let Some(e) = expected {
                prop_assert_eq!(c, e);
            }
        }
    }

    /// Property: each element is dropped exactly once whatever the operation mix.
    #[test]
    fn every_element_dropped_once(ops in prop::collection::vec(op(), 0..48)) {
        let c = counter();
        let mut created = 0;
        let alive_at_end;
        {
            let mut v: FixedVector<DropCounter, TEST_CAPACITY> = FixedVector::new();
            for op in &ops {
                match *op {
                    Op::PushBack(_) => {
                        created += 1;
                        let _ = v.push_back(DropCounter::new(created, &c));
                    }
                    Op::PushFront(_) => {
                        created += 1;
                        let _ = v.push_front(DropCounter::new(created, &c));
                    }
                    Op::Insert(i, _) => {
                        created += 1;
                        let at = i.min(v.len());
                        let _ = v.insert(at, DropCounter::new(created, &c));
                    }
                    Op::PopBack => drop(v.pop_back()),
                    Op::PopFront => drop(v.pop_front()),
                    Op::Erase(i) => drop(v.erase(i)),
                    Op::Truncate(n) => v.truncate(n),
                    Op::Clear => v.clear(),
                }
            }
            alive_at_end = v.len();
            // A deep copy adds one more drop per surviving element.
            let copy = v.clone();
            prop_assert_eq!(copy.into_iter().take(1).count(), alive_at_end.min(1));
        }
        prop_assert_eq!(drops(&c), created as usize + alive_at_end);
    }
}
