// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test helpers: an element type that counts its drops.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Element that bumps a shared counter when dropped.
///
/// Cloning an element with a negative `id` panics, which lets tests exercise
/// a failing copy in the middle of a bulk operation.
#[derive(Debug)]
pub(crate) struct DropCounter {
    pub(crate) id: i32,
    drops: Arc<AtomicUsize>,
}

impl DropCounter {
    pub(crate) fn new(id: i32, drops: &Arc<AtomicUsize>) -> Self {
        Self {
            id,
            drops: Arc::clone(drops),
        }
    }
}

impl Clone for DropCounter {
    fn clone(&self) -> Self {
        if self.id < 0 {
            panic!("clone of poisoned element {}", self.id);
        }
        Self::new(self.id, &self.drops)
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

pub(crate) fn drops(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
