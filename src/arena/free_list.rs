//! Free list of recycled arena slots.

use alloc::vec::Vec;

/// Stack of arena indices whose elements have been freed.
///
/// LIFO order keeps the most recently touched (and likely cached) slot
/// first in line for reuse.
#[derive(Debug, Clone, Default)]
pub struct FreeList {
    slots: Vec<u32>,
}

impl FreeList {
    /// Create a new empty free list.
    pub fn new() -> Self {
        FreeList { slots: Vec::new() }
    }

    /// Record `index` as available.
    #[inline]
    pub fn push(&mut self, index: u32) {
        self.slots.push(index);
    }

    /// Take the most recently freed index, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<u32> {
        self.slots.pop()
    }

    /// Number of recycled slots waiting for reuse.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Forget all recycled slots.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
