//! Arena structure for Node storage

use alloc::vec::Vec;

use crate::arena::FreeList;
use crate::trie::Node;

/// Generic arena for storing trie elements.
///
/// Provides contiguous memory allocation with O(1) access by index.
/// Freed slots are kept in a [`FreeList`] and handed out again before the
/// backing `Vec` grows.
///
/// # Type Parameters
/// * `T` - Element type
///
/// # Memory Layout
/// - Elements stored contiguously in Vec
/// - Index-based access (u32 indices)
/// - Freed elements stay in place until their slot is reused
///
/// # Performance
/// - Allocation: O(1) amortized
/// - Access: O(1) by index
/// - Free: O(1)
#[derive(Debug, Clone)]
pub struct Arena<T> {
    /// Storage for elements.
    ///
    /// Index in this Vec is the arena index used for references.
    elements: Vec<T>,

    /// Slots released by `free`, reused by `insert`.
    free: FreeList,
}

impl<T> Arena<T> {
    /// Create a new empty arena.
    #[inline]
    pub fn new() -> Self {
        Arena {
            elements: Vec::new(),
            free: FreeList::new(),
        }
    }

    /// Create arena with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Number of elements to pre-allocate
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            elements: Vec::with_capacity(capacity),
            free: FreeList::new(),
        }
    }

    /// Store `element`, reusing a freed slot when one is available.
    ///
    /// # Returns
    /// Arena index of the stored element
    ///
    /// # Performance
    /// O(1) amortized - free list pop or Vec push
    #[inline]
    pub fn insert(&mut self, element: T) -> u32 {
        match self.free.pop() {
            Some(index) => {
                self.elements[index as usize] = element;
                index
            }
            None => {
                let index = self.elements.len() as u32;
                self.elements.push(element);
                index
            }
        }
    }

    /// Release the slot at `index` for reuse.
    ///
    /// The element stays in memory until the slot is handed out again;
    /// callers must drop every reference to `index` first.
    #[inline]
    pub fn free(&mut self, index: u32) {
        debug_assert!((index as usize) < self.elements.len(), "index out of bounds");
        self.free.push(index);
    }

    /// Get element by index.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    #[inline(always)]
    pub fn get(&self, index: u32) -> &T {
        &self.elements[index as usize]
    }

    /// Get mutable element by index.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    #[inline(always)]
    pub fn get_mut(&mut self, index: u32) -> &mut T {
        &mut self.elements[index as usize]
    }

    /// Number of live elements (allocated minus freed).
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len() - self.free.len()
    }

    /// Number of slots ever allocated, live or free.
    #[cfg(test)]
    #[inline]
    pub fn slots(&self) -> usize {
        self.elements.len()
    }

    #[cfg(test)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every element from index `len` on and forget all freed slots.
    ///
    /// Bulk deallocation: used to reset the trie to its root alone.
    pub fn reset_to(&mut self, len: usize) {
        self.elements.truncate(len);
        self.free.clear();
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for Node arena.
///
/// Used for storing trie nodes at all levels.
pub type NodeArena = Arena<Node>;
