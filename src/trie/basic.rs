//! Basic slot operations for Node.

use crate::constants::{EMPTY, FULL_MASK, RADIX};
use crate::trie::Node;

impl Node {
    /// Check if slot `digit` is occupied.
    ///
    /// On internal nodes this means a child exists; on leaf-level nodes it
    /// means the integer ending in `digit` is a member.
    ///
    /// # Performance
    /// O(1) - single bitmap check via bitwise AND
    #[inline(always)]
    pub fn has_child(&self, digit: u8) -> bool {
        self.bitmap & (1 << digit) != 0
    }

    /// Get child index at given digit.
    ///
    /// # Returns
    /// Arena index of child, or `EMPTY` (u32::MAX) if no child exists
    ///
    /// # Note
    /// Meaningless on leaf-level nodes, whose slots hold no children.
    #[inline(always)]
    pub fn get_child(&self, digit: u8) -> u32 {
        self.children[digit as usize]
    }

    /// Link child at given digit.
    ///
    /// Updates both bitmap and children array.
    #[inline(always)]
    pub fn set_child(&mut self, digit: u8, child_idx: u32) {
        self.bitmap |= 1 << digit;
        self.children[digit as usize] = child_idx;
    }

    /// Unlink child at given digit.
    ///
    /// Updates both bitmap and children array.
    #[inline]
    pub fn clear_child(&mut self, digit: u8) {
        self.bitmap &= !(1 << digit);
        self.children[digit as usize] = EMPTY;
    }

    /// Mark leaf slot `digit` as a member.
    ///
    /// # Returns
    /// `true` if the slot was vacant before
    #[inline]
    pub fn set_slot(&mut self, digit: u8) -> bool {
        let was_vacant = !self.has_child(digit);
        self.bitmap |= 1 << digit;
        was_vacant
    }

    /// Clear leaf slot `digit`.
    ///
    /// # Returns
    /// `true` if the slot was occupied before
    #[inline]
    pub fn clear_slot(&mut self, digit: u8) -> bool {
        let was_set = self.has_child(digit);
        self.bitmap &= !(1 << digit);
        was_set
    }

    /// No slot is occupied.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bitmap == 0
    }

    /// All 10 slots are occupied.
    ///
    /// For a leaf-level node this alone makes it full; internal nodes also
    /// need every child to be full.
    #[inline(always)]
    pub fn is_saturated(&self) -> bool {
        self.bitmap == FULL_MASK
    }

    /// Lowest vacant slot, or `None` if saturated.
    ///
    /// # Performance
    /// O(1) - trailing zero count on the inverted bitmap
    #[inline]
    pub fn min_vacant(&self) -> Option<u8> {
        let vacant = !self.bitmap & FULL_MASK;
        if vacant == 0 {
            None
        } else {
            Some(vacant.trailing_zeros() as u8)
        }
    }

    /// Occupied slots in ascending digit order.
    #[cfg(test)]
    #[inline]
    pub fn occupied(&self) -> impl Iterator<Item = u8> + '_ {
        (0..RADIX as u8).filter(move |&d| self.has_child(d))
    }
}
