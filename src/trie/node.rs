//! Trie node structure for 10-way decimal branching.

use crate::constants::{EMPTY, RADIX};

/// Trie node covering one decimal digit position.
///
/// Uses direct indexing for O(1) child access and a 10-bit bitmap for O(1)
/// occupancy checks.
///
/// # Levels
/// - Internal nodes: `children[d]` is the arena index of the subtree for
///   digit `d`, and bit `d` of `bitmap` is set iff that child exists.
/// - Leaf-level nodes (divisor 1): `children` stays all `EMPTY`. Bit `d`
///   of `bitmap` set means the integer `prefix + d` is a member.
///
/// # Memory Layout
/// - `children`: 40 bytes (10 × u32) - child indices
/// - `parent_idx`: 4 bytes - index of parent node (for upward walks)
/// - `bitmap`: 2 bytes - occupied slots
/// - `digit`: 1 byte - this node's slot in its parent
/// - `full`: 1 byte - saturation flag
/// - Total: 48 bytes per node
#[derive(Debug, Clone)]
pub struct Node {
    /// Direct-indexed children array.
    ///
    /// `children[i]` contains arena index of child at digit `i`,
    /// or `EMPTY` (u32::MAX) if no child exists.
    pub children: [u32; RADIX],

    /// Index of parent node in arena.
    ///
    /// Non-owning: used only to walk upward during flag propagation and
    /// trim-up. The root stores `EMPTY`.
    pub parent_idx: u32,

    /// Bitmap of occupied slots (bits 0-9).
    pub bitmap: u16,

    /// Slot index of this node in `parent.children`.
    pub digit: u8,

    /// Every value beneath this node is a member.
    ///
    /// True iff all 10 slots are occupied and, above leaf level, every
    /// child is itself full.
    pub full: bool,
}

impl Node {
    /// Create a new detached node (used for the root).
    #[inline]
    pub fn new() -> Self {
        Node {
            children: [EMPTY; RADIX],
            parent_idx: EMPTY,
            bitmap: 0,
            digit: 0,
            full: false,
        }
    }

    /// Create a node hanging under `parent_idx` at slot `digit`.
    #[inline]
    pub fn with_parent(parent_idx: u32, digit: u8) -> Self {
        Node {
            parent_idx,
            digit,
            ..Node::new()
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
