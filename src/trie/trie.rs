//! Main trie structure for the minimum-excludant integer set.

use crate::arena::NodeArena;
use crate::constants::{digit_at, divisor, EMPTY, POW10, RADIX, ROOT};
use crate::error::TrieError;
use crate::key::TrieKey;
use crate::trie::{Iter, Node};

/// Set of non-negative integers with constant-depth mex queries.
///
/// A decimal digit trie of fixed width D: every stored integer is a path
/// of D digits from the root (most significant first) down to a slot in a
/// leaf-level node. Nodes whose whole subtree is populated carry a `full`
/// flag, which lets [`next_int`](Self::next_int) skip saturated subtrees
/// without looking inside them.
///
/// # Architecture
/// - 10-way branching trie (one decimal digit per level)
/// - Arena allocation, nodes addressed by `u32` index
/// - Lazy allocation: nodes are created along the insertion path
/// - Self-trimming: nodes left empty by a removal are freed immediately
///
/// # Performance Characteristics
/// - add / remove / contains: O(D)
/// - next_int: O(D × 10), independent of the number of stored keys
/// - Memory: O(len × D) nodes, 48 bytes each
///
/// # Concurrency
/// Single-threaded. Wrap in a lock for shared mutation.
///
/// # Example
/// ```rust
/// use mex_trie::MexTrie;
///
/// let mut trie = MexTrie::<u32>::new();
/// for i in 0..10 {
///     trie.add(i).unwrap();
/// }
/// assert_eq!(trie.next_int(), Some(10));
///
/// trie.remove(4).unwrap();
/// assert_eq!(trie.next_int(), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct MexTrie<K: TrieKey> {
    /// Node storage; the root lives at index `ROOT` and is never freed
    nodes: NodeArena,

    /// Number of decimal digit levels (D)
    width: usize,

    /// Number of keys stored in the trie
    len: usize,

    /// Phantom data to associate with key type
    _phantom: core::marker::PhantomData<K>,
}

impl<K: TrieKey> MexTrie<K> {
    /// Create a new empty trie spanning every digit the key type can hold.
    ///
    /// Width is `K::MAX_WIDTH`: 10 digits for 32-bit keys, 19 for 64-bit.
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::MexTrie;
    ///
    /// let trie = MexTrie::<u32>::new();
    /// assert_eq!(trie.width(), 10);
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::build(K::MAX_WIDTH)
    }

    /// Create a new empty trie over the universe `0..10^width`.
    ///
    /// Narrower tries are shallower, so every operation touches fewer nodes.
    ///
    /// # Errors
    /// `TrieError::InvalidWidth` unless `1 <= width <= K::MAX_WIDTH`
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::{MexTrie, TrieError};
    ///
    /// let trie = MexTrie::<u32>::with_width(3).unwrap();
    /// assert_eq!(trie.universe(), 1000);
    ///
    /// assert_eq!(
    ///     MexTrie::<u32>::with_width(11).unwrap_err(),
    ///     TrieError::InvalidWidth { width: 11, max: 10 }
    /// );
    /// ```
    pub fn with_width(width: usize) -> Result<Self, TrieError> {
        if width == 0 || width > K::MAX_WIDTH {
            return Err(TrieError::InvalidWidth {
                width,
                max: K::MAX_WIDTH,
            });
        }
        Ok(Self::build(width))
    }

    /// Create a trie holding every key of `keys`.
    ///
    /// Duplicates are ignored.
    ///
    /// # Errors
    /// The first key that `add` rejects.
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::MexTrie;
    ///
    /// let trie = MexTrie::<u32>::from_keys([5, 1, 5, 0]).unwrap();
    /// assert_eq!(trie.to_vec(), vec![0, 1, 5]);
    /// ```
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Result<Self, TrieError> {
        let mut trie = Self::new();
        trie.add_all(keys)?;
        Ok(trie)
    }

    /// Create a trie of the given digit width holding every key of `keys`.
    ///
    /// # Errors
    /// `InvalidWidth` as in [`with_width`](Self::with_width), then the
    /// first key that `add` rejects.
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::{MexTrie, TrieError};
    ///
    /// let trie = MexTrie::<u32>::from_keys_with_width(2, [0, 1, 3]).unwrap();
    /// assert_eq!(trie.width(), 2);
    /// assert_eq!(trie.next_int(), Some(2));
    ///
    /// assert_eq!(
    ///     MexTrie::<u32>::from_keys_with_width(2, [100]).unwrap_err(),
    ///     TrieError::KeyTooWide { key: 100, width: 2 }
    /// );
    /// ```
    pub fn from_keys_with_width<I: IntoIterator<Item = K>>(
        width: usize,
        keys: I,
    ) -> Result<Self, TrieError> {
        let mut trie = Self::with_width(width)?;
        trie.add_all(keys)?;
        Ok(trie)
    }

    fn build(width: usize) -> Self {
        let mut nodes = NodeArena::with_capacity(width);
        nodes.insert(Node::new());

        Self {
            nodes,
            width,
            len: 0,
            _phantom: core::marker::PhantomData,
        }
    }

    /// Add a key to the set.
    ///
    /// Walks the digits of `key` from the most significant down, creating
    /// missing nodes, then marks the leaf slot and propagates `full` upward.
    ///
    /// # Returns
    /// * `Ok(true)` if the key was newly inserted
    /// * `Ok(false)` if the key already existed
    ///
    /// # Errors
    /// `NegativeKey` or `KeyTooWide`; the trie is left untouched.
    ///
    /// # Performance
    /// O(D) - creates at most D - 1 nodes
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::MexTrie;
    ///
    /// let mut trie = MexTrie::<u32>::new();
    /// assert_eq!(trie.add(42), Ok(true));   // New key
    /// assert_eq!(trie.add(42), Ok(false));  // Already exists
    /// ```
    pub fn add(&mut self, key: K) -> Result<bool, TrieError> {
        let value = self.value_of(key)?;
        let leaf_idx = self.traverse_to_leaf(value);

        if !self.nodes.get_mut(leaf_idx).set_slot(digit_at(value, 1)) {
            return Ok(false);
        }

        self.len += 1;
        self.propagate_full(leaf_idx);
        Ok(true)
    }

    /// Add every key of `keys`.
    ///
    /// Stops at the first rejected key; keys before it stay added.
    ///
    /// # Returns
    /// Number of keys that were not already members
    pub fn add_all<I: IntoIterator<Item = K>>(&mut self, keys: I) -> Result<usize, TrieError> {
        let mut added = 0;
        for key in keys {
            if self.add(key)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Remove a key from the set.
    ///
    /// Clears the leaf slot, clears the `full` flag on every ancestor that
    /// had it, then frees nodes left without children, bottom-up.
    ///
    /// # Returns
    /// * `Ok(true)` if the key was removed (existed before)
    /// * `Ok(false)` if the key didn't exist
    ///
    /// # Errors
    /// `NegativeKey` or `KeyTooWide`; the trie is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::MexTrie;
    ///
    /// let mut trie = MexTrie::<u32>::new();
    /// assert_eq!(trie.remove(42), Ok(false));  // Key doesn't exist
    /// trie.add(42).unwrap();
    /// assert_eq!(trie.remove(42), Ok(true));   // Key removed
    /// assert_eq!(trie.remove(42), Ok(false));  // Key no longer exists
    /// ```
    pub fn remove(&mut self, key: K) -> Result<bool, TrieError> {
        let value = self.value_of(key)?;
        let leaf_idx = match self.find_leaf(value) {
            Some(idx) => idx,
            None => return Ok(false),
        };

        if !self.nodes.get_mut(leaf_idx).clear_slot(digit_at(value, 1)) {
            return Ok(false);
        }

        self.len -= 1;
        self.clear_full(leaf_idx);
        self.trim_up(leaf_idx);
        Ok(true)
    }

    /// Check if a key is in the set.
    ///
    /// Read-only: stops at the first missing node.
    ///
    /// # Errors
    /// `NegativeKey` or `KeyTooWide`.
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::MexTrie;
    ///
    /// let mut trie = MexTrie::<u32>::new();
    /// assert_eq!(trie.contains(42), Ok(false));
    /// trie.add(42).unwrap();
    /// assert_eq!(trie.contains(42), Ok(true));
    /// ```
    pub fn contains(&self, key: K) -> Result<bool, TrieError> {
        let value = self.value_of(key)?;
        Ok(self
            .find_leaf(value)
            .is_some_and(|idx| self.nodes.get(idx).has_child(digit_at(value, 1))))
    }

    /// Smallest non-negative integer not in the set (the mex).
    ///
    /// # Algorithm
    /// At each level, scan digits 0..9:
    /// - missing child: the whole subtree is free, answer is
    ///   `prefix + digit × divisor` (lower digits all zero)
    /// - child not full: a gap exists below, descend into it
    /// - child full: saturated, try the next digit
    ///
    /// At leaf level the answer is the lowest vacant slot. The walk never
    /// backtracks.
    ///
    /// # Returns
    /// `None` only if every value of the universe is stored, or the mex does
    /// not fit in `K` (e.g. 2^31 for `i32` keys).
    ///
    /// # Performance
    /// O(D) nodes visited, independent of `len()`
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::MexTrie;
    ///
    /// let mut trie = MexTrie::<u32>::new();
    /// assert_eq!(trie.next_int(), Some(0));
    ///
    /// trie.add_all([0, 1, 2, 4, 5]).unwrap();
    /// assert_eq!(trie.next_int(), Some(3));
    /// ```
    pub fn next_int(&self) -> Option<K> {
        self.mex().and_then(K::try_from_u64)
    }

    /// Take the mex and add it in one step.
    ///
    /// # Errors
    /// `TrieError::Exhausted` when no free value remains.
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::MexTrie;
    ///
    /// let mut ids = MexTrie::<u32>::new();
    /// assert_eq!(ids.allocate(), Ok(0));
    /// assert_eq!(ids.allocate(), Ok(1));
    /// ids.remove(0).unwrap();
    /// assert_eq!(ids.allocate(), Ok(0));
    /// ```
    pub fn allocate(&mut self) -> Result<K, TrieError> {
        let key = self
            .next_int()
            .ok_or(TrieError::Exhausted { width: self.width })?;
        let added = self.add(key)?;
        debug_assert!(added, "mex {:?} was already a member", key);
        Ok(key)
    }

    /// All stored keys in ascending order.
    ///
    /// # Performance
    /// O(len × D)
    ///
    /// # Example
    /// ```rust
    /// use mex_trie::MexTrie;
    ///
    /// let trie = MexTrie::<u32>::from_keys([100, 7, 42]).unwrap();
    /// assert_eq!(trie.to_vec(), vec![7, 42, 100]);
    /// ```
    pub fn to_vec(&self) -> alloc::vec::Vec<K> {
        self.iter().collect()
    }

    /// Iterate over stored keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Get the number of keys in the trie.
    ///
    /// # Performance
    /// O(1) - returns cached value
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the trie is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every key.
    ///
    /// Drops all nodes at once and leaves a fresh root.
    pub fn clear(&mut self) {
        self.nodes.reset_to(1);
        *self.nodes.get_mut(ROOT) = Node::new();
        self.len = 0;
    }

    /// Decimal digit width D.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Size of the key universe, `10^width`.
    #[inline]
    pub fn universe(&self) -> u64 {
        POW10[self.width]
    }

    /// Number of live nodes, root included.
    ///
    /// Bounded by `1 + len × (D - 1)` because removal trims empty nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node at `idx`, for traversal by the iterator.
    #[inline(always)]
    pub(crate) fn node(&self, idx: u32) -> &Node {
        self.nodes.get(idx)
    }

    /// Validate `key` and map it into the digit universe.
    fn value_of(&self, key: K) -> Result<u64, TrieError> {
        let value = key.to_u64()?;
        if value >= POW10[self.width] {
            return Err(TrieError::KeyTooWide {
                key: value,
                width: self.width,
            });
        }
        Ok(value)
    }

    /// Walk to the leaf-level node for `value`, creating nodes as needed.
    fn traverse_to_leaf(&mut self, value: u64) -> u32 {
        let mut current_idx = ROOT;

        for level in 0..self.width - 1 {
            let digit = digit_at(value, divisor(self.width, level));

            let child_idx = {
                let node = self.nodes.get(current_idx);
                if node.has_child(digit) {
                    Some(node.get_child(digit))
                } else {
                    None
                }
            };

            current_idx = match child_idx {
                Some(idx) => idx,
                None => {
                    let new_idx = self.nodes.insert(Node::with_parent(current_idx, digit));
                    self.nodes.get_mut(current_idx).set_child(digit, new_idx);
                    new_idx
                }
            };
        }

        current_idx
    }

    /// Walk to the leaf-level node for `value` without creating anything.
    fn find_leaf(&self, value: u64) -> Option<u32> {
        let mut current_idx = ROOT;

        for level in 0..self.width - 1 {
            let digit = digit_at(value, divisor(self.width, level));
            let node = self.nodes.get(current_idx);

            if !node.has_child(digit) {
                return None;
            }
            current_idx = node.get_child(digit);
        }

        Some(current_idx)
    }

    /// Mark `leaf_idx` and its ancestors full for as long as they saturate.
    ///
    /// Stops at the first ancestor with a missing or non-full child; its
    /// own ancestors cannot have become full either.
    fn propagate_full(&mut self, leaf_idx: u32) {
        if !self.nodes.get(leaf_idx).is_saturated() {
            return;
        }

        let mut current_idx = leaf_idx;
        loop {
            let node = self.nodes.get_mut(current_idx);
            node.full = true;

            let parent_idx = node.parent_idx;
            if parent_idx == EMPTY || !self.children_full(parent_idx) {
                break;
            }
            current_idx = parent_idx;
        }
    }

    /// All 10 children of internal node `idx` exist and are full.
    fn children_full(&self, idx: u32) -> bool {
        let node = self.nodes.get(idx);
        node.is_saturated()
            && node
                .children
                .iter()
                .all(|&child_idx| self.nodes.get(child_idx).full)
    }

    /// Clear `full` from `leaf_idx` upward until a node without it.
    ///
    /// A node that was not full has no full ancestors.
    fn clear_full(&mut self, leaf_idx: u32) {
        let mut current_idx = leaf_idx;
        while current_idx != EMPTY {
            let node = self.nodes.get_mut(current_idx);
            if !node.full {
                break;
            }
            node.full = false;
            current_idx = node.parent_idx;
        }
    }

    /// Free empty nodes from `idx` upward.
    ///
    /// # Algorithm
    /// 1. Stop at the root or at the first node with a remaining slot
    /// 2. Otherwise unlink the node from its parent via `node.digit`
    /// 3. Free it and continue with the parent
    fn trim_up(&mut self, idx: u32) {
        let mut current_idx = idx;

        while current_idx != ROOT {
            let node = self.nodes.get(current_idx);
            if !node.is_empty() {
                break;
            }

            let (parent_idx, digit) = (node.parent_idx, node.digit);
            self.nodes.get_mut(parent_idx).clear_child(digit);
            self.nodes.free(current_idx);

            current_idx = parent_idx;
        }
    }

    /// Top-down mex search over raw values.
    fn mex(&self) -> Option<u64> {
        if self.nodes.get(ROOT).full {
            return None;
        }

        let mut current_idx = ROOT;
        let mut prefix = 0u64;

        for level in 0..self.width - 1 {
            let div = divisor(self.width, level);
            let node = self.nodes.get(current_idx);

            let mut gap = None;
            for digit in 0..RADIX as u8 {
                if !node.has_child(digit) {
                    return Some(prefix + digit as u64 * div);
                }
                let child_idx = node.get_child(digit);
                if !self.nodes.get(child_idx).full {
                    gap = Some((digit, child_idx));
                    break;
                }
            }

            // A non-full node always has a missing or non-full child
            let (digit, child_idx) = gap?;
            prefix += digit as u64 * div;
            current_idx = child_idx;
        }

        self.nodes
            .get(current_idx)
            .min_vacant()
            .map(|digit| prefix + digit as u64)
    }
}

impl<K: TrieKey> Default for MexTrie<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K: TrieKey> IntoIterator for &'a MexTrie<K> {
    type Item = K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl<K: TrieKey> MexTrie<K> {
    /// Walk every live node and assert the structural invariants.
    pub(crate) fn assert_invariants(&self) {
        let mut stack = alloc::vec![(ROOT, 0usize)];
        let mut members = 0;
        let mut live = 0;

        while let Some((idx, level)) = stack.pop() {
            live += 1;
            let node = self.nodes.get(idx);

            if idx != ROOT {
                assert!(!node.is_empty(), "empty non-root node {}", idx);
                let parent = self.nodes.get(node.parent_idx);
                assert_eq!(parent.get_child(node.digit), idx, "broken parent link");
            }

            if level == self.width - 1 {
                members += node.bitmap.count_ones() as usize;
                assert_eq!(node.full, node.is_saturated(), "leaf full flag at {}", idx);
            } else {
                for digit in 0..RADIX as u8 {
                    assert_eq!(
                        node.has_child(digit),
                        node.get_child(digit) != EMPTY,
                        "bitmap disagrees with children at {}",
                        idx
                    );
                }
                assert_eq!(node.full, self.children_full(idx), "full flag at {}", idx);
                for digit in node.occupied() {
                    stack.push((node.get_child(digit), level + 1));
                }
            }
        }

        assert_eq!(members, self.len, "len out of sync");
        assert_eq!(live, self.nodes.len(), "leaked nodes");
    }
}
