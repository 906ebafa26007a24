//! Ascending iteration over stored keys.
//!
//! Pre-order traversal that visits digit 0 before digit 1 ... before 9 at
//! every level, so keys come out strictly ascending.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::constants::{divisor, RADIX, ROOT};
use crate::key::TrieKey;
use crate::trie::MexTrie;

/// One node on the traversal path.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node_idx: u32,
    level: usize,
    /// Value contributed by the digits above this node
    prefix: u64,
    /// Next slot to visit (0-10)
    next_digit: u8,
}

/// Iterator over keys in ascending order.
///
/// Holds an explicit stack of at most D frames instead of recursing.
///
/// # Performance
/// - O(D) memory
/// - O(len × D) for a full pass; each node is entered once
///
/// # Example
/// ```rust
/// use mex_trie::MexTrie;
///
/// let trie = MexTrie::<u64>::from_keys([30, 10, 20]).unwrap();
/// let keys: Vec<u64> = trie.iter().collect();
/// assert_eq!(keys, vec![10, 20, 30]);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<'a, K: TrieKey> {
    trie: &'a MexTrie<K>,
    stack: Vec<Frame>,
    /// Keys not yet yielded
    remaining: usize,
}

impl<'a, K: TrieKey> Iter<'a, K> {
    pub(crate) fn new(trie: &'a MexTrie<K>) -> Self {
        let mut stack = Vec::with_capacity(trie.width());
        if !trie.is_empty() {
            stack.push(Frame {
                node_idx: ROOT,
                level: 0,
                prefix: 0,
                next_digit: 0,
            });
        }

        Iter {
            trie,
            stack,
            remaining: trie.len(),
        }
    }
}

impl<K: TrieKey> Iterator for Iter<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let trie = self.trie;
        let leaf_level = trie.width() - 1;

        loop {
            let frame = self.stack.last_mut()?;
            if frame.next_digit as usize == RADIX {
                self.stack.pop();
                continue;
            }

            let digit = frame.next_digit;
            frame.next_digit += 1;

            let node = trie.node(frame.node_idx);
            if !node.has_child(digit) {
                continue;
            }

            let value = frame.prefix + digit as u64 * divisor(trie.width(), frame.level);
            if frame.level == leaf_level {
                self.remaining -= 1;
                return Some(K::from_u64(value));
            }

            let child = Frame {
                node_idx: node.get_child(digit),
                level: frame.level + 1,
                prefix: value,
                next_digit: 0,
            };
            self.stack.push(child);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: TrieKey> ExactSizeIterator for Iter<'_, K> {}

impl<K: TrieKey> FusedIterator for Iter<'_, K> {}
