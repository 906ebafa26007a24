//! Error type for trie operations.

use thiserror::Error;

/// Errors raised by [`MexTrie`](crate::MexTrie) operations.
///
/// Every error is reported before the trie is touched: a failed call
/// leaves the set exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// Key is below zero. Only non-negative integers can be stored.
    #[error("key {0} is negative")]
    NegativeKey(i64),

    /// Key needs more decimal digits than the trie was built with.
    #[error("key {key} does not fit in {width} decimal digits")]
    KeyTooWide { key: u64, width: usize },

    /// Requested digit width is zero or wider than the key type allows.
    #[error("digit width {width} is outside 1..={max}")]
    InvalidWidth { width: usize, max: usize },

    /// Every value of the universe is already allocated.
    #[error("no free value left in {width}-digit universe")]
    Exhausted { width: usize },
}
