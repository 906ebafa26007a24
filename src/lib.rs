//! # mex-trie
//!
//! Set of non-negative integers stored as a fixed-depth decimal digit trie.
//! Answers "smallest integer not in the set" (the mex) in time bounded by
//! the digit width, independent of how many integers are stored.
//!
//! ## Features
//! - O(D) add, remove, contains and mex, where D is the decimal digit width
//! - Saturated subtrees are flagged `full` and skipped by the mex search
//! - Self-trimming: empty nodes are freed on removal
//! - Ascending iteration by pre-order traversal
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use mex_trie::MexTrie;
//!
//! let mut ids = MexTrie::<u32>::new();
//! for id in [0, 1, 2, 4, 5] {
//!     ids.add(id).unwrap();
//! }
//! assert_eq!(ids.next_int(), Some(3));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod arena;
mod constants;
mod error;
mod key;
mod trie;

pub use constants::{DEFAULT_WIDTH_32, DEFAULT_WIDTH_64};
pub use error::TrieError;
pub use key::TrieKey;
pub use trie::{Iter, MexTrie};
