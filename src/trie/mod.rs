//! Trie node structures and main API.

mod basic;
mod iter;
mod node;
#[allow(clippy::module_inception)]
mod trie;

#[cfg(test)]
mod proptests;

pub use iter::Iter;
pub use node::Node;
pub use trie::MexTrie;
