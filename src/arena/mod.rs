//! Index-addressed node storage.
//!
//! Nodes live in a contiguous arena and refer to each other by `u32` index,
//! so parent back-references never own anything. Freed slots are recycled
//! through a free list.

#[allow(clippy::module_inception)]
mod arena;
mod free_list;

pub use arena::NodeArena;
pub use free_list::FreeList;
