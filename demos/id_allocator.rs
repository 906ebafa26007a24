//! Id allocator example for mex-trie.
//!
//! Hands out the smallest free id, recycles released ids, and rejects
//! input outside the configured universe.

use mex_trie::{MexTrie, TrieError};

fn main() -> Result<(), TrieError> {
    println!("=== mex-trie - Id Allocator Example ===\n");

    // Four decimal digits: ids 0..=9999
    let mut ids = MexTrie::<i32>::with_width(4)?;
    println!("Universe: 0..{}", ids.universe());

    println!("\nAllocating five ids:");
    for _ in 0..5 {
        println!("  got {}", ids.allocate()?);
    }

    println!("\nReleasing 1 and 3");
    ids.remove(1)?;
    ids.remove(3)?;
    println!("  next_int: {:?}", ids.next_int());

    println!("\nAllocating again reuses the lowest gap:");
    println!("  got {}", ids.allocate()?);
    println!("  got {}", ids.allocate()?);
    println!("  got {}", ids.allocate()?);

    println!("\nReserving a block 10..20");
    let added = ids.add_all(10..20)?;
    println!("  {} new ids, len {}", added, ids.len());
    println!("  sorted: {:?}", ids.to_vec());

    println!("\nRejected input:");
    println!("  add(-1):    {:?}", ids.add(-1));
    println!("  add(10000): {:?}", ids.add(10_000));

    println!("\nStorage: {} nodes for {} ids", ids.node_count(), ids.len());
    ids.clear();
    println!("After clear: len {}, next_int {:?}", ids.len(), ids.next_int());

    Ok(())
}
