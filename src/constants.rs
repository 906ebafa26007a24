//! Core constants for the decimal digit trie.

/// Sentinel value for empty/null arena index.
///
/// Used to indicate:
/// - Empty child slot in Node.children
/// - Missing parent of the root node
pub const EMPTY: u32 = u32::MAX;

/// Arena index of the root node. The root is allocated first and never freed.
pub const ROOT: u32 = 0;

/// Branching factor: one child slot per decimal digit.
pub const RADIX: usize = 10;

/// Bitmap value with all 10 digit slots occupied.
pub const FULL_MASK: u16 = (1 << RADIX) - 1;

/// Digit width covering every non-negative 32-bit value (u32::MAX has 10 digits).
pub const DEFAULT_WIDTH_32: usize = 10;

/// Digit width covering every non-negative 64-bit value that fits below 10^19.
///
/// u64::MAX has 20 digits, but 10^20 overflows u64, so the universe stops at 10^19.
pub const DEFAULT_WIDTH_64: usize = 19;

/// Powers of ten up to 10^19, indexed by exponent.
pub const POW10: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < 20 {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Divisor selecting the digit handled at `level` in a trie of `width` levels.
///
/// Level 0 is the most significant digit; level `width - 1` has divisor 1.
#[inline(always)]
pub fn divisor(width: usize, level: usize) -> u64 {
    debug_assert!(level < width, "level out of bounds");
    POW10[width - 1 - level]
}

/// Decimal digit of `value` at the given divisor.
#[inline(always)]
pub fn digit_at(value: u64, divisor: u64) -> u8 {
    ((value / divisor) % RADIX as u64) as u8
}
