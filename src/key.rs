//! Trait for trie key types (u32, u64, i32, i64).

use crate::constants::{DEFAULT_WIDTH_32, DEFAULT_WIDTH_64};
use crate::error::TrieError;

/// Trait for integer keys stored in the trie.
///
/// Keys are mapped onto the non-negative range `0..10^D` through `u64`.
/// Signed types are accepted so that negative input is rejected with an
/// error instead of being unrepresentable.
pub trait TrieKey: Copy + Eq + Ord + Sized + core::fmt::Debug {
    /// Widest decimal digit width this key type supports.
    ///
    /// - u32/i32: 10 digits (covers i32::MAX and u32::MAX)
    /// - u64/i64: 19 digits (universe 0..10^19)
    const MAX_WIDTH: usize;

    /// Convert key to its non-negative digit value.
    ///
    /// # Errors
    /// `TrieError::NegativeKey` for negative signed keys.
    ///
    /// # Performance
    /// O(1) - sign check and widening cast
    fn to_u64(self) -> Result<u64, TrieError>;

    /// Convert a stored value back to the key type.
    ///
    /// Truncates; only used for values that were produced by `to_u64`.
    ///
    /// # Performance
    /// O(1) - single cast
    fn from_u64(value: u64) -> Self;

    /// Checked conversion from a computed value.
    ///
    /// Used for mex results, which may lie beyond the key type's range.
    ///
    /// # Returns
    /// `None` if `value` is not representable as `Self`
    fn try_from_u64(value: u64) -> Option<Self>;
}

macro_rules! impl_unsigned_key {
    ($ty:ty, $width:expr) => {
        impl TrieKey for $ty {
            const MAX_WIDTH: usize = $width;

            #[inline(always)]
            fn to_u64(self) -> Result<u64, TrieError> {
                Ok(self as u64)
            }

            #[inline(always)]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn try_from_u64(value: u64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    };
}

macro_rules! impl_signed_key {
    ($ty:ty, $width:expr) => {
        impl TrieKey for $ty {
            const MAX_WIDTH: usize = $width;

            #[inline(always)]
            fn to_u64(self) -> Result<u64, TrieError> {
                if self < 0 {
                    return Err(TrieError::NegativeKey(self as i64));
                }
                Ok(self as u64)
            }

            #[inline(always)]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn try_from_u64(value: u64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    };
}

impl_unsigned_key!(u32, DEFAULT_WIDTH_32);
impl_unsigned_key!(u64, DEFAULT_WIDTH_64);
impl_signed_key!(i32, DEFAULT_WIDTH_32);
impl_signed_key!(i64, DEFAULT_WIDTH_64);
