//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{Bounded, FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a symbol index.
///
/// These are constrained to be unsigned primitive integers;
/// such that the largest index in a table is less than `T::max_value()`,
/// which is reserved as the "not found" sentinel.
pub trait IndexType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Bounded
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IndexType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Bounded
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// The index type used by [`crate::vocab::Vocabulary`] and [`crate::corpus::Sentence`].
pub type SymbolId = u32;

/// A token position within a sentence.
pub type Position = u32;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type AVHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> AVHashMap<K, V> {
            AVHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> AVHashMap<K, V> {
            AVHashMap::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type AVHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> AVHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> AVHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type AVHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> AVHashMap<K, V> {
            AVHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> AVHashMap<K, V> {
            AVHashMap::with_capacity(capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_index_types() {
        struct IsIndex<T: IndexType>(PhantomData<T>);

        let _: IsIndex<u16>;
        let _: IsIndex<u32>;
        let _: IsIndex<u64>;
        let _: IsIndex<usize>;
    }

    #[test]
    fn test_hash_map_new() {
        let mut map: AVHashMap<String, u32> = hash_map_with_capacity(4);
        map.insert("a".to_string(), 0);
        assert_eq!(map.get("a"), Some(&0));

        let empty: AVHashMap<String, u32> = hash_map_new();
        assert!(empty.is_empty());
    }
}
