//! The hash-map used for half-edge lookups during mesh construction.
//!
//! The map is only queried by key, never iterated.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`] with its default hasher.
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, hashbrown::DefaultHashBuilder>;
