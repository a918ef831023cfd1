//! Fixed-capacity cache with insertion-order eviction.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A capacity-bounded associative store.
///
/// When inserting a new key would exceed the configured capacity, the oldest
/// *inserted* key still present is evicted first. Eviction order is pure
/// insertion order: reads do not promote entries, and overwriting an existing
/// key keeps its original position. This is deliberately the simplest
/// possible bound, not an LRU.
///
/// There is no time-based expiry; entries leave only by eviction.
///
/// # Thread Safety
///
/// Not synchronized. For concurrent access, wrap in appropriate
/// synchronization primitives.
///
/// # Example
///
/// ```rust
/// use breeze_styles::BoundedCache;
///
/// let mut cache = BoundedCache::new(2);
/// cache.set("a", 1);
/// cache.set("b", 2);
/// cache.set("c", 3); // evicts "a"
///
/// assert!(!cache.has(&"a"));
/// assert_eq!(cache.get(&"b"), Some(&2));
/// assert_eq!(cache.get(&"c"), Some(&3));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    entries: HashMap<K, V>,
    /// Keys in insertion order; front is the eviction candidate.
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    /// Creates a cache holding at most `capacity` records.
    ///
    /// The capacity is fixed for the lifetime of the cache. A capacity of
    /// zero stores nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns true iff `key` is currently stored.
    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the stored value, or `None` if the key is not present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Inserts or overwrites `key`.
    ///
    /// Inserting a new key at capacity evicts the oldest inserted key first.
    /// Overwriting replaces the value in place without touching the key's
    /// eviction position.
    pub fn set(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.contains_key(&key) {
            self.entries.insert(key, value);
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum number of records this cache holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_and_get() {
        let mut cache = BoundedCache::new(4);
        cache.set("k", "v");

        assert!(cache.has(&"k"));
        assert_eq!(cache.get(&"k"), Some(&"v"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let cache: BoundedCache<&str, i32> = BoundedCache::new(4);
        assert!(!cache.has(&"missing"));
        assert_eq!(cache.get(&"missing"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_evicts_oldest_inserted() {
        let mut cache = BoundedCache::new(2);
        cache.set("k1", 1);
        cache.set("k2", 2);
        cache.set("k3", 3);

        assert!(!cache.has(&"k1"));
        assert!(cache.has(&"k2"));
        assert!(cache.has(&"k3"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_read_does_not_promote() {
        let mut cache = BoundedCache::new(2);
        cache.set("k1", 1);
        cache.set("k2", 2);
        // Reading k1 must not save it from eviction.
        assert_eq!(cache.get(&"k1"), Some(&1));
        cache.set("k3", 3);

        assert!(!cache.has(&"k1"));
    }

    #[test]
    fn test_overwrite_keeps_eviction_position() {
        let mut cache = BoundedCache::new(2);
        cache.set("k1", 1);
        cache.set("k2", 2);
        // Overwriting k1 must not move it to the back of the queue.
        cache.set("k1", 10);
        cache.set("k3", 3);

        assert!(!cache.has(&"k1"));
        assert_eq!(cache.get(&"k2"), Some(&2));
        assert_eq!(cache.get(&"k3"), Some(&3));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let mut cache = BoundedCache::new(2);
        cache.set("k", 1);
        cache.set("k", 2);

        assert_eq!(cache.get(&"k"), Some(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut cache = BoundedCache::new(0);
        cache.set("k", 1);

        assert!(!cache.has(&"k"));
        assert!(cache.is_empty());
    }

    proptest! {
        #[test]
        fn prop_len_never_exceeds_capacity(
            keys in proptest::collection::vec("[a-z]{1,4}", 0..64),
            capacity in 1usize..8,
        ) {
            let mut cache = BoundedCache::new(capacity);
            for (i, key) in keys.into_iter().enumerate() {
                cache.set(key, i);
                prop_assert!(cache.len() <= capacity);
            }
        }

        #[test]
        fn prop_last_inserted_key_always_present(
            keys in proptest::collection::vec("[a-z]{1,4}", 1..64),
        ) {
            let mut cache = BoundedCache::new(3);
            for (i, key) in keys.iter().enumerate() {
                cache.set(key.clone(), i);
                prop_assert!(cache.has(key));
            }
        }
    }
}
