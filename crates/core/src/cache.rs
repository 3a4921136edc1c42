use std::collections::HashMap;
use std::hash::Hash;

/// A keyed cache with a deliberately explicit lifetime contract: entries
/// are retained until [`clear`](KeyedCache::clear) is called and nothing is
/// evicted behind the caller's back. Growth is observable through
/// [`len`](KeyedCache::len), so the policy stays a testable decision rather
/// than an unbounded module-level map.
#[derive(Debug, Clone)]
pub struct KeyedCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> KeyedCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &V {
        self.entries.entry(key).or_insert_with(make)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. The one lifecycle event that empties the cache,
    /// e.g. on logout.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Eq + Hash, V> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
