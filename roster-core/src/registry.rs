//! Insertion-ordered keyed registry.
//!
//! [`KeyedRegistry`] maps unique keys to values and enumerates them in the
//! order keys were first inserted. Overwriting an existing key replaces the
//! value in place; the key keeps its original position.
//!
//! # Layout
//!
//! ```text
//! entries: [(k0, v0), (k1, v1), (k2, v2)]   (enumeration order)
//! index:   { k0 → 0, k1 → 1, k2 → 2 }       (O(1) lookup)
//! ```
//!
//! Views returned by [`KeyedRegistry::keys`], [`KeyedRegistry::values`] and
//! [`KeyedRegistry::iter`] borrow the registry immutably, so the borrow
//! checker rules out mutation while a view is being iterated.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A unique-key mapping that preserves insertion order for enumeration.
#[derive(Clone)]
pub struct KeyedRegistry<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> KeyedRegistry<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert `value` under `key`.
    ///
    /// Returns the previous value when `key` was already present. The key
    /// keeps its original enumeration position in that case.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Remove `key`, returning its value if it was present.
    ///
    /// Later entries shift up by one; relative order is unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Values in insertion order of their keys.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> Default for KeyedRegistry<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for KeyedRegistry<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> fmt::Debug for KeyedRegistry<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for KeyedRegistry<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<K, V> Extend<(K, V)> for KeyedRegistry<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Serializes as a map whose entries appear in insertion order.
impl<K, V> Serialize for KeyedRegistry<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> KeyedRegistry<&'static str, i32> {
        [("a", 1), ("b", 2), ("c", 3)].into_iter().collect()
    }

    #[test]
    fn put_returns_previous_value() {
        let mut reg = KeyedRegistry::new();
        assert_eq!(reg.put("a", 1), None);
        assert_eq!(reg.put("a", 2), Some(1));
        assert_eq!(reg.get("a"), Some(&2));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut reg = abc();
        reg.put("a", 10);
        let keys: Vec<_> = reg.keys().copied().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        let values: Vec<_> = reg.values().copied().collect();
        assert_eq!(values, [10, 2, 3]);
    }

    #[test]
    fn remove_reindexes_later_entries() {
        let mut reg = abc();
        assert_eq!(reg.remove("a"), Some(1));
        assert_eq!(reg.get("b"), Some(&2));
        assert_eq!(reg.get("c"), Some(&3));
        assert!(!reg.contains_key("a"));

        reg.put("a", 4);
        let keys: Vec<_> = reg.keys().copied().collect();
        assert_eq!(keys, ["b", "c", "a"], "re-added key goes to the end");
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut reg = abc();
        assert_eq!(reg.remove("zzz"), None);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn clear_empties_registry() {
        let mut reg = abc();
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.get("a"), None);
        assert_eq!(reg.iter().count(), 0);
    }

    #[test]
    fn borrowed_lookup_with_string_keys() {
        let mut reg: KeyedRegistry<String, i64> = KeyedRegistry::new();
        reg.put("Wins".to_string(), 12);
        assert_eq!(reg.get("Wins"), Some(&12));
        assert!(reg.contains_key("Wins"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let forward: KeyedRegistry<_, _> = [(1, "x"), (2, "y")].into_iter().collect();
        let backward: KeyedRegistry<_, _> = [(2, "y"), (1, "x")].into_iter().collect();
        assert_ne!(forward, backward);
        assert_eq!(forward, forward.clone());
    }

    #[test]
    fn debug_lists_entries_in_order() {
        assert_eq!(format!("{:?}", abc()), r#"{"a": 1, "b": 2, "c": 3}"#);
    }
}
