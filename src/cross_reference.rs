//! Cross-referencing an expected key list against a keyed collection.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// A collection that can be looked up by key and can list its keys.
///
/// Maps expose their keys, sets their elements, and sequences their indices.
pub trait KeyedCollection {
    type Key;

    /// Returns `true` if `key` is present.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// Iterates over every key, in the collection's own order.
    fn key_iter(&self) -> impl Iterator<Item = Self::Key> + '_;
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> KeyedCollection for HashMap<K, V, S> {
    type Key = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn key_iter(&self) -> impl Iterator<Item = K> + '_ {
        self.keys().cloned()
    }
}

impl<K: Ord + Clone, V> KeyedCollection for BTreeMap<K, V> {
    type Key = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn key_iter(&self) -> impl Iterator<Item = K> + '_ {
        self.keys().cloned()
    }
}

impl<K: Hash + Eq + Clone, S: BuildHasher> KeyedCollection for HashSet<K, S> {
    type Key = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn key_iter(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().cloned()
    }
}

impl<K: Ord + Clone> KeyedCollection for BTreeSet<K> {
    type Key = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn key_iter(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().cloned()
    }
}

impl KeyedCollection for Map<String, Value> {
    type Key = String;

    fn has_key(&self, key: &String) -> bool {
        self.contains_key(key)
    }

    fn key_iter(&self) -> impl Iterator<Item = String> + '_ {
        self.keys().cloned()
    }
}

// Sequences are keyed by position.
impl<T> KeyedCollection for [T] {
    type Key = usize;

    fn has_key(&self, key: &usize) -> bool {
        *key < self.len()
    }

    fn key_iter(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.len()
    }
}

impl<T> KeyedCollection for Vec<T> {
    type Key = usize;

    fn has_key(&self, key: &usize) -> bool {
        *key < self.len()
    }

    fn key_iter(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.len()
    }
}

/// Outcome of [`cross_reference`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossReference<K> {
    /// Reference keys absent from the data, in reference order, each reported once.
    pub missing: Vec<K>,
    /// Data keys absent from the reference, in the data's key order.
    pub extra: Vec<K>,
}

impl<K> CrossReference<K> {
    /// `true` when the data holds exactly the reference keys.
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compares the keys of `data` with an expected key list.
///
/// # Examples
///
/// ```
/// use arrayhelpers::cross_reference;
/// use std::collections::BTreeMap;
///
/// let data = BTreeMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
/// let result = cross_reference(&["a", "b", "d", "e"], &data);
///
/// assert_eq!(result.missing, vec!["e"]);
/// assert_eq!(result.extra, vec!["c"]);
/// assert!(!result.is_consistent());
///
/// // Sequences are keyed by index.
/// let list = vec!["a value", "b value", "c value", "d value"];
/// let result = cross_reference(&[0, 1, 3, 10], &list);
/// assert_eq!(result.missing, vec![10]);
/// assert_eq!(result.extra, vec![2]);
/// ```
pub fn cross_reference<K, C>(reference: &[K], data: &C) -> CrossReference<K>
where
    K: Eq + Hash + Clone,
    C: KeyedCollection<Key = K> + ?Sized,
{
    let expected: HashSet<&K> = reference.iter().collect();

    let mut seen = HashSet::new();
    let missing = reference
        .iter()
        .filter(|&key| !data.has_key(key) && seen.insert(key))
        .cloned()
        .collect();

    let extra = data
        .key_iter()
        .filter(|key| !expected.contains(key))
        .collect();

    CrossReference { missing, extra }
}
