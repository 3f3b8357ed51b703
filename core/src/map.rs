//! A key-unique map with an explicit nil state.
//!
//! A [`Map`] is either **nil** (the default value, never constructed) or
//! **initialized** (built by any constructor, possibly with zero entries).
//! The nil map is readable: lookups report absence, `len()` is 0, and
//! `remove`/`clear` are no-ops. Only insertion distinguishes itself, by
//! failing with [`Error::WriteToNilMap`]. An initialized map never becomes
//! nil again.
//!
//! Entries never alias: a map is a plain value, mutated through `&mut self`.
//!
//! # Sets
//!
//! There is no separate set type; a `Map<K, bool>` deduplicates a stream of
//! keys, and its `len()` is the number of distinct keys:
//!
//! ```
//! use strand_core::Map;
//!
//! let mut seen = Map::new();
//! for word in ["red", "blue", "red"] {
//!     seen.insert(word, true).unwrap();
//! }
//! assert_eq!(seen.len(), 2);
//! ```

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::error::Error;

/// A key-unique associative container.
pub struct Map<K, V> {
    pub(crate) entries: Option<HashMap<K, V>>,
}

// --- Manual Clone to match the HashMap bounds, not Default's ---

impl<K: Clone, V: Clone> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Map {
            entries: self.entries.clone(),
        }
    }
}

impl<K, V> Default for Map<K, V> {
    /// The nil map. Use [`Map::new`] for an initialized empty map.
    fn default() -> Self {
        Map { entries: None }
    }
}

impl<K, V> Map<K, V> {
    /// An initialized map with zero entries.
    pub fn new() -> Self {
        Map {
            entries: Some(HashMap::new()),
        }
    }

    /// True only for the never-constructed map, not for an initialized map
    /// that happens to be empty.
    pub fn is_nil(&self) -> bool {
        self.entries.is_none()
    }

    /// Number of entries; 0 for the nil map.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry. The map stays initialized (its length becomes
    /// 0); a no-op on the nil map.
    pub fn clear(&mut self) {
        if let Some(entries) = &mut self.entries {
            entries.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().flat_map(HashMap::iter)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }
}

impl<K: Eq + Hash, V> Map<K, V> {
    /// An initialized map holding the given entries. A key that appears
    /// more than once keeps its last value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Map {
            entries: Some(pairs.into_iter().collect()),
        }
    }

    /// Borrow-based lookup; `None` when the key is absent or the map is
    /// nil. See [`Map::lookup`] for the comma-ok form.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.as_ref().and_then(|entries| entries.get(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts or overwrites, returning the previous value if any.
    ///
    /// The only map operation that fails on the nil map
    /// ([`Error::WriteToNilMap`]).
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        match &mut self.entries {
            Some(entries) => Ok(entries.insert(key, value)),
            None => Err(Error::WriteToNilMap),
        }
    }

    /// Removes a key, returning its value. Absent keys (and the nil map)
    /// yield `None`; removal never fails.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.as_mut().and_then(|entries| entries.remove(key))
    }
}

impl<K: Eq + Hash, V: Clone + Default> Map<K, V> {
    /// Comma-ok lookup: the value and whether the key was present.
    ///
    /// Absent keys (and the nil map) read as `(V::default(), false)`. Never
    /// fails and never mutates the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_core::Map;
    ///
    /// let m = Map::from_pairs([("one", 1), ("two", 2)]);
    /// assert_eq!(m.lookup("one"), (1, true));
    /// assert_eq!(m.lookup("three"), (0, false));
    /// ```
    pub fn lookup<Q>(&self, key: &Q) -> (V, bool)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.get(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entries {
            None => f.write_str("Map(nil)"),
            Some(entries) => {
                f.write_str("Map(")?;
                f.debug_map().entries(entries.iter()).finish()?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;
