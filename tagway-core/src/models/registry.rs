use std::collections::hash_map::{Iter, Values, ValuesMut};
use std::hash::Hash;

use nohash_hasher::{BuildNoHashHasher, IntMap, IsEnabled};

use super::{ClientId, LayerId};

/// Keys handed out by a [`Registry`].
pub trait RegistryKey: Copy + Eq + Hash + IsEnabled {
    fn from_index(index: usize) -> Self;
}

impl RegistryKey for ClientId {
    fn from_index(index: usize) -> Self {
        Self(index)
    }
}

impl RegistryKey for LayerId {
    fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Owns objects and addresses them by keys that stay valid until the object is removed. Keys are
/// never reused.
#[derive(Debug, Clone)]
pub struct Registry<K: RegistryKey, V> {
    map: IntMap<K, V>,
    next_key: usize,
}

impl<K: RegistryKey, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RegistryKey, V> Registry<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: IntMap::with_hasher(BuildNoHashHasher::default()),
            next_key: 1,
        }
    }

    #[must_use]
    pub fn get(&self, key: K) -> Option<&V> {
        self.map.get(&key)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.map.get_mut(&key)
    }

    /// Stores the value built from a fresh key and returns that key.
    pub fn insert_with(&mut self, build: impl FnOnce(K) -> V) -> K {
        let key = K::from_index(self.next_key);
        self.next_key += 1;
        self.map.insert(key, build(key));
        key
    }

    pub fn remove(&mut self, key: K) -> Option<V> {
        self.map.remove(&key)
    }

    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.map.contains_key(&key)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.map.iter()
    }

    pub fn values(&self) -> Values<'_, K, V> {
        self.map.values()
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.map.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
