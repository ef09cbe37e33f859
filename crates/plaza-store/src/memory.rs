use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::record::{SealedRecord, DEFAULT_VALUE_LIMIT};
use crate::traits::OrderedStore;

/// `BTreeMap`-based reference backend for an entity region.
///
/// Records are sealed (serialized) on insert and unsealed on read, so the
/// backend exercises the same envelope and size bound a durable engine
/// would. All data is lost when the store is dropped.
pub struct BTreeStore<K, V> {
    records: RwLock<BTreeMap<K, SealedRecord>>,
    value_limit: u64,
    _value: PhantomData<fn() -> V>,
}

impl<K: Ord + Clone, V> BTreeStore<K, V> {
    /// Create a new empty region with the default value-size bound.
    pub fn new() -> Self {
        Self::with_value_limit(DEFAULT_VALUE_LIMIT)
    }

    /// Create a region with an explicit value-size bound in bytes.
    pub fn with_value_limit(value_limit: u64) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            value_limit,
            _value: PhantomData,
        }
    }

    /// The value-size bound this region enforces.
    pub fn value_limit(&self) -> u64 {
        self.value_limit
    }

    /// Total serialized bytes across all records.
    pub fn total_bytes(&self) -> StoreResult<u64> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.values().map(|r| r.size).sum())
    }

    /// Remove all records from the region.
    pub fn clear(&self) -> StoreResult<()> {
        let mut map = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        map.clear();
        Ok(())
    }
}

impl<K: Ord + Clone, V> Default for BTreeStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedStore<K, V> for BTreeStore<K, V>
where
    K: Ord + Clone + Send + Sync,
    V: Serialize + DeserializeOwned + Send + Sync,
{
    fn get(&self, key: &K) -> StoreResult<Option<V>> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        map.get(key).map(SealedRecord::unseal).transpose()
    }

    fn insert(&self, key: K, value: &V) -> StoreResult<()> {
        let sealed = SealedRecord::seal(value, self.value_limit)?;
        let mut map = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        map.insert(key, sealed);
        Ok(())
    }

    fn remove(&self, key: &K) -> StoreResult<Option<V>> {
        let mut map = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        map.remove(key).map(|r| r.unseal()).transpose()
    }

    fn contains(&self, key: &K) -> StoreResult<bool> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.contains_key(key))
    }

    fn keys(&self) -> StoreResult<Vec<K>> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.keys().cloned().collect())
    }

    fn values(&self) -> StoreResult<Vec<V>> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        map.values().map(SealedRecord::unseal).collect()
    }

    fn len(&self) -> StoreResult<usize> {
        let map = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.len())
    }
}

impl<K: Ord + Clone, V> std::fmt::Debug for BTreeStore<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self
            .records
            .read()
            .map(|m| m.len())
            .unwrap_or_default();
        f.debug_struct("BTreeStore")
            .field("record_count", &count)
            .field("value_limit", &self.value_limit)
            .finish()
    }
}
