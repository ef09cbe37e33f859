use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;

/// One ordered entity region: a persistent mapping from store key to record.
///
/// All implementations must satisfy these invariants:
/// - Point lookup, insert, and remove address exactly one key.
/// - `keys()` and `values()` walk the region in ascending key order.
/// - Reads return decoded clones; a caller never observes another caller's
///   in-flight mutation through a shared record.
/// - Insert replaces the whole record under the key (copy-on-write at the
///   record granularity).
/// - All storage errors are propagated, never silently ignored.
pub trait OrderedStore<K, V>: Send + Sync
where
    K: Ord + Clone,
    V: Serialize + DeserializeOwned,
{
    /// Read the record stored under `key`.
    ///
    /// Returns `Ok(None)` if no record exists for the key.
    fn get(&self, key: &K) -> StoreResult<Option<V>>;

    /// Insert or replace the record under `key`.
    fn insert(&self, key: K, value: &V) -> StoreResult<()>;

    /// Remove and return the record under `key`.
    ///
    /// Returns `Ok(None)` if no record existed.
    fn remove(&self, key: &K) -> StoreResult<Option<V>>;

    /// Check whether a record exists under `key`.
    fn contains(&self, key: &K) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// All keys in ascending order.
    fn keys(&self) -> StoreResult<Vec<K>>;

    /// All records in ascending key order.
    fn values(&self) -> StoreResult<Vec<V>>;

    /// Number of records in the region.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if the region holds no records.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
