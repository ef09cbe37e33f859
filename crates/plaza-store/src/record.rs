use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};

/// Default value-size bound per record, in bytes.
///
/// Matches the bound the durable engine enforces on stored values; the
/// reference backend enforces the same bound so oversized records fail in
/// tests exactly where they would fail in deployment.
pub const DEFAULT_VALUE_LIMIT: u64 = 1024;

/// A sealed record: serialized bytes plus cached size.
///
/// `SealedRecord` is the unit of storage. The region never interprets the
/// contents of the data -- decoding happens at the owning component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedRecord {
    /// The serialized bytes of the record.
    pub data: Vec<u8>,
    /// The size of `data` in bytes.
    pub size: u64,
}

impl SealedRecord {
    /// Serialize a value into a sealed record, enforcing the size bound.
    pub fn seal<V: Serialize>(value: &V, limit: u64) -> StoreResult<Self> {
        let data =
            bincode::serialize(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let size = data.len() as u64;
        if size > limit {
            return Err(StoreError::ValueTooLarge { size, limit });
        }
        Ok(Self { data, size })
    }

    /// Decode the sealed bytes back into a value.
    pub fn unseal<V: DeserializeOwned>(&self) -> StoreResult<V> {
        bincode::deserialize(&self.data).map_err(|e| StoreError::CorruptRecord {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn seal_and_unseal() {
        let value = Sample {
            name: "hello".into(),
            count: 3,
        };
        let sealed = SealedRecord::seal(&value, DEFAULT_VALUE_LIMIT).unwrap();
        assert_eq!(sealed.size, sealed.data.len() as u64);

        let decoded: Sample = sealed.unseal().unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn seal_enforces_value_limit() {
        let value = Sample {
            name: "x".repeat(4096),
            count: 0,
        };
        let err = SealedRecord::seal(&value, DEFAULT_VALUE_LIMIT).unwrap_err();
        assert!(matches!(err, StoreError::ValueTooLarge { .. }));
    }

    #[test]
    fn unseal_rejects_garbage() {
        let sealed = SealedRecord {
            data: vec![0xff; 3],
            size: 3,
        };
        let err = sealed.unseal::<Sample>().unwrap_err();
        assert!(matches!(err, StoreError::CorruptRecord { .. }));
    }
}
