//! Ordered key-value storage for Plaza entity regions.
//!
//! Each entity type (posts, profiles) lives in its own ordered region: a
//! persistent mapping from a store key to a serialized record, iterated in
//! key order. The durable B-tree engine itself is supplied by the host; this
//! crate defines the seam it plugs into and ships a reference backend.
//!
//! # Pieces
//!
//! - [`OrderedStore`] -- the region interface (point lookup, insert, remove,
//!   order-preserving iteration)
//! - [`SealedRecord`] -- the serialized-value envelope with the region's
//!   value-size bound
//! - [`BTreeStore`] -- `BTreeMap`-based reference backend for tests and
//!   embedding
//!
//! # Design Rules
//!
//! 1. Records are replaced whole: a mutation decodes the stored value,
//!    builds a replacement, and re-inserts it under the same key.
//! 2. Reads hand out decoded clones, never references into the region.
//! 3. The region never interprets record contents -- it is a pure
//!    key-value store.
//! 4. All storage errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::BTreeStore;
pub use record::{SealedRecord, DEFAULT_VALUE_LIMIT};
pub use traits::OrderedStore;
