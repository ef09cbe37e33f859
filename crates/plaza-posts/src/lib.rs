//! Post and comment catalog for Plaza.
//!
//! Posts live in one ordered entity region keyed by [`EntityId`]. Each post
//! owns its comment thread exclusively: the [`CommentThread`] is an ordered
//! child container serialized inside the post record, so the thread's
//! lifetime is the post's lifetime and deleting a post discards its
//! comments with it.
//!
//! Mutations are copy-on-write at the record granularity: every operation
//! decodes the stored post, builds a replacement value, and re-inserts it
//! under the same key.
//!
//! [`EntityId`]: plaza_types::EntityId

pub mod catalog;
pub mod error;
pub mod record;
pub mod traits;

pub use catalog::PostCatalog;
pub use error::{PostError, PostResult};
pub use record::{Comment, CommentThread, Post, PostDraft};
pub use traits::{PostReader, PostWriter};
