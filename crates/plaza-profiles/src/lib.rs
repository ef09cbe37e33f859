//! Profile directory for Plaza.
//!
//! Profiles live in one ordered entity region keyed by [`IdentityKey`].
//! Keys are caller-identity-derived: one profile per authenticated
//! identity, and the anonymous sentinel is never allowed to create one.
//!
//! Each profile carries the two redundant sides of the follow graph as
//! ordered sets (`followers`, `following`). The directory itself only does
//! CRUD; the two-sided follow/unfollow sequence belongs to the
//! relationship maintainer in `plaza-graph`, which persists its replacement
//! records through [`ProfileDirectory::persist`].
//!
//! [`IdentityKey`]: plaza_types::IdentityKey

pub mod directory;
pub mod error;
pub mod record;

pub use directory::ProfileDirectory;
pub use error::{ProfileError, ProfileResult};
pub use record::{Profile, ProfileDraft};
