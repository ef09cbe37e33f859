//! Foundation types for Plaza.
//!
//! This crate provides the identity and temporal primitives used throughout
//! the Plaza content store. Every other Plaza crate depends on `plaza-types`.
//!
//! # Key Types
//!
//! - [`EntityId`] — Time-ordered identifier for posts and comments (UUID v7)
//! - [`IdentityKey`] — Caller identity derived from authentication material,
//!   with a distinguished anonymous sentinel
//! - [`Timestamp`] — Wall-clock milliseconds since the UNIX epoch

pub mod error;
pub mod id;
pub mod identity;
pub mod temporal;

pub use error::TypeError;
pub use id::EntityId;
pub use identity::{IdentityKey, IdentityMaterial};
pub use temporal::Timestamp;
