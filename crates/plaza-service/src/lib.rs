//! Service surface for Plaza.
//!
//! The host runtime dispatches two classes of calls -- queries and updates
//! -- into a single process-wide [`Plaza`] handle. `Plaza::init()` builds
//! the entity stores once; every entry point funnels through the owning
//! component for its region (post catalog, profile directory, relationship
//! maintainer) and returns either a value or a descriptive error string.
//!
//! Callers should match on success/failure only; the error text identifies
//! the entity and key involved but is diagnostic, not a stable contract.

pub mod config;
pub mod error;
pub mod service;

pub use config::PlazaConfig;
pub use error::{ServiceError, ServiceResult};
pub use service::Plaza;
