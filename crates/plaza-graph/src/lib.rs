//! Relationship maintenance for the Plaza follow graph.
//!
//! A follow edge is materialized redundantly: as an entry in the
//! requester's `following` set and in the target's `followers` set. The
//! store offers no multi-key transaction primitive, so the maintainer
//! enacts each edge change as two sequential single-key writes: the
//! requester's record first, then the target's, best effort. A failure
//! between the two writes leaves a one-sided edge; the maintainer logs it
//! and never rolls back, and [`RelationshipMaintainer::audit`] surfaces
//! every such asymmetry for operators.

pub mod audit;
pub mod error;
pub mod maintainer;

pub use audit::{GraphAudit, GraphFinding};
pub use error::{GraphError, GraphResult};
pub use maintainer::RelationshipMaintainer;
