use thiserror::Error;

use plaza_graph::GraphError;
use plaza_posts::PostError;
use plaza_profiles::ProfileError;
use plaza_store::StoreError;

/// Boundary error for the service surface.
///
/// The taxonomy matches the host's expectations: `NotFound` for an absent
/// entity, `Rejected` for a policy refusal, `Internal` for storage or codec
/// failures that are not expected in normal operation. The rendered message
/// identifies the entity type and key but is diagnostic text, not a stable
/// API contract.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("rejected: {0}")]
    Rejected(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns `true` for the absent-entity class.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for the policy-refusal class.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ValueTooLarge { .. } => Self::Rejected(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<PostError> for ServiceError {
    fn from(e: PostError) -> Self {
        match e {
            PostError::PostNotFound(_) | PostError::CommentNotFound { .. } => {
                Self::NotFound(e.to_string())
            }
            PostError::NoLikesToRemove(_) => Self::Rejected(e.to_string()),
            PostError::Store(inner) => inner.into(),
        }
    }
}

impl From<ProfileError> for ServiceError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::NotFound(_) => Self::NotFound(e.to_string()),
            ProfileError::AnonymousCaller | ProfileError::AlreadyExists(_) => {
                Self::Rejected(e.to_string())
            }
            ProfileError::Store(inner) => inner.into(),
        }
    }
}

impl From<GraphError> for ServiceError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::SelfFollow(_) => Self::Rejected(e.to_string()),
            GraphError::Profile(inner) => inner.into(),
        }
    }
}

/// Result alias for service entry points.
pub type ServiceResult<T> = Result<T, ServiceError>;
