use plaza_store::StoreError;
use plaza_types::EntityId;
use thiserror::Error;

/// Errors from post and comment operations.
#[derive(Debug, Error)]
pub enum PostError {
    /// No post exists under the given id.
    #[error("post not found: id={0}")]
    PostNotFound(EntityId),

    /// The post exists but holds no comment under the given id.
    #[error("comment not found: id={comment} on post id={post}")]
    CommentNotFound { post: EntityId, comment: EntityId },

    /// Unlike attempted on a post whose like counter is already zero.
    #[error("post id={0} has no likes to remove")]
    NoLikesToRemove(EntityId),

    /// Failure in the underlying entity region.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for post operations.
pub type PostResult<T> = Result<T, PostError>;
