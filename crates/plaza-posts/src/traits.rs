use plaza_types::EntityId;

use crate::error::PostResult;
use crate::record::{Comment, Post, PostDraft};

/// Read boundary for the post catalog (the host's query call class).
pub trait PostReader: Send + Sync {
    /// Snapshot of all posts in store iteration order.
    fn list_posts(&self) -> PostResult<Vec<Post>>;

    /// Look up one post by id.
    fn get_post(&self, id: &EntityId) -> PostResult<Post>;

    /// All comments on a post, in thread order.
    fn comments(&self, post_id: &EntityId) -> PostResult<Vec<Comment>>;
}

/// Write boundary for the post catalog (the host's update call class).
pub trait PostWriter: Send + Sync {
    /// Persist a fresh post built from the draft.
    fn create_post(&self, draft: PostDraft) -> PostResult<Post>;

    /// Replace the editable fields of an existing post.
    fn update_post(&self, id: &EntityId, draft: PostDraft) -> PostResult<Post>;

    /// Remove a post and return it; its comment thread goes with it.
    fn delete_post(&self, id: &EntityId) -> PostResult<Post>;

    /// Append a comment to a post's thread.
    fn add_comment(&self, post_id: &EntityId, text: &str) -> PostResult<Comment>;

    /// Remove a single comment from a post's thread.
    fn delete_comment(&self, post_id: &EntityId, comment_id: &EntityId) -> PostResult<Comment>;

    /// Increment a post's like counter.
    fn like(&self, id: &EntityId) -> PostResult<Post>;

    /// Decrement a post's like counter; fails at zero rather than going
    /// negative.
    fn unlike(&self, id: &EntityId) -> PostResult<Post>;
}
