use tracing::debug;

use plaza_store::{BTreeStore, OrderedStore};
use plaza_types::{EntityId, Timestamp};

use crate::error::{PostError, PostResult};
use crate::record::{Comment, Post, PostDraft};
use crate::traits::{PostReader, PostWriter};

/// The owning component for the post entity region.
///
/// All post and comment access funnels through the catalog; nothing else
/// holds a reference to the region. Every mutation follows the same shape:
/// load the record, build a replacement, re-insert under the same key.
pub struct PostCatalog {
    posts: BTreeStore<EntityId, Post>,
}

impl PostCatalog {
    /// Create a catalog over an empty region with the default value bound.
    pub fn new() -> Self {
        Self {
            posts: BTreeStore::new(),
        }
    }

    /// Create a catalog whose region enforces an explicit value bound.
    pub fn with_value_limit(limit: u64) -> Self {
        Self {
            posts: BTreeStore::with_value_limit(limit),
        }
    }

    /// Number of posts in the catalog.
    pub fn len(&self) -> PostResult<usize> {
        Ok(self.posts.len()?)
    }

    /// Returns `true` if no posts are stored.
    pub fn is_empty(&self) -> PostResult<bool> {
        Ok(self.posts.is_empty()?)
    }

    fn load(&self, id: &EntityId) -> PostResult<Post> {
        self.posts
            .get(id)?
            .ok_or(PostError::PostNotFound(*id))
    }

    fn store(&self, post: Post) -> PostResult<Post> {
        self.posts.insert(post.id, &post)?;
        Ok(post)
    }
}

impl Default for PostCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PostReader for PostCatalog {
    fn list_posts(&self) -> PostResult<Vec<Post>> {
        Ok(self.posts.values()?)
    }

    fn get_post(&self, id: &EntityId) -> PostResult<Post> {
        self.load(id)
    }

    fn comments(&self, post_id: &EntityId) -> PostResult<Vec<Comment>> {
        Ok(self.load(post_id)?.comments.values())
    }
}

impl PostWriter for PostCatalog {
    fn create_post(&self, draft: PostDraft) -> PostResult<Post> {
        let post = Post::from_draft(draft);
        debug!(post = %post.id, "creating post");
        self.store(post)
    }

    fn update_post(&self, id: &EntityId, draft: PostDraft) -> PostResult<Post> {
        let current = self.load(id)?;
        let replacement = current.with_draft(draft);
        debug!(post = %id, "updating post");
        self.store(replacement)
    }

    fn delete_post(&self, id: &EntityId) -> PostResult<Post> {
        let removed = self
            .posts
            .remove(id)?
            .ok_or(PostError::PostNotFound(*id))?;
        debug!(post = %id, comments = removed.comments.len(), "deleted post");
        Ok(removed)
    }

    fn add_comment(&self, post_id: &EntityId, text: &str) -> PostResult<Comment> {
        let mut post = self.load(post_id)?;
        let comment = Comment {
            id: EntityId::new(),
            post_id: *post_id,
            text: text.to_string(),
            created_at: Timestamp::now(),
        };
        // Only the thread changes; title, likes, and timestamps carry over.
        post.comments.insert(comment.clone());
        debug!(post = %post_id, comment = %comment.id, "added comment");
        self.store(post)?;
        Ok(comment)
    }

    fn delete_comment(&self, post_id: &EntityId, comment_id: &EntityId) -> PostResult<Comment> {
        // Post-missing takes precedence over comment-missing.
        let mut post = self.load(post_id)?;
        let removed = post
            .comments
            .remove(comment_id)
            .ok_or(PostError::CommentNotFound {
                post: *post_id,
                comment: *comment_id,
            })?;
        debug!(post = %post_id, comment = %comment_id, "deleted comment");
        self.store(post)?;
        Ok(removed)
    }

    fn like(&self, id: &EntityId) -> PostResult<Post> {
        let mut post = self.load(id)?;
        post.likes += 1;
        self.store(post)
    }

    fn unlike(&self, id: &EntityId) -> PostResult<Post> {
        let mut post = self.load(id)?;
        if post.likes == 0 {
            // The counter is floor-clamped at zero and the clamp is surfaced
            // as an error rather than silently ignored.
            return Err(PostError::NoLikesToRemove(*id));
        }
        post.likes -= 1;
        self.store(post)
    }
}
