use std::sync::Arc;

use tracing::{debug, info};

use plaza_graph::{GraphAudit, RelationshipMaintainer};
use plaza_posts::{Comment, Post, PostCatalog, PostDraft, PostReader, PostWriter};
use plaza_profiles::{Profile, ProfileDirectory, ProfileDraft};
use plaza_types::{EntityId, IdentityKey};

use crate::config::PlazaConfig;
use crate::error::{ServiceError, ServiceResult};

/// The process-wide Plaza state.
///
/// `init()` builds one store per entity region; all access funnels through
/// this handle for the life of the process. The stores need no teardown --
/// the durable engine persists across restarts.
pub struct Plaza {
    config: PlazaConfig,
    posts: PostCatalog,
    profiles: Arc<ProfileDirectory>,
    graph: RelationshipMaintainer,
}

impl Plaza {
    /// Initialize the service with the default configuration.
    pub fn init() -> Self {
        Self::init_with_config(PlazaConfig::default())
    }

    /// Initialize the service with an explicit configuration.
    pub fn init_with_config(config: PlazaConfig) -> Self {
        let posts = PostCatalog::with_value_limit(config.post_value_limit);
        let profiles = Arc::new(ProfileDirectory::with_value_limit(
            config.profile_value_limit,
        ));
        let graph = RelationshipMaintainer::new(Arc::clone(&profiles));
        info!(
            post_value_limit = config.post_value_limit,
            profile_value_limit = config.profile_value_limit,
            "plaza service initialized"
        );
        Self {
            config,
            posts,
            profiles,
            graph,
        }
    }

    /// The configuration this instance was initialized with.
    pub fn config(&self) -> &PlazaConfig {
        &self.config
    }

    fn check_post_draft(&self, draft: &PostDraft) -> ServiceResult<()> {
        let bytes = draft.content_bytes();
        if bytes > self.config.max_post_content_bytes {
            debug!(bytes, limit = self.config.max_post_content_bytes, "rejecting post draft");
            return Err(ServiceError::Rejected(format!(
                "post content of {bytes} bytes exceeds limit of {}",
                self.config.max_post_content_bytes
            )));
        }
        Ok(())
    }

    fn check_comment(&self, text: &str) -> ServiceResult<()> {
        if text.len() > self.config.max_comment_bytes {
            debug!(
                bytes = text.len(),
                limit = self.config.max_comment_bytes,
                "rejecting comment"
            );
            return Err(ServiceError::Rejected(format!(
                "comment of {} bytes exceeds limit of {}",
                text.len(),
                self.config.max_comment_bytes
            )));
        }
        Ok(())
    }

    fn check_profile_draft(&self, draft: &ProfileDraft) -> ServiceResult<()> {
        let bytes = draft.content_bytes();
        if bytes > self.config.max_profile_content_bytes {
            debug!(bytes, limit = self.config.max_profile_content_bytes, "rejecting profile draft");
            return Err(ServiceError::Rejected(format!(
                "profile content of {bytes} bytes exceeds limit of {}",
                self.config.max_profile_content_bytes
            )));
        }
        Ok(())
    }

    // ---- Queries ----

    /// Snapshot of all posts in store iteration order.
    pub fn list_posts(&self) -> ServiceResult<Vec<Post>> {
        Ok(self.posts.list_posts()?)
    }

    /// Look up one post by id.
    pub fn get_post(&self, id: &EntityId) -> ServiceResult<Post> {
        Ok(self.posts.get_post(id)?)
    }

    /// All comments on a post.
    pub fn get_comments(&self, post_id: &EntityId) -> ServiceResult<Vec<Comment>> {
        Ok(self.posts.comments(post_id)?)
    }

    /// Snapshot of all profiles in identity-key order.
    pub fn list_profiles(&self) -> ServiceResult<Vec<Profile>> {
        Ok(self.profiles.list_profiles()?)
    }

    /// Look up one profile by identity key.
    pub fn get_profile(&self, key: &IdentityKey) -> ServiceResult<Profile> {
        Ok(self.profiles.get_profile(key)?)
    }

    /// Scan the follow graph and report every inconsistency.
    pub fn audit_graph(&self) -> ServiceResult<GraphAudit> {
        Ok(self.graph.audit()?)
    }

    // ---- Updates: posts ----

    /// Create a post from a draft.
    pub fn add_post(&self, draft: PostDraft) -> ServiceResult<Post> {
        self.check_post_draft(&draft)?;
        Ok(self.posts.create_post(draft)?)
    }

    /// Replace the editable fields of a post.
    pub fn update_post(&self, id: &EntityId, draft: PostDraft) -> ServiceResult<Post> {
        self.check_post_draft(&draft)?;
        Ok(self.posts.update_post(id, draft)?)
    }

    /// Delete a post; its comment thread goes with it.
    pub fn delete_post(&self, id: &EntityId) -> ServiceResult<Post> {
        Ok(self.posts.delete_post(id)?)
    }

    /// Append a comment to a post.
    pub fn add_comment(&self, post_id: &EntityId, text: &str) -> ServiceResult<Comment> {
        self.check_comment(text)?;
        Ok(self.posts.add_comment(post_id, text)?)
    }

    /// Remove a single comment from a post.
    pub fn delete_comment(
        &self,
        post_id: &EntityId,
        comment_id: &EntityId,
    ) -> ServiceResult<Comment> {
        Ok(self.posts.delete_comment(post_id, comment_id)?)
    }

    /// Increment a post's like counter.
    pub fn like_post(&self, id: &EntityId) -> ServiceResult<Post> {
        Ok(self.posts.like(id)?)
    }

    /// Decrement a post's like counter; rejected at zero.
    pub fn unlike_post(&self, id: &EntityId) -> ServiceResult<Post> {
        Ok(self.posts.unlike(id)?)
    }

    // ---- Updates: profiles ----

    /// Create the calling identity's profile.
    pub fn create_profile(
        &self,
        caller: &IdentityKey,
        draft: ProfileDraft,
    ) -> ServiceResult<Profile> {
        self.check_profile_draft(&draft)?;
        Ok(self.profiles.create_profile(caller, draft)?)
    }

    /// Replace the editable fields of a profile.
    pub fn update_profile(
        &self,
        key: &IdentityKey,
        draft: ProfileDraft,
    ) -> ServiceResult<Profile> {
        self.check_profile_draft(&draft)?;
        Ok(self.profiles.update_profile(key, draft)?)
    }

    /// Delete a profile. Mirror entries elsewhere are left in place and
    /// show up in the graph audit.
    pub fn delete_profile(&self, key: &IdentityKey) -> ServiceResult<Profile> {
        Ok(self.profiles.delete_profile(key)?)
    }

    // ---- Updates: relationships ----

    /// Record that `requester` follows `target`.
    pub fn follow(
        &self,
        requester: &IdentityKey,
        target: &IdentityKey,
    ) -> ServiceResult<Profile> {
        Ok(self.graph.follow(requester, target)?)
    }

    /// Record that `requester` no longer follows `target`.
    pub fn unfollow(
        &self,
        requester: &IdentityKey,
        target: &IdentityKey,
    ) -> ServiceResult<Profile> {
        Ok(self.graph.unfollow(requester, target)?)
    }
}

impl Default for Plaza {
    fn default() -> Self {
        Self::init()
    }
}
