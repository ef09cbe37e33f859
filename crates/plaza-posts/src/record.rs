use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use plaza_types::{EntityId, Timestamp};

/// A single comment, created only through its parent post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: EntityId,
    /// The post this comment belongs to.
    pub post_id: EntityId,
    pub text: String,
    pub created_at: Timestamp,
}

/// The owned, ordered comment collection of one post.
///
/// Serialized inside the post record, so the thread is persisted and
/// discarded together with its parent. Iteration follows comment-id order,
/// which for time-ordered ids is creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    entries: BTreeMap<EntityId, Comment>,
}

impl CommentThread {
    /// Create an empty thread.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a comment under its id.
    pub fn insert(&mut self, comment: Comment) {
        self.entries.insert(comment.id, comment);
    }

    /// Look up a comment by id.
    pub fn get(&self, id: &EntityId) -> Option<&Comment> {
        self.entries.get(id)
    }

    /// Remove and return the comment under `id`, if present.
    pub fn remove(&mut self, id: &EntityId) -> Option<Comment> {
        self.entries.remove(id)
    }

    /// All comments in id order.
    pub fn values(&self) -> Vec<Comment> {
        self.entries.values().cloned().collect()
    }

    /// Number of comments in the thread.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the thread holds no comments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A persisted post record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub body: String,
    /// Reference to an externally hosted attachment.
    pub attachment_url: String,
    pub created_at: Timestamp,
    /// Set on the first update, bumped on every later one.
    pub updated_at: Option<Timestamp>,
    pub likes: u64,
    /// The post's owned comment collection.
    pub comments: CommentThread,
}

/// The editable fields of a post, as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub attachment_url: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        attachment_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            attachment_url: attachment_url.into(),
        }
    }

    /// Total bytes across the editable fields.
    pub fn content_bytes(&self) -> usize {
        self.title.len() + self.body.len() + self.attachment_url.len()
    }
}

impl Post {
    /// Materialize a fresh post from a draft.
    pub fn from_draft(draft: PostDraft) -> Self {
        Self {
            id: EntityId::new(),
            title: draft.title,
            body: draft.body,
            attachment_url: draft.attachment_url,
            created_at: Timestamp::now(),
            updated_at: None,
            likes: 0,
            comments: CommentThread::new(),
        }
    }

    /// Build the replacement record for an edit.
    ///
    /// Only the three editable fields change; id, creation time, likes, and
    /// the comment thread carry over.
    pub fn with_draft(&self, draft: PostDraft) -> Self {
        Self {
            id: self.id,
            title: draft.title,
            body: draft.body,
            attachment_url: draft.attachment_url,
            created_at: self.created_at,
            updated_at: Some(Timestamp::now()),
            likes: self.likes,
            comments: self.comments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft::new("title", "body", "https://cdn.example/att.png")
    }

    fn comment_on(post: &Post, text: &str) -> Comment {
        Comment {
            id: EntityId::new(),
            post_id: post.id,
            text: text.into(),
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn from_draft_initializes_fresh_state() {
        let post = Post::from_draft(draft());
        assert_eq!(post.likes, 0);
        assert!(post.updated_at.is_none());
        assert!(post.comments.is_empty());
        assert_eq!(post.title, "title");
    }

    #[test]
    fn with_draft_preserves_identity_and_history() {
        let mut post = Post::from_draft(draft());
        post.likes = 5;
        post.comments.insert(comment_on(&post, "kept"));

        let edited = post.with_draft(PostDraft::new("new", "new body", ""));
        assert_eq!(edited.id, post.id);
        assert_eq!(edited.created_at, post.created_at);
        assert_eq!(edited.likes, 5);
        assert_eq!(edited.comments.len(), 1);
        assert!(edited.updated_at.is_some());
        assert_eq!(edited.title, "new");
    }

    #[test]
    fn thread_iterates_in_id_order() {
        let post = Post::from_draft(draft());
        let mut thread = CommentThread::new();
        let first = comment_on(&post, "first");
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = comment_on(&post, "second");

        // Insert out of order; iteration still follows id (creation) order.
        thread.insert(second.clone());
        thread.insert(first.clone());

        let values = thread.values();
        let texts: Vec<&str> = values.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn thread_remove_returns_exactly_one() {
        let post = Post::from_draft(draft());
        let mut thread = CommentThread::new();
        let a = comment_on(&post, "a");
        let b = comment_on(&post, "b");
        thread.insert(a.clone());
        thread.insert(b.clone());

        let removed = thread.remove(&a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(thread.len(), 1);
        assert!(thread.remove(&a.id).is_none());
    }

    #[test]
    fn draft_content_bytes() {
        let d = PostDraft::new("ab", "cdef", "gh");
        assert_eq!(d.content_bytes(), 8);
    }

    #[test]
    fn post_serde_roundtrip_keeps_thread() {
        let mut post = Post::from_draft(draft());
        post.comments.insert(comment_on(&post, "hello"));

        let json = serde_json::to_string(&post).unwrap();
        let parsed: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, post);
        assert_eq!(parsed.comments.len(), 1);
    }
}
