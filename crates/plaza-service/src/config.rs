use serde::{Deserialize, Serialize};

use plaza_store::DEFAULT_VALUE_LIMIT;

/// Configuration for the service surface.
///
/// The value limits mirror the bounds the durable engine enforces on
/// stored records; the content limits are checked on incoming drafts so an
/// oversized submission is rejected at the boundary instead of failing
/// deep in the store with a comment thread already attached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlazaConfig {
    /// Value-size bound for the post region, in bytes.
    pub post_value_limit: u64,
    /// Value-size bound for the profile region, in bytes.
    pub profile_value_limit: u64,
    /// Maximum bytes across a post draft's editable fields.
    pub max_post_content_bytes: usize,
    /// Maximum bytes for a single comment.
    pub max_comment_bytes: usize,
    /// Maximum bytes across a profile draft's editable fields.
    pub max_profile_content_bytes: usize,
}

impl Default for PlazaConfig {
    fn default() -> Self {
        Self {
            post_value_limit: DEFAULT_VALUE_LIMIT,
            profile_value_limit: DEFAULT_VALUE_LIMIT,
            max_post_content_bytes: 512,
            max_comment_bytes: 256,
            max_profile_content_bytes: 256,
        }
    }
}

impl PlazaConfig {
    /// A configuration with no practical bounds, for embedding and tests
    /// that exercise large records.
    pub fn unbounded() -> Self {
        Self {
            post_value_limit: u64::MAX,
            profile_value_limit: u64::MAX,
            max_post_content_bytes: usize::MAX,
            max_comment_bytes: usize::MAX,
            max_profile_content_bytes: usize::MAX,
        }
    }
}
