use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use plaza_types::{IdentityKey, Timestamp};

/// A persisted profile record.
///
/// The relationship sets are ordered and duplicate-free by construction,
/// and never contain the owner's own identity (the maintainer rejects
/// self-follow before any write).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The caller-derived identity key this record is stored under.
    pub identity: IdentityKey,
    pub username: String,
    pub bio: String,
    /// Identities following this profile.
    pub followers: BTreeSet<IdentityKey>,
    /// Identities this profile follows.
    pub following: BTreeSet<IdentityKey>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// The editable fields of a profile, as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub username: String,
    pub bio: String,
}

impl ProfileDraft {
    pub fn new(username: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            bio: bio.into(),
        }
    }

    /// Total bytes across the editable fields.
    pub fn content_bytes(&self) -> usize {
        self.username.len() + self.bio.len()
    }
}

impl Profile {
    /// Materialize a fresh profile for an identity.
    pub fn from_draft(identity: IdentityKey, draft: ProfileDraft) -> Self {
        Self {
            identity,
            username: draft.username,
            bio: draft.bio,
            followers: BTreeSet::new(),
            following: BTreeSet::new(),
            created_at: Timestamp::now(),
            updated_at: None,
        }
    }

    /// Build the replacement record for an edit.
    ///
    /// Only username and bio change; the relationship sets and creation
    /// time carry over.
    pub fn with_draft(&self, draft: ProfileDraft) -> Self {
        Self {
            identity: self.identity,
            username: draft.username,
            bio: draft.bio,
            followers: self.followers.clone(),
            following: self.following.clone(),
            created_at: self.created_at,
            updated_at: Some(Timestamp::now()),
        }
    }

    /// Returns `true` if this profile follows `other`.
    pub fn follows(&self, other: &IdentityKey) -> bool {
        self.following.contains(other)
    }

    /// Add an entry to `following`. Returns `false` if already present.
    pub fn add_following(&mut self, other: IdentityKey) -> bool {
        self.following.insert(other)
    }

    /// Remove an entry from `following`. Returns `false` if absent.
    pub fn remove_following(&mut self, other: &IdentityKey) -> bool {
        self.following.remove(other)
    }

    /// Add an entry to `followers`. Returns `false` if already present.
    pub fn add_follower(&mut self, other: IdentityKey) -> bool {
        self.followers.insert(other)
    }

    /// Remove an entry from `followers`. Returns `false` if absent.
    pub fn remove_follower(&mut self, other: &IdentityKey) -> bool {
        self.followers.remove(other)
    }
}
