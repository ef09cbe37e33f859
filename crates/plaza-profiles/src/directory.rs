use tracing::debug;

use plaza_store::{BTreeStore, OrderedStore};
use plaza_types::IdentityKey;

use crate::error::{ProfileError, ProfileResult};
use crate::record::{Profile, ProfileDraft};

/// The owning component for the profile entity region.
///
/// Keys are caller-identity-derived, so the region holds at most one
/// profile per authenticated identity. The anonymous sentinel is rejected
/// before any write.
pub struct ProfileDirectory {
    profiles: BTreeStore<IdentityKey, Profile>,
}

impl ProfileDirectory {
    /// Create a directory over an empty region with the default value bound.
    pub fn new() -> Self {
        Self {
            profiles: BTreeStore::new(),
        }
    }

    /// Create a directory whose region enforces an explicit value bound.
    pub fn with_value_limit(limit: u64) -> Self {
        Self {
            profiles: BTreeStore::with_value_limit(limit),
        }
    }

    /// Snapshot of all profiles in identity-key order.
    pub fn list_profiles(&self) -> ProfileResult<Vec<Profile>> {
        Ok(self.profiles.values()?)
    }

    /// Look up one profile by identity key.
    pub fn get_profile(&self, key: &IdentityKey) -> ProfileResult<Profile> {
        self.profiles
            .get(key)?
            .ok_or(ProfileError::NotFound(*key))
    }

    /// Returns `true` if a profile exists under the key.
    pub fn exists(&self, key: &IdentityKey) -> ProfileResult<bool> {
        Ok(self.profiles.contains(key)?)
    }

    /// Create the calling identity's profile.
    ///
    /// Rejected for the anonymous sentinel and for identities that already
    /// own a profile; in both cases nothing is persisted.
    pub fn create_profile(
        &self,
        caller: &IdentityKey,
        draft: ProfileDraft,
    ) -> ProfileResult<Profile> {
        if caller.is_anonymous() {
            return Err(ProfileError::AnonymousCaller);
        }
        if self.profiles.contains(caller)? {
            return Err(ProfileError::AlreadyExists(*caller));
        }

        let profile = Profile::from_draft(*caller, draft);
        debug!(identity = %caller, "creating profile");
        self.profiles.insert(*caller, &profile)?;
        Ok(profile)
    }

    /// Replace the editable fields of an existing profile.
    pub fn update_profile(
        &self,
        key: &IdentityKey,
        draft: ProfileDraft,
    ) -> ProfileResult<Profile> {
        let current = self.get_profile(key)?;
        let replacement = current.with_draft(draft);
        debug!(identity = %key, "updating profile");
        self.profiles.insert(*key, &replacement)?;
        Ok(replacement)
    }

    /// Remove a profile and return it.
    ///
    /// References to the removed identity held in other profiles'
    /// relationship sets are left in place; the graph audit reports them
    /// as dangling edges.
    pub fn delete_profile(&self, key: &IdentityKey) -> ProfileResult<Profile> {
        let removed = self
            .profiles
            .remove(key)?
            .ok_or(ProfileError::NotFound(*key))?;
        debug!(identity = %key, "deleted profile");
        Ok(removed)
    }

    /// Re-insert a full replacement record under its identity key.
    ///
    /// This is the write path the relationship maintainer uses after
    /// editing a profile's relationship sets. Field edits go through
    /// [`update_profile`](Self::update_profile).
    pub fn persist(&self, profile: Profile) -> ProfileResult<Profile> {
        self.profiles.insert(profile.identity, &profile)?;
        Ok(profile)
    }

    /// Number of profiles in the directory.
    pub fn len(&self) -> ProfileResult<usize> {
        Ok(self.profiles.len()?)
    }

    /// Returns `true` if no profiles are stored.
    pub fn is_empty(&self) -> ProfileResult<bool> {
        Ok(self.profiles.is_empty()?)
    }
}

impl Default for ProfileDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(username: &str) -> ProfileDraft {
        ProfileDraft::new(username, "a short bio")
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn created_profile_is_immediately_readable() {
        let directory = ProfileDirectory::new();
        let caller = IdentityKey::ephemeral();

        let profile = directory.create_profile(&caller, draft("alice")).unwrap();
        assert_eq!(profile.identity, caller);

        let read = directory.get_profile(&caller).unwrap();
        assert_eq!(read, profile);
        assert!(read.followers.is_empty());
        assert!(read.following.is_empty());
    }

    #[test]
    fn get_missing_profile_fails() {
        let directory = ProfileDirectory::new();
        let err = directory.get_profile(&IdentityKey::ephemeral()).unwrap_err();
        assert!(matches!(err, ProfileError::NotFound(_)));
    }

    #[test]
    fn anonymous_creation_is_rejected_and_nothing_persists() {
        let directory = ProfileDirectory::new();
        let anon = IdentityKey::anonymous();

        let err = directory.create_profile(&anon, draft("ghost")).unwrap_err();
        assert!(matches!(err, ProfileError::AnonymousCaller));
        assert!(!directory.exists(&anon).unwrap());
        assert!(directory.is_empty().unwrap());
    }

    #[test]
    fn second_creation_under_one_identity_is_rejected() {
        let directory = ProfileDirectory::new();
        let caller = IdentityKey::ephemeral();

        directory.create_profile(&caller, draft("first")).unwrap();
        let err = directory
            .create_profile(&caller, draft("second"))
            .unwrap_err();
        assert!(matches!(err, ProfileError::AlreadyExists(_)));

        // The original record is untouched.
        assert_eq!(directory.get_profile(&caller).unwrap().username, "first");
    }

    #[test]
    fn update_replaces_fields_and_preserves_relationships() {
        let directory = ProfileDirectory::new();
        let caller = IdentityKey::ephemeral();
        let other = IdentityKey::ephemeral();

        directory.create_profile(&caller, draft("alice")).unwrap();
        let mut profile = directory.get_profile(&caller).unwrap();
        profile.add_following(other);
        directory.persist(profile).unwrap();

        let updated = directory
            .update_profile(&caller, ProfileDraft::new("alicia", "new bio"))
            .unwrap();
        assert_eq!(updated.username, "alicia");
        assert!(updated.follows(&other));
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn update_missing_profile_fails() {
        let directory = ProfileDirectory::new();
        let err = directory
            .update_profile(&IdentityKey::ephemeral(), draft("x"))
            .unwrap_err();
        assert!(matches!(err, ProfileError::NotFound(_)));
    }

    #[test]
    fn delete_returns_record_without_cleaning_mirrors() {
        let directory = ProfileDirectory::new();
        let a = IdentityKey::ephemeral();
        let b = IdentityKey::ephemeral();
        directory.create_profile(&a, draft("a")).unwrap();
        directory.create_profile(&b, draft("b")).unwrap();

        // Manufacture a mutual edge, then delete one side.
        let mut pa = directory.get_profile(&a).unwrap();
        pa.add_following(b);
        directory.persist(pa).unwrap();
        let mut pb = directory.get_profile(&b).unwrap();
        pb.add_follower(a);
        directory.persist(pb).unwrap();

        let removed = directory.delete_profile(&b).unwrap();
        assert_eq!(removed.identity, b);

        // The surviving profile still references the deleted identity.
        assert!(directory.get_profile(&a).unwrap().follows(&b));
    }

    #[test]
    fn delete_missing_profile_fails() {
        let directory = ProfileDirectory::new();
        let err = directory
            .delete_profile(&IdentityKey::ephemeral())
            .unwrap_err();
        assert!(matches!(err, ProfileError::NotFound(_)));
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    #[test]
    fn list_profiles_walks_in_key_order() {
        let directory = ProfileDirectory::new();
        let a = IdentityKey::from_raw([1u8; 32]);
        let b = IdentityKey::from_raw([2u8; 32]);

        directory.create_profile(&b, draft("second")).unwrap();
        directory.create_profile(&a, draft("first")).unwrap();

        let keys: Vec<IdentityKey> = directory
            .list_profiles()
            .unwrap()
            .iter()
            .map(|p| p.identity)
            .collect();
        assert_eq!(keys, vec![a, b]);
    }

    #[test]
    fn error_messages_identify_entity_and_key() {
        let directory = ProfileDirectory::new();
        let key = IdentityKey::ephemeral();
        let message = directory.get_profile(&key).unwrap_err().to_string();
        assert!(message.contains("profile not found"));
        assert!(message.contains(&key.short_id()));
    }
}
