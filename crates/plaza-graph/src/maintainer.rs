use std::sync::Arc;

use tracing::{debug, warn};

use plaza_profiles::{Profile, ProfileDirectory, ProfileError};
use plaza_types::IdentityKey;

use crate::audit::GraphAudit;
use crate::error::{GraphError, GraphResult};

/// Enacts follow/unfollow as a two-sided sequence over the profile region.
///
/// The requester's record is always written first. The target's mirror
/// entry is written second, best effort: a missing target leaves the edge
/// one-sided, logged at warn level, and the first write stands. Both
/// operations are idempotent.
pub struct RelationshipMaintainer {
    profiles: Arc<ProfileDirectory>,
}

impl RelationshipMaintainer {
    /// Create a maintainer over the given profile directory.
    pub fn new(profiles: Arc<ProfileDirectory>) -> Self {
        Self { profiles }
    }

    /// Record that `requester` follows `target`.
    ///
    /// Returns the requester's updated profile. Calling this twice in a
    /// row is a no-op the second time.
    pub fn follow(
        &self,
        requester: &IdentityKey,
        target: &IdentityKey,
    ) -> GraphResult<Profile> {
        if requester == target {
            return Err(GraphError::SelfFollow(*requester));
        }

        let mut requester_profile = self.profiles.get_profile(requester)?;
        if requester_profile.follows(target) {
            return Ok(requester_profile);
        }

        // Step one: the requester's side, persisted before the mirror write.
        requester_profile.add_following(*target);
        let requester_profile = self.profiles.persist(requester_profile)?;
        debug!(requester = %requester, target = %target, "recorded following entry");

        // Step two: the target's mirror entry, best effort.
        match self.profiles.get_profile(target) {
            Ok(mut target_profile) => {
                if target_profile.add_follower(*requester) {
                    self.profiles.persist(target_profile)?;
                    debug!(requester = %requester, target = %target, "recorded follower entry");
                }
            }
            Err(ProfileError::NotFound(_)) => {
                warn!(
                    requester = %requester,
                    target = %target,
                    "follow left one-sided: target profile missing"
                );
            }
            Err(e) => return Err(e.into()),
        }

        Ok(requester_profile)
    }

    /// Record that `requester` no longer follows `target`.
    ///
    /// Returns the requester's updated profile. A requester that does not
    /// follow the target is returned unchanged.
    pub fn unfollow(
        &self,
        requester: &IdentityKey,
        target: &IdentityKey,
    ) -> GraphResult<Profile> {
        let mut requester_profile = self.profiles.get_profile(requester)?;
        if !requester_profile.remove_following(target) {
            return Ok(requester_profile);
        }

        let requester_profile = self.profiles.persist(requester_profile)?;
        debug!(requester = %requester, target = %target, "removed following entry");

        match self.profiles.get_profile(target) {
            Ok(mut target_profile) => {
                if target_profile.remove_follower(requester) {
                    self.profiles.persist(target_profile)?;
                    debug!(requester = %requester, target = %target, "removed follower entry");
                }
            }
            Err(ProfileError::NotFound(_)) => {
                warn!(
                    requester = %requester,
                    target = %target,
                    "unfollow left one-sided: target profile missing"
                );
            }
            Err(e) => return Err(e.into()),
        }

        Ok(requester_profile)
    }

    /// Scan the whole directory and report every graph inconsistency.
    ///
    /// Read-only; nothing is repaired.
    pub fn audit(&self) -> GraphResult<GraphAudit> {
        GraphAudit::scan(&self.profiles)
    }
}
