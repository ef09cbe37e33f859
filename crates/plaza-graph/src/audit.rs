use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use plaza_profiles::{Profile, ProfileDirectory};
use plaza_types::IdentityKey;

use crate::error::GraphResult;

/// One inconsistency found in the follow graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphFinding {
    /// `follower` follows `followee`, but the mirror entry in the
    /// followee's `followers` set is missing.
    MissingFollowerEntry {
        follower: IdentityKey,
        followee: IdentityKey,
    },
    /// `followee` lists `follower` in its `followers` set, but the mirror
    /// entry in the follower's `following` set is missing.
    MissingFollowingEntry {
        follower: IdentityKey,
        followee: IdentityKey,
    },
    /// A `following` entry points at an identity with no profile.
    DanglingFollowing {
        profile: IdentityKey,
        target: IdentityKey,
    },
    /// A `followers` entry points at an identity with no profile.
    DanglingFollower {
        profile: IdentityKey,
        source: IdentityKey,
    },
}

impl fmt::Display for GraphFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFollowerEntry { follower, followee } => write!(
                f,
                "{follower} follows {followee} but the follower entry is missing"
            ),
            Self::MissingFollowingEntry { follower, followee } => write!(
                f,
                "{followee} lists follower {follower} but the following entry is missing"
            ),
            Self::DanglingFollowing { profile, target } => {
                write!(f, "{profile} follows deleted profile {target}")
            }
            Self::DanglingFollower { profile, source } => {
                write!(f, "{profile} lists deleted follower {source}")
            }
        }
    }
}

/// Report produced by a full scan of the profile region.
///
/// A consistent graph produces an empty report. Each edge asymmetry is
/// reported once, from the side that still holds the entry.
#[derive(Clone, Debug, Default)]
pub struct GraphAudit {
    pub findings: Vec<GraphFinding>,
}

impl GraphAudit {
    /// Scan every profile and collect all inconsistencies.
    pub fn scan(profiles: &ProfileDirectory) -> GraphResult<Self> {
        let snapshot: BTreeMap<IdentityKey, Profile> = profiles
            .list_profiles()?
            .into_iter()
            .map(|p| (p.identity, p))
            .collect();

        let mut findings = Vec::new();

        for profile in snapshot.values() {
            for target in &profile.following {
                match snapshot.get(target) {
                    None => findings.push(GraphFinding::DanglingFollowing {
                        profile: profile.identity,
                        target: *target,
                    }),
                    Some(t) if !t.followers.contains(&profile.identity) => {
                        findings.push(GraphFinding::MissingFollowerEntry {
                            follower: profile.identity,
                            followee: *target,
                        })
                    }
                    Some(_) => {}
                }
            }

            for source in &profile.followers {
                match snapshot.get(source) {
                    None => findings.push(GraphFinding::DanglingFollower {
                        profile: profile.identity,
                        source: *source,
                    }),
                    Some(s) if !s.following.contains(&profile.identity) => {
                        findings.push(GraphFinding::MissingFollowingEntry {
                            follower: *source,
                            followee: profile.identity,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        for finding in &findings {
            warn!(%finding, "graph inconsistency");
        }

        Ok(Self { findings })
    }

    /// Returns `true` if the scan found nothing.
    pub fn is_consistent(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Returns `true` if the report is empty.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_profiles::ProfileDraft;

    fn register(profiles: &ProfileDirectory, username: &str) -> IdentityKey {
        let key = IdentityKey::ephemeral();
        profiles
            .create_profile(&key, ProfileDraft::new(username, ""))
            .unwrap();
        key
    }

    #[test]
    fn empty_directory_is_consistent() {
        let profiles = ProfileDirectory::new();
        let audit = GraphAudit::scan(&profiles).unwrap();
        assert!(audit.is_consistent());
        assert!(audit.is_empty());
    }

    #[test]
    fn symmetric_edge_produces_no_findings() {
        let profiles = ProfileDirectory::new();
        let a = register(&profiles, "a");
        let b = register(&profiles, "b");

        let mut pa = profiles.get_profile(&a).unwrap();
        pa.add_following(b);
        profiles.persist(pa).unwrap();
        let mut pb = profiles.get_profile(&b).unwrap();
        pb.add_follower(a);
        profiles.persist(pb).unwrap();

        assert!(GraphAudit::scan(&profiles).unwrap().is_consistent());
    }

    #[test]
    fn one_sided_following_is_reported_once() {
        let profiles = ProfileDirectory::new();
        let a = register(&profiles, "a");
        let b = register(&profiles, "b");

        // Requester side only; the mirror write never happened.
        let mut pa = profiles.get_profile(&a).unwrap();
        pa.add_following(b);
        profiles.persist(pa).unwrap();

        let audit = GraphAudit::scan(&profiles).unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(
            audit.findings[0],
            GraphFinding::MissingFollowerEntry {
                follower: a,
                followee: b
            }
        );
    }

    #[test]
    fn one_sided_follower_is_reported_once() {
        let profiles = ProfileDirectory::new();
        let a = register(&profiles, "a");
        let b = register(&profiles, "b");

        let mut pb = profiles.get_profile(&b).unwrap();
        pb.add_follower(a);
        profiles.persist(pb).unwrap();

        let audit = GraphAudit::scan(&profiles).unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(
            audit.findings[0],
            GraphFinding::MissingFollowingEntry {
                follower: a,
                followee: b
            }
        );
    }

    #[test]
    fn deleted_profile_leaves_dangling_references() {
        let profiles = ProfileDirectory::new();
        let a = register(&profiles, "a");
        let b = register(&profiles, "b");

        let mut pa = profiles.get_profile(&a).unwrap();
        pa.add_following(b);
        profiles.persist(pa).unwrap();
        let mut pb = profiles.get_profile(&b).unwrap();
        pb.add_follower(a);
        profiles.persist(pb).unwrap();

        profiles.delete_profile(&b).unwrap();

        let audit = GraphAudit::scan(&profiles).unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(
            audit.findings[0],
            GraphFinding::DanglingFollowing {
                profile: a,
                target: b
            }
        );
    }

    #[test]
    fn findings_render_readable_messages() {
        let a = IdentityKey::from_raw([1; 32]);
        let b = IdentityKey::from_raw([2; 32]);
        let finding = GraphFinding::DanglingFollowing {
            profile: a,
            target: b,
        };
        let message = finding.to_string();
        assert!(message.contains(&a.short_id()));
        assert!(message.contains("deleted profile"));
    }
}
