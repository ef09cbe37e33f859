use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// What the host's authentication layer knows about a caller.
///
/// Either form hashes down to the same key space; the variants exist so a
/// deployment can feed in whichever credential its runtime exposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityMaterial {
    /// An authenticated principal's public key (32 bytes).
    PublicKey([u8; 32]),
    /// A textual principal supplied by the host runtime.
    Principal(String),
}

/// Store key addressing a profile.
///
/// Hashing the caller's [`IdentityMaterial`] through BLAKE3 (with a
/// deployment-versioned domain tag) gives every authenticated caller a
/// stable 32-byte profile key without the store ever seeing the raw
/// credential. The all-zero key never comes out of the hash; it is held
/// back as the [anonymous](Self::anonymous) sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentityKey {
    hash: [u8; 32],
}

impl IdentityKey {
    /// Derive the profile key for a caller's credential.
    pub fn derive(material: &IdentityMaterial) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"plaza-identity-v1:");
        match material {
            IdentityMaterial::PublicKey(pk) => {
                hasher.update(b"pubkey:");
                hasher.update(pk);
            }
            IdentityMaterial::Principal(text) => {
                hasher.update(b"principal:");
                hasher.update(text.as_bytes());
            }
        }
        Self {
            hash: *hasher.finalize().as_bytes(),
        }
    }

    /// The distinguished identity of an unauthenticated caller.
    ///
    /// Profile creation under this key is always rejected.
    pub const fn anonymous() -> Self {
        Self { hash: [0u8; 32] }
    }

    /// Returns `true` if this is the anonymous sentinel.
    pub fn is_anonymous(&self) -> bool {
        self.hash == [0u8; 32]
    }

    /// A throwaway random identity, for tests and demos.
    pub fn ephemeral() -> Self {
        Self::derive(&IdentityMaterial::PublicKey(rand::random()))
    }

    /// Borrow the raw 32 key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.hash
    }

    /// The full key as 64 hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Abbreviated form for logs and error messages: `id:` plus the first
    /// 8 hex characters.
    pub fn short_id(&self) -> String {
        format!("id:{}", hex::encode(&self.hash[..4]))
    }

    /// Parse a key previously rendered by [`to_hex`](Self::to_hex); the
    /// `id:` prefix is accepted and ignored.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("id:").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let hash: [u8; 32] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| TypeError::InvalidLength {
                    expected: 32,
                    actual: bytes.len(),
                })?;
        Ok(Self { hash })
    }

    /// Wrap raw key bytes without derivation. Prefer [`derive`](Self::derive)
    /// outside of tests.
    pub fn from_raw(hash: [u8; 32]) -> Self {
        Self { hash }
    }
}

impl fmt::Debug for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityKey({})", self.short_id())
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}
