use plaza_store::StoreError;
use plaza_types::IdentityKey;
use thiserror::Error;

/// Errors from profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No profile exists under the given identity key.
    #[error("profile not found: key={0}")]
    NotFound(IdentityKey),

    /// Profile creation attempted by an unauthenticated caller.
    #[error("anonymous callers cannot create a profile")]
    AnonymousCaller,

    /// The calling identity already owns a profile.
    #[error("profile already exists: key={0}")]
    AlreadyExists(IdentityKey),

    /// Failure in the underlying entity region.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
