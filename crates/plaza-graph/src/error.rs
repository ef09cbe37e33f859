use plaza_profiles::ProfileError;
use plaza_types::IdentityKey;
use thiserror::Error;

/// Errors from relationship operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A profile may never follow its own identity.
    #[error("cannot follow own profile: key={0}")]
    SelfFollow(IdentityKey),

    /// Failure in the profile directory.
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Result alias for relationship operations.
pub type GraphResult<T> = Result<T, GraphError>;
