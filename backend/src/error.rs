//! # Error Types
//!
//! Every fallible domain operation returns [`FamilyTreeError`]. The first
//! variants are user-facing validation and authentication failures and are
//! always recoverable at the call site. `Internal` wraps anything unexpected
//! coming out of the storage layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FamilyTreeError {
    /// A required input was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A date of birth that is present but not a valid YYYY-MM-DD date
    #[error("Invalid date of birth '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// A request body or path that could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("User with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No user is signed in")]
    NotAuthenticated,

    #[error("Family member not found: {0}")]
    NotFound(u32),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl FamilyTreeError {
    /// Stable, machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            FamilyTreeError::MissingField(_) => "missing_field",
            FamilyTreeError::InvalidDate(_) => "invalid_date",
            FamilyTreeError::InvalidRequest(_) => "invalid_request",
            FamilyTreeError::DuplicateEmail(_) => "duplicate_email",
            FamilyTreeError::InvalidCredentials => "invalid_credentials",
            FamilyTreeError::NotAuthenticated => "not_authenticated",
            FamilyTreeError::NotFound(_) => "not_found",
            FamilyTreeError::Internal(_) => "internal",
        }
    }
}

pub type Result<T> = std::result::Result<T, FamilyTreeError>;
