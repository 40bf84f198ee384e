//! Application error types

use thiserror::Error;

use crate::ports::CertificateLookupError;
use crate::variable_resolver::ResolutionError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A placeholder could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Certificate policy or store lookup failed.
    #[error("certificate lookup failed: {0}")]
    CertificateLookup(#[from] CertificateLookupError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
