//! Domain error types

use thiserror::Error;

/// Errors raised while parsing domain identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Not one of the supported HTTP methods.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Not one of the known body type tags.
    #[error("unsupported body type: {0}")]
    UnsupportedBodyType(String),

    /// Not a recognized crypto protocol identifier.
    #[error("unsupported crypto protocol: {0}")]
    UnsupportedProtocol(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
