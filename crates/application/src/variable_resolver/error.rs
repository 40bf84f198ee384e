//! Resolution errors
//!
//! Every variant carries the placeholder text that failed so a caller can
//! point the user at it. Secret values never appear in messages.

use thiserror::Error;

use crate::ports::DecryptError;

/// A placeholder could not be substituted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolutionError {
    /// A template value failed to decrypt.
    #[error("failed to decrypt value of {placeholder}: {source}")]
    Decryption {
        /// The placeholder text
        placeholder: String,
        /// The decrypt hook failure
        source: DecryptError,
    },

    /// An environment marker was used but no environment is selected.
    #[error("environment is not specified, cannot resolve {placeholder}")]
    EnvironmentNotSpecified {
        /// The placeholder text
        placeholder: String,
    },

    /// The selected environment has no such variable.
    #[error("environment variable not found: {placeholder}")]
    EnvironmentVariableNotFound {
        /// The placeholder text
        placeholder: String,
    },

    /// An environment value could not be substituted.
    #[error("failed to replace environment variable {placeholder}: {source}")]
    EnvironmentVariableReplacing {
        /// The placeholder text
        placeholder: String,
        /// The decrypt hook failure
        source: DecryptError,
    },
}

impl ResolutionError {
    /// Returns the placeholder text that triggered the error.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        match self {
            Self::Decryption { placeholder, .. }
            | Self::EnvironmentNotSpecified { placeholder }
            | Self::EnvironmentVariableNotFound { placeholder }
            | Self::EnvironmentVariableReplacing { placeholder, .. } => placeholder,
        }
    }
}
