//! Decrypt hook port
//!
//! Values may be stored encrypted at rest. Every substituted value passes
//! through [`Decryptor::decrypt_if_encrypted`] before it lands in a request.

use thiserror::Error;

/// Failure of the decrypt hook.
///
/// Carries the kind of the underlying failure and its message, never the
/// secret value itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct DecryptError {
    /// Kind of the underlying failure (e.g. "InvalidCiphertext").
    pub kind: String,
    /// Human-readable message.
    pub message: String,
}

impl DecryptError {
    /// Creates a new decrypt error.
    #[must_use]
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Decrypts values that are encrypted at rest.
pub trait Decryptor: Send + Sync {
    /// Returns the plaintext of `value`; values that are not encrypted are
    /// returned unchanged.
    ///
    /// # Errors
    /// Returns an error if `value` is encrypted and cannot be decrypted.
    fn decrypt_if_encrypted(&self, value: &str) -> Result<String, DecryptError>;
}

impl<D: Decryptor + ?Sized> Decryptor for &D {
    fn decrypt_if_encrypted(&self, value: &str) -> Result<String, DecryptError> {
        (**self).decrypt_if_encrypted(value)
    }
}

impl<D: Decryptor + ?Sized> Decryptor for std::sync::Arc<D> {
    fn decrypt_if_encrypted(&self, value: &str) -> Result<String, DecryptError> {
        (**self).decrypt_if_encrypted(value)
    }
}

/// Decryptor for deployments without encryption at rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughDecryptor;

impl Decryptor for PassthroughDecryptor {
    fn decrypt_if_encrypted(&self, value: &str) -> Result<String, DecryptError> {
        Ok(value.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_passthrough_returns_input() {
        assert_eq!(
            PassthroughDecryptor.decrypt_if_encrypted("{ENC}abc").unwrap(),
            "{ENC}abc"
        );
    }

    #[test]
    fn test_decrypt_error_display() {
        let err = DecryptError::new("BadPadding", "padding check failed");
        assert_eq!(err.to_string(), "BadPadding: padding check failed");
    }
}
