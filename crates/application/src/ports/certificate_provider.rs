//! Certificate lookup port
//!
//! Defines the interface for reading per-project certificate policies and
//! the location of their trust and key stores.

use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use courier_domain::tls::CertificatePolicy;

/// Errors that can occur during certificate lookups.
#[derive(Debug, thiserror::Error)]
pub enum CertificateLookupError {
    /// The project has no certificate policy.
    #[error("no certificate policy for project {0}")]
    PolicyNotFound(Uuid),

    /// A store file the policy refers to does not exist.
    #[error("certificate store not found: {0}")]
    StoreNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Source of per-project certificate material.
#[async_trait]
pub trait CertificateProvider: Send + Sync {
    /// Loads the certificate policy of a project.
    ///
    /// # Errors
    /// Returns an error if the policy cannot be found or read.
    async fn get_certificate_policy(
        &self,
        project_id: Uuid,
    ) -> Result<CertificatePolicy, CertificateLookupError>;

    /// Returns the trust-store file of a project.
    ///
    /// # Errors
    /// Returns an error if the project has no trust store.
    async fn get_trust_store_file(&self, project_id: Uuid)
    -> Result<PathBuf, CertificateLookupError>;

    /// Returns the key-store file of a project.
    ///
    /// # Errors
    /// Returns an error if the project has no key store.
    async fn get_key_store_file(&self, project_id: Uuid) -> Result<PathBuf, CertificateLookupError>;
}

#[async_trait]
impl<P: CertificateProvider + ?Sized> CertificateProvider for &P {
    async fn get_certificate_policy(
        &self,
        project_id: Uuid,
    ) -> Result<CertificatePolicy, CertificateLookupError> {
        (**self).get_certificate_policy(project_id).await
    }

    async fn get_trust_store_file(&self, project_id: Uuid)
    -> Result<PathBuf, CertificateLookupError> {
        (**self).get_trust_store_file(project_id).await
    }

    async fn get_key_store_file(&self, project_id: Uuid) -> Result<PathBuf, CertificateLookupError> {
        (**self).get_key_store_file(project_id).await
    }
}
