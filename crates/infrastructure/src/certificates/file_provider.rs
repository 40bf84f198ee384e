//! File-based certificate provider.
//!
//! Each project owns a directory named after its id:
//!
//! ```text
//! <root>/<project-id>/policy.yaml
//! <root>/<project-id>/truststore.pem
//! <root>/<project-id>/keystore.pem
//! ```
//!
//! A project without `policy.yaml` has verification and client
//! certificates disabled.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use courier_application::ports::{CertificateLookupError, CertificateProvider};
use courier_domain::tls::CertificatePolicy;

const POLICY_FILE: &str = "policy.yaml";
const TRUST_STORE_FILE: &str = "truststore.pem";
const KEY_STORE_FILE: &str = "keystore.pem";

/// Reads certificate policies and stores from a directory tree.
#[derive(Debug, Clone)]
pub struct FileCertificateProvider {
    root: PathBuf,
}

impl FileCertificateProvider {
    /// Creates a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn project_dir(&self, project_id: Uuid) -> PathBuf {
        self.root.join(project_id.to_string())
    }

    async fn existing(path: PathBuf) -> Result<PathBuf, CertificateLookupError> {
        if tokio::fs::try_exists(&path).await? {
            Ok(path)
        } else {
            Err(CertificateLookupError::StoreNotFound(path))
        }
    }
}

#[async_trait]
impl CertificateProvider for FileCertificateProvider {
    async fn get_certificate_policy(
        &self,
        project_id: Uuid,
    ) -> Result<CertificatePolicy, CertificateLookupError> {
        let path = self.project_dir(project_id).join(POLICY_FILE);

        if !tokio::fs::try_exists(&path).await? {
            tracing::debug!(%project_id, "no certificate policy, using disabled policy");
            return Ok(CertificatePolicy::disabled());
        }

        let content = tokio::fs::read_to_string(&path).await?;
        parse_policy(&path, &content)
    }

    async fn get_trust_store_file(
        &self,
        project_id: Uuid,
    ) -> Result<PathBuf, CertificateLookupError> {
        Self::existing(self.project_dir(project_id).join(TRUST_STORE_FILE)).await
    }

    async fn get_key_store_file(&self, project_id: Uuid) -> Result<PathBuf, CertificateLookupError> {
        Self::existing(self.project_dir(project_id).join(KEY_STORE_FILE)).await
    }
}

fn parse_policy(path: &Path, content: &str) -> Result<CertificatePolicy, CertificateLookupError> {
    // An empty file deserializes to null.
    if content.trim().is_empty() {
        return Ok(CertificatePolicy::disabled());
    }
    serde_yaml::from_str(content)
        .map_err(|e| CertificateLookupError::Serialization(format!("{}: {e}", path.display())))
}
