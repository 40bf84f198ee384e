//! Resolve TLS policy use case.

use uuid::Uuid;

use courier_domain::tls::{CertificatePolicy, RuntimeOptions, TlsDecision};

use crate::error::ApplicationResult;
use crate::ports::CertificateProvider;

/// Effective TLS behavior for one client, with the policy it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsResolution {
    /// Project policy; `None` when runtime options made it irrelevant.
    pub policy: Option<CertificatePolicy>,
    /// Verification and client-certificate flags after narrowing.
    pub decision: TlsDecision,
}

/// Use case for combining a project's certificate policy with runtime options.
pub struct ResolveTlsPolicy<P: CertificateProvider> {
    certificates: P,
}

impl<P: CertificateProvider> ResolveTlsPolicy<P> {
    /// Creates a new `ResolveTlsPolicy` use case.
    #[must_use]
    pub const fn new(certificates: P) -> Self {
        Self { certificates }
    }

    /// Decides verification and client-certificate use for a project.
    ///
    /// The policy is not fetched when `options` already disable both.
    ///
    /// # Errors
    /// Returns error if the policy lookup fails.
    pub async fn execute(
        &self,
        project_id: Uuid,
        options: &RuntimeOptions,
        request_url: Option<&str>,
    ) -> ApplicationResult<TlsResolution> {
        let policy = if TlsDecision::from_runtime(options).needs_policy() {
            Some(self.certificates.get_certificate_policy(project_id).await?)
        } else {
            None
        };
        let decision = TlsDecision::decide(options, policy.as_ref(), request_url);

        tracing::debug!(
            %project_id,
            verify = decision.verify_certificates,
            client_certificate = decision.client_certificate,
            "resolved TLS policy"
        );

        Ok(TlsResolution { policy, decision })
    }
}
