//! TLS policy domain types.
//!
//! A project carries a [`CertificatePolicy`]; a request run carries
//! [`RuntimeOptions`]. [`TlsDecision`] combines both (plus the target host)
//! into the effective verification and client-certificate flags. Runtime
//! options can only weaken what the project allows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::DomainError;

/// Per-project certificate policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificatePolicy {
    /// Verify server certificates against the project trust store.
    #[serde(default)]
    pub enable_certificate_verification: bool,

    /// Present the project key-store identity to servers.
    #[serde(default)]
    pub enable_client_certificate: bool,

    /// Trust-store passphrase, possibly encrypted at rest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_store_passphrase: Option<String>,

    /// Key-store passphrase, possibly encrypted at rest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_store_passphrase: Option<String>,

    /// Domains verification is restricted to. Empty means all domains.
    #[serde(default)]
    pub trust_store_domains: Vec<String>,

    /// Domains the client certificate is restricted to. Empty means all domains.
    #[serde(default)]
    pub key_store_domains: Vec<String>,

    /// Protocol identifier.
    #[serde(default)]
    pub protocol: CryptoProtocol,
}

impl CertificatePolicy {
    /// A policy with both verification and client certificates disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Enables verification.
    #[must_use]
    pub const fn with_verification(mut self) -> Self {
        self.enable_certificate_verification = true;
        self
    }

    /// Enables the client certificate.
    #[must_use]
    pub const fn with_client_certificate(mut self) -> Self {
        self.enable_client_certificate = true;
        self
    }

    /// Restricts verification to the given domains.
    #[must_use]
    pub fn with_trust_store_domains(mut self, domains: Vec<String>) -> Self {
        self.trust_store_domains = domains;
        self
    }

    /// Restricts the client certificate to the given domains.
    #[must_use]
    pub fn with_key_store_domains(mut self, domains: Vec<String>) -> Self {
        self.key_store_domains = domains;
        self
    }
}

/// Crypto protocol identifier of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CryptoProtocol {
    /// Any supported TLS version
    #[serde(rename = "TLS")]
    #[default]
    Tls,
    /// TLS 1.0 minimum (deprecated)
    #[serde(rename = "TLSv1")]
    Tls10,
    /// TLS 1.1 minimum (deprecated)
    #[serde(rename = "TLSv1.1")]
    Tls11,
    /// TLS 1.2 minimum
    #[serde(rename = "TLSv1.2")]
    Tls12,
    /// TLS 1.3 minimum
    #[serde(rename = "TLSv1.3")]
    Tls13,
}

impl CryptoProtocol {
    /// Returns the identifier string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tls => "TLS",
            Self::Tls10 => "TLSv1",
            Self::Tls11 => "TLSv1.1",
            Self::Tls12 => "TLSv1.2",
            Self::Tls13 => "TLSv1.3",
        }
    }
}

impl fmt::Display for CryptoProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CryptoProtocol {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TLS" => Ok(Self::Tls),
            "TLSV1" | "TLSV1.0" => Ok(Self::Tls10),
            "TLSV1.1" => Ok(Self::Tls11),
            "TLSV1.2" => Ok(Self::Tls12),
            "TLSV1.3" => Ok(Self::Tls13),
            _ => Err(DomainError::UnsupportedProtocol(s.to_string())),
        }
    }
}

/// Per-run overrides. Each flag can only weaken the project policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    /// Do not follow redirects.
    #[serde(default)]
    pub disable_following_redirect: bool,
    /// Do not verify server certificates.
    #[serde(default)]
    pub disable_ssl_certificate_verification: bool,
    /// Do not present a client certificate.
    #[serde(default)]
    pub disable_ssl_client_certificate: bool,
}

/// Effective TLS behavior for one client.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TlsDecision {
    /// Load the trust store and verify the server chain.
    pub verify_certificates: bool,
    /// Load the key store and present the client identity.
    pub client_certificate: bool,
}

impl TlsDecision {
    /// Starting point derived from runtime options alone.
    #[must_use]
    pub const fn from_runtime(options: &RuntimeOptions) -> Self {
        Self {
            verify_certificates: !options.disable_ssl_certificate_verification,
            client_certificate: !options.disable_ssl_client_certificate,
        }
    }

    /// Whether the project policy must be consulted.
    #[must_use]
    pub const fn needs_policy(self) -> bool {
        self.verify_certificates || self.client_certificate
    }

    /// Narrows the flags by what the project policy enables.
    #[must_use]
    pub const fn narrow_by_policy(self, policy: &CertificatePolicy) -> Self {
        Self {
            verify_certificates: self.verify_certificates && policy.enable_certificate_verification,
            client_certificate: self.client_certificate && policy.enable_client_certificate,
        }
    }

    /// Narrows the flags by the policy's domain allow-lists.
    ///
    /// An empty allow-list does not restrict. A missing host never matches
    /// a non-empty allow-list.
    #[must_use]
    pub fn narrow_by_host(self, policy: &CertificatePolicy, host: Option<&str>) -> Self {
        let allowed = |domains: &[String]| {
            domains.is_empty() || host.is_some_and(|h| domains.iter().any(|d| domain_matches(d, h)))
        };
        Self {
            verify_certificates: self.verify_certificates && allowed(&policy.trust_store_domains),
            client_certificate: self.client_certificate && allowed(&policy.key_store_domains),
        }
    }

    /// Full decision for a project policy and optional request URL.
    ///
    /// Domain narrowing only applies when a request URL is supplied; a URL
    /// without a parsable host matches no allow-list entry.
    #[must_use]
    pub fn decide(
        options: &RuntimeOptions,
        policy: Option<&CertificatePolicy>,
        request_url: Option<&str>,
    ) -> Self {
        let decision = Self::from_runtime(options);
        let Some(policy) = policy.filter(|_| decision.needs_policy()) else {
            return Self::default();
        };

        let decision = decision.narrow_by_policy(policy);
        match request_url {
            Some(url) => decision.narrow_by_host(policy, request_host(url).as_deref()),
            None => decision,
        }
    }

    /// True when neither trust nor client material is used.
    #[must_use]
    pub const fn trusts_everything(self) -> bool {
        !self.verify_certificates && !self.client_certificate
    }
}

/// Extracts the host of a request URL.
#[must_use]
pub fn request_host(url: &str) -> Option<String> {
    Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
}

/// Checks whether an allow-list entry matches a request host, with
/// cookie-domain semantics: exact match, `.example.com` or `*.example.com`
/// for the domain and its subdomains, and a bare `example.com` also
/// covering subdomains. Comparison ignores ASCII case.
#[must_use]
pub fn domain_matches(pattern: &str, host: &str) -> bool {
    let pattern = pattern.trim().to_ascii_lowercase();
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();

    if pattern.is_empty() || host.is_empty() {
        return false;
    }
    if pattern == "*" {
        return true;
    }

    let base = pattern
        .strip_prefix("*.")
        .or_else(|| pattern.strip_prefix('.'))
        .unwrap_or(&pattern);

    host == base || host.ends_with(&format!(".{base}"))
}
