//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the materialization core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod certificate_provider;
mod decryptor;

pub use certificate_provider::{CertificateLookupError, CertificateProvider};
pub use decryptor::{DecryptError, Decryptor, PassthroughDecryptor};
