//! Courier Application - Resolution and use cases
//!
//! Ports to external collaborators, the placeholder replacers and the
//! request materialization and TLS policy use cases.

pub mod error;
pub mod ports;
pub mod use_cases;
pub mod variable_resolver;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{
    CertificateLookupError, CertificateProvider, DecryptError, Decryptor, PassthroughDecryptor,
};
pub use use_cases::{MaterializeRequest, ResolveTlsPolicy, TlsResolution};
pub use variable_resolver::{
    EnvironmentVariableResolver, ResolutionError, TemplateReplacer, TextReplacer,
};
