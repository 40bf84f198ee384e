//! Courier Infrastructure - Adapters and implementations
//!
//! This crate provides the curl text codec, the TLS-aware HTTP client
//! factory and concrete implementations of the application ports.

pub mod certificates;
pub mod curl;
pub mod http;

pub use certificates::FileCertificateProvider;
pub use curl::{
    CurlError, CurlImport, CurlWarning, DecodeOptions, UnsupportedPayloads, decode_curl,
    encode_curl,
};
pub use http::{
    ClientBuildError, KeepAliveStrategy, ProjectHttpClient, ProjectResponse, SendError,
    TlsAwareHttpClientFactory,
};
