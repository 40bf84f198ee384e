//! Courier Domain - Core business types
//!
//! This crate defines the domain model of the Courier request
//! materialization core. All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod environment;
pub mod error;
pub mod request;
pub mod settings;
pub mod tls;

pub use auth::{ApiKeyLocation, AuthConfig};
pub use environment::{
    ConnectionDefinition, EnvironmentSelection, EnvironmentVariables, FlatVariables, ScopeStore,
    SystemDefinition, VariableMap, VariableScope, render_value,
};
pub use error::{DomainError, DomainResult};
pub use request::{
    BinaryFile, BodyType, FormDataPart, FormDataPartType, GraphQlBody, Header, Headers, HttpMethod,
    QueryParam, QueryParams, RawBodyKind, RequestBody, RequestSpec, TransportType,
};
pub use settings::ClientSettings;
pub use tls::{
    CertificatePolicy, CryptoProtocol, RuntimeOptions, TlsDecision, domain_matches, request_host,
};
