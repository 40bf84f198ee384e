//! HTTP client construction

mod client_factory;
mod keep_alive;

pub use client_factory::{
    ClientBuildError, ProjectHttpClient, ProjectResponse, SendError, TlsAwareHttpClientFactory,
};
pub use keep_alive::KeepAliveStrategy;
