//! Use cases
//!
//! Each use case represents a single application operation.

mod materialize_request;
mod resolve_tls_policy;

pub use materialize_request::MaterializeRequest;
pub use resolve_tls_policy::{ResolveTlsPolicy, TlsResolution};
