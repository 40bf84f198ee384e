//! Curl text codec
//!
//! Best-effort conversion between shell-style curl command lines and
//! [`RequestSpec`](courier_domain::request::RequestSpec). The two directions
//! are not exact inverses: disabled items, descriptions and file
//! attachments have no curl representation.

mod decode;
mod encode;
mod tokenizer;

pub use decode::{CurlImport, CurlWarning, DecodeOptions, UnsupportedPayloads, decode_curl};
pub use encode::encode_curl;
pub use tokenizer::tokenize;

use thiserror::Error;

/// Errors raised while decoding curl text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CurlError {
    /// The text could not be split into shell words.
    #[error("cannot tokenize curl command: {0}")]
    Tokenize(String),

    /// A `-F` value does not match `key=[@]value[;type=ct]`.
    #[error("invalid form data: {0}")]
    InvalidFormData(String),

    /// `-X` names a method that is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A payload that cannot be imported was found and the decode policy rejects it.
    #[error("unsupported payload: {0}")]
    UnsupportedPayload(String),
}
