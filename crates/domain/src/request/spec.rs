//! Stored request

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Header, Headers, HttpMethod, QueryParams, RequestBody};
use crate::auth::AuthConfig;

/// Transport a request is sent over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportType {
    /// Plain HTTP/REST
    #[default]
    Rest,
    /// SOAP envelope over HTTP
    Soap,
}

/// A request as stored: text fields may still hold placeholders.
///
/// Materialization produces a new `RequestSpec` with the same `id` and
/// resolved text; curl decoding produces one with a fresh `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Identity of the stored request
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-text note; never sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Method, GET when absent
    #[serde(default)]
    pub method: HttpMethod,
    /// URL without the query string
    pub url: String,
    /// Headers in declaration order
    #[serde(default)]
    pub headers: Headers,
    /// Query parameters appended to `url`
    #[serde(default)]
    pub query_params: QueryParams,
    /// Payload
    #[serde(default)]
    pub body: RequestBody,
    /// Credentials
    #[serde(default)]
    pub auth: AuthConfig,
    /// REST or SOAP
    #[serde(default)]
    pub transport: TransportType,
}

impl RequestSpec {
    /// An empty GET request with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: None,
            method: HttpMethod::default(),
            url: String::new(),
            headers: Headers::new(),
            query_params: QueryParams::new(),
            body: RequestBody::none(),
            auth: AuthConfig::default(),
            transport: TransportType::default(),
        }
    }

    /// A GET request for `url`.
    #[must_use]
    pub fn get(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::new(name)
        }
    }

    /// Headers that will be sent.
    pub fn enabled_headers(&self) -> impl Iterator<Item = &Header> {
        self.headers.enabled()
    }

    /// `url` followed by the enabled query parameters, form-encoded.
    ///
    /// Appends with `&` when `url` already carries a query string.
    #[must_use]
    pub fn full_url(&self) -> String {
        let query = self.query_params.to_query_string();
        if query.is_empty() {
            return self.url.clone();
        }

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{separator}{query}", self.url)
    }
}
