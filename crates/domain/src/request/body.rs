//! HTTP Request body types
//!
//! A body is a sum type: each body kind carries exactly the payload it
//! needs, so a form-data body always has a part list and a binary body
//! always has a file reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::form_data::FormDataPart;
use crate::error::DomainError;

/// Flat tag naming every body type a request may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    /// JSON document
    #[serde(rename = "JSON")]
    Json,
    /// GraphQL query with optional variables
    #[serde(rename = "GraphQL")]
    GraphQl,
    /// XML document
    #[serde(rename = "XML")]
    Xml,
    /// Plain text
    #[serde(rename = "TEXT")]
    Text,
    /// `application/x-www-form-urlencoded` text
    #[serde(rename = "URLENCODED")]
    UrlEncoded,
    /// Reference to an uploaded binary file
    Binary,
    /// Multipart form data
    FormData,
    /// Velocity template
    Velocity,
    /// Wireshark capture text
    Wireshark,
    /// HTML document
    #[serde(rename = "HTML")]
    Html,
    /// JavaScript source
    JavaScript,
}

impl BodyType {
    /// Returns the canonical tag string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::GraphQl => "GraphQL",
            Self::Xml => "XML",
            Self::Text => "TEXT",
            Self::UrlEncoded => "URLENCODED",
            Self::Binary => "Binary",
            Self::FormData => "FormData",
            Self::Velocity => "Velocity",
            Self::Wireshark => "Wireshark",
            Self::Html => "HTML",
            Self::JavaScript => "JavaScript",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Json,
            Self::GraphQl,
            Self::Xml,
            Self::Text,
            Self::UrlEncoded,
            Self::Binary,
            Self::FormData,
            Self::Velocity,
            Self::Wireshark,
            Self::Html,
            Self::JavaScript,
        ]
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| DomainError::UnsupportedBodyType(s.to_string()))
    }
}

/// Textual body kinds whose payload is a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawBodyKind {
    /// JSON document
    Json,
    /// XML document
    Xml,
    /// Plain text
    Text,
    /// URL-encoded form
    UrlEncoded,
    /// Velocity template
    Velocity,
    /// Wireshark capture text
    Wireshark,
    /// HTML document
    Html,
    /// JavaScript source
    JavaScript,
}

impl RawBodyKind {
    /// Returns the content type typically sent with this kind.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Text | Self::Velocity | Self::Wireshark => "text/plain",
            Self::UrlEncoded => "application/x-www-form-urlencoded",
            Self::Html => "text/html",
            Self::JavaScript => "application/javascript",
        }
    }

    /// Returns the flat body type tag.
    #[must_use]
    pub const fn body_type(self) -> BodyType {
        match self {
            Self::Json => BodyType::Json,
            Self::Xml => BodyType::Xml,
            Self::Text => BodyType::Text,
            Self::UrlEncoded => BodyType::UrlEncoded,
            Self::Velocity => BodyType::Velocity,
            Self::Wireshark => BodyType::Wireshark,
            Self::Html => BodyType::Html,
            Self::JavaScript => BodyType::JavaScript,
        }
    }
}

/// GraphQL payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphQlBody {
    /// The GraphQL document (query, mutation, subscription)
    pub query: String,
    /// Variables as JSON text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

/// Reference to a binary file stored outside the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BinaryFile {
    /// Original file name; may be empty when nothing was uploaded yet
    pub file_name: String,
    /// Identifier of the stored file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

/// HTTP request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// Textual body
    Raw {
        /// The textual kind
        kind: RawBodyKind,
        /// The body content
        content: String,
    },
    /// GraphQL body
    #[serde(rename = "graphql")]
    GraphQl(GraphQlBody),
    /// Binary file body
    Binary(BinaryFile),
    /// Multipart form data
    FormData {
        /// Ordered parts, disabled ones included
        parts: Vec<FormDataPart>,
    },
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a textual body of the given kind.
    #[must_use]
    pub fn raw(kind: RawBodyKind, content: impl Into<String>) -> Self {
        Self::Raw {
            kind,
            content: content.into(),
        }
    }

    /// Creates a JSON body.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self::raw(RawBodyKind::Json, content)
    }

    /// Creates an XML body.
    #[must_use]
    pub fn xml(content: impl Into<String>) -> Self {
        Self::raw(RawBodyKind::Xml, content)
    }

    /// Creates a plain text body.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::raw(RawBodyKind::Text, content)
    }

    /// Creates a GraphQL body.
    #[must_use]
    pub fn graphql(query: impl Into<String>, variables: Option<String>) -> Self {
        Self::GraphQl(GraphQlBody {
            query: query.into(),
            variables,
        })
    }

    /// Creates a form-data body.
    #[must_use]
    pub const fn form_data(parts: Vec<FormDataPart>) -> Self {
        Self::FormData { parts }
    }

    /// Creates a binary body referencing a file by name.
    #[must_use]
    pub fn binary(file_name: impl Into<String>) -> Self {
        Self::Binary(BinaryFile {
            file_name: file_name.into(),
            file_id: None,
        })
    }

    /// Returns the flat body type tag, or `None` when there is no body.
    #[must_use]
    pub const fn body_type(&self) -> Option<BodyType> {
        match self {
            Self::None => None,
            Self::Raw { kind, .. } => Some(kind.body_type()),
            Self::GraphQl(_) => Some(BodyType::GraphQl),
            Self::Binary(_) => Some(BodyType::Binary),
            Self::FormData { .. } => Some(BodyType::FormData),
        }
    }

    /// Returns the textual content for raw bodies.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Raw { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Returns whether the body carries nothing to send.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Raw { content, .. } => content.is_empty(),
            Self::GraphQl(body) => body.query.is_empty(),
            Self::Binary(file) => file.file_name.is_empty(),
            Self::FormData { parts } => !parts.iter().any(|p| p.enabled),
        }
    }

    /// Returns the content type if applicable.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Raw { kind, .. } => Some(kind.content_type()),
            Self::GraphQl(_) => Some("application/json"),
            Self::Binary(_) => Some("application/octet-stream"),
            Self::FormData { .. } => Some("multipart/form-data"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::request::FormDataPart;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(r#"{"key": "value"}"#);
        assert_eq!(body.content_type(), Some("application/json"));
        assert_eq!(body.body_type(), Some(BodyType::Json));
        assert!(!body.is_empty());
    }

    #[test]
    fn test_empty_body() {
        let body = RequestBody::none();
        assert!(body.is_empty());
        assert_eq!(body.content_type(), None);
        assert_eq!(body.body_type(), None);
    }

    #[test]
    fn test_form_data_with_only_disabled_parts_is_empty() {
        let mut part = FormDataPart::text("a", "1");
        part.enabled = false;
        let body = RequestBody::form_data(vec![part]);
        assert!(body.is_empty());
        assert_eq!(body.body_type(), Some(BodyType::FormData));
    }

    #[test]
    fn test_body_type_tags_parse_case_insensitively() {
        assert_eq!("graphql".parse::<BodyType>().unwrap(), BodyType::GraphQl);
        assert_eq!("URLENCODED".parse::<BodyType>().unwrap(), BodyType::UrlEncoded);
        assert_eq!("formdata".parse::<BodyType>().unwrap(), BodyType::FormData);
        assert!("yaml".parse::<BodyType>().is_err());
    }

    #[test]
    fn test_body_serializes_with_type_tag() {
        let json = serde_json::to_value(RequestBody::xml("<a/>")).unwrap();
        assert_eq!(json["type"], "raw");
        assert_eq!(json["kind"], "xml");

        let graphql = serde_json::to_value(RequestBody::graphql("{ me }", None)).unwrap();
        assert_eq!(graphql["type"], "graphql");
        assert_eq!(graphql["query"], "{ me }");
    }
}
