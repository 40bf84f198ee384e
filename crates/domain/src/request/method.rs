//! HTTP methods a stored request can use

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Request method. Serialized as the upper-case wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
}

const WIRE_NAMES: [(HttpMethod, &str); 8] = [
    (HttpMethod::Get, "GET"),
    (HttpMethod::Post, "POST"),
    (HttpMethod::Put, "PUT"),
    (HttpMethod::Patch, "PATCH"),
    (HttpMethod::Delete, "DELETE"),
    (HttpMethod::Head, "HEAD"),
    (HttpMethod::Options, "OPTIONS"),
    (HttpMethod::Trace, "TRACE"),
];

impl HttpMethod {
    /// Upper-case name as sent on the wire and written by `curl -X`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        WIRE_NAMES[self as usize].1
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> DomainResult<Self> {
        let name = s.trim();
        WIRE_NAMES
            .iter()
            .find(|(_, wire)| wire.eq_ignore_ascii_case(name))
            .map(|(method, _)| *method)
            .ok_or_else(|| DomainError::UnsupportedMethod(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ignores_case_and_padding() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!(" Patch ".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!("tRaCe".parse::<HttpMethod>().unwrap(), HttpMethod::Trace);
    }

    #[test]
    fn test_unknown_method_keeps_original_text() {
        assert_eq!(
            "FETCH ".parse::<HttpMethod>(),
            Err(DomainError::UnsupportedMethod("FETCH ".to_string()))
        );
    }

    #[test]
    fn test_wire_names_line_up_with_variants() {
        for (method, wire) in WIRE_NAMES {
            assert_eq!(method.as_str(), wire);
            assert_eq!(wire.parse::<HttpMethod>().unwrap(), method);
            assert_eq!(serde_json::to_string(&method).unwrap(), format!("\"{wire}\""));
        }
    }
}
