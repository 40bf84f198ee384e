//! Query parameter entries and query-string conversion

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::entries::{Entries, Toggle};

/// One `key=value` pair of the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// Parameter name, possibly templated
    pub key: String,
    /// Parameter value, possibly templated
    pub value: String,
    /// Disabled params are kept but neither resolved nor sent
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Free-text note; never sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

const fn enabled_by_default() -> bool {
    true
}

impl QueryParam {
    /// An enabled parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
            description: None,
        }
    }

    /// A parameter that is stored but switched off.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(key, value)
        }
    }
}

impl Toggle for QueryParam {
    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Query parameters of a request in declaration order.
pub type QueryParams = Entries<QueryParam>;

impl Entries<QueryParam> {
    /// Splits a raw query string (without `?`) into enabled parameters.
    ///
    /// Pairs are form-decoded; a pair without `=` has an empty value.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| QueryParam::new(key, value))
            .collect()
    }

    /// Form-encodes the enabled parameters, joined by `&`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.enabled()
            .fold(form_urlencoded::Serializer::new(String::new()), |mut query, p| {
                query.append_pair(&p.key, &p.value);
                query
            })
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_decodes_pairs() {
        let params = QueryParams::parse("q=a+b%26c&flag&page=2");

        let pairs: Vec<(&str, &str)> = params
            .all()
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("q", "a b&c"), ("flag", ""), ("page", "2")]);
        assert!(params.all().iter().all(|p| p.enabled));
    }

    #[test]
    fn test_query_string_skips_disabled() {
        let params: QueryParams = [
            QueryParam::new("q", "a b&c"),
            QueryParam::disabled("debug", "1"),
            QueryParam::new("page", "{{page}}"),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.to_query_string(), "q=a+b%26c&page=%7B%7Bpage%7D%7D");
    }

    #[test]
    fn test_empty_query_string() {
        assert_eq!(QueryParams::new().to_query_string(), "");
        assert!(QueryParams::parse("").is_empty());
    }
}
