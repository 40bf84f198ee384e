//! Authentication attached to a stored request

use serde::{Deserialize, Serialize};

/// Credentials of a request.
///
/// Every string field may hold placeholders; materialization resolves them
/// like any other request text. The bearer prefix is literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// Nothing is added to the request
    #[default]
    None,
    /// A key sent as a header or query parameter
    ApiKey {
        /// Secret value
        key: String,
        /// Header or parameter name
        name: String,
        /// Where the key goes
        #[serde(default)]
        location: ApiKeyLocation,
    },
    /// `Authorization: <prefix> <token>`
    Bearer {
        /// Token text
        token: String,
        /// Scheme word, `Bearer` unless overridden
        #[serde(default = "bearer_prefix")]
        prefix: String,
    },
    /// HTTP basic credentials
    Basic {
        /// User name
        username: String,
        /// Password
        password: String,
    },
}

fn bearer_prefix() -> String {
    "Bearer".to_string()
}

/// Placement of an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ApiKeyLocation {
    #[default]
    Header,
    Query,
}

impl AuthConfig {
    /// Bearer credentials with the default prefix.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
            prefix: bearer_prefix(),
        }
    }

    /// Basic credentials.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Rebuilds the config with `f` applied to every resolvable field.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map_text<E>(&self, mut f: impl FnMut(&str) -> Result<String, E>) -> Result<Self, E> {
        Ok(match self {
            Self::None => Self::None,
            Self::ApiKey {
                key,
                name,
                location,
            } => Self::ApiKey {
                key: f(key)?,
                name: f(name)?,
                location: *location,
            },
            Self::Bearer { token, prefix } => Self::Bearer {
                token: f(token)?,
                prefix: prefix.clone(),
            },
            Self::Basic { username, password } => Self::Basic {
                username: f(username)?,
                password: f(password)?,
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bearer_prefix_defaults_when_absent() {
        let auth: AuthConfig =
            serde_json::from_str(r#"{"type": "bearer", "token": "{{token}}"}"#).unwrap();
        assert_eq!(auth, AuthConfig::bearer("{{token}}"));
    }

    #[test]
    fn test_api_key_location_defaults_to_header() {
        let auth: AuthConfig =
            serde_json::from_str(r#"{"type": "api_key", "key": "k", "name": "X-Key"}"#).unwrap();
        assert_eq!(
            auth,
            AuthConfig::ApiKey {
                key: "k".to_string(),
                name: "X-Key".to_string(),
                location: ApiKeyLocation::Header,
            }
        );
    }

    #[test]
    fn test_try_map_text_touches_every_field() {
        let auth = AuthConfig::basic("{{user}}", "{{pass}}");
        let mapped: Result<_, ()> = auth.try_map_text(|s| Ok(s.to_uppercase()));
        assert_eq!(mapped.unwrap(), AuthConfig::basic("{{USER}}", "{{PASS}}"));
    }

    #[test]
    fn test_try_map_text_leaves_prefix_literal() {
        let auth = AuthConfig::Bearer {
            token: "abc".to_string(),
            prefix: "{{scheme}}".to_string(),
        };
        let mapped: Result<_, ()> = auth.try_map_text(|_| Ok("x".to_string()));
        assert_eq!(
            mapped.unwrap(),
            AuthConfig::Bearer {
                token: "x".to_string(),
                prefix: "{{scheme}}".to_string(),
            }
        );
    }

    #[test]
    fn test_try_map_text_stops_at_first_error() {
        let auth = AuthConfig::ApiKey {
            key: "{{key}}".to_string(),
            name: "{{name}}".to_string(),
            location: ApiKeyLocation::Query,
        };
        let mut seen = Vec::new();
        let mapped = auth.try_map_text(|s| {
            seen.push(s.to_string());
            Err::<String, _>(s.to_string())
        });
        assert_eq!(mapped, Err("{{key}}".to_string()));
        assert_eq!(seen, vec!["{{key}}".to_string()]);
    }
}
