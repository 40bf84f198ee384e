//! HTTP header entries

use serde::{Deserialize, Serialize};

use super::entries::{Entries, Toggle};

/// One header line of a stored request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name as written, possibly templated
    pub key: String,
    /// Header value, possibly templated
    pub value: String,
    /// Free-text note; never sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled headers are kept but neither resolved nor sent
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Added by tooling rather than typed by a user
    #[serde(default)]
    pub generated: bool,
}

const fn enabled_by_default() -> bool {
    true
}

impl Header {
    /// An enabled, user-written header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: None,
            enabled: true,
            generated: false,
        }
    }

    /// A header that is stored but switched off.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(key, value)
        }
    }

    /// Header names compare ASCII case-insensitively.
    #[must_use]
    pub fn is(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

impl Toggle for Header {
    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Headers of a request in declaration order.
pub type Headers = Entries<Header>;

impl Entries<Header> {
    /// Value of the first enabled header called `key`.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.enabled().find(|h| h.is(key)).map(|h| h.value.as_str())
    }
}
