//! Variable scopes and their serialization prefixes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the scope/origin of a variable for resolution precedence.
///
/// Declaration order is merge order: later scopes overwrite earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableScope {
    /// Workspace-wide variables - lowest precedence
    Global = 0,
    /// Variables attached to a collection
    Collection = 1,
    /// Variables of the selected environment
    Environment = 2,
    /// Per-iteration data rows
    Data = 3,
    /// Ad-hoc overrides supplied by the caller - highest precedence
    Local = 4,
}

impl VariableScope {
    /// All scopes in merge order.
    pub const ALL: [Self; 5] = [
        Self::Global,
        Self::Collection,
        Self::Environment,
        Self::Data,
        Self::Local,
    ];

    /// Scopes that carry a non-empty prefix, in classification order.
    pub const PREFIXED: [Self; 4] = [Self::Global, Self::Collection, Self::Environment, Self::Data];

    /// Returns the precedence level (higher = takes priority).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        self as u8
    }

    /// Returns the key prefix used when scopes share one flat map.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Global => "globals.",
            Self::Collection => "collection.",
            Self::Environment => "environment.",
            Self::Data => "data.",
            Self::Local => "",
        }
    }

    /// Returns a human-readable name for the scope.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Collection => "Collection",
            Self::Environment => "Environment",
            Self::Data => "Data",
            Self::Local => "Local",
        }
    }

    /// Classifies a flat, possibly prefixed key. First matching prefix wins;
    /// a key without a recognized prefix is `Local`.
    #[must_use]
    pub fn classify(key: &str) -> Self {
        Self::PREFIXED
            .into_iter()
            .find(|scope| key.starts_with(scope.prefix()))
            .unwrap_or(Self::Local)
    }

    /// Prepends this scope's prefix to `name`.
    #[must_use]
    pub fn tag(self, name: &str) -> String {
        format!("{}{name}", self.prefix())
    }

    /// Strips this scope's prefix from `key` if the key belongs to this scope.
    #[must_use]
    pub fn untag(self, key: &str) -> Option<&str> {
        match self {
            Self::Local => (Self::classify(key) == Self::Local).then_some(key),
            _ => key.strip_prefix(self.prefix()),
        }
    }
}

impl fmt::Display for VariableScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prefixes_are_distinct_and_local_is_empty() {
        let prefixes: Vec<_> = VariableScope::PREFIXED.iter().map(|s| s.prefix()).collect();
        let mut deduped = prefixes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(prefixes.len(), deduped.len());
        assert!(prefixes.iter().all(|p| !p.is_empty()));
        assert_eq!(VariableScope::Local.prefix(), "");
    }

    #[test]
    fn test_classify() {
        assert_eq!(VariableScope::classify("globals.host"), VariableScope::Global);
        assert_eq!(VariableScope::classify("collection.id"), VariableScope::Collection);
        assert_eq!(VariableScope::classify("environment.url"), VariableScope::Environment);
        assert_eq!(VariableScope::classify("data.row"), VariableScope::Data);
        assert_eq!(VariableScope::classify("token"), VariableScope::Local);
        assert_eq!(VariableScope::classify("global.typo"), VariableScope::Local);
    }

    #[test]
    fn test_tag_and_untag() {
        let key = VariableScope::Data.tag("user");
        assert_eq!(key, "data.user");
        assert_eq!(VariableScope::Data.untag(&key), Some("user"));
        assert_eq!(VariableScope::Global.untag(&key), None);
        assert_eq!(VariableScope::Local.untag(&key), None);
        assert_eq!(VariableScope::Local.untag("user"), Some("user"));
    }

    #[test]
    fn test_precedence_follows_merge_order() {
        let precedences: Vec<_> = VariableScope::ALL.iter().map(|s| s.precedence()).collect();
        assert_eq!(precedences, vec![0, 1, 2, 3, 4]);
    }
}
