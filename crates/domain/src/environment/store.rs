//! Scope store for variable substitution
//!
//! Holds all variable sources of one resolution with proper precedence.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::scope::VariableScope;
use super::systems::{EnvironmentSelection, EnvironmentVariables};

/// Variables of a single scope, keyed by name. Values are JSON scalars.
pub type VariableMap = HashMap<String, Value>;

/// Flat name to rendered value map produced by merging scopes.
pub type FlatVariables = HashMap<String, String>;

/// Holds all variable sources for one resolution.
/// Variables are merged in order of precedence (later wins):
/// 1. Global
/// 2. Collection
/// 3. Environment
/// 4. Data (current iteration)
/// 5. Local overrides
///
/// `environment_variables` is a separate namespace addressed only by
/// `${ENV.*}` markers; `None` means no environment was selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeStore {
    /// Global variables (lowest precedence).
    #[serde(default)]
    pub globals: VariableMap,

    /// Collection-level variables.
    #[serde(default)]
    pub collection: VariableMap,

    /// Variables of the selected environment.
    #[serde(default)]
    pub environment: VariableMap,

    /// Iteration data.
    #[serde(default)]
    pub data: VariableMap,

    /// Local overrides (highest precedence).
    #[serde(default)]
    pub local: VariableMap,

    /// Connected-system variables for `${ENV.*}` markers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<EnvironmentVariables>,
}

impl ScopeStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variables of one scope.
    #[must_use]
    pub const fn scope(&self, scope: VariableScope) -> &VariableMap {
        match scope {
            VariableScope::Global => &self.globals,
            VariableScope::Collection => &self.collection,
            VariableScope::Environment => &self.environment,
            VariableScope::Data => &self.data,
            VariableScope::Local => &self.local,
        }
    }

    /// Returns the variables of one scope mutably.
    pub const fn scope_mut(&mut self, scope: VariableScope) -> &mut VariableMap {
        match scope {
            VariableScope::Global => &mut self.globals,
            VariableScope::Collection => &mut self.collection,
            VariableScope::Environment => &mut self.environment,
            VariableScope::Data => &mut self.data,
            VariableScope::Local => &mut self.local,
        }
    }

    /// Sets a variable in the given scope.
    pub fn set(&mut self, scope: VariableScope, name: impl Into<String>, value: impl Into<Value>) {
        self.scope_mut(scope).insert(name.into(), value.into());
    }

    /// Replaces the variables of one scope.
    #[must_use]
    pub fn with_scope(mut self, scope: VariableScope, variables: VariableMap) -> Self {
        *self.scope_mut(scope) = variables;
        self
    }

    /// Sets the global variables.
    #[must_use]
    pub fn with_globals(self, variables: VariableMap) -> Self {
        self.with_scope(VariableScope::Global, variables)
    }

    /// Sets the collection variables.
    #[must_use]
    pub fn with_collection(self, variables: VariableMap) -> Self {
        self.with_scope(VariableScope::Collection, variables)
    }

    /// Sets the environment variables.
    #[must_use]
    pub fn with_environment(self, variables: VariableMap) -> Self {
        self.with_scope(VariableScope::Environment, variables)
    }

    /// Sets the iteration data.
    #[must_use]
    pub fn with_data(self, variables: VariableMap) -> Self {
        self.with_scope(VariableScope::Data, variables)
    }

    /// Sets the local overrides.
    #[must_use]
    pub fn with_local(self, variables: VariableMap) -> Self {
        self.with_scope(VariableScope::Local, variables)
    }

    /// Selects the connected-system variables for `${ENV.*}` markers.
    #[must_use]
    pub fn with_environment_variables(mut self, variables: EnvironmentVariables) -> Self {
        self.environment_variables = Some(variables);
        self
    }

    /// Returns whether an environment was selected and its variables.
    #[must_use]
    pub fn environment_selection(&self) -> EnvironmentSelection<'_> {
        self.environment_variables.as_ref().into()
    }

    /// Overlays all scopes in precedence order without prefixes.
    #[must_use]
    pub fn merge_flat(&self) -> FlatVariables {
        let mut merged = FlatVariables::new();
        for scope in VariableScope::ALL {
            for (name, value) in self.scope(scope) {
                merged.insert(name.clone(), render_value(value));
            }
        }
        merged
    }

    /// Flattens all scopes, prefixing each key with its scope prefix.
    /// Local keys stay unprefixed.
    #[must_use]
    pub fn merge_with_prefixes(&self) -> FlatVariables {
        let mut merged = FlatVariables::new();
        for scope in VariableScope::ALL {
            for (name, value) in self.scope(scope) {
                merged.insert(scope.tag(name), render_value(value));
            }
        }
        merged
    }

    /// Classifies a flat, possibly prefixed key.
    #[must_use]
    pub fn classify(key: &str) -> VariableScope {
        VariableScope::classify(key)
    }

    /// Extracts the variables of `target` from a prefixed flat map,
    /// stripping the prefix.
    #[must_use]
    pub fn parse_scope(flat: &FlatVariables, target: VariableScope) -> FlatVariables {
        flat.iter()
            .filter_map(|(key, value)| target.untag(key).map(|name| (name.to_string(), value.clone())))
            .collect()
    }

    /// Rebuilds a store from a map produced by [`Self::merge_with_prefixes`].
    #[must_use]
    pub fn from_prefixed(flat: &FlatVariables) -> Self {
        let mut store = Self::new();
        for scope in VariableScope::ALL {
            let variables = Self::parse_scope(flat, scope)
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect();
            *store.scope_mut(scope) = variables;
        }
        store
    }
}

/// Renders a scalar for substitution: strings verbatim, anything else as JSON text.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn vars(pairs: &[(&str, Value)]) -> VariableMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn create_test_store() -> ScopeStore {
        ScopeStore::new()
            .with_globals(vars(&[("host", json!("global-host")), ("app", json!("Courier"))]))
            .with_collection(vars(&[("base_path", json!("/api/v1"))]))
            .with_environment(vars(&[("host", json!("env-host"))]))
            .with_data(vars(&[("row", json!(3))]))
            .with_local(vars(&[("token", json!("abc"))]))
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ScopeStore::new();
        assert!(store.merge_flat().is_empty());
        assert_eq!(store.environment_selection(), EnvironmentSelection::NotSelected);
    }

    #[test]
    fn test_merge_flat_local_overrides_global() {
        let mut store = ScopeStore::new();
        store.set(VariableScope::Global, "key", "from-global");
        store.set(VariableScope::Local, "key", "from-local");

        assert_eq!(store.merge_flat().get("key").unwrap(), "from-local");
    }

    #[test]
    fn test_merge_flat_follows_scope_order() {
        let mut store = ScopeStore::new();
        store.set(VariableScope::Data, "key", "data");
        store.set(VariableScope::Collection, "key", "collection");
        store.set(VariableScope::Environment, "key", "environment");

        assert_eq!(store.merge_flat().get("key").unwrap(), "data");
    }

    #[test]
    fn test_merge_flat_renders_scalars() {
        let flat = create_test_store().merge_flat();
        assert_eq!(flat.get("host").unwrap(), "env-host");
        assert_eq!(flat.get("row").unwrap(), "3");
        assert_eq!(flat.get("app").unwrap(), "Courier");
        assert_eq!(flat.len(), 5);
    }

    #[test]
    fn test_merge_with_prefixes_keeps_every_scope() {
        let flat = create_test_store().merge_with_prefixes();
        assert_eq!(flat.get("globals.host").unwrap(), "global-host");
        assert_eq!(flat.get("environment.host").unwrap(), "env-host");
        assert_eq!(flat.get("collection.base_path").unwrap(), "/api/v1");
        assert_eq!(flat.get("data.row").unwrap(), "3");
        assert_eq!(flat.get("token").unwrap(), "abc");
        assert!(!flat.contains_key("host"));
    }

    #[test]
    fn test_parse_scope_extracts_and_strips() {
        let flat = create_test_store().merge_with_prefixes();

        let globals = ScopeStore::parse_scope(&flat, VariableScope::Global);
        assert_eq!(globals.len(), 2);
        assert_eq!(globals.get("host").unwrap(), "global-host");

        let local = ScopeStore::parse_scope(&flat, VariableScope::Local);
        assert_eq!(local.len(), 1);
        assert_eq!(local.get("token").unwrap(), "abc");
    }

    #[test]
    fn test_from_prefixed_restores_scopes() {
        let original = create_test_store();
        let restored = ScopeStore::from_prefixed(&original.merge_with_prefixes());
        assert_eq!(restored.merge_flat(), original.merge_flat());
        assert_eq!(restored.globals.get("host"), Some(&json!("global-host")));
    }

    #[test]
    fn test_classify_unprefixed_is_local() {
        assert_eq!(ScopeStore::classify("anything"), VariableScope::Local);
        assert_eq!(ScopeStore::classify("data.x"), VariableScope::Data);
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("text")), "text");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&Value::Null), "null");
    }
}
