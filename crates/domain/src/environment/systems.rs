//! Environment variables sourced from connected-system definitions
//!
//! An environment groups the systems under test. Each system exposes named
//! connections, and each connection a set of parameters. Flattening them
//! yields the `system.connection.param` keys that `${ENV.*}` markers address.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A single connection of a system (e.g. "http", "db").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDefinition {
    /// Connection name
    pub name: String,
    /// Connection parameters; a `None` value is a declared but unset parameter
    #[serde(default)]
    pub parameters: BTreeMap<String, Option<String>>,
}

impl ConnectionDefinition {
    /// Creates an empty connection.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), Some(value.into()));
        self
    }
}

/// A system registered in an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDefinition {
    /// System name
    pub name: String,
    /// Connections of this system
    #[serde(default)]
    pub connections: Vec<ConnectionDefinition>,
}

impl SystemDefinition {
    /// Creates a system without connections.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connections: Vec::new(),
        }
    }

    /// Adds a connection.
    #[must_use]
    pub fn with_connection(mut self, connection: ConnectionDefinition) -> Self {
        self.connections.push(connection);
        self
    }
}

/// Flat, lower-cased `system.connection.param` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentVariables {
    values: HashMap<String, Option<String>>,
}

impl EnvironmentVariables {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens connected-system definitions into a variable map.
    #[must_use]
    pub fn from_systems<'a>(systems: impl IntoIterator<Item = &'a SystemDefinition>) -> Self {
        let mut variables = Self::new();
        for system in systems {
            for connection in &system.connections {
                for (param, value) in &connection.parameters {
                    let key = format!("{}.{}.{param}", system.name, connection.name);
                    variables.values.insert(key.to_lowercase(), value.clone());
                }
            }
        }
        variables
    }

    /// Inserts a value; the key is lower-cased.
    pub fn insert(&mut self, key: &str, value: Option<String>) {
        self.values.insert(key.to_lowercase(), value);
    }

    /// Looks up a key, lower-casing it first.
    ///
    /// The outer `Option` is presence, the inner one a null value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.values.get(&key.to_lowercase()).map(Option::as_deref)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, Option<String>)> for EnvironmentVariables {
    fn from_iter<T: IntoIterator<Item = (K, Option<String>)>>(iter: T) -> Self {
        let mut variables = Self::new();
        for (key, value) in iter {
            variables.insert(key.as_ref(), value);
        }
        variables
    }
}

/// Whether an environment was chosen for the current request.
///
/// `NotSelected` makes every `${ENV.*}` marker fail, independent of the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentSelection<'a> {
    /// No environment was selected.
    NotSelected,
    /// The variables of the selected environment.
    Selected(&'a EnvironmentVariables),
}

impl<'a> From<Option<&'a EnvironmentVariables>> for EnvironmentSelection<'a> {
    fn from(value: Option<&'a EnvironmentVariables>) -> Self {
        value.map_or(Self::NotSelected, Self::Selected)
    }
}
