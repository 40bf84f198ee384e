//! Variable scopes and environment types

mod scope;
mod store;
mod systems;

pub use scope::VariableScope;
pub use store::{FlatVariables, ScopeStore, VariableMap, render_value};
pub use systems::{
    ConnectionDefinition, EnvironmentSelection, EnvironmentVariables, SystemDefinition,
};
