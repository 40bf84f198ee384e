//! Variable resolution module
//!
//! Provides substitution of `{{variable}}`, `${variable}` and
//! `${ENV.variable}` syntax in strings.
//!
//! # Usage
//!
//! ```
//! use courier_application::ports::PassthroughDecryptor;
//! use courier_application::variable_resolver::{TemplateReplacer, TextReplacer};
//! use courier_domain::environment::{ScopeStore, VariableScope};
//!
//! let mut store = ScopeStore::new();
//! store.set(VariableScope::Environment, "host", "localhost");
//!
//! let variables = store.merge_flat();
//! let replacer = TemplateReplacer::new(&variables, &PassthroughDecryptor);
//! assert_eq!(replacer.replace("http://{{host}}/api").unwrap(), "http://localhost/api");
//! ```

mod environment;
mod error;
pub mod parser;
mod template;

pub use environment::EnvironmentVariableResolver;
pub use error::ResolutionError;
pub use template::TemplateReplacer;

/// Substitutes placeholders in a single string.
pub trait TextReplacer {
    /// Returns `input` with placeholders substituted.
    ///
    /// # Errors
    /// Returns an error if a placeholder cannot be resolved under this
    /// replacer's rules.
    fn replace(&self, input: &str) -> Result<String, ResolutionError>;
}
