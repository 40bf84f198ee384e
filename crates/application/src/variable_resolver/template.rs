//! Generic placeholder substitution
//!
//! Resolves `{{name}}` and `${name}` against a flat variable map. Unknown
//! names are left verbatim so partially defined requests stay editable.

use courier_domain::environment::FlatVariables;

use super::parser::{parse_placeholders, substitute};
use super::{ResolutionError, TextReplacer};
use crate::ports::Decryptor;

/// Substitutes generic placeholders from a flat variable map.
pub struct TemplateReplacer<'a, D: Decryptor + ?Sized> {
    variables: &'a FlatVariables,
    decryptor: &'a D,
}

impl<'a, D: Decryptor + ?Sized> TemplateReplacer<'a, D> {
    /// Creates a replacer over `variables`.
    #[must_use]
    pub const fn new(variables: &'a FlatVariables, decryptor: &'a D) -> Self {
        Self {
            variables,
            decryptor,
        }
    }
}

impl<D: Decryptor + ?Sized> TextReplacer for TemplateReplacer<'_, D> {
    fn replace(&self, input: &str) -> Result<String, ResolutionError> {
        let placeholders = parse_placeholders(input);
        if placeholders.is_empty() {
            return Ok(input.to_string());
        }

        substitute(input, &placeholders, |placeholder| {
            let Some(value) = self.variables.get(&placeholder.name) else {
                tracing::trace!(name = %placeholder.name, "placeholder left unresolved");
                return Ok(None);
            };
            self.decryptor
                .decrypt_if_encrypted(value)
                .map(Some)
                .map_err(|source| ResolutionError::Decryption {
                    placeholder: placeholder.raw.clone(),
                    source,
                })
        })
    }
}
