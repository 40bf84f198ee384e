//! `${ENV.name}` substitution
//!
//! Unlike generic placeholders, environment markers fail hard: no selected
//! environment and unknown names are both errors.

use courier_domain::environment::EnvironmentSelection;

use super::parser::{parse_environment_markers, substitute};
use super::{ResolutionError, TextReplacer};
use crate::ports::Decryptor;

/// Substitutes `${ENV.name}` markers from the selected environment.
pub struct EnvironmentVariableResolver<'a, D: Decryptor + ?Sized> {
    selection: EnvironmentSelection<'a>,
    decryptor: &'a D,
}

impl<'a, D: Decryptor + ?Sized> EnvironmentVariableResolver<'a, D> {
    /// Creates a resolver for the given environment selection.
    #[must_use]
    pub const fn new(selection: EnvironmentSelection<'a>, decryptor: &'a D) -> Self {
        Self {
            selection,
            decryptor,
        }
    }
}

impl<D: Decryptor + ?Sized> TextReplacer for EnvironmentVariableResolver<'_, D> {
    fn replace(&self, input: &str) -> Result<String, ResolutionError> {
        let markers = parse_environment_markers(input);
        if markers.is_empty() {
            return Ok(input.to_string());
        }

        let EnvironmentSelection::Selected(variables) = self.selection else {
            return Err(ResolutionError::EnvironmentNotSpecified {
                placeholder: markers[0].raw.clone(),
            });
        };

        substitute(input, &markers, |marker| match variables.get(&marker.name) {
            None => Err(ResolutionError::EnvironmentVariableNotFound {
                placeholder: marker.raw.clone(),
            }),
            Some(None) => Ok(Some("null".to_string())),
            Some(Some(value)) => self
                .decryptor
                .decrypt_if_encrypted(value)
                .map(Some)
                .map_err(|source| ResolutionError::EnvironmentVariableReplacing {
                    placeholder: marker.raw.clone(),
                    source,
                }),
        })
    }
}
