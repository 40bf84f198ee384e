//! Materialize request use case.

use courier_domain::environment::ScopeStore;
use courier_domain::request::{
    FormDataPart, GraphQlBody, Header, Headers, QueryParam, QueryParams, RequestBody, RequestSpec,
};

use crate::ports::Decryptor;
use crate::variable_resolver::{
    EnvironmentVariableResolver, ResolutionError, TemplateReplacer, TextReplacer,
};

/// Environment markers first, generic placeholders second.
struct Pipeline<'a, D: Decryptor + ?Sized> {
    environment: EnvironmentVariableResolver<'a, D>,
    templates: TemplateReplacer<'a, D>,
}

impl<D: Decryptor + ?Sized> Pipeline<'_, D> {
    fn resolve(&self, text: &str) -> Result<String, ResolutionError> {
        let text = self.environment.replace(text)?;
        self.templates.replace(&text)
    }

    fn headers(&self, headers: &Headers) -> Result<Headers, ResolutionError> {
        headers
            .all()
            .iter()
            .map(|header| {
                if !header.enabled {
                    return Ok(header.clone());
                }
                Ok(Header {
                    key: self.resolve(&header.key)?,
                    value: self.resolve(&header.value)?,
                    ..header.clone()
                })
            })
            .collect()
    }

    fn query_params(&self, params: &QueryParams) -> Result<QueryParams, ResolutionError> {
        params
            .all()
            .iter()
            .map(|param| {
                if !param.enabled {
                    return Ok(param.clone());
                }
                Ok(QueryParam {
                    key: self.resolve(&param.key)?,
                    value: self.resolve(&param.value)?,
                    ..param.clone()
                })
            })
            .collect()
    }

    fn body(&self, body: &RequestBody) -> Result<RequestBody, ResolutionError> {
        Ok(match body {
            RequestBody::None => RequestBody::None,
            RequestBody::Raw { kind, content } => RequestBody::Raw {
                kind: *kind,
                content: self.resolve(content)?,
            },
            RequestBody::GraphQl(graphql) => RequestBody::GraphQl(GraphQlBody {
                query: self.resolve(&graphql.query)?,
                variables: graphql
                    .variables
                    .as_deref()
                    .map(|variables| self.resolve(variables))
                    .transpose()?,
            }),
            RequestBody::Binary(file) => RequestBody::Binary(file.clone()),
            RequestBody::FormData { parts } => RequestBody::FormData {
                parts: parts
                    .iter()
                    .map(|part| self.form_part(part))
                    .collect::<Result<_, _>>()?,
            },
        })
    }

    fn form_part(&self, part: &FormDataPart) -> Result<FormDataPart, ResolutionError> {
        if !part.enabled || part.is_file() {
            return Ok(part.clone());
        }
        Ok(FormDataPart {
            key: self.resolve(&part.key)?,
            value: self.resolve(&part.value)?,
            ..part.clone()
        })
    }
}

/// Use case producing a send-ready request from a stored templated one.
pub struct MaterializeRequest<D: Decryptor> {
    decryptor: D,
}

impl<D: Decryptor> MaterializeRequest<D> {
    /// Creates a new `MaterializeRequest` use case.
    #[must_use]
    pub const fn new(decryptor: D) -> Self {
        Self { decryptor }
    }

    /// Resolves every enabled textual field of `request` against `store`.
    ///
    /// Template lookups see both the merged unprefixed variables and the
    /// scope-qualified names (`globals.host`, `data.row`, ...). Disabled
    /// headers, params and form parts are copied unchanged.
    ///
    /// # Errors
    /// - Returns error if an `${ENV.*}` marker is used without a selected environment
    /// - Returns error if an `${ENV.*}` marker names an unknown variable
    /// - Returns error if a substituted value fails to decrypt
    pub fn execute(
        &self,
        request: &RequestSpec,
        store: &ScopeStore,
    ) -> Result<RequestSpec, ResolutionError> {
        let mut variables = store.merge_with_prefixes();
        variables.extend(store.merge_flat());

        let pipeline = Pipeline {
            environment: EnvironmentVariableResolver::new(
                store.environment_selection(),
                &self.decryptor,
            ),
            templates: TemplateReplacer::new(&variables, &self.decryptor),
        };

        tracing::debug!(request = %request.name, variables = variables.len(), "materializing request");

        Ok(RequestSpec {
            url: pipeline.resolve(&request.url)?,
            headers: pipeline.headers(&request.headers)?,
            query_params: pipeline.query_params(&request.query_params)?,
            body: pipeline.body(&request.body)?,
            auth: request.auth.try_map_text(|text| pipeline.resolve(text))?,
            ..request.clone()
        })
    }
}
