//! Placeholder parser for `{{name}}`, `${name}` and `${ENV.name}` syntax
//!
//! Parses strings to extract placeholder occurrences with their positions.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `{{name}}` or `${name}`; the two forms are interchangeable.
#[allow(clippy::expect_used)]
static TEMPLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^{}]+?)\}\}|\$\{([^{}]+?)\}").expect("valid template regex")
});

/// `${ENV.name}` with a case-insensitive keyword.
#[allow(clippy::expect_used)]
static ENVIRONMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(?i:ENV)\.([^{}]+?)\}").expect("valid environment marker regex")
});

/// A placeholder occurrence in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The full placeholder text including delimiters.
    pub raw: String,

    /// The name to look up.
    pub name: String,

    /// Byte range in the original string where this placeholder appears.
    pub span: Range<usize>,
}

/// Parses a string and extracts all generic placeholders.
///
/// Escaped quotes (`\"`) inside the name are removed and the result is
/// trimmed. Occurrences are returned left to right; repeated placeholders
/// are returned once per occurrence.
///
/// # Examples
///
/// ```
/// use courier_application::variable_resolver::parser::parse_placeholders;
///
/// let refs = parse_placeholders("{{host}}/users/${id}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "host");
/// assert_eq!(refs[1].raw, "${id}");
/// ```
#[must_use]
pub fn parse_placeholders(input: &str) -> Vec<Placeholder> {
    TEMPLATE_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let captured = caps.get(1).or_else(|| caps.get(2))?;
            let name = captured.as_str().replace("\\\"", "").trim().to_string();
            Some(Placeholder {
                raw: whole.as_str().to_string(),
                name,
                span: whole.range(),
            })
        })
        .collect()
}

/// Parses a string and extracts all `${ENV.name}` markers.
///
/// The name is kept exactly as written.
#[must_use]
pub fn parse_environment_markers(input: &str) -> Vec<Placeholder> {
    ENVIRONMENT_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(Placeholder {
                raw: whole.as_str().to_string(),
                name: name.as_str().to_string(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Rebuilds `input`, replacing each placeholder span with the output of
/// `resolve`. `None` keeps the original placeholder text.
///
/// Spans refer to `input`, so substituted text is never re-scanned.
///
/// # Errors
/// Returns the first error produced by `resolve`.
pub fn substitute<E>(
    input: &str,
    placeholders: &[Placeholder],
    mut resolve: impl FnMut(&Placeholder) -> Result<Option<String>, E>,
) -> Result<String, E> {
    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;

    for placeholder in placeholders {
        result.push_str(&input[last_end..placeholder.span.start]);
        match resolve(placeholder)? {
            Some(value) => result.push_str(&value),
            None => result.push_str(&placeholder.raw),
        }
        last_end = placeholder.span.end;
    }

    result.push_str(&input[last_end..]);
    Ok(result)
}
