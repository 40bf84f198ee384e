//! Shell-style tokenizing of curl command lines
//!
//! Newlines inside quoted values are swapped for a marker before word
//! splitting and restored afterwards, so a multi-line `-d` payload stays a
//! single token. Line continuations and bare newlines separate words.

use super::CurlError;

/// Stands in for a quoted newline during word splitting.
const NEWLINE_MARKER: &str = "\u{1f}NL\u{1f}";

/// Splits curl text into words. A leading `curl` program name is dropped.
///
/// # Errors
/// Returns an error if quotes are unbalanced.
pub fn tokenize(text: &str) -> Result<Vec<String>, CurlError> {
    let normalized = normalize_newlines(text);
    let mut tokens = shell_words::split(&normalized)
        .map_err(|err| CurlError::Tokenize(err.to_string()))?;

    if tokens
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case("curl"))
    {
        tokens.remove(0);
    }

    Ok(tokens
        .into_iter()
        .map(|token| token.replace(NEWLINE_MARKER, "\n"))
        .collect())
}

/// Replaces newlines inside quotes with the marker and turns the rest
/// (including `\`-continuations) into plain spaces.
fn normalize_newlines(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (None, '\\') if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push(' ');
            }
            (None | Some('"'), '\\') => {
                out.push(ch);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            (None, '\'' | '"') => {
                quote = Some(ch);
                out.push(ch);
            }
            (Some(open), _) if ch == open => {
                quote = None;
                out.push(ch);
            }
            (Some(_), '\n') => out.push_str(NEWLINE_MARKER),
            (None, '\n') => out.push(' '),
            _ => out.push(ch),
        }
    }

    out
}
