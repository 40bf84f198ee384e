//! Request to curl text encoding

use serde_json::{Value, json};

use courier_domain::request::{FormDataPart, GraphQlBody, RequestBody, RequestSpec};

/// Renders a request as a curl command line.
///
/// Order: method, enabled headers, body, then the quoted URL with enabled
/// query parameters. Disabled items, descriptions and binary bodies without
/// a file name are left out.
#[must_use]
pub fn encode_curl(request: &RequestSpec) -> String {
    let mut parts = vec!["curl".to_string()];

    parts.push(format!("--request {}", request.method.as_str()));

    for header in request.enabled_headers().filter(|h| !h.key.is_empty()) {
        if header.value.is_empty() {
            parts.push(format!("-H {}", double_quote(&format!("{};", header.key))));
        } else {
            parts.push(format!(
                "-H {}",
                double_quote(&format!("{}: {}", header.key, header.value))
            ));
        }
    }

    match &request.body {
        RequestBody::None => {}
        RequestBody::Raw { content, .. } => {
            if !content.is_empty() {
                parts.push(format!("-d {}", single_quote(content)));
            }
        }
        RequestBody::GraphQl(graphql) => {
            parts.push(format!("-d {}", single_quote(&graphql_document(graphql))));
        }
        RequestBody::Binary(file) => {
            if !file.file_name.is_empty() {
                parts.push(format!(
                    "--data-binary {}",
                    double_quote(&format!("@{}", file.file_name))
                ));
            }
        }
        RequestBody::FormData { parts: form } => {
            for part in form.iter().filter(|p| p.enabled) {
                parts.push(format!("-F {}", single_quote(&form_part(part))));
            }
        }
    }

    parts.push(single_quote(&request.full_url()));

    parts.join(" \\\n  ")
}

fn form_part(part: &FormDataPart) -> String {
    let marker = if part.is_file() { "@" } else { "" };
    match &part.content_type {
        Some(content_type) => format!("{}={marker}{};type={content_type}", part.key, part.value),
        None => format!("{}={marker}{}", part.key, part.value),
    }
}

/// `{"query": ..., "variables": ...}`; variables that are not valid JSON are
/// embedded as a string.
fn graphql_document(graphql: &GraphQlBody) -> String {
    let variables = graphql.variables.as_deref().map_or(Value::Null, |text| {
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    });
    json!({ "query": graphql.query, "variables": variables }).to_string()
}

fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

fn double_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::curl::{DecodeOptions, decode_curl};
    use courier_domain::request::{Header, HttpMethod, QueryParam};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_order_and_quoting() {
        let mut request = RequestSpec::get("Users", "https://api.example.com/users");
        request.method = HttpMethod::Post;
        request.headers.add(Header::new("Content-Type", "application/json"));
        request.headers.add(Header::new("X-Empty", ""));
        request.headers.add(Header::disabled("X-Off", "1"));
        request.headers.add(Header::new("", "orphan"));
        request.query_params.add(QueryParam::new("q", "a b"));
        request.body = RequestBody::json(r#"{"name": "o'brien"}"#);

        let expected = [
            "curl",
            "--request POST",
            r#"-H "Content-Type: application/json""#,
            r#"-H "X-Empty;""#,
            r#"-d '{"name": "o'\''brien"}'"#,
            "'https://api.example.com/users?q=a+b'",
        ]
        .join(" \\\n  ");
        assert_eq!(encode_curl(&request), expected);
    }

    #[test]
    fn test_encode_form_parts_skip_disabled() {
        let mut off = FormDataPart::text("off", "x");
        off.enabled = false;
        let mut request = RequestSpec::get("Upload", "http://x");
        request.body = RequestBody::form_data(vec![
            FormDataPart::text("name", "bob"),
            FormDataPart::file("avatar", "me.png").with_content_type("image/png"),
            off,
        ]);

        let encoded = encode_curl(&request);
        assert!(encoded.contains("-F 'name=bob'"));
        assert!(encoded.contains("-F 'avatar=@me.png;type=image/png'"));
        assert!(!encoded.contains("off=x"));
    }

    #[test]
    fn test_encode_binary_only_with_file_name() {
        let mut request = RequestSpec::get("Bin", "http://x");
        request.body = RequestBody::binary("dump.bin");
        assert!(encode_curl(&request).contains(r#"--data-binary "@dump.bin""#));

        request.body = RequestBody::binary("");
        assert!(!encode_curl(&request).contains("--data-binary"));
    }

    #[test]
    fn test_encode_escapes_shell_expansion_in_headers() {
        let mut request = RequestSpec::get("Env", "http://x");
        request.headers.add(Header::new("Authorization", "Bearer ${ENV.qa.token}"));
        assert!(encode_curl(&request).contains(r#"-H "Authorization: Bearer \${ENV.qa.token}""#));

        let decoded = decode_curl(&encode_curl(&request), &DecodeOptions::default()).unwrap();
        assert_eq!(
            decoded.request.headers.value_of("authorization"),
            Some("Bearer ${ENV.qa.token}")
        );
    }

    #[test]
    fn test_round_trip_simple_post() {
        let mut request = RequestSpec::get("Create", "http://x/y");
        request.method = HttpMethod::Post;
        request.headers.add(Header::new("Content-Type", "application/json"));
        request.body = RequestBody::json("{}");

        let decoded = decode_curl(&encode_curl(&request), &DecodeOptions::default())
            .unwrap()
            .request;

        assert_eq!(decoded.method, HttpMethod::Post);
        assert_eq!(decoded.url, "http://x/y");
        assert_eq!(decoded.headers.all(), request.headers.all());
        assert_eq!(decoded.body, RequestBody::json("{}"));
    }

    #[test]
    fn test_round_trip_graphql() {
        let mut request = RequestSpec::get("Query", "http://x/graphql");
        request.method = HttpMethod::Post;
        request.body =
            RequestBody::graphql("query Me { me { id } }", Some(r#"{"id":"1"}"#.to_string()));

        let encoded = encode_curl(&request);
        let decoded = decode_curl(&encoded, &DecodeOptions::default()).unwrap().request;
        assert_eq!(decoded.body, request.body);
    }
}
