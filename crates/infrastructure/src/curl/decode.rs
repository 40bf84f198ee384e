//! Curl text to request decoding

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use courier_domain::request::{
    FormDataPart, Header, Headers, HttpMethod, QueryParams, RawBodyKind, RequestBody,
    RequestSpec, TransportType,
};

use super::CurlError;
use super::tokenizer::tokenize;

/// `key=[@]value[;type=content-type]`
#[allow(clippy::expect_used)]
static FORM_PART_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([^=]+)=(@)?(.*?)(?:;type=([^;]+))?$").expect("valid form part regex")
});

const GRAPHQL_KEYWORDS: [&str; 5] = ["query", "mutation", "subscription", "fragment", "{"];

/// What to do with payloads that cannot be imported (file form parts,
/// `--data-binary`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsupportedPayloads {
    /// Drop the payload and record a warning.
    #[default]
    Skip,
    /// Fail the decode.
    Reject,
}

/// Options for [`decode_curl`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Policy for payloads that cannot be imported.
    pub unsupported_payloads: UnsupportedPayloads,
}

/// A payload dropped during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurlWarning {
    /// A `-F key=@file` part.
    FilePartDropped {
        /// Part name
        key: String,
        /// Referenced file
        file: String,
    },
    /// A `--data-binary` option.
    BinaryDataDropped {
        /// The option value
        value: String,
    },
}

impl fmt::Display for CurlWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilePartDropped { key, file } => {
                write!(f, "form part '{key}' attaches file '{file}'; file parts are not imported")
            }
            Self::BinaryDataDropped { value } => {
                write!(f, "--data-binary '{value}' is not imported")
            }
        }
    }
}

/// Result of decoding curl text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlImport {
    /// The decoded request
    pub request: RequestSpec,
    /// Payloads that were dropped
    pub warnings: Vec<CurlWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurlOption {
    Data,
    DataBinary,
    Header,
    Method,
    Form,
}

impl CurlOption {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "-d" | "--data" | "--data-raw" => Some(Self::Data),
            "--data-binary" => Some(Self::DataBinary),
            "-H" | "--header" => Some(Self::Header),
            "-X" | "--request" => Some(Self::Method),
            "-F" | "--form" => Some(Self::Form),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Decoder {
    options: DecodeOptions,
    url: String,
    method: Option<HttpMethod>,
    headers: Headers,
    query_params: QueryParams,
    data: Vec<String>,
    form_parts: Option<Vec<FormDataPart>>,
    warnings: Vec<CurlWarning>,
}

/// Decodes a curl command line into a fresh request.
///
/// Recognized options are `-d/--data/--data-raw`, `-H/--header`,
/// `-X/--request`, `-F/--form` and `--data-binary`; any other token that
/// is not an `http(s)://` URL is ignored. An option followed by another
/// option has no value.
///
/// # Errors
/// - Returns error if the text has unbalanced quotes
/// - Returns error if a `-F` value is malformed
/// - Returns error if `-X` names an unsupported method
/// - Returns error if an unsupported payload is found under
///   [`UnsupportedPayloads::Reject`]
pub fn decode_curl(text: &str, options: &DecodeOptions) -> Result<CurlImport, CurlError> {
    let tokens = tokenize(text)?;
    let mut decoder = Decoder {
        options: *options,
        ..Decoder::default()
    };

    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        if let Some(option) = CurlOption::parse(token) {
            let value = tokens.get(index + 1).filter(|next| !next.starts_with('-'));
            if let Some(value) = value {
                decoder.apply(option, value)?;
                index += 1;
            }
        } else if is_url(token) {
            decoder.set_url(token);
        }
        index += 1;
    }

    Ok(decoder.finish())
}

fn is_url(token: &str) -> bool {
    let lower = token.get(..8).unwrap_or(token).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl Decoder {
    fn apply(&mut self, option: CurlOption, value: &str) -> Result<(), CurlError> {
        match option {
            CurlOption::Data => self.data.push(value.to_string()),
            CurlOption::DataBinary => {
                self.unsupported(CurlWarning::BinaryDataDropped {
                    value: value.to_string(),
                })?;
            }
            CurlOption::Header => self.headers.add(parse_header(value)),
            CurlOption::Method => {
                let method = value
                    .parse::<HttpMethod>()
                    .map_err(|_| CurlError::UnsupportedMethod(value.to_string()))?;
                self.method = Some(method);
            }
            CurlOption::Form => self.add_form_part(value)?,
        }
        Ok(())
    }

    fn unsupported(&mut self, warning: CurlWarning) -> Result<(), CurlError> {
        match self.options.unsupported_payloads {
            UnsupportedPayloads::Reject => Err(CurlError::UnsupportedPayload(warning.to_string())),
            UnsupportedPayloads::Skip => {
                tracing::warn!(%warning, "dropping curl payload");
                self.warnings.push(warning);
                Ok(())
            }
        }
    }

    fn set_url(&mut self, token: &str) {
        let without_fragment = token.split_once('#').map_or(token, |(url, _)| url);
        let (base, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        self.url = base.to_string();
        self.query_params = QueryParams::parse(query);
    }

    fn add_form_part(&mut self, value: &str) -> Result<(), CurlError> {
        let caps = FORM_PART_PATTERN
            .captures(value)
            .ok_or_else(|| CurlError::InvalidFormData(value.to_string()))?;

        let key = caps.get(1).map_or("", |m| m.as_str()).trim();
        let part_value = caps.get(3).map_or("", |m| m.as_str());

        if caps.get(2).is_some() {
            return self.unsupported(CurlWarning::FilePartDropped {
                key: key.to_string(),
                file: part_value.to_string(),
            });
        }

        let mut part = FormDataPart::text(key, part_value);
        if let Some(content_type) = caps.get(4) {
            part = part.with_content_type(content_type.as_str().trim());
        }
        self.form_parts.get_or_insert_with(Vec::new).push(part);
        Ok(())
    }

    fn finish(self) -> CurlImport {
        let xml = self.headers.enabled().any(|h| {
            h.is("content-type") && {
                let value = h.value.to_ascii_lowercase();
                value.starts_with("application/xml") || value.starts_with("text/xml")
            }
        });

        let body = match (self.form_parts, self.data.is_empty()) {
            (Some(parts), _) => RequestBody::form_data(parts),
            (None, true) => RequestBody::none(),
            (None, false) => {
                let content = self.data.join("&");
                if xml {
                    RequestBody::raw(RawBodyKind::Xml, content)
                } else {
                    graphql_body(&content)
                        .unwrap_or_else(|| RequestBody::raw(RawBodyKind::Json, content))
                }
            }
        };

        let mut request = RequestSpec::new("Imported request");
        request.url = self.url;
        request.method = self.method.unwrap_or_default();
        request.headers = self.headers;
        request.query_params = self.query_params;
        request.body = body;
        request.transport = TransportType::Rest;

        CurlImport {
            request,
            warnings: self.warnings,
        }
    }
}

/// Splits on the first `:`; a trailing `;` on the name is dropped.
fn parse_header(value: &str) -> Header {
    let (name, header_value) = value.split_once(':').unwrap_or((value, ""));
    let name = name.trim();
    let name = name.strip_suffix(';').unwrap_or(name).trim_end();
    Header::new(name, header_value.trim())
}

/// Recognizes a `{"query": "...", "variables": ...}` payload.
fn graphql_body(content: &str) -> Option<RequestBody> {
    let Value::Object(document) = serde_json::from_str::<Value>(content).ok()? else {
        return None;
    };
    let query = document.get("query")?.as_str()?;
    let head = query.trim_start();
    if !GRAPHQL_KEYWORDS
        .iter()
        .any(|keyword| head.starts_with(keyword))
    {
        return None;
    }

    let variables = document
        .get("variables")
        .filter(|v| !v.is_null())
        .map(Value::to_string);
    Some(RequestBody::graphql(query, variables))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use courier_domain::request::GraphQlBody;
    use pretty_assertions::assert_eq;

    fn decode(text: &str) -> CurlImport {
        decode_curl(text, &DecodeOptions::default()).unwrap()
    }

    #[test]
    fn test_decode_duplicate_headers_and_method() {
        let import = decode(r#"curl -X POST -H "A: 1" -H "A: 2" http://x"#);
        let request = import.request;

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://x");
        let headers: Vec<_> = request
            .headers
            .all()
            .iter()
            .map(|h| (h.key.as_str(), h.value.as_str()))
            .collect();
        assert_eq!(headers, vec![("A", "1"), ("A", "2")]);
        assert!(import.warnings.is_empty());
    }

    #[test]
    fn test_decode_defaults_to_get_rest_without_body() {
        let request = decode("curl https://api.example.com/users").request;
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.transport, TransportType::Rest);
        assert_eq!(request.body, RequestBody::None);
    }

    #[test]
    fn test_decode_splits_query_params() {
        let request = decode("curl 'https://x/search?q=a+b&page=2&flag#frag'").request;
        assert_eq!(request.url, "https://x/search");
        let params: Vec<_> = request
            .query_params
            .all()
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(params, vec![("q", "a b"), ("page", "2"), ("flag", "")]);
        assert_eq!(request.full_url(), "https://x/search?q=a+b&page=2&flag=");
    }

    #[test]
    fn test_decode_header_edge_cases() {
        let request = decode(r#"curl -H "X-Empty;" -H "NoColon" -H " Key ; : v:1 " http://x"#).request;
        let headers: Vec<_> = request
            .headers
            .all()
            .iter()
            .map(|h| (h.key.as_str(), h.value.as_str()))
            .collect();
        assert_eq!(headers, vec![("X-Empty", ""), ("NoColon", ""), ("Key", "v:1")]);
    }

    #[test]
    fn test_decode_json_body() {
        let request = decode(r#"curl -X POST -d '{"a": 1}' http://x"#).request;
        assert_eq!(request.body, RequestBody::json(r#"{"a": 1}"#));
    }

    #[test]
    fn test_decode_graphql_body() {
        let text = r#"curl -d '{"query": "query { me { id } }", "variables": {"id": 1}}' http://x/graphql"#;
        let request = decode(text).request;
        assert_eq!(
            request.body,
            RequestBody::GraphQl(GraphQlBody {
                query: "query { me { id } }".to_string(),
                variables: Some(r#"{"id":1}"#.to_string()),
            })
        );
    }

    #[test]
    fn test_decode_query_member_that_is_not_graphql_stays_json() {
        let request = decode(r#"curl -d '{"query": "select * from t"}' http://x"#).request;
        assert_eq!(request.body.body_type(), Some(courier_domain::request::BodyType::Json));
    }

    #[test]
    fn test_decode_xml_content_type_forces_xml() {
        let text = "curl -H 'Content-Type: text/xml; charset=utf-8' -d '<a/>' http://x";
        let request = decode(text).request;
        assert_eq!(request.body, RequestBody::xml("<a/>"));
    }

    #[test]
    fn test_decode_form_parts() {
        let text = "curl -F 'name=bob' -F 'meta={\"a\":1};type=application/json' -F 'file=@photo.png' http://x";
        let import = decode(text);

        let RequestBody::FormData { parts } = import.request.body else {
            panic!("expected form data");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], FormDataPart::text("name", "bob"));
        assert_eq!(
            parts[1],
            FormDataPart::text("meta", "{\"a\":1}").with_content_type("application/json")
        );
        assert_eq!(
            import.warnings,
            vec![CurlWarning::FilePartDropped {
                key: "file".to_string(),
                file: "photo.png".to_string(),
            }]
        );
    }

    #[test]
    fn test_decode_malformed_form_token() {
        let err = decode_curl("curl -F 'bad-token' http://x", &DecodeOptions::default()).unwrap_err();
        assert_eq!(err, CurlError::InvalidFormData("bad-token".to_string()));
        assert!(err.to_string().contains("bad-token"));
    }

    #[test]
    fn test_long_options_match_short_options() {
        let cases = [
            (
                r#"curl -d '{"a": 1}' http://x"#,
                r#"curl --data '{"a": 1}' http://x"#,
            ),
            (
                r#"curl -d '{"a": 1}' http://x"#,
                r#"curl --data-raw '{"a": 1}' http://x"#,
            ),
            ("curl -H 'A: 1' http://x", "curl --header 'A: 1' http://x"),
            ("curl -X PUT http://x", "curl --request PUT http://x"),
            ("curl -F 'name=bob' http://x", "curl --form 'name=bob' http://x"),
        ];

        for (short, long) in cases {
            let expected = decode(short).request;
            let actual = decode(long).request;
            assert_eq!(actual.method, expected.method, "{long}");
            assert_eq!(actual.headers, expected.headers, "{long}");
            assert_eq!(actual.body, expected.body, "{long}");
            assert_eq!(actual.url, "http://x", "{long}");
        }
    }

    #[test]
    fn test_long_options_fill_request_fields() {
        let text = r#"curl --request PATCH --header 'X-Id: 7' --data-raw 'a=1' --data 'b=2' http://x"#;
        let request = decode(text).request;

        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.headers.value_of("X-Id"), Some("7"));
        assert_eq!(request.body, RequestBody::json("a=1&b=2"));

        let request = decode("curl --form 'k=v' http://x").request;
        assert_eq!(
            request.body,
            RequestBody::form_data(vec![FormDataPart::text("k", "v")])
        );
    }

    #[test]
    fn test_decode_unknown_method_fails() {
        let err = decode_curl("curl -X BREW http://x", &DecodeOptions::default()).unwrap_err();
        assert_eq!(err, CurlError::UnsupportedMethod("BREW".to_string()));
    }

    #[test]
    fn test_decode_data_binary_policy() {
        let text = "curl --data-binary @dump.bin http://x";

        let import = decode(text);
        assert_eq!(import.request.body, RequestBody::None);
        assert_eq!(
            import.warnings,
            vec![CurlWarning::BinaryDataDropped {
                value: "@dump.bin".to_string()
            }]
        );

        let options = DecodeOptions {
            unsupported_payloads: UnsupportedPayloads::Reject,
        };
        assert!(matches!(
            decode_curl(text, &options),
            Err(CurlError::UnsupportedPayload(_))
        ));
    }

    #[test]
    fn test_decode_option_followed_by_option_has_no_value() {
        let request = decode("curl -X -H 'A: 1' --compressed -v http://x").request;
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.headers.len(), 1);
    }

    #[test]
    fn test_decode_multiline_body() {
        let text = "curl -X PUT \\\n  -d '{\n  \"a\": 1\n}' \\\n  http://x";
        let request = decode(text).request;
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.body.text_content(), Some("{\n  \"a\": 1\n}"));
    }

    #[test]
    fn test_decode_is_fresh_each_call() {
        let first = decode("curl -H 'A: 1' http://x").request;
        let second = decode("curl http://y").request;
        assert_eq!(first.headers.len(), 1);
        assert!(second.headers.is_empty());
        assert_ne!(first.id, second.id);
    }
}
