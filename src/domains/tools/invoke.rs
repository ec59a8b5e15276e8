//! Generic tool invocation engine.
//!
//! The [`Invoker`] turns an [`Operation`] plus a caller-supplied argument map
//! into exactly one HTTP request and maps the outcome to a `CallToolResult`:
//!
//! 1. validate and extract arguments (`prepare`)
//! 2. build the URL, headers and JSON body
//! 3. dispatch, racing the client's cancellation token
//! 4. render the response (typed + indented, or raw text fallback)

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::error::ToolError;
use super::operation::{Location, Operation, ParamSpec, Segment};
use crate::core::config::ApiConfig;

const APPLICATION_JSON: &str = "application/json";

/// A fully validated request, ready to be sent.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: reqwest::Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// Executes operations against the configured API.
///
/// Holds only read-only state, so one instance is shared by every
/// concurrent tool call.
#[derive(Debug, Clone)]
pub struct Invoker {
    http: reqwest::Client,
    api: Arc<ApiConfig>,
}

impl Invoker {
    /// Create an invoker with its own HTTP client.
    pub fn new(api: Arc<ApiConfig>) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, api))
    }

    /// Create an invoker around an existing client.
    pub fn with_client(http: reqwest::Client, api: Arc<ApiConfig>) -> Self {
        Self { http, api }
    }

    /// Run an operation and return the MCP result.
    ///
    /// Never fails: every error becomes an error result.
    #[instrument(skip_all, fields(tool = operation.name))]
    pub async fn call(
        &self,
        operation: &Operation,
        arguments: &JsonObject,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Tool called: {}", operation.name);

        match self.invoke(operation, arguments, cancel).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                if e.is_invocation_error() {
                    warn!("Rejected call to {}: {}", operation.name, e);
                } else {
                    warn!("Tool {} failed: {}", operation.name, e);
                }
                e.into_result()
            }
        }
    }

    /// Run an operation and return the success text.
    pub async fn invoke(
        &self,
        operation: &Operation,
        arguments: &JsonObject,
        cancel: &CancellationToken,
    ) -> Result<String, ToolError> {
        let request = prepare(operation, arguments, &self.api)?;

        let (status, body) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ToolError::Cancelled),
            response = self.dispatch(request) => response?,
        };

        if status >= 400 {
            return Err(ToolError::Upstream {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        match (operation.response)(&body) {
            Ok(pretty) => Ok(pretty),
            Err(e) => {
                debug!("Response did not match the expected shape ({}), passing through raw", e);
                Ok(String::from_utf8_lossy(&body).into_owned())
            }
        }
    }

    async fn dispatch(&self, request: PreparedRequest) -> Result<(u16, Vec<u8>), ToolError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(token) = self.api.bearer_token.as_deref().filter(|t| !t.is_empty()) {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, APPLICATION_JSON)
                .body(serde_json::to_vec(&body)?);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

/// Validate `arguments` against `operation` and build the request.
///
/// Fails before any network traffic when a required parameter is missing
/// or a value has the wrong type.
pub fn prepare(
    operation: &Operation,
    arguments: &JsonObject,
    api: &ApiConfig,
) -> Result<PreparedRequest, ToolError> {
    for param in operation.params {
        check(param, arguments)?;
    }

    let url = build_url(operation, arguments, &api.base_url)?;
    let headers = build_headers(operation, arguments)?;
    let body = operation
        .method
        .has_body()
        .then(|| project_body(operation, arguments));

    Ok(PreparedRequest {
        method: operation.method.as_reqwest(),
        url,
        headers,
        body,
    })
}

/// Presence and type rules for one parameter.
fn check(param: &'static ParamSpec, arguments: &JsonObject) -> Result<(), ToolError> {
    match arguments.get(param.name) {
        None | Some(Value::Null) if !param.required => Ok(()),
        None => Err(ToolError::missing(param.location, param.name)),
        Some(value) => {
            // Query and header values are stringified, so any type goes.
            let strict = matches!(param.location, Location::Path | Location::Body);
            if strict && !param.kind.matches(value) {
                Err(ToolError::invalid(
                    param.location,
                    param.name,
                    format!("expected {}", param.kind.schema_type()),
                ))
            } else if value.is_null() {
                Err(ToolError::missing(param.location, param.name))
            } else if param.location == Location::Path {
                check_segment(param, value)
            } else {
                Ok(())
            }
        }
    }
}

/// A path value must map to exactly one segment; URL normalization drops
/// `.` and `..`.
fn check_segment(param: &'static ParamSpec, value: &Value) -> Result<(), ToolError> {
    match value.as_str() {
        Some("") => Err(ToolError::invalid(Location::Path, param.name, "must not be empty")),
        Some("." | "..") => Err(ToolError::invalid(
            Location::Path,
            param.name,
            "must not be a dot segment",
        )),
        _ => Ok(()),
    }
}

/// Present, non-null argument for a parameter.
fn present<'a>(param: &ParamSpec, arguments: &'a JsonObject) -> Option<&'a Value> {
    arguments.get(param.name).filter(|v| !v.is_null())
}

/// String form of a query or header value.
///
/// Strings are used verbatim and arrays are comma-joined, which is how
/// the API expects multi-valued filters such as `policy_types`.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn build_url(
    operation: &Operation,
    arguments: &JsonObject,
    base_url: &str,
) -> Result<Url, ToolError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ToolError::request(format!("invalid base URL '{}': {}", base_url, e)))?;

    let mut segments = Vec::new();
    for segment in operation.segments() {
        match segment {
            Segment::Literal(s) => segments.push(s.to_string()),
            Segment::Param(name) => {
                let value = arguments
                    .get(name)
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        ToolError::request(format!("no value for path placeholder {{{}}}", name))
                    })?;
                segments.push(value.to_string());
            }
        }
    }

    url.path_segments_mut()
        .map_err(|_| ToolError::request(format!("base URL '{}' cannot be a base", base_url)))?
        .pop_if_empty()
        .extend(&segments);

    let pairs: Vec<(&str, String)> = operation
        .params_at(Location::Query)
        .filter_map(|p| present(p, arguments).map(|v| (p.name, stringify(v))))
        .collect();

    if !pairs.is_empty() {
        let query = serde_urlencoded::to_string(&pairs)
            .map_err(|e| ToolError::request(format!("invalid query string: {}", e)))?;
        url.set_query(Some(&query));
    }

    Ok(url)
}

fn build_headers(operation: &Operation, arguments: &JsonObject) -> Result<HeaderMap, ToolError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

    for param in operation.params_at(Location::Header) {
        let Some(value) = present(param, arguments) else {
            continue;
        };
        let name = HeaderName::from_bytes(param.name.as_bytes())
            .map_err(|e| ToolError::request(format!("invalid header name {}: {}", param.name, e)))?;
        let value = HeaderValue::from_str(&stringify(value))
            .map_err(|_| ToolError::invalid(Location::Header, param.name, "not a valid header value"))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Copy the declared body fields present in `arguments` into a new object.
///
/// Path, query and header parameters as well as undeclared keys never end
/// up in the body.
fn project_body(operation: &Operation, arguments: &JsonObject) -> Value {
    let body: JsonObject = operation
        .params_at(Location::Body)
        .filter_map(|p| present(p, arguments).map(|v| (p.name.to_string(), v.clone())))
        .collect();
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::operation::{Method, ParamKind, pretty};
    use rmcp::model::RawContent;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    static GET_THING: Operation = Operation {
        name: "get_thing",
        description: "Get a thing",
        method: Method::Get,
        path: "/things/{thing_id}",
        params: &[
            ParamSpec::path("thing_id", "Thing id"),
            ParamSpec::query("filter", "Filter"),
            ParamSpec::query("limit", "Limit"),
            ParamSpec::header("X-Marketplace", "Marketplace"),
        ],
        response: pretty::<JsonObject>,
    };

    static PUT_THING: Operation = Operation {
        name: "put_thing",
        description: "Replace a thing",
        method: Method::Put,
        path: "/things/{thing_id}",
        params: &[
            ParamSpec::path("thing_id", "Thing id"),
            ParamSpec::body("name", ParamKind::String, "Name").required(),
            ParamSpec::body("active", ParamKind::Boolean, "Active"),
        ],
        response: pretty::<JsonObject>,
    };

    fn api(base_url: &str, token: Option<&str>) -> Arc<ApiConfig> {
        Arc::new(ApiConfig {
            base_url: base_url.to_string(),
            bearer_token: token.map(str::to_string),
        })
    }

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("arguments must be an object"),
        }
    }

    fn text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_prepare_missing_path_parameter() {
        let err = prepare(&GET_THING, &args(json!({})), &api("http://localhost", None)).unwrap_err();
        assert!(matches!(
            err,
            ToolError::MissingParameter { location: Location::Path, name: "thing_id" }
        ));
    }

    #[test]
    fn test_prepare_non_string_path_parameter() {
        for bad in [json!(5), json!(true), json!(null), json!(["a"])] {
            let err = prepare(
                &GET_THING,
                &args(json!({ "thing_id": bad })),
                &api("http://localhost", None),
            )
            .unwrap_err();
            assert!(err.to_string().starts_with("Invalid path parameter: thing_id"));
        }
    }

    #[test]
    fn test_prepare_builds_query_in_declared_order() {
        let req = prepare(
            &GET_THING,
            &args(json!({ "limit": 10, "thing_id": "7", "filter": "a b&c" })),
            &api("https://api.example.com/v1", None),
        )
        .unwrap();
        assert_eq!(
            req.url.as_str(),
            "https://api.example.com/v1/things/7?filter=a+b%26c&limit=10"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn test_prepare_without_query_has_no_question_mark() {
        let req = prepare(
            &GET_THING,
            &args(json!({ "thing_id": "7", "filter": null })),
            &api("https://api.example.com/v1/", None),
        )
        .unwrap();
        assert_eq!(req.url.as_str(), "https://api.example.com/v1/things/7");
    }

    #[test]
    fn test_prepare_encodes_path_segments() {
        let req = prepare(
            &GET_THING,
            &args(json!({ "thing_id": "a/b c" })),
            &api("https://api.example.com", None),
        )
        .unwrap();
        assert_eq!(req.url.path(), "/things/a%2Fb%20c");
    }

    #[test]
    fn test_prepare_rejects_segment_changing_path_values() {
        for bad in ["", ".", ".."] {
            let err = prepare(
                &GET_THING,
                &args(json!({ "thing_id": bad })),
                &api("https://api.example.com", None),
            )
            .unwrap_err();
            assert!(
                matches!(
                    err,
                    ToolError::InvalidParameter { location: Location::Path, name: "thing_id", .. }
                ),
                "{:?} was accepted",
                bad
            );
        }

        let req = prepare(
            &GET_THING,
            &args(json!({ "thing_id": "..." })),
            &api("https://api.example.com", None),
        )
        .unwrap();
        assert_eq!(req.url.path(), "/things/...");
    }

    #[tokio::test]
    async fn test_call_dot_segment_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let invoker = Invoker::new(api(&server.uri(), None)).unwrap();
        let result = invoker
            .call(
                &crate::domains::tools::definitions::sales_tax::DELETE_SALES_TAX,
                &args(json!({ "countryCode": "..", "jurisdictionId": "payment_policy" })),
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).starts_with("Invalid path parameter: countryCode"));
    }

    #[test]
    fn test_prepare_stringifies_array_query() {
        let req = prepare(
            &GET_THING,
            &args(json!({ "thing_id": "1", "filter": ["A", "B"] })),
            &api("https://api.example.com", None),
        )
        .unwrap();
        assert_eq!(req.url.query(), Some("filter=A%2CB"));
    }

    #[test]
    fn test_prepare_sets_header_parameters() {
        let req = prepare(
            &GET_THING,
            &args(json!({ "thing_id": "1", "X-Marketplace": "EBAY_US" })),
            &api("https://api.example.com", None),
        )
        .unwrap();
        assert_eq!(req.headers.get("x-marketplace").unwrap(), "EBAY_US");
        assert_eq!(req.headers.get(ACCEPT).unwrap(), APPLICATION_JSON);
    }

    #[test]
    fn test_prepare_projects_body() {
        let req = prepare(
            &PUT_THING,
            &args(json!({ "thing_id": "1", "name": "n", "unknown": 3 })),
            &api("https://api.example.com", None),
        )
        .unwrap();
        assert_eq!(req.body, Some(json!({ "name": "n" })));
    }

    #[test]
    fn test_prepare_required_body_field() {
        let err = prepare(
            &PUT_THING,
            &args(json!({ "thing_id": "1", "active": true })),
            &api("https://api.example.com", None),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Missing required body field: name");
    }

    #[test]
    fn test_prepare_body_type_mismatch() {
        let err = prepare(
            &PUT_THING,
            &args(json!({ "thing_id": "1", "name": "n", "active": "yes" })),
            &api("https://api.example.com", None),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidParameter { location: Location::Body, name: "active", .. }
        ));
    }

    #[test]
    fn test_prepare_invalid_base_url() {
        let err = prepare(&GET_THING, &args(json!({ "thing_id": "1" })), &api("not a url", None))
            .unwrap_err();
        assert!(matches!(err, ToolError::Request(_)));
    }

    #[tokio::test]
    async fn test_call_success_pretty_prints() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things/42"))
            .and(query_param("limit", "5"))
            .and(header("authorization", "Bearer secret"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "a": "x", "b": true })))
            .expect(1)
            .mount(&server)
            .await;

        let invoker = Invoker::new(api(&server.uri(), Some("secret"))).unwrap();
        let result = invoker
            .call(
                &GET_THING,
                &args(json!({ "thing_id": "42", "limit": 5 })),
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "{\n  \"a\": \"x\",\n  \"b\": true\n}");
    }

    #[tokio::test]
    async fn test_call_without_token_sends_no_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let invoker = Invoker::new(api(&server.uri(), None)).unwrap();
        invoker
            .call(&GET_THING, &args(json!({ "thing_id": "1" })), &CancellationToken::new())
            .await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_call_upstream_error_embeds_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things/1"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not found"}"#))
            .mount(&server)
            .await;

        let invoker = Invoker::new(api(&server.uri(), None)).unwrap();
        let result = invoker
            .call(&GET_THING, &args(json!({ "thing_id": "1" })), &CancellationToken::new())
            .await;

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).contains("not found"));
    }

    #[tokio::test]
    async fn test_call_non_json_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
            .mount(&server)
            .await;

        let invoker = Invoker::new(api(&server.uri(), None)).unwrap();
        let result = invoker
            .call(&GET_THING, &args(json!({ "thing_id": "1" })), &CancellationToken::new())
            .await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "plain text");
    }

    #[tokio::test]
    async fn test_call_sends_projected_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/things/9"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "name": "n", "active": false })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let invoker = Invoker::new(api(&server.uri(), None)).unwrap();
        let result = invoker
            .call(
                &PUT_THING,
                &args(json!({ "thing_id": "9", "name": "n", "active": false, "extra": 1 })),
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "");
    }

    #[tokio::test]
    async fn test_call_missing_parameter_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let invoker = Invoker::new(api(&server.uri(), None)).unwrap();
        let result = invoker
            .call(&GET_THING, &args(json!({})), &CancellationToken::new())
            .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Missing required path parameter: thing_id");
    }

    #[tokio::test]
    async fn test_call_cancelled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let invoker = Invoker::new(api(&server.uri(), None)).unwrap();
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let err = invoker
            .invoke(&GET_THING, &args(json!({ "thing_id": "1" })), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Cancelled));
    }

    #[tokio::test]
    async fn test_call_connection_refused() {
        let invoker = Invoker::new(api("http://127.0.0.1:9", None)).unwrap();
        let err = invoker
            .invoke(&GET_THING, &args(json!({ "thing_id": "1" })), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Transport(_)));
    }
}
