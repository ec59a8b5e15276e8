//! Declarative description of one API operation.
//!
//! Every tool is a static [`Operation`]: an HTTP method, a path template,
//! the parameters it accepts and the shape used to render its response.
//! The [`Invoker`](super::Invoker) interprets these records, so adding a
//! tool never requires new request code.

use std::fmt;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

/// Where a parameter ends up in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Substituted into a `{placeholder}` of the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as an HTTP request header.
    Header,
    /// Projected into the JSON request body.
    Body,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Path => "path parameter",
            Self::Query => "query parameter",
            Self::Header => "header parameter",
            Self::Body => "body field",
        })
    }
}

/// JSON type a parameter value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    Array,
    Object,
}

impl ParamKind {
    /// JSON Schema type name.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether `value` has this kind. `null` never matches.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }

    fn schema(self) -> Value {
        match self {
            Self::Array => json!({ "type": "array", "items": {} }),
            other => json!({ "type": other.schema_type() }),
        }
    }
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: Location,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    const fn new(
        name: &'static str,
        location: Location,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            location,
            kind,
            required: false,
            description,
        }
    }

    /// A path parameter. Path parameters are always required strings.
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self::new(name, Location::Path, ParamKind::String, description).required()
    }

    /// An optional query parameter. Advertised as a string unless
    /// overridden with [`ParamSpec::with_kind`]; any JSON value is accepted
    /// and stringified.
    pub const fn query(name: &'static str, description: &'static str) -> Self {
        Self::new(name, Location::Query, ParamKind::String, description)
    }

    /// An optional header parameter.
    pub const fn header(name: &'static str, description: &'static str) -> Self {
        Self::new(name, Location::Header, ParamKind::String, description)
    }

    /// An optional body field of the given kind.
    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self::new(name, Location::Body, kind, description)
    }

    /// Override the JSON type advertised for the parameter.
    pub const fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the parameter as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Whether requests with this method carry a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reqwest().as_str())
    }
}

/// Decodes a response body into a typed model and pretty-prints it.
pub type ResponseShape = fn(&[u8]) -> serde_json::Result<String>;

/// Response shape for model type `T`.
///
/// Decoding drops fields `T` does not know; the output is indented with
/// two spaces.
pub fn pretty<T>(body: &[u8]) -> serde_json::Result<String>
where
    T: DeserializeOwned + Serialize,
{
    let value: T = serde_json::from_slice(body)?;
    serde_json::to_string_pretty(&value)
}

/// A single piece of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

/// Static description of one API operation exposed as a tool.
#[derive(Debug)]
pub struct Operation {
    /// Tool name as registered in MCP.
    pub name: &'static str,

    /// Tool description shown to clients.
    pub description: &'static str,

    pub method: Method,

    /// Path template relative to the base URL, e.g. `/sales_tax/{countryCode}`.
    pub path: &'static str,

    pub params: &'static [ParamSpec],

    pub response: ResponseShape,
}

impl Operation {
    /// Split the path template into segments (leading `/` excluded).
    pub fn segments(&self) -> impl Iterator<Item = Segment<'static>> + 'static {
        self.path
            .strip_prefix('/')
            .unwrap_or(self.path)
            .split('/')
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => Segment::Param(name),
                    None => Segment::Literal(segment),
                }
            })
    }

    /// Parameters declared at the given location, in declaration order.
    pub fn params_at(&self, location: Location) -> impl Iterator<Item = &'static ParamSpec> {
        self.params.iter().filter(move |p| p.location == location)
    }

    /// JSON Schema of the tool arguments.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        for param in self.params {
            let mut schema = param.kind.schema();
            if let Value::Object(ref mut obj) = schema {
                obj.insert("description".into(), Value::from(param.description));
            }
            properties.insert(param.name.into(), schema);
        }

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::from(p.name))
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".into(), Value::from("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        schema
    }

    /// Create a Tool model for this operation (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: Operation = Operation {
        name: "sample_tool",
        description: "Sample",
        method: Method::Put,
        path: "/things/{thing_id}/parts/",
        params: &[
            ParamSpec::path("thing_id", "Thing id"),
            ParamSpec::query("limit", "Page size").with_kind(ParamKind::Integer),
            ParamSpec::body("name", ParamKind::String, "Name").required(),
            ParamSpec::body("tags", ParamKind::Array, "Tags"),
        ],
        response: pretty::<JsonObject>,
    };

    #[test]
    fn test_segments() {
        let segments: Vec<_> = SAMPLE.segments().collect();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("things"),
                Segment::Param("thing_id"),
                Segment::Literal("parts"),
                Segment::Literal(""),
            ]
        );
    }

    #[test]
    fn test_input_schema() {
        let schema = Value::Object(SAMPLE.input_schema());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["thing_id"]["type"], "string");
        assert_eq!(schema["properties"]["tags"]["type"], "array");
        assert_eq!(schema["properties"]["limit"]["type"], "integer");
        assert_eq!(schema["properties"]["limit"]["description"], "Page size");
        assert_eq!(schema["required"], json!(["thing_id", "name"]));
    }

    #[test]
    fn test_schema_without_required() {
        static OPTIONAL: Operation = Operation {
            name: "optional_only",
            description: "",
            method: Method::Get,
            path: "/things",
            params: &[ParamSpec::query("limit", "")],
            response: pretty::<JsonObject>,
        };
        assert!(!OPTIONAL.input_schema().contains_key("required"));
    }

    #[test]
    fn test_kind_matches() {
        assert!(ParamKind::String.matches(&json!("a")));
        assert!(!ParamKind::String.matches(&json!(1)));
        assert!(!ParamKind::Boolean.matches(&Value::Null));
        assert!(ParamKind::Object.matches(&json!({})));
        assert!(ParamKind::Integer.matches(&json!(5)));
        assert!(!ParamKind::Integer.matches(&json!("5")));
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let out = pretty::<JsonObject>(br#"{"a":1}"#).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
        assert!(pretty::<JsonObject>(b"plain text").is_err());
    }

    #[test]
    fn test_to_tool() {
        let tool = SAMPLE.to_tool();
        assert_eq!(tool.name, "sample_tool");
        assert_eq!(tool.description.as_deref(), Some("Sample"));
    }
}
