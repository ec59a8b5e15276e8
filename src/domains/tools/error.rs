//! Tool-specific error types.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

use super::operation::Location;

/// Errors that can occur while invoking a tool.
///
/// Every variant is recoverable: the invoker turns it into an error
/// `CallToolResult` instead of failing the request.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The arguments value was not a JSON object.
    #[error("Invalid arguments object")]
    InvalidArguments,

    /// A required parameter was absent from the arguments.
    #[error("Missing required {location}: {name}")]
    MissingParameter {
        location: Location,
        name: &'static str,
    },

    /// A parameter was present but had the wrong shape.
    #[error("Invalid {location}: {name} ({reason})")]
    InvalidParameter {
        location: Location,
        name: &'static str,
        reason: String,
    },

    /// The request could not be built (bad base URL, bad header value).
    #[error("Failed to create request: {0}")]
    Request(String),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// Network failure while sending the request or reading the body.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The call was cancelled by the client before a response arrived.
    #[error("Request cancelled")]
    Cancelled,

    /// The API answered with a status code of 400 or above.
    #[error("API error (status {status}): {body}")]
    Upstream { status: u16, body: String },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "missing parameter" error.
    pub fn missing(location: Location, name: &'static str) -> Self {
        Self::MissingParameter { location, name }
    }

    /// Create a new "invalid parameter" error.
    pub fn invalid(location: Location, name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            location,
            name,
            reason: reason.into(),
        }
    }

    /// Create a new request construction error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Whether the error was detected before any network traffic.
    pub fn is_invocation_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::InvalidArguments
                | Self::MissingParameter { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Render this error as an MCP error result.
    pub fn into_result(self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(self.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = ToolError::missing(Location::Path, "countryCode");
        assert_eq!(
            err.to_string(),
            "Missing required path parameter: countryCode"
        );
        assert!(err.is_invocation_error());
    }

    #[test]
    fn test_upstream_message_embeds_body() {
        let err = ToolError::Upstream {
            status: 404,
            body: r#"{"error":"not found"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains(r#"{"error":"not found"}"#));
        assert!(!err.is_invocation_error());
    }

    #[test]
    fn test_into_result_is_error() {
        let result = ToolError::Cancelled.into_result();
        assert_eq!(result.is_error, Some(true));
    }
}
