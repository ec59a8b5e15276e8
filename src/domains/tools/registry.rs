//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, backed by the static operation table
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

#[cfg(any(feature = "http", test))]
use rmcp::model::CallToolResult;
use rmcp::model::Tool;
#[cfg(feature = "http")]
use tokio_util::sync::CancellationToken;
#[cfg(feature = "http")]
use tracing::warn;

use super::definitions::OPERATIONS;
use super::invoke::Invoker;
use super::operation::Operation;
#[cfg(feature = "http")]
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    invoker: Arc<Invoker>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(invoker: Arc<Invoker>) -> Self {
        Self { invoker }
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        OPERATIONS.iter().map(|op| op.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        OPERATIONS.iter().map(|op| op.to_tool()).collect()
    }

    /// Find the operation behind a tool name.
    pub fn find(name: &str) -> Option<&'static Operation> {
        OPERATIONS.iter().copied().find(|op| op.name == name)
    }

    pub fn invoker(&self) -> &Arc<Invoker> {
        &self.invoker
    }

    /// Dispatch an HTTP tool call to the appropriate operation.
    ///
    /// Unknown tools are reported as a protocol error; everything else,
    /// including malformed arguments, comes back as a tool result.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, String> {
        let Some(operation) = Self::find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name).to_string());
        };

        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => Default::default(),
            _ => return Ok(error_result(ToolError::InvalidArguments)),
        };

        Ok(self
            .invoker
            .call(operation, &arguments, &CancellationToken::new())
            .await)
    }
}

#[cfg(feature = "http")]
fn error_result(error: ToolError) -> CallToolResult {
    warn!("{}", error);
    error.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;

    fn test_registry() -> ToolRegistry {
        let invoker = Invoker::new(Arc::new(ApiConfig::default())).unwrap();
        ToolRegistry::new(Arc::new(invoker))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(names.len(), 36);
        assert_eq!(names[0], "post_program_opt_out");
        assert_eq!(names[35], "get_sales_tax");
        assert!(names.contains(&"get_sales_tax_countryCode_jurisdictionId"));
        assert!(names.contains(&"put_custom_policy_custom_policy_id"));
        assert!(names.contains(&"get_payment_policy_payment_policy_id"));
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let registry = test_registry();
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
    }

    #[test]
    fn test_get_all_tools_is_deterministic() {
        let first: Vec<_> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| t.name)
            .collect();
        let second: Vec<_> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find() {
        let op = ToolRegistry::find("get_kyc").unwrap();
        assert_eq!(op.path, "/kyc");
        assert!(ToolRegistry::find("unknown").is_none());
    }

    mod upstream {
        use super::*;
        use rmcp::model::RawContent;
        use serde_json::json;
        use tokio_util::sync::CancellationToken;
        use wiremock::matchers::{body_json, header, method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        fn registry_for(server: &MockServer) -> ToolRegistry {
            let api = ApiConfig {
                base_url: server.uri(),
                bearer_token: Some("test-token".to_string()),
            };
            ToolRegistry::new(Arc::new(Invoker::new(Arc::new(api)).unwrap()))
        }

        async fn run(registry: &ToolRegistry, name: &str, arguments: serde_json::Value) -> CallToolResult {
            let operation = ToolRegistry::find(name).unwrap();
            let arguments = arguments.as_object().cloned().unwrap();
            registry
                .invoker()
                .call(operation, &arguments, &CancellationToken::new())
                .await
        }

        fn text(result: &CallToolResult) -> &str {
            match &result.content[0].raw {
                RawContent::Text(t) => &t.text,
                _ => panic!("expected text content"),
            }
        }

        #[tokio::test]
        async fn test_get_sales_tax_entry() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/sales_tax/US/MO"))
                .and(header("Authorization", "Bearer test-token"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "countryCode": "US",
                    "jurisdictionId": "MO",
                    "salesTaxPercentage": "7.75",
                    "shippingAndHandlingTaxed": true,
                    "unknownField": 1
                })))
                .expect(1)
                .mount(&server)
                .await;

            let registry = registry_for(&server);
            let result = run(
                &registry,
                "get_sales_tax_countryCode_jurisdictionId",
                json!({ "countryCode": "US", "jurisdictionId": "MO" }),
            )
            .await;

            assert_eq!(result.is_error, Some(false));
            let out = text(&result);
            assert!(out.contains("\"salesTaxPercentage\": \"7.75\""));
            assert!(!out.contains("unknownField"));
        }

        #[tokio::test]
        async fn test_update_custom_policy_body_projection() {
            let server = MockServer::start().await;
            Mock::given(method("PUT"))
                .and(path("/custom_policy/5"))
                .and(body_json(json!({
                    "name": "N",
                    "label": "L",
                    "description": "D"
                })))
                .respond_with(ResponseTemplate::new(204))
                .expect(1)
                .mount(&server)
                .await;

            let registry = registry_for(&server);
            let result = run(
                &registry,
                "put_custom_policy_custom_policy_id",
                json!({
                    "custom_policy_id": "5",
                    "name": "N",
                    "label": "L",
                    "description": "D",
                    "extra": "ignored"
                }),
            )
            .await;

            assert_eq!(result.is_error, Some(false));
        }

        #[tokio::test]
        async fn test_get_custom_policies_forwards_marketplace_header() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/custom_policy/"))
                .and(query_param("policy_types", "PRODUCT_COMPLIANCE,TAKE_BACK"))
                .and(header("X-EBAY-C-MARKETPLACE-ID", "EBAY_US"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "customPolicies": [],
                    "total": 0
                })))
                .expect(1)
                .mount(&server)
                .await;

            let registry = registry_for(&server);
            let result = run(
                &registry,
                "get_custom_policy",
                json!({
                    "policy_types": ["PRODUCT_COMPLIANCE", "TAKE_BACK"],
                    "X-EBAY-C-MARKETPLACE-ID": "EBAY_US"
                }),
            )
            .await;

            assert_eq!(result.is_error, Some(false));
        }

        #[tokio::test]
        async fn test_get_payment_policy_not_found() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/payment_policy/123"))
                .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"errors":[]}"#))
                .mount(&server)
                .await;

            let registry = registry_for(&server);
            let result = run(
                &registry,
                "get_payment_policy_payment_policy_id",
                json!({ "payment_policy_id": "123" }),
            )
            .await;

            assert_eq!(result.is_error, Some(true));
            assert_eq!(text(&result), r#"API error (status 404): {"errors":[]}"#);
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = test_registry()
            .call_tool("unknown", serde_json::json!({}))
            .await;
        assert_eq!(result.unwrap_err(), "Unknown tool: unknown");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_non_object_arguments() {
        let result = test_registry()
            .call_tool("get_kyc", serde_json::json!([1, 2]))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_missing_parameter() {
        let result = test_registry()
            .call_tool("get_payment_policy_payment_policy_id", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
