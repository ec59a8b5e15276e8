//! Tool Router - builds the rmcp ToolRouter from the operation table.
//!
//! Every operation gets the same dynamic route: arguments are handed to the
//! shared [`Invoker`] together with the request's cancellation token.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::definitions::OPERATIONS;
use super::invoke::Invoker;
use super::operation::Operation;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(invoker: Arc<Invoker>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    OPERATIONS
        .iter()
        .copied()
        .fold(ToolRouter::new(), |router, operation| {
            router.with_route(create_route(operation, invoker.clone()))
        })
}

/// Create a ToolRoute for STDIO transport.
fn create_route<S>(operation: &'static Operation, invoker: Arc<Invoker>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(operation.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let cancel = ctx.request_context.ct.clone();
        let invoker = invoker.clone();
        async move { Ok::<_, McpError>(invoker.call(operation, &args, &cancel).await) }.boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::ApiConfig;

    struct TestServer {}

    fn test_invoker() -> Arc<Invoker> {
        Arc::new(Invoker::new(Arc::new(ApiConfig::default())).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_invoker());
        let tools = router.list_all();
        assert_eq!(tools.len(), 36);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_sales_tax_countryCode_jurisdictionId"));
        assert!(names.contains(&"put_custom_policy_custom_policy_id"));
        assert!(names.contains(&"post_program_opt_in"));
        assert!(names.contains(&"get_kyc"));
    }

    #[test]
    fn test_router_tool_schema() {
        let router: ToolRouter<TestServer> = build_tool_router(test_invoker());
        let tool = router
            .list_all()
            .into_iter()
            .find(|t| t.name == "get_sales_tax_countryCode_jurisdictionId")
            .unwrap();
        let required = tool.input_schema.get("required").unwrap();
        assert_eq!(required, &serde_json::json!(["countryCode", "jurisdictionId"]));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let invoker = test_invoker();
        let registry = ToolRegistry::new(invoker.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(invoker);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
