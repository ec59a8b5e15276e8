//! Account API MCP Server Library
//!
//! This crate exposes the eBay Sell Account API as a set of Model Context
//! Protocol (MCP) tools. Each tool maps to exactly one REST operation and
//! performs exactly one outbound HTTP request.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the main server
//!   and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the operation table, response models and the generic invoker
//!
//! # Example
//!
//! ```rust,no_run
//! use account_mcp_server::{core::McpServer, core::Config, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
