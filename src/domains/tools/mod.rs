//! Tools domain module.
//!
//! Every tool wraps exactly one Account API operation. Tools are data, not
//! code: each one is a static [`Operation`] record and a single generic
//! [`Invoker`] executes all of them.
//!
//! ## Architecture
//!
//! - `operation.rs` - Operation, parameter and response-shape descriptors
//! - `definitions/` - The operation table, one file per API resource
//! - `models/` - Typed response models used to render results
//! - `invoke.rs` - Request building, dispatch and result mapping
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Declare a `pub static` [`Operation`] in the matching `definitions/` file
//! 2. Add it to `definitions::OPERATIONS`
//!
//! Router, registry and schemas pick it up from the table.

pub mod definitions;
mod error;
pub mod invoke;
pub mod models;
pub mod operation;
mod registry;
pub mod router;

pub use error::ToolError;
pub use invoke::Invoker;
pub use operation::Operation;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
