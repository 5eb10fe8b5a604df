//! Tools domain module.
//!
//! Every Confluence endpoint is exposed as one MCP tool. Tools are data,
//! not code: a single executor turns any [`endpoint::Endpoint`] plus the
//! caller's arguments into an HTTP request.
//!
//! ## Architecture
//!
//! - `endpoint.rs` - Endpoint/parameter descriptions and request building
//! - `definitions/` - The endpoint catalog, one file per API group
//! - `registry.rs` - Filtered tool set, listing and dispatch
//! - `router.rs` - rmcp ToolRouter for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add an `Endpoint` entry to the matching file in `definitions/`
//! 2. Update the catalog size in `definitions/mod.rs` tests
//!
//! Registry, router and HTTP transport pick it up automatically.

pub mod definitions;
pub mod endpoint;
mod error;
mod registry;
pub mod router;

pub use endpoint::{Endpoint, Location, Param, ParamKind};
pub use error::ToolError;
pub use registry::{ToolRegistry, execute};
pub use router::build_tool_router;
