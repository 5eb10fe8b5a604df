//! Confluence MCP Server Library
//!
//! This crate exposes the Confluence Cloud REST API v2 to MCP clients. Each
//! API operation (pages, blog posts, spaces, comments, attachments, labels,
//! custom content, whiteboards, databases, folders, smart links, tasks,
//! users, data policies and classification levels) is one tool.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the endpoint catalog, request building and dispatch
//! - **confluence**: the HTTP client, authentication and site discovery
//!
//! # Example
//!
//! ```rust,no_run
//! use confluence_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod confluence;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
