//! Transports carrying MCP sessions to the Confluence tools.
//!
//! - `stdio` (default feature): one session over stdin/stdout, the usual
//!   setup for desktop MCP clients.
//! - `tcp`: one rmcp session per accepted connection.
//! - `http`: JSON-RPC over `POST` on a configurable path, with `/health`.
//!
//! Only the transports enabled at compile time can be selected through
//! `MCP_TRANSPORT`.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
