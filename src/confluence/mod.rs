//! Confluence Cloud REST API v2 access.
//!
//! This module owns everything that talks HTTP to Confluence:
//!
//! - `request`: transport-neutral request/response values built by the tools
//! - `auth`: credentials and the `Authorization` header they produce
//! - `client`: the reqwest-backed [`ConfluenceClient`]
//! - `error`: [`ConfluenceError`]
//!
//! Tools never see reqwest directly. They hand an [`ApiRequest`] to a
//! [`ConfluenceApi`] implementation, which lets tests substitute a fake.

mod auth;
mod client;
mod error;
mod request;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use auth::Credentials;
pub use client::{ATLASSIAN_API_BASE, ConfluenceClient, DEFAULT_RESOURCES_URL};
pub use error::ConfluenceError;
pub use request::{ApiRequest, ApiResponse, HttpMethod};

/// Sends fully built requests to the Confluence API.
#[async_trait]
pub trait ConfluenceApi: Send + Sync {
    /// Send one request and return the status and parsed body.
    ///
    /// Non-2xx responses are reported as [`ConfluenceError::HttpResponse`].
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ConfluenceError>;
}
