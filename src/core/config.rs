//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use crate::confluence::{Credentials, DEFAULT_RESOURCES_URL};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Confluence site and credentials.
    pub confluence: ConfluenceConfig,

    /// Which tools are exposed to clients.
    pub tools: ToolsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Confluence connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct ConfluenceConfig {
    /// API v2 base URL, e.g. `https://example.atlassian.net/wiki/api/v2`.
    /// When unset the site is discovered from the OAuth token.
    pub base_url: Option<String>,

    /// OAuth 2.0 access token.
    pub access_token: Option<String>,

    /// Atlassian account email for API token authentication.
    pub email: Option<String>,

    /// Atlassian API token.
    pub api_token: Option<String>,

    /// Accessible-resources endpoint used for site discovery.
    pub resources_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ConfluenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfluenceConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("email", &self.email)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("resources_url", &self.resources_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ConfluenceConfig {
    /// Credentials to use, preferring an OAuth token over email + API token.
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(token) = self.access_token.as_deref().filter(|t| !t.is_empty()) {
            return Some(Credentials::bearer(token));
        }

        match (self.email.as_deref(), self.api_token.as_deref()) {
            (Some(email), Some(api_token)) if !email.is_empty() && !api_token.is_empty() => {
                Some(Credentials::basic(email, api_token))
            }
            _ => None,
        }
    }
}

impl Default for ConfluenceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            email: None,
            api_token: None,
            resources_url: DEFAULT_RESOURCES_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Tool exposure settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Expose only tools that issue GET requests.
    pub read_only: bool,

    /// If non-empty, expose only the named tools.
    pub include: Vec<String>,

    /// If non-empty, expose only tools carrying one of these tags
    /// (case-insensitive), e.g. `Page`, `important`.
    pub tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "confluence-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            confluence: ConfluenceConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

/// Split a comma separated list, dropping blanks.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_CONFLUENCE_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.confluence = ConfluenceConfig::from_env();
        config.tools = ToolsConfig::from_env();

        config
    }
}

impl ConfluenceConfig {
    /// Load Confluence settings from `MCP_CONFLUENCE_*` variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        config.base_url = var("MCP_CONFLUENCE_BASE_URL");
        config.access_token = var("MCP_CONFLUENCE_ACCESS_TOKEN");
        config.email = var("MCP_CONFLUENCE_EMAIL");
        config.api_token = var("MCP_CONFLUENCE_API_TOKEN");

        if let Some(url) = var("MCP_CONFLUENCE_RESOURCES_URL") {
            config.resources_url = url;
        }

        if let Some(timeout) = var("MCP_CONFLUENCE_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_CONFLUENCE_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.timeout_secs
                ),
            }
        }

        match (&config.base_url, config.credentials()) {
            (Some(url), Some(creds)) => {
                info!("Confluence base URL: {} ({} auth)", url, creds.scheme())
            }
            (None, Some(creds)) if creds.can_discover_site() => {
                info!("MCP_CONFLUENCE_BASE_URL not set - site will be discovered from the token")
            }
            (None, Some(_)) => warn!(
                "MCP_CONFLUENCE_BASE_URL is required with API token credentials; \
                 tool calls will fail until it is set"
            ),
            (_, None) => warn!(
                "No Confluence credentials found. Tools will be listed but calls will fail"
            ),
        }

        config
    }
}

impl ToolsConfig {
    /// Load tool exposure settings from `MCP_TOOLS_*` variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(read_only) = std::env::var("MCP_TOOLS_READ_ONLY") {
            config.read_only = parse_flag(&read_only);
            info!("Read-only tools: {}", config.read_only);
        }

        if let Ok(include) = std::env::var("MCP_TOOLS_INCLUDE") {
            config.include = parse_list(&include);
        }

        if let Ok(tags) = std::env::var("MCP_TOOLS_TAGS") {
            config.tags = parse_list(&tags);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const CONFLUENCE_VARS: &[&str] = &[
        "MCP_CONFLUENCE_BASE_URL",
        "MCP_CONFLUENCE_ACCESS_TOKEN",
        "MCP_CONFLUENCE_EMAIL",
        "MCP_CONFLUENCE_API_TOKEN",
        "MCP_CONFLUENCE_RESOURCES_URL",
        "MCP_CONFLUENCE_TIMEOUT_SECS",
    ];

    fn clear_confluence_vars() {
        for name in CONFLUENCE_VARS {
            unsafe {
                std::env::remove_var(name);
            }
        }
    }

    #[test]
    fn test_confluence_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_confluence_vars();
        unsafe {
            std::env::set_var(
                "MCP_CONFLUENCE_BASE_URL",
                "https://example.atlassian.net/wiki/api/v2",
            );
            std::env::set_var("MCP_CONFLUENCE_EMAIL", "me@example.com");
            std::env::set_var("MCP_CONFLUENCE_API_TOKEN", "token_12345");
            std::env::set_var("MCP_CONFLUENCE_TIMEOUT_SECS", "5");
        }

        let config = ConfluenceConfig::from_env();
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://example.atlassian.net/wiki/api/v2")
        );
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(
            config.credentials(),
            Some(Credentials::basic("me@example.com", "token_12345"))
        );

        clear_confluence_vars();
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_confluence_vars();
        unsafe {
            std::env::set_var("MCP_CONFLUENCE_TIMEOUT_SECS", "soon");
        }

        let config = ConfluenceConfig::from_env();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.resources_url, DEFAULT_RESOURCES_URL);

        clear_confluence_vars();
    }

    #[test]
    fn test_access_token_preferred_over_api_token() {
        let config = ConfluenceConfig {
            access_token: Some("oauth".to_string()),
            email: Some("me@example.com".to_string()),
            api_token: Some("token".to_string()),
            ..ConfluenceConfig::default()
        };
        assert_eq!(config.credentials(), Some(Credentials::bearer("oauth")));
    }

    #[test]
    fn test_incomplete_basic_credentials() {
        let config = ConfluenceConfig {
            email: Some("me@example.com".to_string()),
            ..ConfluenceConfig::default()
        };
        assert_eq!(config.credentials(), None);
    }

    #[test]
    fn test_confluence_config_redacted_in_debug() {
        let config = ConfluenceConfig {
            access_token: Some("super_secret_token".to_string()),
            api_token: Some("super_secret_api_token".to_string()),
            ..ConfluenceConfig::default()
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
    }

    #[test]
    fn test_tools_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TOOLS_READ_ONLY", "true");
            std::env::set_var("MCP_TOOLS_INCLUDE", "get_pages, get_page_by_id,,");
            std::env::set_var("MCP_TOOLS_TAGS", "Page");
        }

        let config = ToolsConfig::from_env();
        assert!(config.read_only);
        assert_eq!(config.include, vec!["get_pages", "get_page_by_id"]);
        assert_eq!(config.tags, vec!["Page"]);

        unsafe {
            std::env::remove_var("MCP_TOOLS_READ_ONLY");
            std::env::remove_var("MCP_TOOLS_INCLUDE");
            std::env::remove_var("MCP_TOOLS_TAGS");
        }
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.name, "confluence-mcp-server");
        assert!(config.confluence.credentials().is_none());
        assert!(!config.tools.read_only);
    }
}
