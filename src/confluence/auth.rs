//! Credentials for the Confluence API.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// How requests are authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// OAuth 2.0 (3LO) access token, sent as `Bearer`.
    Bearer { access_token: String },

    /// Atlassian account email plus API token, sent as HTTP Basic.
    Basic { email: String, api_token: String },
}

impl Credentials {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self::Bearer {
            access_token: access_token.into(),
        }
    }

    pub fn basic(email: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self::Basic {
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Self::Bearer { access_token } => format!("Bearer {}", access_token),
            Self::Basic { email, api_token } => {
                let encoded = BASE64.encode(format!("{}:{}", email, api_token));
                format!("Basic {}", encoded)
            }
        }
    }

    /// Whether these credentials can call the Atlassian accessible-resources
    /// endpoint to discover the site.
    pub fn can_discover_site(&self) -> bool {
        matches!(self, Self::Bearer { .. })
    }

    /// Short scheme name for logs.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Bearer { .. } => "bearer",
            Self::Basic { .. } => "basic",
        }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("access_token", &"[REDACTED]")
                .finish(),
            Self::Basic { email, .. } => f
                .debug_struct("Basic")
                .field("email", email)
                .field("api_token", &"[REDACTED]")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let creds = Credentials::bearer("abc123");
        assert_eq!(creds.header_value(), "Bearer abc123");
        assert!(creds.can_discover_site());
    }

    #[test]
    fn test_basic_header() {
        let creds = Credentials::basic("me@example.com", "token");
        // base64("me@example.com:token")
        assert_eq!(creds.header_value(), "Basic bWVAZXhhbXBsZS5jb206dG9rZW4=");
        assert!(!creds.can_discover_site());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let bearer = format!("{:?}", Credentials::bearer("super_secret_token"));
        assert!(bearer.contains("REDACTED"));
        assert!(!bearer.contains("super_secret_token"));

        let basic = format!("{:?}", Credentials::basic("me@example.com", "hunter2"));
        assert!(basic.contains("me@example.com"));
        assert!(!basic.contains("hunter2"));
    }
}
