//! Client configuration

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the booking API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authenticated endpoints
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from `ROOST_API_*` environment variables
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ROOST_API_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: std::env::var("ROOST_API_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
            timeout: std::env::var("ROOST_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("https://api.roost.example")
            .with_token("tok-abc")
            .with_timeout(5);
        assert_eq!(config.base_url, "https://api.roost.example");
        assert_eq!(config.token.as_deref(), Some("tok-abc"));
        assert_eq!(config.timeout, 5);
    }

    // Single test mutating the ROOST_API_* variables; env access is
    // process-wide, so keep every phase in here.
    #[test]
    fn test_from_env() {
        unsafe {
            std::env::set_var("ROOST_API_URL", "https://api.roost.example");
            std::env::set_var("ROOST_API_TIMEOUT_SECS", "5");
            std::env::set_var("ROOST_API_TOKEN", "tok-env");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "https://api.roost.example");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.token.as_deref(), Some("tok-env"));

        unsafe {
            std::env::set_var("ROOST_API_TIMEOUT_SECS", "not a number");
            std::env::set_var("ROOST_API_TOKEN", "");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.token.is_none());

        unsafe {
            std::env::remove_var("ROOST_API_URL");
            std::env::remove_var("ROOST_API_TIMEOUT_SECS");
            std::env::remove_var("ROOST_API_TOKEN");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
