//! Client configuration for the Plotline SDK.

use url::Url;

/// Configuration for the Plotline API client.
///
/// The base URL is injected here at construction; nothing in the SDK reads
/// it from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to.
    pub(crate) base_url: Url,
    /// User agent string.
    pub(crate) user_agent: String,
    /// Headers applied to every request.
    pub(crate) default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Default backend address (the development server).
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000";
    /// Default user agent.
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!("plotline-sdk-rust/", env!("CARGO_PKG_VERSION"));

    /// Create a new configuration with default values.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
            default_headers: Vec::new(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Get the headers applied to every request.
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Url::parse(Self::DEFAULT_BASE_URL).expect("valid default URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:5000/");
        assert!(config.default_headers().is_empty());
        assert!(config.user_agent().starts_with("plotline-sdk-rust/"));
    }

    #[test]
    fn test_config_with_custom_url() {
        let url = Url::parse("https://write.example.com").unwrap();
        let config = ClientConfig::new(url.clone());
        assert_eq!(config.base_url(), &url);
    }
}
