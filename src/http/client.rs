//! HTTP client construction with mandatory TLS verification.

use std::time::Duration;

use crate::error::Error;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string. The SSO asks third-party applications to send
    /// an identifying user agent; the registered callback URL is a
    /// common choice.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("eve-sso/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build a `reqwest::Client` from the configuration.
///
/// TLS peer and hostname verification are always on; rustls is used as
/// the TLS backend.
pub fn build_client(config: &HttpClientConfig) -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("eve-sso/"));
    }

    #[test]
    fn test_build_client() {
        let config = HttpClientConfig::default();
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn test_build_client_with_custom_user_agent() {
        let config = HttpClientConfig {
            user_agent: "https://example.com/callback".to_string(),
            ..HttpClientConfig::default()
        };
        assert!(build_client(&config).is_ok());
    }
}
