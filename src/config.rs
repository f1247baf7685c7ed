//! Client configuration for the EVE Online SSO.

use secrecy::SecretString;
use url::Url;

use crate::error::{config_error, ConfigErrorKind, Error};

/// Endpoint URLs for the SSO, overridable for tests.
#[derive(Debug, Clone)]
pub struct SsoUrls {
    /// Authorization endpoint the user's browser is redirected to.
    pub authorize_url: String,
    /// Token endpoint for server-to-server POSTs.
    pub token_url: String,
}

impl Default for SsoUrls {
    fn default() -> Self {
        Self {
            authorize_url: "https://login.eveonline.com/v2/oauth/authorize".to_string(),
            token_url: "https://login.eveonline.com/v2/oauth/token".to_string(),
        }
    }
}

/// Immutable configuration for an SSO application.
///
/// Holds the client credentials issued by the EVE developer portal, the
/// registered callback URL, and the ESI scopes to request at login.
#[derive(Debug, Clone)]
pub struct SsoConfig {
    client_id: String,
    client_secret: SecretString,
    callback_url: String,
    scopes: Vec<String>,
    urls: SsoUrls,
}

impl SsoConfig {
    /// Create a new configuration against the production SSO endpoints.
    ///
    /// # Arguments
    ///
    /// * `client_id` - Application client ID
    /// * `client_secret` - Application secret key (stored securely)
    /// * `callback_url` - Registered OAuth callback URL
    /// * `scopes` - ESI scopes to request
    pub fn new(
        client_id: &str,
        client_secret: SecretString,
        callback_url: &str,
        scopes: Vec<String>,
    ) -> Result<Self, Error> {
        Url::parse(callback_url).map_err(|e| {
            config_error(
                ConfigErrorKind::InvalidCallbackUrl,
                &format!("invalid callback URL {}: {}", callback_url, e),
            )
        })?;

        Ok(Self {
            client_id: client_id.to_string(),
            client_secret,
            callback_url: callback_url.to_string(),
            scopes,
            urls: SsoUrls::default(),
        })
    }

    /// Override the SSO endpoint URLs.
    pub fn with_urls(mut self, urls: SsoUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Get the application client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get a reference to the application secret key.
    pub fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }

    /// Get the registered callback URL.
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Get the requested scopes.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Requested scopes as the space-joined `scope` parameter value.
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }

    /// Get the endpoint URLs.
    pub fn urls(&self) -> &SsoUrls {
        &self.urls
    }
}
