//! The SSO client: login URLs, callback handling, token refresh, and
//! authenticated calls.

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::claims::CharacterClaims;
use super::state::{generate_state, validate_state};
use super::tokens::{CharacterAuth, TokenResponse};
use crate::config::SsoConfig;
use crate::error::{oauth_error, Error, ErrorKind, OAuthErrorKind};
use crate::http::{build_client, HttpClientConfig};
use crate::session::{SessionStore, STATE_KEY};

/// HTTP verb for [`SsoClient::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET with url-encoded query parameters.
    Get,
    /// POST with a url-encoded form body.
    Post,
    /// POST with a JSON body.
    PostJson,
    /// PUT with a JSON body.
    Put,
    /// DELETE with a JSON body.
    Delete,
}

impl Method {
    /// Get the verb string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::PostJson => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// OAuth 2.0 Authorization Code flow client for EVE Online SSO.
///
/// The flow is linear: generate a login URL (which records an anti-CSRF
/// state in the caller's session), redirect the user, then hand the
/// callback's code and state to [`SsoClient::handle_callback`]. Terminal
/// on success or hard failure; no retries.
pub struct SsoClient {
    config: SsoConfig,
    http: reqwest::Client,
}

impl SsoClient {
    /// Create a client with the default HTTP configuration.
    pub fn new(config: SsoConfig) -> Result<Self, Error> {
        Self::with_http_config(config, HttpClientConfig::default())
    }

    /// Create a client with a custom HTTP configuration.
    pub fn with_http_config(
        config: SsoConfig,
        http_config: HttpClientConfig,
    ) -> Result<Self, Error> {
        let http = build_client(&http_config)?;
        Ok(Self { config, http })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &SsoConfig {
        &self.config
    }

    /// Generate the authorization URL for user login.
    ///
    /// A fresh state token is generated and persisted into `session`
    /// before it is embedded in the URL; the two values are always
    /// identical.
    pub async fn login_url(&self, session: &dyn SessionStore) -> Result<String, Error> {
        self.login_url_with_state(&generate_state(), session).await
    }

    /// Generate the authorization URL with a caller-supplied state.
    pub async fn login_url_with_state(
        &self,
        state: &str,
        session: &dyn SessionStore,
    ) -> Result<String, Error> {
        session.set(STATE_KEY, state).await?;

        Ok(format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&state={}",
            self.config.urls().authorize_url,
            urlencoding::encode(self.config.client_id()),
            urlencoding::encode(self.config.callback_url()),
            urlencoding::encode(&self.config.scope_string()),
            urlencoding::encode(state),
        ))
    }

    /// Handle the OAuth callback: validate state, exchange the code for
    /// tokens, and decode the character identity from the access token.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code from the callback query string
    /// * `state` - State parameter from the callback query string
    /// * `session` - The session the state was stored in at login time
    pub async fn handle_callback(
        &self,
        code: &str,
        state: &str,
        session: &dyn SessionStore,
    ) -> Result<CharacterAuth, Error> {
        let stored = session.get(STATE_KEY).await?;
        validate_state(state, stored.as_deref())?;

        debug!("exchanging authorization code for tokens");

        let response = self
            .token_request(&[("grant_type", "authorization_code"), ("code", code)])
            .send()
            .await
            .map_err(|e| {
                warn!("token exchange request failed: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::OAuth(OAuthErrorKind::Network),
                }
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("token endpoint returned an error: {}", error_text);
            return Err(oauth_error(
                OAuthErrorKind::TokenExchangeFailed,
                &error_text,
            ));
        }

        let tokens: TokenResponse = response.json().await.map_err(|e| {
            warn!("failed to parse token response: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::OAuth(OAuthErrorKind::InvalidResponse),
            }
        })?;

        let expires_at = Utc::now() + chrono::Duration::seconds(tokens.expires_in);
        let claims = CharacterClaims::from_access_token(&tokens.access_token)?;

        info!("authenticated character {}", claims.name);

        Ok(CharacterAuth {
            character_id: claims.character_id().to_string(),
            character_name: claims.name,
            scopes: claims.scp.join(" "),
            token_type: "Character".to_string(),
            owner_hash: claims.owner,
            access_token: SecretString::from(tokens.access_token),
            refresh_token: tokens.refresh_token.map(SecretString::from),
            expires_at,
        })
    }

    /// Obtain a new access token from a refresh token.
    ///
    /// The response body is parsed loosely; a body without an
    /// `access_token` field fails with the raw body in the error for
    /// diagnostics.
    pub async fn get_access_token(&self, refresh_token: &str) -> Result<SecretString, Error> {
        debug!("refreshing access token");

        let response = self
            .token_request(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("token refresh request failed: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::OAuth(OAuthErrorKind::Network),
                }
            })?;

        let body = response.text().await.map_err(Error::from)?;
        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::OAuth(OAuthErrorKind::TokenRefreshFailed),
        })?;

        match value.get("access_token").and_then(|v| v.as_str()) {
            Some(token) => Ok(SecretString::from(token.to_string())),
            None => {
                warn!("token refresh response missing access_token");
                Err(oauth_error(
                    OAuthErrorKind::TokenRefreshFailed,
                    &format!("unexpected value returned from call: {}", body),
                ))
            }
        }
    }

    /// Make an authenticated HTTP call and return the raw response body.
    ///
    /// With an access token, the request carries a bearer Authorization
    /// header; without one it falls back to Basic auth with the client
    /// credentials. GET parameters go in the query string, POST
    /// parameters in a url-encoded form body, and the write verbs
    /// JSON-encode `params` as the body. Non-2xx bodies are returned as
    /// is; only transport failures raise errors.
    pub async fn call<P: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        params: &P,
        access_token: Option<&str>,
    ) -> Result<String, Error> {
        debug!("calling {} {}", method.as_str(), url);

        let request = match method {
            Method::Get => self.http.get(url).query(params),
            Method::Post => self.http.post(url).form(params),
            Method::PostJson => self.http.post(url).json(params),
            Method::Put => self.http.put(url).json(params),
            Method::Delete => self.http.delete(url).json(params),
        };

        let request = match access_token {
            Some(token) => request.bearer_auth(token),
            None => request.basic_auth(
                self.config.client_id(),
                Some(self.config.client_secret().expose_secret()),
            ),
        };

        let response = request.send().await.map_err(|e| {
            warn!("request to {} failed: {:?}", url, e);
            Error::from(e)
        })?;

        response.text().await.map_err(Error::from)
    }

    /// Server-to-server POST to the token endpoint with Basic auth.
    fn token_request(&self, form: &[(&str, &str)]) -> reqwest::RequestBuilder {
        self.http
            .post(&self.config.urls().token_url)
            .basic_auth(
                self.config.client_id(),
                Some(self.config.client_secret().expose_secret()),
            )
            .form(form)
    }
}
