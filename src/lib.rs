//! # eve-sso
//!
//! OAuth 2.0 Authorization Code flow client for EVE Online SSO:
//! - Login URL generation with anti-CSRF state stored in caller-provided
//!   session storage
//! - Callback handling: state validation, code exchange, identity claims
//!   decoded from the returned access token
//! - Access token refresh
//! - Generic authenticated calls (bearer or basic auth) to ESI
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eve_sso::{MemorySession, SsoClient, SsoConfig};
//! use secrecy::SecretString;
//!
//! let config = SsoConfig::new(
//!     "client_id",
//!     SecretString::from("secret_key".to_string()),
//!     "https://example.com/callback",
//!     vec!["esi-wallet.read_character_wallet.v1".to_string()],
//! )?;
//! let client = SsoClient::new(config)?;
//!
//! let session = MemorySession::new();
//! let url = client.login_url(&session).await?;
//! // ... redirect the user to `url`, then on callback:
//! let character = client.handle_callback(&code, &state, &session).await?;
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod oauth;
pub mod session;

// Re-export commonly used types
pub use config::{SsoConfig, SsoUrls};
pub use error::{Error, ErrorKind};
pub use oauth::{CharacterAuth, CharacterClaims, Method, SsoClient, TokenResponse};
pub use session::{MemorySession, SessionStore};
