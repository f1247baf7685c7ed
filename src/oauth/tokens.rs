//! Token endpoint response and the normalized character identity record.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::Deserialize;

/// Token response from the SSO token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
    pub token_type: String,
}

/// Normalized result of a successful login callback.
///
/// Ownership passes to the caller; nothing is persisted by this crate.
#[derive(Debug, Clone)]
pub struct CharacterAuth {
    /// Character ID, the `sub` claim with its provider prefix stripped.
    pub character_id: String,
    /// Character display name.
    pub character_name: String,
    /// Granted scopes, space joined.
    pub scopes: String,
    /// Always `"Character"` for character tokens.
    pub token_type: String,
    /// Hash identifying the account that owns the character. Changes
    /// when the character is transferred to another account.
    pub owner_hash: String,
    /// Bearer token for ESI calls.
    pub access_token: SecretString,
    /// Long-lived credential for obtaining new access tokens.
    pub refresh_token: Option<SecretString>,
    /// When the access token expires.
    pub expires_at: DateTime<Utc>,
}

impl CharacterAuth {
    /// Check if the access token is expired or about to expire soon.
    ///
    /// Returns true if the token expires within 1 minute.
    pub fn is_expired(&self) -> bool {
        let buffer = chrono::Duration::minutes(1);
        self.expires_at <= Utc::now() + buffer
    }
}
