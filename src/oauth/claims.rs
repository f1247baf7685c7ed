//! Identity claims embedded in the SSO access token.
//!
//! The access token is a JWT whose payload carries the character
//! identity. The payload is decoded, not verified: the token came over
//! TLS directly from the token endpoint, and this crate does not define
//! the wire format it consumes.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Deserializer};

use crate::error::{oauth_error, Error, ErrorKind, OAuthErrorKind};

/// Prefix the SSO puts in front of the character ID in the `sub` claim.
const SUB_PREFIX: &str = "CHARACTER:EVE:";

/// Claims decoded from the access token payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterClaims {
    /// Subject, e.g. `CHARACTER:EVE:268946627`.
    pub sub: String,
    /// Character display name.
    pub name: String,
    /// Granted scopes. The SSO sends a bare string when a single scope
    /// was granted and an array otherwise.
    #[serde(default, deserialize_with = "scope_list")]
    pub scp: Vec<String>,
    /// Hash identifying the owning account.
    pub owner: String,
}

impl CharacterClaims {
    /// Decode the claims from the payload segment of an access token.
    pub fn from_access_token(access_token: &str) -> Result<Self, Error> {
        let payload = access_token.split('.').nth(1).ok_or_else(|| {
            oauth_error(
                OAuthErrorKind::InvalidResponse,
                "access token is not a JWT",
            )
        })?;

        let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::OAuth(OAuthErrorKind::InvalidResponse),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::OAuth(OAuthErrorKind::InvalidResponse),
        })
    }

    /// Character ID with the `CHARACTER:EVE:` prefix stripped.
    pub fn character_id(&self) -> &str {
        self.sub.strip_prefix(SUB_PREFIX).unwrap_or(&self.sub)
    }
}

fn scope_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scp {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Scp::deserialize(deserializer)? {
        Scp::One(scope) => vec![scope],
        Scp::Many(scopes) => scopes,
    })
}

/// Build an unsigned token whose payload carries the given claims.
#[cfg(test)]
pub(crate) fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{}.{}.signature", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_claims_round_trip() {
        let token = token_with_payload(&serde_json::json!({
            "sub": "CHARACTER:EVE:268946627",
            "name": "Squizz Caphinator",
            "scp": ["esi-wallet.read_character_wallet.v1", "esi-skills.read_skills.v1"],
            "owner": "8PmzCeTKb4VFUDrHLc/AeZXDSWM="
        }));

        let claims = CharacterClaims::from_access_token(&token).unwrap();
        assert_eq!(claims.character_id(), "268946627");
        assert_eq!(claims.name, "Squizz Caphinator");
        assert_eq!(
            claims.scp,
            vec![
                "esi-wallet.read_character_wallet.v1",
                "esi-skills.read_skills.v1"
            ]
        );
        assert_eq!(claims.owner, "8PmzCeTKb4VFUDrHLc/AeZXDSWM=");
    }

    #[test]
    fn test_single_scope_sent_as_string() {
        let token = token_with_payload(&serde_json::json!({
            "sub": "CHARACTER:EVE:1",
            "name": "Capsuleer",
            "scp": "esi-wallet.read_character_wallet.v1",
            "owner": "hash"
        }));

        let claims = CharacterClaims::from_access_token(&token).unwrap();
        assert_eq!(claims.scp, vec!["esi-wallet.read_character_wallet.v1"]);
    }

    #[test]
    fn test_missing_scp_means_no_scopes() {
        let token = token_with_payload(&serde_json::json!({
            "sub": "CHARACTER:EVE:1",
            "name": "Capsuleer",
            "owner": "hash"
        }));

        let claims = CharacterClaims::from_access_token(&token).unwrap();
        assert!(claims.scp.is_empty());
    }

    #[test]
    fn test_unprefixed_subject_kept_as_is() {
        let token = token_with_payload(&serde_json::json!({
            "sub": "268946627",
            "name": "Capsuleer",
            "owner": "hash"
        }));

        let claims = CharacterClaims::from_access_token(&token).unwrap();
        assert_eq!(claims.character_id(), "268946627");
    }

    #[test]
    fn test_non_jwt_token_rejected() {
        let err = CharacterClaims::from_access_token("opaque-token").unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::OAuth(OAuthErrorKind::InvalidResponse)
        );
    }

    #[test]
    fn test_garbage_payload_rejected() {
        let err = CharacterClaims::from_access_token("a.!!!not-base64!!!.c").unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::OAuth(OAuthErrorKind::InvalidResponse)
        );
    }
}
