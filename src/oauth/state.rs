//! Anti-CSRF state tokens for the login flow.

use rand::Rng;

use crate::error::{oauth_error, Error, OAuthErrorKind};

/// Generate a cryptographically random state token.
///
/// 32 random bytes, hex encoded.
pub fn generate_state() -> String {
    let random_bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(random_bytes)
}

/// Require the state returned on callback to be byte-identical to the
/// stored one.
///
/// A missing stored value fails the same way a mismatch does: there is
/// no login attempt the callback can be correlated with.
pub(crate) fn validate_state(returned: &str, stored: Option<&str>) -> Result<(), Error> {
    match stored {
        Some(stored) if stored == returned => Ok(()),
        _ => Err(oauth_error(
            OAuthErrorKind::InvalidState,
            "invalid state returned - possible hijacking attempt",
        )),
    }
}
