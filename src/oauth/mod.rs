//! OAuth 2.0 Authorization Code flow for EVE Online SSO.

mod claims;
mod client;
mod state;
mod tokens;

pub use claims::CharacterClaims;
pub use client::{Method, SsoClient};
pub use state::generate_state;
pub use tokens::{CharacterAuth, TokenResponse};
