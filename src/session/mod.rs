//! Session storage capability for the OAuth login flow.
//!
//! The anti-CSRF state issued at login time must survive until the
//! callback arrives, in whatever session mechanism the host application
//! uses. Rather than inspecting the session's concrete type at runtime,
//! the client talks to a small capability trait; adapters exist for each
//! backend.

mod memory;

pub use memory::MemorySession;

use async_trait::async_trait;

use crate::error::Error;

/// Session key under which the anti-CSRF state is stored.
pub const STATE_KEY: &str = "oauth2_state";

/// Trait for storing and retrieving named string values in a session.
///
/// Implementations wrap the host application's session mechanism. A
/// backend failure must surface as an error; the state check cannot be
/// skipped silently.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Retrieve a value by key.
    ///
    /// # Returns
    ///
    /// `Some(value)` if present, `None` if the key was never set.
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store a value under a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}
