//! In-memory session adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::SessionStore;
use crate::error::Error;

/// Mutex-guarded in-memory session.
///
/// Suitable for CLIs, tests, and single-process tools. Web applications
/// should implement [`SessionStore`] over their framework's session
/// instead.
#[derive(Default)]
pub struct MemorySession {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySession {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let values = self.values.lock().await;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut values = self.values.lock().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
