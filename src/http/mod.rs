//! HTTP client construction.

mod client;

pub use client::{build_client, HttpClientConfig};
