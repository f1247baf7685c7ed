//! Error types for the `eve-sso` crate.
//!
//! Follows a root Error struct holding an error kind plus an optional
//! source for error chaining.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for the crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Config(ConfigErrorKind),
    Session(SessionErrorKind),
    OAuth(OAuthErrorKind),
    Http(HttpErrorKind),
}

/// Errors from client configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    InvalidCallbackUrl,
}

/// Errors from session storage operations.
#[derive(Debug, PartialEq)]
pub enum SessionErrorKind {
    Backend,
}

/// Errors from the OAuth flow itself.
#[derive(Debug, PartialEq)]
pub enum OAuthErrorKind {
    /// Returned state does not match the stored one. Security-relevant,
    /// must never be ignored.
    InvalidState,
    TokenExchangeFailed,
    TokenRefreshFailed,
    InvalidResponse,
    Network,
}

/// Errors from HTTP transport.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Config(kind) => write!(f, "config error: {:?}", kind),
            ErrorKind::Session(kind) => write!(f, "session error: {:?}", kind),
            ErrorKind::OAuth(kind) => write!(f, "OAuth error: {:?}", kind),
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

/// Helper function to create config errors.
pub fn config_error(kind: ConfigErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config(kind),
    }
}

/// Helper function to create session errors.
pub fn session_error(kind: SessionErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Session(kind),
    }
}

/// Helper function to create OAuth errors.
pub fn oauth_error(kind: OAuthErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::OAuth(kind),
    }
}
