//! Error types for the library layer.

use std::fmt;

use crate::db::DbError;

/// Errors produced by the library layer, wrapping the API client and store
/// errors and adding configuration and input validation failures.
#[derive(Debug)]
pub enum DartSearchError {
    /// An error from the OpenDART client.
    Api(opendart_api::Error),
    /// An error from the corp-master store.
    Db(DbError),
    /// Startup configuration is missing or malformed.
    Config(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for DartSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Db(e) => write!(f, "store error: {}", e),
            Self::Config(msg) => write!(f, "config error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DartSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Db(e) => Some(e),
            _ => None,
        }
    }
}

impl From<opendart_api::Error> for DartSearchError {
    fn from(e: opendart_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<DbError> for DartSearchError {
    fn from(e: DbError) -> Self {
        Self::Db(e)
    }
}
