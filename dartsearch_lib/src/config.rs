//! Process configuration, read from the environment once at startup.

use std::env;
use std::path::PathBuf;

use crate::error::DartSearchError;

/// Rows per search page when `DART_PAGE_SIZE` is unset.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Immutable startup configuration, passed to collaborators by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenDART service key (`DART_API_KEY`). Only the API-backed commands
    /// need it, so it is resolved lazily through [`AppConfig::api_key`].
    api_key: Option<String>,
    /// Path to the corp-master SQLite file (`DART_DB`, default `dart.db`).
    pub db_path: PathBuf,
    /// Rows per search page (`DART_PAGE_SIZE`, default 20).
    pub page_size: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DartSearchError> {
        let api_key = env::var("DART_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let db_path = env::var("DART_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("dart.db"));

        let page_size = match env::var("DART_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_key,
            db_path,
            page_size,
        })
    }

    /// The OpenDART service key, or a config error telling the user which
    /// variable to set.
    pub fn api_key(&self) -> Result<&str, DartSearchError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| DartSearchError::Config("DART_API_KEY is not set".to_string()))
    }

    #[cfg(test)]
    pub(crate) fn for_tests(api_key: Option<&str>) -> Self {
        Self {
            api_key: api_key.map(str::to_string),
            db_path: PathBuf::from(":memory:"),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_page_size(raw: &str) -> Result<i64, DartSearchError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            DartSearchError::Config(format!(
                "DART_PAGE_SIZE must be a positive integer, got {:?}",
                raw
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_parses_positive_integers() {
        assert_eq!(parse_page_size("20").unwrap(), 20);
        assert_eq!(parse_page_size(" 5 ").unwrap(), 5);
    }

    #[test]
    fn page_size_rejects_garbage_and_nonpositive() {
        assert!(parse_page_size("0").is_err());
        assert!(parse_page_size("-3").is_err());
        assert!(parse_page_size("twenty").is_err());
    }

    #[test]
    fn missing_api_key_errors_at_use_not_load() {
        let config = AppConfig::for_tests(None);
        assert!(matches!(
            config.api_key(),
            Err(DartSearchError::Config(_))
        ));

        let config = AppConfig::for_tests(Some("key"));
        assert_eq!(config.api_key().unwrap(), "key");
    }
}
