//! CLI subcommand implementations.

pub mod browse;
pub mod company;
pub mod financials;
pub mod import;
pub mod search;

use dartsearch_lib::{AppConfig, Client, DartSearchError, Db};

/// Opens the corp-master store and makes sure the schema exists.
pub(crate) fn open_store(config: &AppConfig) -> Result<Db, DartSearchError> {
    let db = Db::open(&config.db_path)?;
    db.init()?;
    Ok(db)
}

/// Builds the OpenDART client from the configured service key.
pub(crate) fn api_client(config: &AppConfig) -> Result<Client, DartSearchError> {
    let key = config.api_key()?;
    Client::new(key).map_err(Into::into)
}
