//! Library layer for DART disclosure search: startup configuration, the
//! corp-master store, input validation, and the two-view session state.
//!
//! Wraps the `opendart_api` client crate; the CLI in `dartsearch_cli` is the
//! only intended consumer.

pub mod config;
pub mod db;
pub mod error;
pub mod session;
pub mod validation;

pub use opendart_api;
pub use opendart_api::types;
pub use opendart_api::{Client, ReportType};

pub use config::AppConfig;
pub use db::{CorpRow, Db, DbError};
pub use error::DartSearchError;
pub use session::{Session, View};
