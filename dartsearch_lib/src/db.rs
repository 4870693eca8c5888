//! SQLite storage for the corp-master table.

use std::path::Path;

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("page number must be >= 1 and page size >= 1 (got page {page}, size {page_size})")]
    InvalidPage { page: i64, page_size: i64 },
}

/// One row of the corp-master table, as shipped in the DART corp-code dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpRow {
    pub corp_code: String,
    pub corp_name: String,
    #[serde(default)]
    pub stock_code: String,
    #[serde(default)]
    pub modify_date: String,
}

/// Handle to the corp-master store, opened once at startup and owned for the
/// process lifetime.
pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, DbError> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    pub fn init(&self) -> Result<(), DbError> {
        let schema = include_str!("../../schema/sqlite.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Substring search over company names, one page at a time.
    ///
    /// The match value is bound as a single `%…%` parameter, so SQL
    /// metacharacters in `name` stay literal (LIKE wildcards do pass
    /// through). Rows are ordered by corp code; page boundaries stay put
    /// between calls as long as the table itself does.
    pub fn search_companies(
        &self,
        name: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<CorpRow>, DbError> {
        if page < 1 || page_size < 1 {
            return Err(DbError::InvalidPage { page, page_size });
        }
        let offset = (page - 1) * page_size;

        let mut stmt = self.conn.prepare(
            "SELECT corp_code, corp_name, stock_code, modify_date
             FROM corp_master
             WHERE corp_name LIKE ?1
             ORDER BY corp_code
             LIMIT ?2 OFFSET ?3",
        )?;
        let rows = stmt.query_map(
            params![format!("%{}%", name), page_size, offset],
            |row| {
                Ok(CorpRow {
                    corp_code: row.get(0)?,
                    corp_name: row.get(1)?,
                    stock_code: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    modify_date: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                })
            },
        )?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Total number of companies matching the substring, for paging totals.
    pub fn count_companies(&self, name: &str) -> Result<i64, DbError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM corp_master WHERE corp_name LIKE ?1",
            params![format!("%{}%", name)],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Idempotent bulk load of corp-code dump rows.
    pub fn upsert_corps(&mut self, corps: &[CorpRow]) -> Result<usize, DbError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO corp_master (corp_code, corp_name, stock_code, modify_date)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(corp_code) DO UPDATE SET
                     corp_name = excluded.corp_name,
                     stock_code = excluded.stock_code,
                     modify_date = excluded.modify_date",
            )?;
            for corp in corps {
                stmt.execute(params![
                    corp.corp_code,
                    corp.corp_name,
                    corp.stock_code,
                    corp.modify_date
                ])?;
            }
        }
        tx.commit()?;
        Ok(corps.len())
    }
}
