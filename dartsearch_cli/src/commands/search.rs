//! The `search` subcommand: paginated company-name search over the
//! corp-master table.

use anyhow::Result;
use clap::Args;
use dartsearch_lib::validation;
use dartsearch_lib::AppConfig;

use crate::output::{print_json, print_search_table, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Company-name substring to match (e.g. 삼성)
    pub name: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Rows per page (defaults to DART_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<i64>,
}

pub fn run(args: &SearchArgs, config: &AppConfig, format: &OutputFormat) -> Result<()> {
    let name = match validation::sanitize_search(&args.name) {
        Ok(name) => name,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };
    let page_size = args.page_size.unwrap_or(config.page_size);

    let db = match super::open_store(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("failed to open corp-master store: {}", e);
            println!("DB 연결 실패");
            return Ok(());
        }
    };

    let rows = match db.search_companies(&name, args.page, page_size) {
        Ok(rows) => rows,
        Err(e) => {
            println!("쿼리 에러: {}", e);
            return Ok(());
        }
    };

    if rows.is_empty() {
        println!("회사 검색 불가");
        return Ok(());
    }

    match db.count_companies(&name) {
        Ok(total) => eprintln!("Page {} ({} matches)", args.page, total),
        Err(e) => tracing::warn!("count query failed: {}", e),
    }

    match format {
        OutputFormat::Table => print_search_table(&rows),
        OutputFormat::Json => print_json(&rows),
    }

    Ok(())
}
