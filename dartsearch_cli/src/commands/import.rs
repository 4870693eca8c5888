//! The `import` subcommand: loads a corp-code dump into the corp-master
//! table.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dartsearch_lib::{AppConfig, CorpRow, Db};

#[derive(Args)]
pub struct ImportArgs {
    /// Path to a JSON array of corp rows
    /// ({corp_code, corp_name, stock_code, modify_date})
    pub path: PathBuf,
}

pub fn run(args: &ImportArgs, config: &AppConfig) -> Result<()> {
    let raw = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let corps: Vec<CorpRow> =
        serde_json::from_str(&raw).context("corp dump is not a JSON array of corp rows")?;

    let mut db = Db::open(&config.db_path)?;
    db.init()?;
    let imported = db.upsert_corps(&corps)?;

    println!(
        "Imported {} companies into {}",
        imported,
        config.db_path.display()
    );
    Ok(())
}
