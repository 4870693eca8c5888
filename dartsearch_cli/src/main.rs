mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dartsearch_lib::AppConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "dartsearch")]
#[command(about = "Search Korean corporate disclosures and OpenDART filings")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the corp-master table by company name
    Search(commands::search::SearchArgs),
    /// Look up company metadata for a corp code
    Company(commands::company::CompanyArgs),
    /// Fetch single-account financial statements for a corp code
    Financials(commands::financials::FinancialsArgs),
    /// Load a corp-code dump into the corp-master table
    Import(commands::import::ImportArgs),
    /// Interactive browser: company search and financial statements
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dartsearch=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let config = AppConfig::from_env()?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &config, &format)?,
        Commands::Company(args) => commands::company::run(args, &config, &format).await?,
        Commands::Financials(args) => commands::financials::run(args, &config, &format).await?,
        Commands::Import(args) => commands::import::run(args, &config)?,
        Commands::Browse => commands::browse::run(&config).await?,
    }

    Ok(())
}
