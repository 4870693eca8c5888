//! The `company` subcommand: company metadata for one corp code.

use anyhow::Result;
use clap::Args;
use dartsearch_lib::opendart_api::Error as ApiError;
use dartsearch_lib::validation;
use dartsearch_lib::{AppConfig, Client};

use crate::output::{print_json, print_profile_table, OutputFormat};

#[derive(Args)]
pub struct CompanyArgs {
    /// Eight-digit DART corp code (e.g. 00126380)
    pub corp_code: String,
}

pub async fn run(args: &CompanyArgs, config: &AppConfig, format: &OutputFormat) -> Result<()> {
    let corp_code = match validation::validate_corp_code(&args.corp_code) {
        Ok(code) => code,
        Err(_) => {
            println!("8자리 코드를 맞춰주세요 혹은 정확한 공시코드가 아닙니다");
            return Ok(());
        }
    };

    let client = match super::api_client(config) {
        Ok(client) => client,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    fetch_and_print(&client, &corp_code, format).await;
    Ok(())
}

/// Shared by the one-shot subcommand and the browse view.
pub(crate) async fn fetch_and_print(client: &Client, corp_code: &str, format: &OutputFormat) {
    match client.company_profile(corp_code).await {
        Ok(profile) => match format {
            OutputFormat::Table => print_profile_table(&profile),
            OutputFormat::Json => print_json(&profile),
        },
        // An unknown code answers in-band with "no data"; a payload that
        // lost fields means the code resolved to something unusable.
        Err(ApiError::NoData { .. }) | Err(ApiError::UnexpectedShape { .. }) => {
            println!("8자리 코드를 맞춰주세요 혹은 정확한 공시코드가 아닙니다");
        }
        Err(ApiError::Api { status, message }) => {
            println!("에러 {}: {}", status, message);
        }
        Err(e) => {
            tracing::error!("company lookup failed: {}", e);
            println!("에러가 발생했습니다");
        }
    }
}
