//! The `financials` subcommand: single-account statement lines for one
//! corp code, business year, and report kind.

use anyhow::Result;
use clap::Args;
use dartsearch_lib::opendart_api::Error as ApiError;
use dartsearch_lib::validation;
use dartsearch_lib::{AppConfig, Client, ReportType};

use crate::output::{print_fnltt_table, print_json, OutputFormat};

#[derive(Args)]
pub struct FinancialsArgs {
    /// Eight-digit DART corp code (e.g. 00126380)
    pub corp_code: String,

    /// Business year (YYYY)
    #[arg(long, default_value = "2023")]
    pub year: String,

    /// Report kind: q1, half, q3, annual, or a raw reprt_code
    #[arg(long, default_value = "q1")]
    pub report: String,
}

pub async fn run(args: &FinancialsArgs, config: &AppConfig, format: &OutputFormat) -> Result<()> {
    let corp_code = match validation::validate_corp_code(&args.corp_code) {
        Ok(code) => code,
        Err(_) => {
            println!("8자리 코드를 맞춰주세요 혹은 정확한 공시코드가 아닙니다");
            return Ok(());
        }
    };
    let year = match validation::validate_bsns_year(&args.year) {
        Ok(year) => year,
        Err(_) => {
            println!("사업연도는 4자리 연도여야 합니다 (예: 2023)");
            return Ok(());
        }
    };
    let report = match args.report.parse::<ReportType>() {
        Ok(report) => report,
        Err(_) => {
            println!("보고서 코드는 q1, half, q3, annual 또는 11011~11014 입니다");
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

    fetch_and_print(&client, &corp_code, &year, report, format).await;
    Ok(())
}

/// Shared by the one-shot subcommand and the browse view.
pub(crate) async fn fetch_and_print(
    client: &Client,
    corp_code: &str,
    year: &str,
    report: ReportType,
    format: &OutputFormat,
) {
    match client.single_account_financials(corp_code, year, report).await {
        Ok(accounts) => {
            let separate: Vec<_> = accounts.iter().filter(|a| a.is_separate()).collect();
            if separate.is_empty() {
                println!("No data available");
            } else {
                match format {
                    OutputFormat::Table => print_fnltt_table(&separate),
                    OutputFormat::Json => print_json(&separate),
                }
            }
        }
        Err(ApiError::NoData { message, .. }) => {
            tracing::info!("DART: {}", message);
            println!("재무제표 혹은 파일이 검색되지 않습니다");
        }
        Err(ApiError::Api { status, message }) => {
            println!("에러 {}: {}", status, message);
        }
        Err(e) => {
            tracing::error!("financials fetch failed: {}", e);
            println!("에러: 데이터를 불러올 수 없습니다");
        }
    }
}
