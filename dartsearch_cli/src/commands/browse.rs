//! The `browse` subcommand: an interactive two-view session over stdin.
//!
//! The search view pages through the corp-master table and looks up company
//! metadata; the financials view shows the statement lines for the corp code
//! last looked up. View routing and its guards live in
//! `dartsearch_lib::session`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use dartsearch_lib::validation;
use dartsearch_lib::{AppConfig, Client, Db, ReportType, Session, View};

use crate::commands::{company, financials};
use crate::output::{print_search_table, OutputFormat};

pub async fn run(config: &AppConfig) -> Result<()> {
    let db = match super::open_store(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("failed to open corp-master store: {}", e);
            println!("DB 연결 실패");
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

    let mut session = Session::new();
    let mut current_search: Option<String> = None;

    println!("DART 공시 정보 검색");
    print_search_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        match session.view() {
            View::Search => print!("search> "),
            View::Financials => print!("financials> "),
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (cmd, rest) = match input.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match session.view() {
            View::Search => match cmd {
                "s" => {
                    match validation::sanitize_search(rest) {
                        Ok(name) => {
                            session.reset_page();
                            run_search(&db, config, &session, &name);
                            current_search = Some(name);
                        }
                        Err(_) => println!("회사명을 입력하세요:"),
                    }
                }
                "n" | "p" => {
                    let Some(name) = current_search.as_deref() else {
                        println!("회사명을 입력하세요:");
                        continue;
                    };
                    if cmd == "n" {
                        session.next_page();
                    } else {
                        session.prev_page();
                    }
                    run_search(&db, config, &session, name);
                }
                "c" => match validation::validate_corp_code(rest) {
                    Ok(code) => {
                        session.set_corp_code(&code);
                        company::fetch_and_print(&client, &code, &OutputFormat::Table).await;
                    }
                    Err(_) => {
                        println!("8자리 코드를 맞춰주세요 혹은 정확한 공시코드가 아닙니다")
                    }
                },
                "f" => match session.open_financials() {
                    Ok(()) => {
                        println!("재무제표 정보");
                        if let Some(code) = session.corp_code() {
                            financials::fetch_and_print(
                                &client,
                                code,
                                "2023",
                                ReportType::FirstQuarter,
                                &OutputFormat::Table,
                            )
                            .await;
                        }
                        print_financials_help();
                    }
                    Err(_) => println!("공시번호를 검색해 주세요"),
                },
                "q" => break,
                _ => print_search_help(),
            },
            View::Financials => match cmd {
                "b" => {
                    session.back_to_search();
                    print_search_help();
                }
                "q" => break,
                _ => print_financials_help(),
            },
        }
    }

    Ok(())
}

fn run_search(db: &Db, config: &AppConfig, session: &Session, name: &str) {
    match db.search_companies(name, session.page(), config.page_size) {
        Ok(rows) if rows.is_empty() => println!("회사 검색 불가"),
        Ok(rows) => {
            print_search_table(&rows);
            println!("페이지 {}", session.page());
        }
        Err(e) => println!("쿼리 에러: {}", e),
    }
}

fn print_search_help() {
    println!("s <회사명>  회사명 검색");
    println!("n / p       다음 / 이전 페이지");
    println!("c <공시번호> 기업개황 조회");
    println!("f           재무제표 보기");
    println!("q           종료");
}

fn print_financials_help() {
    println!("b  검색으로 돌아가기");
    println!("q  종료");
}
