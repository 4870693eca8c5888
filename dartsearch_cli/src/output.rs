use dartsearch_lib::types::{CompanyProfile, FnlttAccount};
use dartsearch_lib::CorpRow;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "공시번호")]
    corp_code: String,
    #[tabled(rename = "기업명")]
    corp_name: String,
    #[tabled(rename = "종목코드")]
    stock_code: String,
    #[tabled(rename = "최종수정일자")]
    modify_date: String,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "공시 정보")]
    field: String,
    #[tabled(rename = "값")]
    value: String,
}

#[derive(Tabled)]
struct FnlttRow {
    #[tabled(rename = "재무제표")]
    sj_nm: String,
    #[tabled(rename = "계정명")]
    account_nm: String,
    #[tabled(rename = "당기명")]
    thstrm_nm: String,
    #[tabled(rename = "당기금액")]
    thstrm_amount: String,
    #[tabled(rename = "전기금액")]
    frmtrm_amount: String,
    #[tabled(rename = "전전기금액")]
    bfefrmtrm_amount: String,
    #[tabled(rename = "통화")]
    currency: String,
}

// -- Row builders --

fn build_search_rows(corps: &[CorpRow]) -> Vec<SearchRow> {
    corps
        .iter()
        .map(|c| SearchRow {
            corp_code: c.corp_code.clone(),
            corp_name: c.corp_name.clone(),
            stock_code: c.stock_code.clone(),
            modify_date: c.modify_date.clone(),
        })
        .collect()
}

fn build_profile_rows(profile: &CompanyProfile) -> Vec<ProfileRow> {
    profile
        .labeled_fields()
        .into_iter()
        .map(|(field, value)| ProfileRow {
            field: field.to_string(),
            value: value.to_string(),
        })
        .collect()
}

fn build_fnltt_rows(accounts: &[&FnlttAccount]) -> Vec<FnlttRow> {
    accounts
        .iter()
        .map(|a| FnlttRow {
            sj_nm: a.sj_nm.clone(),
            account_nm: a.account_nm.clone(),
            thstrm_nm: a.thstrm_nm.clone(),
            thstrm_amount: a.thstrm_amount.clone(),
            frmtrm_amount: a.frmtrm_amount.clone(),
            bfefrmtrm_amount: a.bfefrmtrm_amount.clone(),
            currency: a.currency.clone(),
        })
        .collect()
}

// -- Table output --

pub fn print_search_table(corps: &[CorpRow]) {
    println!("{}", Table::new(build_search_rows(corps)));
}

pub fn print_profile_table(profile: &CompanyProfile) {
    println!("{}", Table::new(build_profile_rows(profile)));
}

pub fn print_fnltt_table(accounts: &[&FnlttAccount]) {
    println!("{}", Table::new(build_fnltt_rows(accounts)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dartsearch_lib::types::FnlttResponse;

    fn load_profile_fixture() -> CompanyProfile {
        let json_str = include_str!("../../opendart_api/tests/fixtures/company.json");
        serde_json::from_str(json_str).unwrap()
    }

    fn load_fnltt_fixture() -> FnlttResponse {
        let json_str = include_str!("../../opendart_api/tests/fixtures/fnltt_single.json");
        serde_json::from_str(json_str).unwrap()
    }

    #[test]
    fn profile_table_is_two_columns_seventeen_rows() {
        let rows = build_profile_rows(&load_profile_fixture());
        assert_eq!(rows.len(), 17);
        assert_eq!(rows[0].field, "공시번호");
        assert_eq!(rows[0].value, "00126380");
        assert_eq!(rows[16].field, "결산월");
    }

    #[test]
    fn fnltt_rows_drop_filing_bookkeeping_columns() {
        let resp = load_fnltt_fixture();
        let separate: Vec<_> = resp.list.iter().filter(|a| a.is_separate()).collect();
        let rows = build_fnltt_rows(&separate);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].account_nm, "유동자산");
        assert_eq!(rows[0].thstrm_amount, "81,708,986,000,000");
        // rcept_no/reprt_code are bookkeeping, not statement content.
        let rendered = Table::new(rows).to_string();
        assert!(!rendered.contains("20230515001615"));
        assert!(!rendered.contains("11013"));
    }

    #[test]
    fn search_rows_keep_store_columns_in_order() {
        let corps = vec![CorpRow {
            corp_code: "00126380".to_string(),
            corp_name: "삼성전자(주)".to_string(),
            stock_code: "005930".to_string(),
            modify_date: "20240102".to_string(),
        }];
        let rendered = Table::new(build_search_rows(&corps)).to_string();
        assert!(rendered.contains("공시번호"));
        assert!(rendered.contains("삼성전자(주)"));
        assert!(rendered.contains("005930"));
    }
}
