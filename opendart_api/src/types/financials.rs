//! Single-account financial statements: `/api/fnlttSinglAcnt.json`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Response envelope for the single-account endpoint.
///
/// On success the `list` holds the line items; DART omits it entirely on
/// error responses, and an empty list is a valid "nothing filed" answer.
#[derive(Serialize, Deserialize, Debug)]
pub struct FnlttResponse {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub list: Vec<FnlttAccount>,
}

/// One financial-statement line item (one account, one statement, one
/// reporting period).
///
/// DART returns the consolidated (`CFS`) block first, then the separate
/// (`OFS`) block. Amount fields are pre-formatted strings with thousands
/// separators; they are displayed, never computed on.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FnlttAccount {
    /// Receipt number of the filing this line came from.
    pub rcept_no: String,
    /// Report code the line was filed under.
    pub reprt_code: String,
    /// Business year.
    pub bsns_year: String,
    /// Corp code of the filer.
    pub corp_code: String,
    /// Ticker, empty for unlisted filers.
    #[serde(default)]
    pub stock_code: String,
    /// Statement scope: `CFS` (consolidated) or `OFS` (separate).
    pub fs_div: String,
    /// Human-readable scope name.
    pub fs_nm: String,
    /// Statement kind code: `BS` or `IS`.
    pub sj_div: String,
    /// Human-readable statement name.
    pub sj_nm: String,
    /// Account caption, e.g. 유동자산.
    pub account_nm: String,
    /// Current-term caption, e.g. 제 55 기 1분기말.
    pub thstrm_nm: String,
    /// Current-term date range.
    #[serde(default)]
    pub thstrm_dt: String,
    /// Current-term amount.
    pub thstrm_amount: String,
    /// Current-term accumulated amount (half/quarter income statements).
    #[serde(default)]
    pub thstrm_add_amount: String,
    /// Prior-term caption.
    #[serde(default)]
    pub frmtrm_nm: String,
    /// Prior-term date range.
    #[serde(default)]
    pub frmtrm_dt: String,
    /// Prior-term amount.
    #[serde(default)]
    pub frmtrm_amount: String,
    /// Term before the prior term: caption.
    #[serde(default)]
    pub bfefrmtrm_nm: String,
    /// Term before the prior term: date range.
    #[serde(default)]
    pub bfefrmtrm_dt: String,
    /// Term before the prior term: amount.
    #[serde(default)]
    pub bfefrmtrm_amount: String,
    /// Display ordinal within the statement.
    #[serde(default)]
    pub ord: String,
    /// Reporting currency.
    #[serde(default)]
    pub currency: String,
}

impl FnlttAccount {
    /// `fs_div` value for the separate (stand-alone) statements.
    pub const SEPARATE: &'static str = "OFS";
    /// `fs_div` value for the consolidated statements.
    pub const CONSOLIDATED: &'static str = "CFS";

    /// True for lines of the separate statements, the block shown by the
    /// financial-statement view.
    pub fn is_separate(&self) -> bool {
        self.fs_div == Self::SEPARATE
    }
}

/// The four periodic report kinds DART accepts as `reprt_code`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportType {
    /// 1분기보고서.
    #[default]
    FirstQuarter,
    /// 반기보고서.
    HalfYear,
    /// 3분기보고서.
    ThirdQuarter,
    /// 사업보고서.
    Annual,
}

impl ReportType {
    /// The wire value for `reprt_code`.
    pub fn code(self) -> &'static str {
        match self {
            ReportType::FirstQuarter => "11013",
            ReportType::HalfYear => "11012",
            ReportType::ThirdQuarter => "11014",
            ReportType::Annual => "11011",
        }
    }
}

impl FromStr for ReportType {
    type Err = ();

    /// Accepts the short names and the raw codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "q1" | "11013" => Ok(ReportType::FirstQuarter),
            "half" | "11012" => Ok(ReportType::HalfYear),
            "q3" | "11014" => Ok(ReportType::ThirdQuarter),
            "annual" | "11011" => Ok(ReportType::Annual),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_type_codes() {
        assert_eq!(ReportType::FirstQuarter.code(), "11013");
        assert_eq!(ReportType::HalfYear.code(), "11012");
        assert_eq!(ReportType::ThirdQuarter.code(), "11014");
        assert_eq!(ReportType::Annual.code(), "11011");
    }

    #[test]
    fn report_type_parses_names_and_codes() {
        assert_eq!("q1".parse::<ReportType>(), Ok(ReportType::FirstQuarter));
        assert_eq!("11011".parse::<ReportType>(), Ok(ReportType::Annual));
        assert_eq!("half".parse::<ReportType>(), Ok(ReportType::HalfYear));
        assert!("yearly".parse::<ReportType>().is_err());
    }

    #[test]
    fn default_report_is_first_quarter() {
        assert_eq!(ReportType::default(), ReportType::FirstQuarter);
    }
}
