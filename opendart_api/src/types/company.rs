//! Company profile: the flat payload of `/api/company.json`.

use serde::{Deserialize, Serialize};

/// Company metadata for one corp code, exactly as DART returns it.
///
/// Every field is required. DART ships the full set on success and a bare
/// status/message pair on failure, so a missing field here means the corp
/// code never resolved or the upstream schema moved.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CompanyProfile {
    pub status: String,
    pub message: String,

    /// Eight-digit DART corp code.
    pub corp_code: String,
    /// Registered (legal) company name.
    pub corp_name: String,
    /// English company name.
    pub corp_name_eng: String,
    /// Listed short name.
    pub stock_name: String,
    /// Six-digit ticker, empty for unlisted companies.
    pub stock_code: String,
    /// Representative (CEO) name.
    pub ceo_nm: String,
    /// Corporation class: Y (KOSPI), K (KOSDAQ), N (KONEX), E (other).
    pub corp_cls: String,
    /// Corporate registration number.
    pub jurir_no: String,
    /// Business registration number.
    pub bizr_no: String,
    /// Registered address.
    pub adres: String,
    /// Homepage URL.
    pub hm_url: String,
    /// IR homepage URL, often empty.
    pub ir_url: String,
    /// Phone number.
    pub phn_no: String,
    /// Fax number.
    pub fax_no: String,
    /// Industry classification code.
    pub induty_code: String,
    /// Founding date, YYYYMMDD.
    pub est_dt: String,
    /// Fiscal year-end month, MM.
    pub acc_mt: String,
}

impl CompanyProfile {
    /// The profile as `(label, value)` pairs in display order.
    ///
    /// Labels are the fixed Korean captions used by the disclosure site.
    /// The status/message header is not part of the profile and is left out,
    /// so this is always 17 rows.
    pub fn labeled_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("공시번호", self.corp_code.as_str()),
            ("정식명칭", self.corp_name.as_str()),
            ("영문명칭", self.corp_name_eng.as_str()),
            ("종목명", self.stock_name.as_str()),
            ("종목코드", self.stock_code.as_str()),
            ("대표자명", self.ceo_nm.as_str()),
            ("법인구분", self.corp_cls.as_str()),
            ("법인등록번호", self.jurir_no.as_str()),
            ("사업자등록번호", self.bizr_no.as_str()),
            ("주소", self.adres.as_str()),
            ("홈페이지", self.hm_url.as_str()),
            ("IR홈페이지", self.ir_url.as_str()),
            ("전화번호", self.phn_no.as_str()),
            ("팩스번호", self.fax_no.as_str()),
            ("업종코드", self.induty_code.as_str()),
            ("설립일", self.est_dt.as_str()),
            ("결산월", self.acc_mt.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompanyProfile {
        CompanyProfile {
            status: "000".to_string(),
            message: "정상".to_string(),
            corp_code: "00126380".to_string(),
            corp_name: "삼성전자(주)".to_string(),
            corp_name_eng: "SAMSUNG ELECTRONICS CO,.LTD".to_string(),
            stock_name: "삼성전자".to_string(),
            stock_code: "005930".to_string(),
            ceo_nm: "한종희".to_string(),
            corp_cls: "Y".to_string(),
            jurir_no: "1301110006246".to_string(),
            bizr_no: "1248100998".to_string(),
            adres: "경기도 수원시 영통구 삼성로 129 (매탄동)".to_string(),
            hm_url: "www.samsung.com/sec".to_string(),
            ir_url: String::new(),
            phn_no: "02-2255-0114".to_string(),
            fax_no: "031-200-7538".to_string(),
            induty_code: "264".to_string(),
            est_dt: "19690113".to_string(),
            acc_mt: "12".to_string(),
        }
    }

    #[test]
    fn labeled_fields_has_17_rows() {
        assert_eq!(sample().labeled_fields().len(), 17);
    }

    #[test]
    fn labeled_fields_excludes_status_and_message() {
        let profile = sample();
        for (label, value) in profile.labeled_fields() {
            assert_ne!(label, "status");
            assert_ne!(label, "message");
            assert_ne!(value, "000");
            assert_ne!(value, "정상");
        }
    }

    #[test]
    fn labeled_fields_pairs_values_in_order() {
        let profile = sample();
        let fields = profile.labeled_fields();
        assert_eq!(fields[0], ("공시번호", "00126380"));
        assert_eq!(fields[1], ("정식명칭", "삼성전자(주)"));
        assert_eq!(fields[4], ("종목코드", "005930"));
        assert_eq!(fields[16], ("결산월", "12"));
    }
}
