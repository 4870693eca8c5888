mod meta;
pub use self::meta::ResponseStatus;

mod company;
pub use self::company::CompanyProfile;

mod financials;
pub use self::financials::{FnlttAccount, FnlttResponse, ReportType};
