use serde::{Deserialize, Serialize};

/// The in-band result header every OpenDART payload starts with.
///
/// `"000"` means success; anything else is an error reported with HTTP 200.
#[derive(Serialize, Deserialize, Debug)]
pub struct ResponseStatus {
    pub status: String,
    pub message: String,
}

impl ResponseStatus {
    /// Statuses meaning "the query was fine but nothing matched".
    pub const NO_DATA: [&'static str; 2] = ["013", "014"];

    pub fn is_ok(&self) -> bool {
        self.status == "000"
    }

    pub fn is_no_data(&self) -> bool {
        Self::NO_DATA.contains(&self.status.as_str())
    }
}
