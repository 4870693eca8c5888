//! Two-view session state: company search and financial statements.
//!
//! One interaction at a time mutates this; there is no shared-state
//! coordination to do.

use crate::error::DartSearchError;

/// Which of the two views the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Company-name search with pagination. The initial view.
    #[default]
    Search,
    /// Financial statements for the corp code last looked up.
    Financials,
}

/// Per-session navigation state: the active view, the 1-indexed search page,
/// and the corp code most recently looked up.
#[derive(Debug)]
pub struct Session {
    view: View,
    page: i64,
    corp_code: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::Search,
            page: 1,
            corp_code: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn corp_code(&self) -> Option<&str> {
        self.corp_code.as_deref()
    }

    /// Records the corp code of the latest company lookup; it becomes the
    /// subject of the financials view.
    pub fn set_corp_code(&mut self, code: &str) {
        self.corp_code = Some(code.to_string());
    }

    /// Moves to the next search page and returns it.
    pub fn next_page(&mut self) -> i64 {
        self.page += 1;
        self.page
    }

    /// Moves to the previous search page, never below 1, and returns it.
    pub fn prev_page(&mut self) -> i64 {
        if self.page > 1 {
            self.page -= 1;
        }
        self.page
    }

    /// Restarts paging, as when a new search term is entered.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Switches to the financials view.
    ///
    /// Only fires once a corp code has been looked up; until then the user
    /// is told to search first rather than being navigated to an empty view.
    pub fn open_financials(&mut self) -> Result<(), DartSearchError> {
        let has_code = self.corp_code.as_deref().is_some_and(|c| !c.is_empty());
        if !has_code {
            return Err(DartSearchError::InvalidInput(
                "no corp code has been looked up yet".to_string(),
            ));
        }
        self.view = View::Financials;
        Ok(())
    }

    /// Returns to the search view, keeping the page and corp code.
    pub fn back_to_search(&mut self) {
        self.view = View::Search;
    }
}
