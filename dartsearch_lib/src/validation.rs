//! Input validation for user-supplied search terms and corp codes.

use crate::error::DartSearchError;

pub const MAX_SEARCH_LENGTH: usize = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim
/// whitespace, and enforce a byte-length limit.
pub fn sanitize_search(input: &str) -> Result<String, DartSearchError> {
    if input.len() > MAX_SEARCH_LENGTH {
        return Err(DartSearchError::InvalidInput(format!(
            "search term exceeds maximum length of {} bytes",
            MAX_SEARCH_LENGTH
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(DartSearchError::InvalidInput(
            "search term is empty".to_string(),
        ));
    }
    Ok(sanitized)
}

/// A DART corp code is exactly eight ASCII digits.
pub fn validate_corp_code(input: &str) -> Result<String, DartSearchError> {
    let trimmed = input.trim();
    if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(DartSearchError::InvalidInput(
            "corp code must be exactly 8 digits".to_string(),
        ))
    }
}

/// A DART business year is a four-digit year.
pub fn validate_bsns_year(input: &str) -> Result<String, DartSearchError> {
    let trimmed = input.trim();
    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(DartSearchError::InvalidInput(
            "business year must be a 4-digit year".to_string(),
        ))
    }
}
