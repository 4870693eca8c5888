//! Error types for the API client.

/// Errors that can occur when calling the OpenDART API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("request failed")]
    RequestFailed,
    /// The API returned a non-success HTTP status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API reported "no data found" in-band (status 013 or 014).
    /// Carries the API's own message verbatim.
    #[error("no data: {message}")]
    NoData { status: String, message: String },
    /// The API rejected the call in-band with any other non-success status
    /// (invalid key, rate limit, maintenance window).
    #[error("DART status {status}: {message}")]
    Api { status: String, message: String },
    /// The response body did not match the documented payload shape.
    #[error("unexpected response shape: {detail}")]
    UnexpectedShape { detail: String },
}
