//! HTTP client for the OpenDART open API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::types::{CompanyProfile, FnlttAccount, FnlttResponse, ReportType, ResponseStatus};
use crate::Error;

/// Client for the OpenDART open API.
///
/// Holds one `reqwest::Client` (30-second timeout) for the process lifetime
/// and appends the service key to every request. The key is never logged.
pub struct Client {
    /// Base URL for the API. Defaults to `https://opendart.fss.or.kr`.
    base_api_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production OpenDART API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url("https://opendart.fss.or.kr", api_key)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http,
        })
    }

    fn get_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str())
            .map_err(|e| {
                tracing::error!("invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("crtfc_key", &self.api_key);
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get<T>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, params)?;
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("failed to reach {}: {}", path, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body from {}: {}", path, e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("{} failed with status {}: {}", path, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        check_dart_status(path, &body)?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("failed to parse response from {}: {}", path, e);
            Error::UnexpectedShape {
                detail: e.to_string(),
            }
        })
    }

    /// Fetches the company profile for one corp code.
    pub async fn company_profile(&self, corp_code: &str) -> Result<CompanyProfile, Error> {
        self.get("/api/company.json", &[("corp_code", corp_code)])
            .await
    }

    /// Fetches the single-account financial statement lines for one corp
    /// code, business year, and report kind.
    ///
    /// Returns the `list` contents verbatim; an empty vec means the call
    /// succeeded but nothing was filed.
    pub async fn single_account_financials(
        &self,
        corp_code: &str,
        bsns_year: &str,
        report: ReportType,
    ) -> Result<Vec<FnlttAccount>, Error> {
        let resp: FnlttResponse = self
            .get(
                "/api/fnlttSinglAcnt.json",
                &[
                    ("corp_code", corp_code),
                    ("bsns_year", bsns_year),
                    ("reprt_code", report.code()),
                ],
            )
            .await?;
        Ok(resp.list)
    }
}

/// Rejects in-band DART errors before the payload is deserialized.
///
/// DART answers HTTP 200 for everything and reports failure through the
/// `status` field, so this runs on every successful transport response.
fn check_dart_status(path: &str, body: &str) -> Result<(), Error> {
    let header: ResponseStatus = serde_json::from_str(body).map_err(|e| {
        tracing::error!("unrecognized response from {}: {}", path, e);
        Error::UnexpectedShape {
            detail: e.to_string(),
        }
    })?;

    if header.is_ok() {
        return Ok(());
    }
    if header.is_no_data() {
        return Err(Error::NoData {
            status: header.status,
            message: header.message,
        });
    }
    tracing::error!("{} rejected: status {} ({})", path, header.status, header.message);
    Err(Error::Api {
        status: header.status,
        message: header.message,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // DART bodies are Korean text; back off to a char boundary before slicing.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
