//! HTTP client for the spreadsheet `values` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::SheetsConfig;
use crate::error::SheetsError;
use crate::retry::retry_with_backoff;
use crate::types::ValueRange;

/// Fetches one configured sheet range as raw rows.
///
/// Handles 401/403, 404, 429, and other non-2xx responses as typed errors.
/// Transient failures (429, 5xx, timeouts) are retried with exponential
/// back-off up to `max_retries` additional attempts.
pub struct SheetsClient {
    client: Client,
    config: SheetsConfig,
    values_url: Url,
}

impl SheetsClient {
    /// Creates a client for the sheet range described by `config`.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    /// - [`SheetsError::InvalidBaseUrl`] if `config.base_url` is not a valid
    ///   URL base.
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("promos/0.1 (sheet-reader)")
            .build()?;
        let values_url = Self::values_url(&config)?;

        Ok(Self {
            client,
            config,
            values_url,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// Fetches the configured range, with automatic retry on transient errors.
    ///
    /// An empty sheet is not an error: the returned [`ValueRange`] simply has
    /// no `values`.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::Unauthorized`]: HTTP 401/403 (not retried).
    /// - [`SheetsError::NotFound`]: HTTP 404 (not retried).
    /// - [`SheetsError::RateLimited`]: HTTP 429 after all retries exhausted.
    /// - [`SheetsError::UnexpectedStatus`]: any other non-2xx status (5xx retried).
    /// - [`SheetsError::Http`]: network or TLS failure after all retries exhausted.
    /// - [`SheetsError::Deserialize`]: response body is not a value range.
    pub async fn fetch_values(&self) -> Result<ValueRange, SheetsError> {
        retry_with_backoff(self.config.max_retries, self.config.backoff_base_ms, || {
            self.fetch_once()
        })
        .await
    }

    async fn fetch_once(&self) -> Result<ValueRange, SheetsError> {
        let mut request = self
            .client
            .get(self.values_url.clone())
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(SheetsError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SheetsError::NotFound {
                url: self.display_url(),
            });
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(SheetsError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            return Err(SheetsError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.display_url(),
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str::<ValueRange>(&body).map_err(|e| SheetsError::Deserialize {
            context: format!("values of {}", self.config.range),
            source: e,
        })
    }

    /// Builds `{base}/v4/spreadsheets/{id}/values/{range}` with the API key,
    /// if any, as the `key` query parameter.
    fn values_url(config: &SheetsConfig) -> Result<Url, SheetsError> {
        let invalid = |reason: String| SheetsError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            reason,
        };

        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base".to_owned()))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                config.spreadsheet_id.as_str(),
                "values",
                config.range.as_str(),
            ]);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("majorDimension", "ROWS");
            if let Some(key) = &config.api_key {
                pairs.append_pair("key", key);
            }
        }

        Ok(url)
    }

    /// The request URL without its query string, safe to log.
    fn display_url(&self) -> String {
        let mut url = self.values_url.clone();
        url.set_query(None);
        url.to_string()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
