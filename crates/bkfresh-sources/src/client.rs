//! Thin HTTP client shared by the deal sources.

use std::time::Duration;

use reqwest::Client;

use crate::error::SourceError;

/// HTTP client with a bounded request timeout and a fixed `User-Agent`.
///
/// Non-2xx responses become [`SourceError::UnexpectedStatus`]. There are no
/// retries: a failed request just hands over to the next source.
#[derive(Debug, Clone)]
pub struct SourceClient {
    client: Client,
    timeout: Duration,
}

impl SourceClient {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, timeout })
    }

    /// Per-request timeout, also used as the per-stage budget.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and return the body as text.
    ///
    /// # Errors
    ///
    /// - [`SourceError::UnexpectedStatus`] for any non-2xx status.
    /// - [`SourceError::Http`] for network, TLS, timeout, or body decode failures.
    pub async fn fetch_text(&self, url: &str, accept: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
