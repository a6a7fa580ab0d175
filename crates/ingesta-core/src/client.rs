use std::sync::Arc;

use tracing::warn;

use crate::error::CoreError;
use crate::http::HttpClient;
use crate::snapshot::TickerSnapshot;

/// Parameters selecting one ticker endpoint: `{base}/{coin}/{method}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerRequest {
    /// Trading pair to snapshot (e.g. "BTC").
    pub coin: String,
    /// API method segment appended after the coin (e.g. "ticker").
    pub method: String,
}

impl TickerRequest {
    pub fn new(coin: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            coin: coin.into(),
            method: method.into(),
        }
    }
}

/// Client for the exchange ticker endpoint, shared by the quick-check
/// command and the full ingestion pipeline.
pub struct TickerClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl TickerClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Build the endpoint path by interpolating the percent-encoded coin
    /// and method segments, with a trailing slash.
    #[must_use]
    pub fn endpoint_url(&self, request: &TickerRequest) -> String {
        format!(
            "{}/{}/{}/",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&request.coin),
            urlencoding::encode(&request.method),
        )
    }

    /// Issue one best-effort GET against the ticker endpoint.
    ///
    /// Transport failures and non-2xx statuses are logged and degrade to
    /// an empty snapshot, which callers treat as "no data". No retries.
    ///
    /// # Errors
    /// Returns an error only when a successful response body is not
    /// valid JSON.
    pub async fn fetch(&self, request: &TickerRequest) -> Result<TickerSnapshot, CoreError> {
        let url = self.endpoint_url(request);

        let response = match self.http.get(&url).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%url, %error, "ticker request failed");
                return Ok(TickerSnapshot::empty());
            }
        };

        if !response.is_success() {
            warn!(%url, status = response.status, "ticker endpoint returned non-success status");
            return Ok(TickerSnapshot::empty());
        }

        let value = serde_json::from_str(&response.body)?;
        Ok(TickerSnapshot::from_value(value))
    }
}
