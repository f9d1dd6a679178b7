//! CNN Fear & Greed graph-data source.
//!
//! Issues one blocking GET per run with browser-like headers. Any non-2xx
//! status is returned as `DataError::RemoteRequest`; there is no retry,
//! backoff or circuit breaker, and the transport's default timeout applies.

use super::endpoint::{graphdata_url, BrowserHeaders, DEFAULT_ENDPOINT};
use super::provider::{DataError, SentimentSource};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};

/// HTTP source for the CNN graph-data endpoint.
pub struct CnnProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl CnnProvider {
    /// Provider for the production endpoint with the default browser headers.
    pub fn production() -> Result<Self, DataError> {
        Self::new(DEFAULT_ENDPOINT, &BrowserHeaders::default())
    }

    pub fn new(endpoint: impl Into<String>, headers: &BrowserHeaders) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .default_headers(header_map(headers)?)
            .build()
            .map_err(|e| DataError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn header_map(headers: &BrowserHeaders) -> Result<HeaderMap, DataError> {
    let value = |name: &str, raw: &str| {
        HeaderValue::from_str(raw)
            .map_err(|e| DataError::Config(format!("invalid {name} header value: {e}")))
    };

    let mut map = HeaderMap::new();
    map.insert(USER_AGENT, value("User-Agent", &headers.user_agent)?);
    map.insert(ACCEPT, value("Accept", &headers.accept)?);
    map.insert(REFERER, value("Referer", &headers.referer)?);
    map.insert(ORIGIN, value("Origin", &headers.origin)?);
    Ok(map)
}

impl SentimentSource for CnnProvider {
    fn name(&self) -> &str {
        "cnn_graphdata"
    }

    fn fetch(&self, start_date: &str) -> Result<String, DataError> {
        let url = graphdata_url(&self.endpoint, start_date);
        tracing::debug!(%url, "requesting sentiment history");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "remote rejected request");
            return Err(DataError::RemoteRequest {
                status: status.as_u16(),
                url,
            });
        }

        resp.text()
            .map_err(|e| DataError::Network(format!("failed to read response body: {e}")))
    }
}
