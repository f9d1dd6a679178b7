//! Request builder — endpoint URL and browser-like request headers.
//!
//! The graph-data endpoint rejects requests that do not look like they come
//! from a browser on edition.cnn.com (HTTP 418 or 403), so the four headers
//! below are always sent.

use serde::{Deserialize, Serialize};

/// Earliest date the endpoint serves history for.
pub const DEFAULT_START_DATE: &str = "2020-07-14";

/// Base of the graph-data endpoint; the start date is appended as a path segment.
pub const DEFAULT_ENDPOINT: &str = "https://production.dataviz.cnn.io/index/fearandgreed/graphdata";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";
pub const DEFAULT_REFERER: &str = "https://edition.cnn.com/";
pub const DEFAULT_ORIGIN: &str = "https://edition.cnn.com";

/// Build the history URL for a start date.
///
/// The date is interpolated verbatim; a bad date is left for the remote to reject.
pub fn graphdata_url(endpoint: &str, start_date: &str) -> String {
    format!("{}/{start_date}", endpoint.trim_end_matches('/'))
}

/// Header values sent with the history request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserHeaders {
    pub user_agent: String,
    pub accept: String,
    pub referer: String,
    pub origin: String,
}

impl Default for BrowserHeaders {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.into(),
            accept: DEFAULT_ACCEPT.into(),
            referer: DEFAULT_REFERER.into(),
            origin: DEFAULT_ORIGIN.into(),
        }
    }
}
