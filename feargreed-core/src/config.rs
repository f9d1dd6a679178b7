//! Serializable pipeline configuration.
//!
//! Defaults reproduce the fixed run: history from 2020-07-14 off the CNN
//! endpoint, written to `cnn_fear_greed.csv`. A TOML file may override any
//! subset of fields:
//!
//! ```toml
//! start_date = "2022-01-03"
//! output_path = "out/fear_greed.csv"
//! on_malformed_point = "fail"
//!
//! [headers]
//! user_agent = "Mozilla/5.0 (X11; Linux x86_64)"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::endpoint::{graphdata_url, BrowserHeaders, DEFAULT_ENDPOINT, DEFAULT_START_DATE};
use crate::data::{DataError, MalformedPointPolicy};

pub const DEFAULT_OUTPUT_PATH: &str = "cnn_fear_greed.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// First day of history to request (YYYY-MM-DD).
    pub start_date: String,
    /// CSV destination; overwritten on every run.
    pub output_path: PathBuf,
    /// Graph-data endpoint base URL.
    pub endpoint: String,
    pub headers: BrowserHeaders,
    pub on_malformed_point: MalformedPointPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            start_date: DEFAULT_START_DATE.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            endpoint: DEFAULT_ENDPOINT.into(),
            headers: BrowserHeaders::default(),
            on_malformed_point: MalformedPointPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DataError::Config(format!("read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, DataError> {
        toml::from_str(content).map_err(|e| DataError::Config(format!("parse config TOML: {e}")))
    }

    /// Full request URL for the configured start date.
    pub fn request_url(&self) -> String {
        graphdata_url(&self.endpoint, &self.start_date)
    }
}
