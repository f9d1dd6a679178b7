//! Fetching, decoding and transforming the sentiment history

pub mod cnn;
pub mod endpoint;
pub mod payload;
pub mod provider;
pub mod transform;

pub use cnn::CnnProvider;
pub use endpoint::{graphdata_url, BrowserHeaders, DEFAULT_ENDPOINT, DEFAULT_START_DATE};
pub use payload::{extract_points, GraphDataResponse, RawPoint};
pub use provider::{DataError, SentimentSource, StaticSource};
pub use transform::{sort_by_date, to_records, MalformedPointPolicy, TransformOutcome};
