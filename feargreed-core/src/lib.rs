//! Fear & Greed history exporter core.
//!
//! Pulls the CNN Fear & Greed daily index history and writes it as CSV:
//! - Request builder and browser-like headers for the graph-data endpoint
//! - Single-attempt blocking HTTP source behind the `SentimentSource` trait
//! - Lenient payload extraction with an explicit malformed-point policy
//! - Epoch-millisecond decoding, chronological sort, CSV export/import
//! - A linear pipeline that moves the record set by value between stages

pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod pipeline;

pub use config::PipelineConfig;
pub use data::{CnnProvider, DataError, MalformedPointPolicy, SentimentSource, StaticSource};
pub use domain::SentimentRecord;
pub use pipeline::{run, PipelineProgress, RunReport, Stage, TracingProgress};
