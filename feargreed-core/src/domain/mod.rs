//! Domain types for the sentiment history export

pub mod record;

pub use record::SentimentRecord;
