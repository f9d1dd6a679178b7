//! SentimentRecord — one day's reading of the Fear & Greed index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single index reading, decoded and ready for export.
///
/// Records are unique per `date` as supplied upstream; nothing here
/// de-duplicates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub date: DateTime<Utc>,
    pub value: f64,
    pub rating: Option<String>,
}

impl SentimentRecord {
    pub fn new(date: DateTime<Utc>, value: f64, rating: Option<String>) -> Self {
        Self {
            date,
            value,
            rating,
        }
    }

    /// Rating label, or the empty string when the source omitted it.
    pub fn rating_or_empty(&self) -> &str {
        self.rating.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn missing_rating_reads_as_empty() {
        let date = Utc.with_ymd_and_hms(2020, 7, 13, 0, 0, 0).unwrap();
        let record = SentimentRecord::new(date, 40.0, None);
        assert_eq!(record.rating_or_empty(), "");

        let rated = SentimentRecord::new(date, 40.0, Some("fear".into()));
        assert_eq!(rated.rating_or_empty(), "fear");
    }
}
