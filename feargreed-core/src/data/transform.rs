//! Record transformer and sorter.
//!
//! Turns raw JSON points into `SentimentRecord`s (epoch milliseconds → UTC
//! timestamp, value passthrough, optional rating), then orders them by date.
//! Both stages take their input by value and hand back a new collection.

use super::payload::RawPoint;
use super::provider::DataError;
use crate::domain::SentimentRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// What to do with a malformed point: not an object, `x` or `y` missing or
/// not a number, or an unrepresentable `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPointPolicy {
    /// Drop the point, log it, and keep going.
    #[default]
    Skip,
    /// Abort the run before anything is written.
    Fail,
}

impl FromStr for MalformedPointPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(format!("unknown malformed-point policy '{other}'. Valid: skip, fail")),
        }
    }
}

impl fmt::Display for MalformedPointPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

/// Output of the transform stage.
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    pub records: Vec<SentimentRecord>,
    /// Points dropped under `MalformedPointPolicy::Skip`.
    pub skipped: usize,
}

/// Decode epoch milliseconds into a UTC timestamp.
///
/// Fractional milliseconds are kept to microsecond precision.
pub fn decode_epoch_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    let micros = (ms * 1000.0).round();
    if micros.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_micros(micros as i64)
}

fn to_record(point: RawPoint) -> Result<SentimentRecord, String> {
    let x = point.x.ok_or("missing 'x' (epoch milliseconds)")?;
    let value = point.y.ok_or("missing 'y' (index value)")?;
    let date = decode_epoch_millis(x).ok_or_else(|| format!("timestamp {x} out of range"))?;
    Ok(SentimentRecord::new(date, value, point.rating))
}

/// Map raw points to records, applying `policy` to malformed points.
pub fn to_records(
    points: Vec<Value>,
    policy: MalformedPointPolicy,
) -> Result<TransformOutcome, DataError> {
    let mut outcome = TransformOutcome {
        records: Vec::with_capacity(points.len()),
        skipped: 0,
    };

    for (index, point) in points.into_iter().enumerate() {
        match RawPoint::from_value(point).and_then(to_record) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => match policy {
                MalformedPointPolicy::Skip => {
                    tracing::warn!(index, %reason, "skipping malformed data point");
                    outcome.skipped += 1;
                }
                MalformedPointPolicy::Fail => {
                    return Err(DataError::MalformedPoint { index, reason });
                }
            },
        }
    }

    Ok(outcome)
}

/// Stable ascending sort by date. Equal dates keep their source order.
pub fn sort_by_date(mut records: Vec<SentimentRecord>) -> Vec<SentimentRecord> {
    records.sort_by_key(|r| r.date);
    records
}
