//! CSV export and re-import of sentiment records.
//!
//! Columns: date, value, rating
//!
//! - `date` is RFC 3339 with an explicit `+00:00` offset; fractional seconds
//!   appear only when non-zero.
//! - `value` uses the shortest decimal that round-trips (`40`, `45.2`).
//! - An absent rating is an empty field.
//!
//! The destination is overwritten on every export; nothing is appended.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::data::DataError;
use crate::domain::SentimentRecord;

pub const CSV_HEADER: [&str; 3] = ["date", "value", "rating"];

/// Textual form of a record date as written to the `date` column.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Serialize records to CSV text, header first.
pub fn export_csv(records: &[SentimentRecord]) -> Result<String, DataError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER).map_err(csv_err)?;

    for r in records {
        wtr.write_record([
            format_date(&r.date).as_str(),
            r.value.to_string().as_str(),
            r.rating_or_empty(),
        ])
        .map_err(csv_err)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| DataError::Csv(format!("failed to flush CSV writer: {e}")))?;
    String::from_utf8(data).map_err(|e| DataError::Csv(format!("CSV output is not valid UTF-8: {e}")))
}

/// Write records to `path`, replacing any existing file. Returns the row count.
pub fn write_csv(records: &[SentimentRecord], path: &Path) -> Result<usize, DataError> {
    let csv = export_csv(records)?;
    std::fs::write(path, csv).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(records.len())
}

/// Parse CSV text produced by [`export_csv`].
pub fn import_csv(text: &str) -> Result<Vec<SentimentRecord>, DataError> {
    let mut rdr = csv::Reader::from_reader(text.as_bytes());

    let headers = rdr.headers().map_err(csv_err)?;
    if headers.iter().ne(CSV_HEADER) {
        return Err(DataError::Csv(format!(
            "unexpected header {:?}, expected {:?}",
            headers.iter().collect::<Vec<_>>(),
            CSV_HEADER
        )));
    }

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.map_err(csv_err)?;
        let line = i + 2;

        let date = DateTime::parse_from_rfc3339(&row[0])
            .map_err(|e| DataError::Csv(format!("line {line}: bad date '{}': {e}", &row[0])))?
            .with_timezone(&Utc);
        let value: f64 = row[1]
            .parse()
            .map_err(|e| DataError::Csv(format!("line {line}: bad value '{}': {e}", &row[1])))?;
        let rating = match &row[2] {
            "" => None,
            label => Some(label.to_string()),
        };

        records.push(SentimentRecord::new(date, value, rating));
    }

    Ok(records)
}

/// Read back a file written by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Vec<SentimentRecord>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    import_csv(&text)
}

fn csv_err(e: csv::Error) -> DataError {
    DataError::Csv(e.to_string())
}
