//! Fetch → parse → sort → write, run once.
//!
//! Stages advance strictly in order:
//! `Idle → Fetching → Parsing → Sorting → Writing → Done`.
//! Any error ends the run at the stage that produced it. A rejected fetch
//! therefore never reaches `Writing`, and the destination file is left
//! untouched.

use std::fmt;
use std::path::PathBuf;

use crate::config::PipelineConfig;
use crate::data::{extract_points, sort_by_date, to_records, DataError, SentimentSource};
use crate::domain::SentimentRecord;
use crate::export::write_csv;

/// Pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Fetching,
    Parsing,
    Sorting,
    Writing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Fetching => "fetching",
            Stage::Parsing => "parsing",
            Stage::Sorting => "sorting",
            Stage::Writing => "writing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub rows_written: usize,
    /// Points dropped by the malformed-point policy.
    pub points_skipped: usize,
    pub output_path: PathBuf,
}

impl RunReport {
    /// One-line operator message.
    pub fn status_line(&self) -> String {
        format!(
            "Saved {} rows → {}",
            self.rows_written,
            self.output_path.display()
        )
    }
}

/// Observer for stage transitions.
pub trait PipelineProgress {
    /// Called on entering each stage, including `Idle` and `Done`.
    fn on_stage(&self, stage: Stage);

    /// Called once after the file has been written.
    fn on_complete(&self, _report: &RunReport) {}
}

/// Progress reporter that logs through `tracing`.
pub struct TracingProgress;

impl PipelineProgress for TracingProgress {
    fn on_stage(&self, stage: Stage) {
        tracing::debug!(%stage, "pipeline stage");
    }

    fn on_complete(&self, report: &RunReport) {
        tracing::info!(
            rows = report.rows_written,
            skipped = report.points_skipped,
            path = %report.output_path.display(),
            "export complete"
        );
    }
}

/// Run the whole export once against `source`.
pub fn run(
    source: &dyn SentimentSource,
    config: &PipelineConfig,
    progress: &dyn PipelineProgress,
) -> Result<RunReport, DataError> {
    progress.on_stage(Stage::Idle);

    progress.on_stage(Stage::Fetching);
    tracing::info!(
        source = source.name(),
        start_date = %config.start_date,
        "fetching sentiment history"
    );
    let body = source.fetch(&config.start_date)?;

    progress.on_stage(Stage::Parsing);
    let points = extract_points(&body)?;
    if points.is_empty() {
        tracing::warn!("payload carried no historical points");
    }
    let outcome = to_records(points, config.on_malformed_point)?;

    progress.on_stage(Stage::Sorting);
    let records: Vec<SentimentRecord> = sort_by_date(outcome.records);

    progress.on_stage(Stage::Writing);
    let rows_written = write_csv(&records, &config.output_path)?;

    let report = RunReport {
        rows_written,
        points_skipped: outcome.skipped,
        output_path: config.output_path.clone(),
    };
    progress.on_stage(Stage::Done);
    progress.on_complete(&report);

    Ok(report)
}
