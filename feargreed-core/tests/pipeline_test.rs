//! End-to-end pipeline runs against canned payloads.

use chrono::{TimeZone, Utc};
use feargreed_core::export::read_csv;
use feargreed_core::{
    run, DataError, MalformedPointPolicy, PipelineConfig, StaticSource, TracingProgress,
};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

fn config_for(dir: &tempfile::TempDir) -> PipelineConfig {
    PipelineConfig {
        output_path: dir.path().join("cnn_fear_greed.csv"),
        ..PipelineConfig::default()
    }
}

#[test]
fn two_point_payload_is_sorted_with_empty_rating() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);
    let source = StaticSource::new(
        r#"{"fear_and_greed_historical": {"data": [
            {"x": 1594684800000, "y": 45, "rating": "fear"},
            {"x": 1594598400000, "y": 40, "rating": null}
        ]}}"#,
    );

    let report = run(&source, &config, &TracingProgress).unwrap();
    assert_eq!(report.rows_written, 2);
    assert_eq!(report.status_line(), format!("Saved 2 rows → {}", config.output_path.display()));

    let text = std::fs::read_to_string(&config.output_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,value,rating",
            "2020-07-13T00:00:00+00:00,40,",
            "2020-07-14T00:00:00+00:00,45,fear",
        ]
    );
}

#[test]
fn empty_object_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let report = run(&StaticSource::new("{}"), &config, &TracingProgress).unwrap();

    assert_eq!(report.rows_written, 0);
    assert_eq!(report.status_line(), format!("Saved 0 rows → {}", config.output_path.display()));
    assert_eq!(
        std::fs::read_to_string(&config.output_path).unwrap(),
        "date,value,rating\n"
    );
}

#[test]
fn fixture_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let report = run(
        &StaticSource::new(fixture("graphdata_sample.json")),
        &config,
        &TracingProgress,
    )
    .unwrap();
    assert_eq!(report.rows_written, 6);
    assert_eq!(report.points_skipped, 0);

    let records = read_csv(&config.output_path).unwrap();
    assert_eq!(records.len(), 6);

    // Sorted ascending, and only the historical series was picked up
    for pair in records.windows(2) {
        assert!(pair[0].date <= pair[1].date);
    }
    assert_eq!(records[0].date, Utc.with_ymd_and_hms(2020, 7, 14, 0, 0, 0).unwrap());
    assert_eq!(records[0].value, 45.0);
    assert_eq!(records[0].rating.as_deref(), Some("fear"));

    let last = records.last().unwrap();
    assert_eq!(last.date, Utc.with_ymd_and_hms(2020, 7, 20, 23, 59, 55).unwrap());
    assert!((last.value - 38.2857142857143).abs() < 1e-9);
    assert!(records.iter().all(|r| r.value < 100.0));
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    run(
        &StaticSource::new(fixture("graphdata_sample.json")),
        &config,
        &TracingProgress,
    )
    .unwrap();
    run(&StaticSource::new("{}"), &config, &TracingProgress).unwrap();

    assert_eq!(
        std::fs::read_to_string(&config.output_path).unwrap(),
        "date,value,rating\n"
    );
}

#[test]
fn skip_policy_counts_dropped_points() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);
    let source = StaticSource::new(
        r#"{"fear_and_greed_historical": {"data": [
            {"x": 1594684800000, "y": 45, "rating": "fear"},
            {"y": 41},
            {"x": 1594598400000}
        ]}}"#,
    );

    let report = run(&source, &config, &TracingProgress).unwrap();
    assert_eq!(report.rows_written, 1);
    assert_eq!(report.points_skipped, 2);
}

#[test]
fn fail_policy_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        on_malformed_point: MalformedPointPolicy::Fail,
        ..config_for(&dir)
    };
    std::fs::write(&config.output_path, "previous run\n").unwrap();
    let source = StaticSource::new(
        r#"{"fear_and_greed_historical": {"data": [{"x": 1594684800000, "y": 45}, {"y": 41}]}}"#,
    );

    let err = run(&source, &config, &TracingProgress).unwrap_err();
    assert!(matches!(err, DataError::MalformedPoint { index: 1, .. }));
    assert_eq!(
        std::fs::read_to_string(&config.output_path).unwrap(),
        "previous run\n"
    );
}

#[test]
fn non_json_body_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let err = run(
        &StaticSource::new("<html>blocked</html>"),
        &config,
        &TracingProgress,
    )
    .unwrap_err();

    assert!(matches!(err, DataError::MalformedPayload(_)));
    assert!(!config.output_path.exists());
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        output_path: dir.path().join("missing").join("out.csv"),
        ..PipelineConfig::default()
    };

    let err = run(&StaticSource::new("{}"), &config, &TracingProgress).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
}

const WRONGLY_TYPED: &str = r#"{"fear_and_greed_historical": {"data": [
    {"x": 1594684800000, "y": 45, "rating": "fear"},
    {"x": "1594598400000", "y": 40},
    {"x": 1594771200000, "y": "50"},
    null,
    {"x": 1594857600000, "y": 47, "rating": 3}
]}}"#;

#[test]
fn skip_policy_survives_wrongly_typed_points() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let report = run(&StaticSource::new(WRONGLY_TYPED), &config, &TracingProgress).unwrap();
    assert_eq!(report.rows_written, 2);
    assert_eq!(report.points_skipped, 3);

    let text = std::fs::read_to_string(&config.output_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,value,rating",
            "2020-07-14T00:00:00+00:00,45,fear",
            "2020-07-16T00:00:00+00:00,47,",
        ]
    );
}

#[test]
fn fail_policy_stops_on_wrongly_typed_point() {
    let cases = [
        (r#"[{"x": 1594684800000, "y": 45}, {"x": "1594598400000", "y": 40}]"#, 1, "'x'"),
        (r#"[{"x": 1594598400000, "y": "40"}]"#, 0, "'y'"),
        (r#"[{"x": 1594684800000, "y": 45}, null]"#, 1, "not a JSON object"),
    ];

    for (data, expected_index, expected_reason) in cases {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig {
            on_malformed_point: MalformedPointPolicy::Fail,
            ..config_for(&dir)
        };
        let body = format!(r#"{{"fear_and_greed_historical": {{"data": {data}}}}}"#);

        match run(&StaticSource::new(body), &config, &TracingProgress).unwrap_err() {
            DataError::MalformedPoint { index, reason } => {
                assert_eq!(index, expected_index, "{data}");
                assert!(reason.contains(expected_reason), "{data}: {reason}");
            }
            other => panic!("expected MalformedPoint for {data}, got {other:?}"),
        }
        assert!(!config.output_path.exists());
    }
}
