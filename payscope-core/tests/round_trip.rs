//! Writing the processed file and loading it back.

use payscope_core::exporter::csv::{output_columns, write_processed_file};
use payscope_core::{sample, AnalyticsPipeline, Loader};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_processed_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("processed_employees.csv");
    let pipeline = AnalyticsPipeline::default();

    let processed = pipeline.process(&sample::employees());
    write_processed_file(&path, &processed, b',').unwrap();

    let reloaded = Loader::new().load_path(&path).unwrap();
    assert!(reloaded.has_derived_columns);
    assert_eq!(reloaded.derived_mismatches, 0);
    assert_eq!(reloaded.records, sample::employees());
    assert_eq!(pipeline.process(&reloaded.records), processed);
}

#[test]
fn test_round_trip_with_semicolons() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let pipeline = AnalyticsPipeline::default();

    let processed = pipeline.process(&sample::employees());
    write_processed_file(&path, &processed, b';').unwrap();

    let header = fs::read_to_string(&path).unwrap();
    assert!(header.starts_with(&output_columns().join(";")));

    let reloaded = Loader::new().with_delimiter(b';').load_path(&path).unwrap();
    assert_eq!(reloaded.len(), 5);
    assert_eq!(reloaded.derived_mismatches, 0);
}

#[test]
fn test_tampered_derived_columns_are_counted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tampered.csv");
    fs::write(
        &path,
        "emp_id,name,department,salary,years_exp,performance_score,performance_level,promotion_eligible\n\
         E1,Ana,IT,50000,6,90,LOW,YES\n\
         E2,Ben,HR,40000,1,60,LOW,NO\n",
    )
    .unwrap();

    let reloaded = Loader::new().load_path(&path).unwrap();
    assert_eq!(reloaded.derived_mismatches, 1);

    let processed = AnalyticsPipeline::default().process(&reloaded.records);
    assert_eq!(processed[0].performance_level.as_str(), "HIGH");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Loader::new()
        .load_path(dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(err.is_io());
}
