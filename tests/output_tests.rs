//! Tests for report writers (table, CSV, JSON)

#![cfg(all(feature = "csv-output", feature = "json-output"))]

use chatcount::aggregate;
use chatcount::core::Report;
use chatcount::core::output::{to_csv, to_json, write_csv, write_json};
use chatcount::format::{OutputFormat, write_to_format};
use std::fs;
use tempfile::tempdir;

fn sample_report() -> Report {
    let text = "\
15/01/24, 10:30 - Alice: Hello!
15/01/24, 10:31 - Bob: Hi Alice!
15/01/24, 10:32 - Alice: How are you?
15/01/24, 10:33 - Alice: Still there?";
    Report::from_counts(&aggregate(text, None, None, None).unwrap())
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn test_write_csv_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("counts.csv");

    write_csv(&sample_report(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["Rank;Sender;Messages;Share", "1;Alice;3;75.0", "2;Bob;1;25.0"]);
}

#[test]
fn test_csv_reads_back_with_csv_crate() {
    let csv_text = to_csv(&sample_report()).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[1], "Sender");

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][1], "Alice");
    assert_eq!(&records[1][2], "1");
}

#[test]
fn test_csv_sender_with_quotes_round_trips() {
    let text = "15/01/24, 10:30 - \"Big\" Al; Jr: hi";
    let report = Report::from_counts(&aggregate(text, None, None, None).unwrap());
    let csv_text = to_csv(&report).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(csv_text.as_bytes());
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[1], "\"Big\" Al; Jr");
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_write_json_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("counts.json");

    write_json(&sample_report(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["total"], 4);
    let senders = value["senders"].as_array().unwrap();
    assert_eq!(senders.len(), 2);
    assert_eq!(senders[0]["sender"], "Alice");
    assert_eq!(senders[0]["count"], 3);
    assert_eq!(senders[0]["share"], 75.0);
    assert_eq!(senders[1]["rank"], 2);
}

#[test]
fn test_json_empty_report() {
    let report = Report::from_counts(&aggregate("", None, None, None).unwrap());
    let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

    assert_eq!(value["total"], 0);
    assert!(value["senders"].as_array().unwrap().is_empty());
}

// ============================================================================
// Format dispatch
// ============================================================================

#[test]
fn test_write_to_format_each_format() {
    let dir = tempdir().unwrap();
    let report = sample_report();

    for format in OutputFormat::all() {
        let path = dir.path().join(format!("counts.{}", format.extension()));
        let path = path.to_str().unwrap();

        write_to_format(&report, path, *format).unwrap();
        assert_eq!(OutputFormat::from_path(path).unwrap(), *format);

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("Alice"), "{} output missing sender", format);
    }
}

#[test]
fn test_write_to_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("counts.csv");

    let err = write_csv(&sample_report(), &path).unwrap_err();
    assert!(err.is_io());
}
