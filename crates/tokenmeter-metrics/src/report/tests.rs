//! Tests for report module

use super::*;
use crate::usage::UsageRecord;
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

fn create_test_record(model: &str, latency: f64, input: u64, output: u64, cost: f64) -> UsageRecord {
    UsageRecord {
        latency_seconds: latency,
        input_tokens: input,
        output_tokens: output,
        total_tokens: input + output,
        estimated_cost: cost,
        finish_reason: "stop".to_string(),
        timestamp: Utc.with_ymd_and_hms(2025, 12, 15, 10, 0, 0).unwrap(),
        model: model.to_string(),
    }
}

#[test]
fn test_summarize_empty() {
    let report = summarize(&[]);

    assert!(report.is_empty());
    assert!(report.totals().is_none());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["error"], NO_DATA_MARKER);
    assert!(json.get("generated_at").is_some());
    assert!(json.get("summary").is_none());
    assert!(json.get("model_breakdown").is_none());
}

#[test]
fn test_summarize_with_data() {
    let history = vec![
        create_test_record("gpt-4o-mini", 1.5, 100, 50, 0.001),
        create_test_record("gpt-4o-mini", 2.0, 200, 100, 0.002),
    ];

    let report = summarize(&history);
    let totals = report.totals().unwrap();

    assert_eq!(totals.total_requests, 2);
    assert_eq!(totals.total_tokens, 450);
    assert_eq!(totals.total_input_tokens, 300);
    assert_eq!(totals.total_output_tokens, 150);
    assert_eq!(totals.total_cost_usd, 0.003);
    assert_eq!(totals.average_latency_seconds, 1.75);
    assert_eq!(totals.average_cost_per_request, 0.0015);

    let breakdown = report.breakdown("gpt-4o-mini").unwrap();
    assert_eq!(breakdown.requests, 2);
    assert_eq!(breakdown.total_cost, 0.003);
    assert_eq!(breakdown.total_tokens, 450);
}

#[test]
fn test_summarize_saturates_huge_token_totals() {
    let mut first = create_test_record("m1", 1.0, 0, 0, 0.001);
    first.total_tokens = u64::MAX / 2 + 1;
    first.input_tokens = u64::MAX;
    let second = first.clone();

    let report = summarize(&[first, second]);
    let totals = report.totals().unwrap();

    assert_eq!(totals.total_requests, 2);
    assert_eq!(totals.total_tokens, u64::MAX);
    assert_eq!(totals.total_input_tokens, u64::MAX);
    assert_eq!(report.breakdown("m1").unwrap().total_tokens, u64::MAX);
}

#[test]
fn test_model_breakdown_multiple_models() {
    let history = vec![
        create_test_record("gpt-4o", 1.0, 100, 50, 0.001),
        create_test_record("gpt-4o-mini", 1.5, 200, 100, 0.002),
    ];

    let report = summarize(&history);

    assert_eq!(report.breakdown("gpt-4o").unwrap().requests, 1);
    assert_eq!(report.breakdown("gpt-4o-mini").unwrap().requests, 1);
    assert_eq!(report.breakdown("gpt-4o-mini").unwrap().total_tokens, 300);
    assert!(report.breakdown("gpt-3.5-turbo").is_none());
}

#[test]
fn test_summary_report_json_shape() {
    let history = vec![create_test_record("m1", 0.5, 10, 5, 0.00002)];
    let json = serde_json::to_value(summarize(&history)).unwrap();

    for key in [
        "total_requests",
        "total_cost_usd",
        "total_tokens",
        "total_input_tokens",
        "total_output_tokens",
        "average_latency_seconds",
        "average_cost_per_request",
    ] {
        assert!(json["summary"].get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["model_breakdown"]["m1"]["requests"], 1);
    assert_eq!(json["model_breakdown"]["m1"]["total_tokens"], 15);
    assert!(json.get("error").is_none());
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_summary_report_round_trips_both_shapes() {
    let populated = summarize(&[create_test_record("m1", 0.5, 10, 5, 0.1)]);
    let text = serde_json::to_string(&populated).unwrap();
    let parsed: SummaryReport = serde_json::from_str(&text).unwrap();
    assert!(!parsed.is_empty());

    let empty = summarize(&[]);
    let text = serde_json::to_string(&empty).unwrap();
    let parsed: SummaryReport = serde_json::from_str(&text).unwrap();
    assert!(parsed.is_empty());
    assert_eq!(parsed.generated_at(), empty.generated_at());
}

#[test]
fn test_to_tabular_empty() {
    assert_eq!(to_tabular(&[]), "No data available");
}

#[test]
fn test_to_tabular_with_data() {
    let record = create_test_record("gpt-4o-mini", 1.5, 100, 50, 0.001);
    let csv = to_tabular(std::slice::from_ref(&record));

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "timestamp,model,input_tokens,output_tokens,total_tokens,latency_seconds,estimated_cost_usd,finish_reason"
    );
    assert!(lines[1].contains(&record.model));
    assert!(lines[1].contains(&record.timestamp_iso()));
    assert_eq!(
        lines[1],
        format!("{},gpt-4o-mini,100,50,150,1.5,0.001,stop", record.timestamp_iso())
    );
}

#[test]
fn test_to_tabular_zero_cost_and_latency_keep_decimals() {
    let record = create_test_record("unlisted-model", 0.0, 1, 1, 0.0);
    let csv = to_tabular(std::slice::from_ref(&record));

    assert_eq!(
        csv.lines().nth(1).unwrap(),
        format!("{},unlisted-model,1,1,2,0.0,0.0,stop", record.timestamp_iso())
    );
}

#[test]
fn test_to_tabular_keeps_history_order() {
    let history = vec![
        create_test_record("first", 1.0, 1, 1, 0.0),
        create_test_record("second", 1.0, 1, 1, 0.0),
        create_test_record("third", 1.0, 1, 1, 0.0),
    ];

    let csv = to_tabular(&history);
    let models: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(models, vec!["first", "second", "third"]);
    assert!(!csv.ends_with('\n'));
}

#[test]
fn test_to_tabular_quotes_separator() {
    let mut record = create_test_record("vendor,model", 1.0, 1, 1, 0.0);
    record.finish_reason = "content_filter".to_string();

    let csv = to_tabular(&[record]);
    let row = csv.lines().nth(1).unwrap();
    assert!(row.contains(",\"vendor,model\",1,1,2,"));
}

#[test]
fn test_report_format_parsing() {
    assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    assert_eq!("CSV".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
    assert_eq!(ReportFormat::Csv.extension(), "csv");
    assert_eq!(ReportFormat::Json.to_string(), "json");

    let err = "xml".parse::<ReportFormat>().unwrap_err();
    assert!(matches!(err, crate::Error::UnsupportedFormat(ref f) if f == "xml"));
}

#[test]
fn test_generator_default_dir() {
    let generator = ReportGenerator::default();
    assert!(generator.output_dir().ends_with("reports/output"));
}

#[test]
fn test_persist_with_suggested_name() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(temp_dir.path().join("nested").join("reports"));

    let content = "{\n  \"hello\": \"world\"\n}";
    let path = generator
        .persist(content, Some("custom.json"), ReportFormat::Json)
        .unwrap();

    assert!(path.starts_with(generator.output_dir()));
    assert!(path.ends_with("custom.json"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_persist_generates_name() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(temp_dir.path());

    let path = generator
        .persist("No data available", None, ReportFormat::Csv)
        .unwrap();

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("report_"));
    assert!(name.ends_with(".csv"));
    assert!(path.starts_with(temp_dir.path()));
}

#[test]
fn test_persist_overwrites_existing() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(temp_dir.path());

    generator
        .persist("first", Some("same.csv"), ReportFormat::Csv)
        .unwrap();
    let path = generator
        .persist("second", Some("same.csv"), ReportFormat::Csv)
        .unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
}

#[test]
fn test_persist_strips_directories_from_suggested_name() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(temp_dir.path().join("out"));

    let path = generator
        .persist("x", Some("../escape.json"), ReportFormat::Json)
        .unwrap();

    assert_eq!(path, temp_dir.path().join("out").join("escape.json"));
}

#[test]
fn test_persist_unwritable_location_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let generator = ReportGenerator::new(blocker.join("reports"));
    let err = generator
        .persist("data", Some("r.json"), ReportFormat::Json)
        .unwrap_err();

    assert!(matches!(err, crate::Error::CreateDir { .. }));
}

#[test]
fn test_generate_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(temp_dir.path());
    let history = vec![create_test_record("gpt-4o", 1.0, 100, 50, 0.00075)];

    let report = generator
        .generate(ReportFormat::Json, &history, None)
        .unwrap();

    assert_eq!(report.format, ReportFormat::Json);
    assert!(report.path.to_string_lossy().ends_with(".json"));
    assert_eq!(std::fs::read_to_string(&report.path).unwrap(), report.content);

    let parsed: SummaryReport = serde_json::from_str(&report.content).unwrap();
    assert_eq!(parsed.totals().unwrap().total_requests, 1);
}

#[test]
fn test_generate_csv_report() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::new(temp_dir.path());
    let history = vec![create_test_record("gpt-4o", 1.0, 100, 50, 0.00075)];

    let report = generator
        .generate(ReportFormat::Csv, &history, Some("usage.csv"))
        .unwrap();

    assert_eq!(report.content, to_tabular(&history));
    assert_eq!(std::fs::read_to_string(&report.path).unwrap(), report.content);
}

#[test]
fn test_load_history_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("history.json");
    let history = vec![
        create_test_record("gpt-4o", 1.0, 100, 50, 0.00075),
        create_test_record("gpt-4o-mini", 0.25, 10, 5, 0.000005),
    ];
    std::fs::write(&path, serde_json::to_string(&history).unwrap()).unwrap();

    let loaded = load_history(&path).unwrap();
    assert_eq!(loaded, history);
}

#[test]
fn test_load_history_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = load_history(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, crate::Error::Read { .. }));

    let bad = temp_dir.path().join("bad.json");
    std::fs::write(&bad, "{\"not\": \"a list\"}").unwrap();
    let invalid = load_history(&bad).unwrap_err();
    assert!(matches!(invalid, crate::Error::InvalidHistory { .. }));
}
