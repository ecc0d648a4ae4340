use lib::{
    TemperatureCategory, category_counts, compute_summary, days_above_temperature, load_data,
    summarize, try_load_data,
};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_then_summarize() {
    let file = write_csv(
        "Date,Temperature,Humidity,Precipitation\n\
         2024-01-01,10.0,60.0,0.0\n\
         2024-01-02,30.0\n\
         2024-01-03,30.0,65.0,0.0\n\
         2024-01-04,50.0,70.0,0.0\n",
    );

    let records = load_data(file.path());
    assert_eq!(records.len(), 3);
    let dates: Vec<_> = records.iter().map(|r| r.date()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-03", "2024-01-04"]);

    let report = summarize(&records);
    assert!(report.contains("Total Records: 3"));
    assert!(report.contains("Temperature Range: 10.0°F to 50.0°F"));
    assert!(report.contains("Average Temperature: 30.0°F"));
    assert!(report.contains("Rainy Days: 0"));
    assert!(report.contains("  Very Cold: 1 days\n  Cold: 1 days\n  Mild: 1 days"));
}

#[test]
fn test_sample_dataset() {
    let loaded = try_load_data(std::path::Path::new("data/weather_data.csv")).unwrap();
    assert_eq!(loaded.records.len(), 16);
    assert_eq!(loaded.skipped_rows, 2);

    let summary = compute_summary(&loaded.records).unwrap();
    assert_eq!(summary.rainy_days, 5);
    assert_eq!(summary.min_temp, -3.5);
    assert_eq!(summary.max_temp, 104.2);

    let counts = category_counts(&loaded.records);
    assert_eq!(counts.values().sum::<usize>(), loaded.records.len());
    assert_eq!(counts.get(&TemperatureCategory::Freezing), Some(&1));
    assert_eq!(counts.get(&TemperatureCategory::Hot), Some(&1));

    let above = days_above_temperature(&loaded.records, 29.0);
    assert!(!above.contains(&"2023-01-05"));
    assert_eq!(above.first(), Some(&"2023-01-02"));
}

#[test]
fn test_cli_reports_summary() {
    let output = Command::new(env!("CARGO_BIN_EXE_weather_report"))
        .args(["--input-file", "data/weather_data.csv"])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Weather Data Summary\n===================\n"));
    assert!(stdout.contains("Additional Analysis:\n-------------------\nDays above 29°F: 12"));
    assert!(stdout.contains(
        "First 5 above average days: 2023-01-02, 2023-01-06, 2023-01-07, 2023-02-01, 2023-02-02"
    ));
}

#[test]
fn test_cli_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowhere.csv");
    let output = Command::new(env!("CARGO_BIN_EXE_weather_report"))
        .arg("--input-file")
        .arg(&path)
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("No data found. Please check the file path:"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ERROR] Error reading file:"));
}
