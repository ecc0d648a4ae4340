use log::{Log, Metadata, Record as LogRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Simple logger implementation, writes diagnostics to stderr
pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &LogRecord) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// One daily weather observation.
///
/// Fields are private so a record cannot change after it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    date: String,
    temperature: f64,
    humidity: f64,
    precipitation: f64,
}

impl WeatherRecord {
    /// Builds a record from a `YYYY-MM-DD` date, temperature (°F),
    /// humidity (%) and precipitation (inches).
    pub fn new(date: impl Into<String>, temperature: f64, humidity: f64, precipitation: f64) -> Self {
        Self {
            date: date.into(),
            temperature,
            humidity,
            precipitation,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    pub fn precipitation(&self) -> f64 {
        self.precipitation
    }

    /// True when any precipitation was recorded.
    pub fn is_rainy(&self) -> bool {
        self.precipitation > 0.0
    }

    /// The `YYYY-MM` prefix of the date: its first 7 characters, or the
    /// whole date when it is shorter than that.
    pub fn year_month(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}

/// Temperature bucket, one per 20°F band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TemperatureCategory {
    Freezing,
    #[serde(rename = "Very Cold")]
    VeryCold,
    Cold,
    Mild,
    Warm,
    Hot,
}

impl TemperatureCategory {
    pub const ALL: [TemperatureCategory; 6] = [
        TemperatureCategory::Freezing,
        TemperatureCategory::VeryCold,
        TemperatureCategory::Cold,
        TemperatureCategory::Mild,
        TemperatureCategory::Warm,
        TemperatureCategory::Hot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureCategory::Freezing => "Freezing",
            TemperatureCategory::VeryCold => "Very Cold",
            TemperatureCategory::Cold => "Cold",
            TemperatureCategory::Mild => "Mild",
            TemperatureCategory::Warm => "Warm",
            TemperatureCategory::Hot => "Hot",
        }
    }
}

impl fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate statistics over a non-empty set of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub total_records: usize,
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub rainy_days: usize,
    pub categories: BTreeMap<TemperatureCategory, usize>,
}

/// Parameters for the additional analysis section
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub threshold: f64,
    pub limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: 29.0,
            limit: 5,
        }
    }
}

/// Output format for exported statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rainy_only_when_precipitation_positive() {
        assert!(WeatherRecord::new("2024-01-01", 30.0, 50.0, 0.01).is_rainy());
        assert!(!WeatherRecord::new("2024-01-01", 30.0, 50.0, 0.0).is_rainy());
        assert!(!WeatherRecord::new("2024-01-01", 30.0, 50.0, -0.5).is_rainy());
    }

    #[test]
    fn year_month_is_first_seven_chars() {
        let record = WeatherRecord::new("2024-03-15", 30.0, 50.0, 0.0);
        assert_eq!(record.year_month(), "2024-03");
    }

    #[test]
    fn year_month_of_short_date_is_whole_date() {
        let record = WeatherRecord::new("2024", 30.0, 50.0, 0.0);
        assert_eq!(record.year_month(), "2024");
    }

    #[test]
    fn category_labels() {
        let labels: Vec<_> = TemperatureCategory::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Freezing", "Very Cold", "Cold", "Mild", "Warm", "Hot"]
        );
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&TemperatureCategory::VeryCold).unwrap();
        assert_eq!(json, "\"Very Cold\"");
    }

    #[test]
    fn default_analysis_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.threshold, 29.0);
        assert_eq!(config.limit, 5);
    }
}
