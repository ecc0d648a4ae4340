use crate::structs::{AnalysisConfig, TemperatureCategory, WeatherRecord, WeatherSummary};
use log::debug;
use std::collections::BTreeMap;

const NO_DATA_MESSAGE: &str = "No weather data available.";
const CATEGORY_BAND: f64 = 20.0;

/// Calculates the average temperature for one `YYYY-MM` month.
///
/// # Arguments
///
/// * `records` - Weather observations to search
/// * `year_month` - Month key in `YYYY-MM` form, compared against [`WeatherRecord::year_month`]
///
/// # Returns
///
/// Returns `Some(avg)` over every matching record, or `None` when no record falls in that month.
pub fn average_temperature_for_month(records: &[WeatherRecord], year_month: &str) -> Option<f64> {
    let (sum, count) = records
        .iter()
        .filter(|r| r.year_month() == year_month)
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.temperature(), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Returns the dates of all records strictly warmer than `threshold`, in input order.
pub fn days_above_temperature(records: &[WeatherRecord], threshold: f64) -> Vec<&str> {
    records
        .iter()
        .filter(|r| r.temperature() > threshold)
        .map(|r| r.date())
        .collect()
}

pub fn rainy_day_count(records: &[WeatherRecord]) -> usize {
    records.iter().filter(|r| r.is_rainy()).count()
}

/// Buckets a temperature by `floor(temperature / 20)`.
///
/// | band   | category  |
/// |--------|-----------|
/// | < 0    | Freezing  |
/// | 0      | Very Cold |
/// | 1      | Cold      |
/// | 2, 3   | Mild      |
/// | 4      | Warm      |
/// | >= 5   | Hot       |
///
/// The cast saturates, so infinities land in the outer bands and NaN in band 0.
pub fn categorize(temperature: f64) -> TemperatureCategory {
    let band = (temperature / CATEGORY_BAND).floor() as i64;
    match band {
        i64::MIN..=-1 => TemperatureCategory::Freezing,
        0 => TemperatureCategory::VeryCold,
        1 => TemperatureCategory::Cold,
        2 | 3 => TemperatureCategory::Mild,
        4 => TemperatureCategory::Warm,
        5.. => TemperatureCategory::Hot,
    }
}

/// Counts records per temperature category. Categories with no records are absent.
pub fn category_counts(records: &[WeatherRecord]) -> BTreeMap<TemperatureCategory, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(categorize(record.temperature())).or_insert(0) += 1;
    }
    counts
}

/// Computes the statistics behind the summary report.
///
/// Returns `None` for an empty slice.
pub fn compute_summary(records: &[WeatherRecord]) -> Option<WeatherSummary> {
    if records.is_empty() {
        return None;
    }

    let min_temp = records
        .iter()
        .map(|r| r.temperature())
        .fold(f64::INFINITY, f64::min);
    let max_temp = records
        .iter()
        .map(|r| r.temperature())
        .fold(f64::NEG_INFINITY, f64::max);
    let avg_temp = records.iter().map(|r| r.temperature()).sum::<f64>() / records.len() as f64;

    let summary = WeatherSummary {
        total_records: records.len(),
        min_temp,
        max_temp,
        avg_temp,
        rainy_days: rainy_day_count(records),
        categories: category_counts(records),
    };
    debug!(
        "Summary computed over {} records ({} categories)",
        summary.total_records,
        summary.categories.len()
    );
    Some(summary)
}

/// Renders the summary report, or the fixed no-data message for an empty slice.
pub fn summarize(records: &[WeatherRecord]) -> String {
    match compute_summary(records) {
        Some(summary) => render_summary(&summary),
        None => NO_DATA_MESSAGE.to_string(),
    }
}

/// Formats precomputed statistics using the report template.
pub fn render_summary(summary: &WeatherSummary) -> String {
    let categories = summary
        .categories
        .iter()
        .map(|(category, count)| format!("  {}: {} days", category, count))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Weather Data Summary\n\
         ===================\n\
         \n\
         Total Records: {}\n\
         Temperature Range: {:.1}°F to {:.1}°F\n\
         Average Temperature: {:.1}°F\n\
         Rainy Days: {}\n\
         \n\
         Temperature Categories:\n\
         {}\n",
        summary.total_records,
        summary.min_temp,
        summary.max_temp,
        summary.avg_temp,
        summary.rainy_days,
        categories
    )
}

/// Average temperature of every month present, in first-seen order.
pub fn monthly_averages(records: &[WeatherRecord]) -> Vec<(String, f64)> {
    let mut months: Vec<&str> = Vec::new();
    for record in records {
        let key = record.year_month();
        if !months.contains(&key) {
            months.push(key);
        }
    }

    months
        .into_iter()
        .filter_map(|month| {
            average_temperature_for_month(records, month).map(|avg| (month.to_string(), avg))
        })
        .collect()
}

/// Renders the days-above-threshold section printed after the summary.
pub fn render_additional_analysis(records: &[WeatherRecord], config: &AnalysisConfig) -> String {
    let above = days_above_temperature(records, config.threshold);
    let mut out = format!(
        "Additional Analysis:\n-------------------\nDays above {}°F: {}",
        config.threshold,
        above.len()
    );
    if !above.is_empty() {
        let listed = above
            .iter()
            .take(config.limit)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "\nFirst {} above average days: {}",
            config.limit, listed
        ));
    }
    out
}
