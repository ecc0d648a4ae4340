use crate::error::Result;
use crate::structs::WeatherSummary;
use csv::Writer;
use std::{fs::File, path::Path};

/// Writes summary statistics to a CSV file as `Metric,Value` rows.
///
/// Temperatures are formatted to one decimal place. Each non-empty temperature
/// category gets its own `Category: <name>` row after the scalar metrics.
///
/// # Arguments
/// * `summary` - Statistics computed from the loaded records
/// * `output_path` - Path where the CSV file will be created
///
/// # Errors
/// Returns error if file cannot be created or written to.
pub fn write_csv(summary: &WeatherSummary, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = Writer::from_writer(file);

    let rows = [
        ("Total_Records", summary.total_records.to_string()),
        ("Min_Temp", format!("{:.1}", summary.min_temp)),
        ("Max_Temp", format!("{:.1}", summary.max_temp)),
        ("Avg_Temp", format!("{:.1}", summary.avg_temp)),
        ("Rainy_Days", summary.rainy_days.to_string()),
    ];

    writer.write_record(["Metric", "Value"])?;
    for (metric, value) in &rows {
        writer.write_record([*metric, value.as_str()])?;
    }

    for (category, count) in &summary.categories {
        writer.write_record([format!("Category: {}", category), count.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes summary statistics to a pretty-formatted JSON file.
///
/// # Errors
/// Returns error if file cannot be created or serialization fails.
pub fn write_json(summary: &WeatherSummary, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}
