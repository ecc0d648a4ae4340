use crate::error::{PipelineError, Result};
use crate::structs::WeatherRecord;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, error};
use std::{fs::File, path::Path};

const MIN_FIELDS: usize = 4;

/// Records read from an input file along with the number of data rows dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub records: Vec<WeatherRecord>,
    pub skipped_rows: usize,
}

/// Loads weather observations from a CSV file.
///
/// The first line is treated as a header and ignored. Rows with fewer than
/// four fields, or with a non-numeric temperature, humidity or precipitation,
/// are skipped. Fields past the fourth are ignored.
///
/// # Arguments
/// * `file_path` - Path to the CSV file
///
/// # Returns
/// The valid records in file order. If the file cannot be opened or read, the
/// failure is logged and an empty `Vec` is returned, so callers cannot tell a
/// read failure apart from a file without data. Use [`try_load_data`] when the
/// distinction matters.
pub fn load_data(file_path: &Path) -> Vec<WeatherRecord> {
    match try_load_data(file_path) {
        Ok(loaded) => loaded.records,
        Err(err) => {
            error!("Error reading file: {}", err);
            Vec::new()
        }
    }
}

/// Loads weather observations from a CSV file, reporting read failures.
///
/// # Errors
/// Returns `PipelineError::Io` if the file cannot be opened, or
/// `PipelineError::Csv` if reading fails partway. Malformed rows never
/// produce an error.
pub fn try_load_data(file_path: &Path) -> Result<LoadedData> {
    debug!("Reading CSV file: {}", file_path.display());
    let file = File::open(file_path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut loaded = LoadedData::default();
    for row in reader.records() {
        let parsed = row.map_err(PipelineError::from).and_then(|row| parse_row(&row));
        match parsed {
            Ok(record) => loaded.records.push(record),
            Err(err) if err.is_row_error() => {
                debug!("Skipping row: {}", err);
                loaded.skipped_rows += 1;
            }
            Err(err) => return Err(err),
        }
    }

    debug!(
        "Loaded {} records, skipped {} rows",
        loaded.records.len(),
        loaded.skipped_rows
    );
    Ok(loaded)
}

/// Converts one CSV row into a record.
///
/// # Errors
/// `PipelineError::MissingFields` for short rows, `PipelineError::InvalidNumber`
/// when a numeric column does not parse.
pub fn parse_row(row: &StringRecord) -> Result<WeatherRecord> {
    if row.len() < MIN_FIELDS {
        return Err(PipelineError::MissingFields {
            expected: MIN_FIELDS,
            found: row.len(),
        });
    }

    Ok(WeatherRecord::new(
        &row[0],
        parse_number(&row[1], "temperature")?,
        parse_number(&row[2], "humidity")?,
        parse_number(&row[3], "precipitation")?,
    ))
}

fn parse_number(value: &str, column: &'static str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| PipelineError::InvalidNumber {
            column,
            value: value.to_string(),
        })
}
