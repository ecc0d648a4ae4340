pub mod error;
pub mod extract;
pub mod load;
pub mod structs;
pub mod transform;

// Re-export public API
pub use error::{PipelineError, Result};
pub use extract::{LoadedData, load_data, parse_row, try_load_data};
pub use load::{write_csv, write_json};
pub use structs::{
    AnalysisConfig, ExportFormat, SimpleLogger, TemperatureCategory, WeatherRecord, WeatherSummary,
};
pub use transform::{
    average_temperature_for_month, categorize, category_counts, compute_summary,
    days_above_temperature, monthly_averages, rainy_day_count, render_additional_analysis,
    render_summary, summarize,
};
