use clap::Parser;
use lib::{
    AnalysisConfig, ExportFormat, PipelineError, SimpleLogger, average_temperature_for_month,
    compute_summary, load_data, monthly_averages, render_additional_analysis, render_summary,
    write_csv, write_json,
};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

static LOGGER: SimpleLogger = SimpleLogger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file (header line followed by date,temperature,humidity,precipitation rows)
    #[arg(short, long, default_value = "data/weather_data.csv")]
    input_file: PathBuf,

    /// List days strictly warmer than this temperature (°F)
    #[arg(long, default_value_t = 29.0)]
    threshold: f64,

    /// Maximum number of matching dates to list
    #[arg(long, default_value_t = 5)]
    limit: usize,

    /// Print the average temperature for one month (YYYY-MM)
    #[arg(long)]
    month: Option<String>,

    /// Print the average temperature of every month in the file
    #[arg(long, default_value_t = false)]
    monthly: bool,

    /// Write the computed statistics to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format of the --output file
    #[arg(long, default_value = "json")]
    format: ExportFormat,

    /// Log level for output
    #[arg(long, default_value = "false")]
    debug: bool,
}

fn main() -> Result<ExitCode, PipelineError> {
    if let Err(err) = log::set_logger(&LOGGER) {
        eprintln!("Failed to install logger: {}", err);
    }

    let args = Args::parse();
    if args.debug {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Info);
    }
    debug!(
        "Input file: {} | Threshold: {} | Limit: {}",
        args.input_file.display(),
        args.threshold,
        args.limit
    );

    let records = load_data(&args.input_file);
    let Some(summary) = compute_summary(&records) else {
        println!(
            "No data found. Please check the file path: {}",
            args.input_file.display()
        );
        return Ok(ExitCode::FAILURE);
    };

    println!("{}", render_summary(&summary));

    let config = AnalysisConfig {
        threshold: args.threshold,
        limit: args.limit,
    };
    println!("\n{}", render_additional_analysis(&records, &config));

    if let Some(month) = &args.month {
        match average_temperature_for_month(&records, month) {
            Some(avg) => println!("\nAverage Temperature for {}: {:.1}°F", month, avg),
            None => println!("\nNo data for {}", month),
        }
    }

    if args.monthly {
        println!("\nMonthly Averages:");
        for (month, avg) in monthly_averages(&records) {
            println!("  {}: {:.1}°F", month, avg);
        }
    }

    if let Some(output) = &args.output {
        match args.format {
            ExportFormat::Csv => write_csv(&summary, output)?,
            ExportFormat::Json => write_json(&summary, output)?,
        }
        println!("\nWrote statistics to {}", output.display());
    }

    Ok(ExitCode::SUCCESS)
}
