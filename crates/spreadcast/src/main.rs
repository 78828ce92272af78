mod loader;
mod logging;
mod report;

use std::path::{Path, PathBuf};

use clap::Parser;
use jiff::civil::Date;

use spreadcast_core::config::ForecastConfig;
use spreadcast_core::pipeline;

#[derive(Parser, Debug)]
#[command(name = "spreadcast")]
#[command(about = "Bootstrap forecast of the return spread between two instruments")]
struct Args {
    /// CSV of daily closes for the first instrument (date,close)
    series_a: PathBuf,

    /// CSV of daily closes for the second instrument (date,close)
    series_b: PathBuf,

    /// Display name for the first instrument (default: file stem)
    #[arg(long)]
    symbol_a: Option<String>,

    /// Display name for the second instrument (default: file stem)
    #[arg(long)]
    symbol_b: Option<String>,

    /// Directory for the report and data tables
    #[arg(short, long, default_value = "forecast_out")]
    out_dir: PathBuf,

    /// Trading days per window
    #[arg(long, default_value_t = 10)]
    window_length: usize,

    /// Number of future windows to forecast
    #[arg(long, default_value_t = 26)]
    horizon_periods: usize,

    /// Bootstrap draws per forecast window
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Random seed for the forecast run
    #[arg(long, default_value_t = 2026)]
    seed: u64,

    /// High-confidence threshold in percent
    #[arg(long, default_value_t = 65.0)]
    threshold: f64,

    /// First candidate date of the forecast calendar
    #[arg(long, default_value = "2026-01-02")]
    forecast_start: Date,

    /// Also write the full run as forecast.json
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "series".to_string())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    let symbol_a = args.symbol_a.clone().unwrap_or_else(|| file_stem(&args.series_a));
    let symbol_b = args.symbol_b.clone().unwrap_or_else(|| file_stem(&args.series_b));

    let series_a = loader::load_price_series(&args.series_a, &symbol_a)?;
    let series_b = loader::load_price_series(&args.series_b, &symbol_b)?;

    let config = ForecastConfig {
        window_length: args.window_length,
        horizon_periods: args.horizon_periods,
        samples_per_period: args.samples,
        seed: args.seed,
        high_confidence_threshold: args.threshold,
        forecast_start: args.forecast_start,
    };

    let run = pipeline::run(&series_a, &series_b, &config)?;
    tracing::info!(
        "forecast complete: {} historical periods, {} forecast periods",
        run.historical.len(),
        run.forecasts.len()
    );

    report::write_outputs(&args.out_dir, &run, &config, &symbol_a, &symbol_b, args.json)?;
    print!("{}", report::render_report(&run, &config, &symbol_a, &symbol_b));

    Ok(())
}
