//! Report rendering and output-file writing.
//!
//! Owns every serialized representation of a run: the markdown summary
//! report, the historical and forecast CSV tables, and an optional JSON
//! dump of the whole run.

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;

use spreadcast_core::config::ForecastConfig;
use spreadcast_core::model::ForecastRun;

/// Render the markdown summary report.
pub fn render_report(
    run: &ForecastRun,
    config: &ForecastConfig,
    symbol_a: &str,
    symbol_b: &str,
) -> String {
    let year = config.forecast_start.year();
    let summary = &run.summary;

    format!(
        "# {year} Spread Forecast: {symbol_a} vs {symbol_b}\n\
         \n\
         History: {aligned} aligned trading days, {hist} periods of {w} days\n\
         Forecast: {periods} periods of {w} days, {samples} draws each (seed {seed})\n\
         \n\
         ## Results\n\
         - **Expected cumulative {symbol_a} outperformance**: {cum:+.2}%\n\
         - **Average per-period edge**: {mean:+.3}%\n\
         - **High-confidence periods (P > {threshold}%)**: {high} of {periods}\n",
        aligned = run.aligned_days,
        hist = run.historical.len(),
        w = config.window_length,
        periods = summary.periods,
        samples = config.samples_per_period,
        seed = config.seed,
        cum = summary.cumulative_spread,
        mean = summary.mean_spread,
        threshold = config.high_confidence_threshold,
        high = summary.high_confidence_periods,
    )
}

/// Write the report and data tables into `out_dir`.
///
/// Produces `FORECAST_REPORT.md`, `historical_spreads.csv`, `forecast.csv`
/// and, when `json` is set, `forecast.json` with the full run record.
pub fn write_outputs(
    out_dir: &Path,
    run: &ForecastRun,
    config: &ForecastConfig,
    symbol_a: &str,
    symbol_b: &str,
    json: bool,
) -> color_eyre::Result<()> {
    fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("failed to create output directory {}", out_dir.display()))?;

    let report_path = out_dir.join("FORECAST_REPORT.md");
    fs::write(&report_path, render_report(run, config, symbol_a, symbol_b))
        .wrap_err_with(|| format!("failed to write {}", report_path.display()))?;

    let hist_path = out_dir.join("historical_spreads.csv");
    let mut writer = csv::Writer::from_path(&hist_path)
        .wrap_err_with(|| format!("failed to create {}", hist_path.display()))?;
    for window in &run.historical {
        writer.serialize(window)?;
    }
    writer.flush()?;

    let forecast_path = out_dir.join("forecast.csv");
    let mut writer = csv::Writer::from_path(&forecast_path)
        .wrap_err_with(|| format!("failed to create {}", forecast_path.display()))?;
    for window in &run.forecasts {
        writer.serialize(window)?;
    }
    writer.flush()?;

    if json {
        let json_path = out_dir.join("forecast.json");
        let payload = serde_json::to_string_pretty(run)?;
        fs::write(&json_path, payload)
            .wrap_err_with(|| format!("failed to write {}", json_path.display()))?;
    }

    tracing::info!("outputs written to {}", out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spreadcast_core::model::{ForecastSummary, ForecastWindow, HistoricalWindow};

    fn sample_run() -> ForecastRun {
        let d = jiff::civil::date(2024, 1, 2);
        ForecastRun {
            aligned_days: 20,
            historical: vec![HistoricalWindow {
                period: 1,
                start: d,
                end: jiff::civil::date(2024, 1, 15),
                return_a: 2.0,
                return_b: 1.0,
                spread: 1.0,
            }],
            forecasts: vec![ForecastWindow {
                period: 1,
                start: jiff::civil::date(2026, 1, 2),
                end: jiff::civil::date(2026, 1, 15),
                expected_spread: 1.0,
                probability_outperform: 100.0,
            }],
            summary: ForecastSummary {
                cumulative_spread: 1.0,
                mean_spread: 1.0,
                high_confidence_periods: 1,
                periods: 1,
            },
        }
    }

    #[test]
    fn test_report_contains_headline_numbers() {
        let report = render_report(&sample_run(), &ForecastConfig::default(), "NQ", "ES");
        assert!(report.contains("NQ vs ES"));
        assert!(report.contains("+1.00%"));
        assert!(report.contains("P > 65%"));
        assert!(report.contains("1 of 1"));
    }

    #[test]
    fn test_write_outputs_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let run = sample_run();
        write_outputs(
            dir.path(),
            &run,
            &ForecastConfig::default(),
            "NQ",
            "ES",
            true,
        )
        .unwrap();

        assert!(dir.path().join("FORECAST_REPORT.md").exists());
        assert!(dir.path().join("historical_spreads.csv").exists());
        assert!(dir.path().join("forecast.csv").exists());

        let json = std::fs::read_to_string(dir.path().join("forecast.json")).unwrap();
        let parsed: ForecastRun = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, run);
    }
}
