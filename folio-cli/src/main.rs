//! Folio CLI — inspect, export, and sample commands.
//!
//! Commands:
//! - `inspect` — summarize a spreadsheet: series, categories, date coverage
//! - `export` — run the pipeline with view flags and write CSV or JSON
//! - `sample` — write the synthetic demo dataset as a loadable CSV

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use folio_core::config::FolioConfig;
use folio_core::data::{self, synthetic, Source};
use folio_core::domain::{Dataset, ValueMode};
use folio_core::transform::{RangePct, ViewState};

#[derive(Parser)]
#[command(name = "folio", about = "Folio CLI — portfolio chart data pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a dataset: series names, categories, date coverage.
    Inspect {
        /// Spreadsheet path or http(s) URL (.xlsx or .csv).
        source: String,

        /// TOML config with category rules.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run the pipeline and write the processed points.
    Export {
        /// Spreadsheet path or http(s) URL (.xlsx or .csv).
        source: String,

        /// Output file.
        #[arg(long)]
        output: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        /// Export percent change from start instead of absolute values.
        #[arg(long, default_value_t = false)]
        relative: bool,

        /// Trailing moving-average window in samples (1 = none).
        #[arg(long, default_value_t = 1)]
        smooth: usize,

        /// Window start, percent of the full date axis.
        #[arg(long, default_value_t = 0)]
        from: u8,

        /// Window end, percent of the full date axis.
        #[arg(long, default_value_t = 100)]
        to: u8,

        /// Only these series (repeatable). Defaults to all.
        #[arg(long)]
        series: Vec<String>,

        /// TOML config with category rules.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Generate the synthetic demo dataset.
    Sample {
        /// Output CSV file, written in the loadable row-major layout.
        #[arg(long)]
        output: PathBuf,

        /// Number of daily samples.
        #[arg(long, default_value_t = synthetic::DEFAULT_POINTS)]
        points: usize,

        /// Noise seed.
        #[arg(long, default_value_t = synthetic::DEFAULT_SEED)]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Inspect { source, config } => cmd_inspect(&source, config.as_deref()),
        Commands::Export {
            source,
            output,
            format,
            relative,
            smooth,
            from,
            to,
            series,
            config,
        } => cmd_export(
            &source,
            &output,
            format,
            relative,
            smooth,
            RangePct::new(from, to),
            &series,
            config.as_deref(),
        ),
        Commands::Sample {
            output,
            points,
            seed,
        } => cmd_sample(&output, points, seed),
    }
}

fn load(source: &str, config: Option<&Path>) -> Result<Dataset> {
    let config = match config {
        Some(path) => FolioConfig::from_path(path)?,
        None => FolioConfig::default(),
    };
    let source = Source::parse(source);
    data::load_dataset(&source, &config.categories)
        .with_context(|| format!("loading {source}"))
}

fn cmd_inspect(source: &str, config: Option<&Path>) -> Result<()> {
    let dataset = load(source, config)?;

    match dataset.date_range() {
        Some((first, last)) => println!(
            "{} series, {} points, {first} – {last}",
            dataset.series.len(),
            dataset.points.len()
        ),
        None => println!("{} series, 0 points", dataset.series.len()),
    }
    println!();
    println!("{:<40} {:<8} {:>7} {:>12}", "Series", "Category", "Points", "First value");
    for meta in &dataset.series {
        let defined = dataset
            .points
            .iter()
            .filter(|point| point.absolute.contains_key(&meta.name))
            .count();
        let first = match dataset.first_value(&meta.name) {
            Some(value) => format!("{value:.2}"),
            None => "-".into(),
        };
        println!(
            "{:<40} {:<8} {:>7} {:>12}",
            meta.name,
            meta.category.label(),
            defined,
            first
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_export(
    source: &str,
    output: &Path,
    format: Format,
    relative: bool,
    smooth: usize,
    range: RangePct,
    series: &[String],
    config: Option<&Path>,
) -> Result<()> {
    let dataset = load(source, config)?;

    let mut view = ViewState::for_dataset(&dataset);
    view.range = range;
    view.smoothing = smooth.max(1);
    view.mode = if relative {
        ValueMode::Relative
    } else {
        ValueMode::Absolute
    };
    if !series.is_empty() {
        let known: BTreeSet<&str> = dataset.series_names().collect();
        for name in series {
            if !known.contains(name.as_str()) {
                bail!("unknown series {name:?}; run `folio inspect` to list names");
            }
        }
        view.visible = series.iter().cloned().collect();
    }

    let points = view.apply(&dataset);
    let names: Vec<&str> = dataset
        .series_names()
        .filter(|name| view.is_visible(name))
        .collect();

    match format {
        Format::Csv => write_csv(output, &points, &names, view.mode)?,
        Format::Json => write_json(output, &points, &names, view.mode)?,
    }
    println!(
        "Wrote {} points x {} series to {}",
        points.len(),
        names.len(),
        output.display()
    );
    Ok(())
}

/// Wide layout, one row per date. Omitted values stay empty fields.
fn write_csv(
    output: &Path,
    points: &[folio_core::domain::TimePoint],
    names: &[&str],
    mode: ValueMode,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    let mut header = vec!["date".to_string()];
    header.extend(names.iter().map(|name| name.to_string()));
    writer.write_record(&header)?;

    for point in points {
        let mut record = vec![point.date.to_string()];
        for name in names {
            record.push(match point.value(name, mode) {
                Some(value) => value.to_string(),
                None => String::new(),
            });
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Array of dated records; omitted values are absent keys, never null.
fn write_json(
    output: &Path,
    points: &[folio_core::domain::TimePoint],
    names: &[&str],
    mode: ValueMode,
) -> Result<()> {
    let records: Vec<serde_json::Value> = points
        .iter()
        .map(|point| {
            let mut values = serde_json::Map::new();
            for name in names {
                if let Some(value) = point.value(name, mode) {
                    values.insert((*name).to_string(), value.into());
                }
            }
            serde_json::json!({
                "date": point.date.to_string(),
                "values": values,
            })
        })
        .collect();
    let file = std::fs::File::create(output)
        .with_context(|| format!("creating {}", output.display()))?;
    serde_json::to_writer_pretty(file, &records)?;
    Ok(())
}

/// The loader's own row-major layout: header of dates, one series per row.
fn cmd_sample(output: &Path, points: usize, seed: u64) -> Result<()> {
    let dataset = synthetic::generate(points, seed);

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    let mut header = vec!["Series".to_string()];
    header.extend(dataset.points.iter().map(|point| point.date.to_string()));
    writer.write_record(&header)?;

    for meta in &dataset.series {
        let mut record = vec![meta.name.clone()];
        for point in &dataset.points {
            record.push(match point.absolute.get(&meta.name) {
                Some(value) => format!("{value:.4}"),
                None => String::new(),
            });
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    println!(
        "Wrote {} series x {points} points to {}",
        dataset.series.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_round_trips_through_the_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        cmd_sample(&path, 25, 3).unwrap();

        let dataset = load(path.to_str().unwrap(), None).unwrap();
        assert_eq!(dataset.points.len(), 25);
        assert_eq!(dataset.series.len(), 10);
        assert_eq!(dataset.points[0].relative["Growth Portfolio"], 0.0);
    }

    #[test]
    fn export_writes_the_selected_window() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        std::fs::write(
            &input,
            "Series,2023-01-01,2023-01-02,2023-01-03,2023-01-04\nA,10,20,30,40\n",
        )
        .unwrap();

        let output = dir.path().join("out.csv");
        cmd_export(
            input.to_str().unwrap(),
            &output,
            Format::Csv,
            false,
            1,
            RangePct::new(50, 100),
            &[],
            None,
        )
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "date,A");
        assert_eq!(lines[1], "2023-01-03,30");
        assert_eq!(lines[2], "2023-01-04,40");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn export_rejects_unknown_series() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        std::fs::write(&input, "Series,2023-01-01\nA,10\n").unwrap();

        let err = cmd_export(
            input.to_str().unwrap(),
            &dir.path().join("out.csv"),
            Format::Csv,
            false,
            1,
            RangePct::full(),
            &["Nope".to_string()],
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown series"));
    }
}
