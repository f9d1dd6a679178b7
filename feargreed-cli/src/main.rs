//! Fear & Greed CLI — export the CNN Fear & Greed history to CSV.
//!
//! With no arguments, fetches the history from 2020-07-14 and writes
//! `cnn_fear_greed.csv` in the working directory. Flags override a TOML
//! config file, which overrides the built-in defaults.

use anyhow::{Context, Result};
use clap::Parser;
use feargreed_core::{run, CnnProvider, MalformedPointPolicy, PipelineConfig, TracingProgress};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "feargreed",
    about = "Export the CNN Fear & Greed index history to CSV"
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// First day of history (YYYY-MM-DD). Defaults to 2020-07-14.
    #[arg(long)]
    start: Option<String>,

    /// Output CSV path. Defaults to ./cnn_fear_greed.csv.
    #[arg(long)]
    output: Option<PathBuf>,

    /// What to do with malformed points (non-object, missing or non-numeric `x`/`y`): skip or fail.
    #[arg(long)]
    on_malformed_point: Option<MalformedPointPolicy>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli)?;

    let provider = CnnProvider::new(config.endpoint.clone(), &config.headers)
        .context("failed to set up HTTP client")?;

    let report = run(&provider, &config, &TracingProgress)
        .with_context(|| format!("export from {} failed", config.request_url()))?;

    println!("{}", report.status_line());

    Ok(())
}

fn resolve_config(cli: Cli) -> Result<PipelineConfig> {
    let mut config = match cli.config {
        Some(path) => PipelineConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(start) = cli.start {
        config.start_date = start;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(policy) = cli.on_malformed_point {
        config.on_malformed_point = policy;
    }

    Ok(config)
}
