//! # salescast
//!
//! Submit a sales dataset for forecasting, export the result, and browse the
//! forecast archive from the terminal.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use salescast_chart::PlottersSnapshotter;
use salescast_cloud::{ForecastServiceClient, HttpArchive};
use salescast_core::config::CliOverrides;
use salescast_core::errors::SalescastErrorCode;
use salescast_core::traits::IForecastArchive;
use salescast_core::tracing_setup::{init_tracing, init_tracing_json};
use salescast_core::{DatasetUpload, ForecastVariant, Region, SalescastConfig};
use salescast_export::ExportFormats;
use salescast_projection::{sort_for_display, DetailView, ThumbnailView};
use salescast_session::ForecastSession;
use tracing::info;

#[derive(Parser)]
#[command(name = "salescast")]
#[command(about = "Sales forecasting client", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Forecast service base URL (overrides config)
    #[arg(long, global = true)]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a dataset and print the forecast
    Forecast {
        /// Dataset to upload (CSV)
        #[arg(short, long)]
        file: PathBuf,

        /// Model variant (univariate, multivariate)
        #[arg(short, long, default_value = "univariate")]
        variant: ForecastVariant,

        /// Region code for the multivariate model (IN, US, CA, UK, FR, DE, AU)
        #[arg(short, long)]
        region: Option<Region>,

        /// Write a PDF report
        #[arg(long)]
        pdf: bool,

        /// Write a CSV table plus the chart image
        #[arg(long)]
        csv: bool,

        /// Save the result to the archive
        #[arg(long)]
        save: bool,

        /// Output directory for exports
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List saved forecasts, newest first
    Saves {
        /// Show the full table of the Nth listed forecast (1-based)
        #[arg(short, long)]
        detail: Option<usize>,

        /// Print the saved records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.log_json {
        init_tracing_json();
    } else {
        init_tracing();
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_dir = match &cli.command {
        Commands::Forecast { out, .. } => out.as_ref().map(|p| p.display().to_string()),
        _ => None,
    };
    let overrides = CliOverrides {
        service_url: cli.service_url.clone(),
        output_dir,
        default_region: None,
    };
    let config = SalescastConfig::load(Path::new("."), Some(&overrides)).map_err(report)?;

    match cli.command {
        Commands::Forecast {
            file,
            variant,
            region,
            pdf,
            csv,
            save,
            ..
        } => {
            let formats = ExportFormats { pdf, csv };
            forecast(&config, &file, variant, region, formats, save).await
        }
        Commands::Saves { detail, json } => saves(&config, detail, json).await,
        Commands::Config => {
            print!("{}", config.to_toml().map_err(report)?);
            Ok(())
        }
    }
}

async fn forecast(
    config: &SalescastConfig,
    file: &Path,
    variant: ForecastVariant,
    region: Option<Region>,
    formats: ExportFormats,
    save: bool,
) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let service = ForecastServiceClient::new(&config.service).map_err(report)?;
    let archive = HttpArchive::new(&config.service).map_err(report)?;
    let mut session = ForecastSession::new(service, archive, config);
    session.select_file(DatasetUpload::new(file_name, bytes));
    if region.is_some() {
        session.select_region(region);
    }

    session.submit(variant).await.map_err(report)?;
    let decimals = config.export.effective_table_decimals();
    if let Some(result) = session.current() {
        println!("{}", DetailView::from_result(result, decimals));
    }

    if !formats.is_empty() {
        let artifacts = session
            .export(formats, &PlottersSnapshotter::new())
            .await
            .map_err(report)?;
        let written = artifacts
            .write_to(&config.export.effective_output_dir())
            .await
            .map_err(report)?;
        for path in written {
            println!("wrote {}", path.display());
        }
    }

    if save {
        let ack = session.save().await.map_err(report)?;
        info!(id = ?ack.id, "forecast archived");
        println!(
            "{}",
            ack.message.as_deref().unwrap_or("Forecast saved successfully")
        );
    }
    Ok(())
}

async fn saves(config: &SalescastConfig, detail: Option<usize>, json: bool) -> anyhow::Result<()> {
    let archive = HttpArchive::new(&config.service).map_err(report)?;
    let listing = archive.list().await.map_err(report)?;
    for skipped in &listing.errors {
        eprintln!("skipped record: {}", skipped.display_string());
    }

    let mut results = listing.data;
    if json {
        let records: Vec<_> = results.iter().map(|r| r.to_record()).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    sort_for_display(&mut results);
    match detail {
        Some(n) => {
            let result = n
                .checked_sub(1)
                .and_then(|i| results.get(i))
                .ok_or_else(|| anyhow!("no saved forecast #{n} ({} listed)", results.len()))?;
            let decimals = config.export.effective_table_decimals();
            println!("{}", DetailView::from_result(result, decimals));
        }
        None if results.is_empty() => println!("No saved forecasts."),
        None => {
            for (i, result) in results.iter().enumerate() {
                println!("#{}\n{}", i + 1, ThumbnailView::from_result(result));
            }
        }
    }
    Ok(())
}

fn report(e: impl Into<salescast_core::SalescastError>) -> anyhow::Error {
    anyhow!(e.into().display_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_forecast_args_parse() {
        let cli = Cli::try_parse_from([
            "salescast",
            "forecast",
            "--file",
            "sales.csv",
            "--variant",
            "multivariate",
            "--region",
            "us",
            "--pdf",
        ])
        .unwrap();
        match cli.command {
            Commands::Forecast {
                variant,
                region,
                pdf,
                csv,
                ..
            } => {
                assert_eq!(variant, ForecastVariant::Multivariate);
                assert_eq!(region, Some(Region::UnitedStates));
                assert!(pdf);
                assert!(!csv);
            }
            _ => panic!("expected forecast command"),
        }
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        let parsed = Cli::try_parse_from(["salescast", "forecast", "-f", "a.csv", "-r", "XX"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["salescast", "saves", "--log-json", "--detail", "2"]).unwrap();
        assert!(cli.log_json);
        assert!(matches!(cli.command, Commands::Saves { detail: Some(2), json: false }));
    }
}
