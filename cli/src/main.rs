use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use freq_charts_cli::SvgSurface;
use freq_charts_config::{parser as config_parser, ChartsConfig, ConfigValidator};
use freq_charts_data::DataManager;
use freq_charts_renderer::summary::{SortMethod, SummaryTable};
use freq_charts_renderer::ChartView;
use freq_charts_shared::{ChartKind, FrequencyTable};

#[derive(Parser)]
#[command(name = "freq-charts")]
#[command(about = "Aggregate JSON documents into frequency charts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (TOML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the aggregated summary table
    Summary {
        /// JSON files to aggregate
        files: Vec<PathBuf>,

        /// Sort column (defaults to the configured one)
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Render a chart to an SVG file
    Chart {
        /// JSON files to aggregate
        files: Vec<PathBuf>,

        /// Chart kind (defaults to the configured one)
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        #[arg(long, default_value_t = 800.0)]
        width: f64,

        #[arg(long, default_value_t = 600.0)]
        height: f64,

        /// Output path
        #[arg(short, long, default_value = "chart.svg")]
        out: PathBuf,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum SortArg {
    Key,
    Value,
}

impl From<SortArg> for SortMethod {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Key => SortMethod::Key,
            SortArg::Value => SortMethod::Value,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum KindArg {
    Pie,
    Bar,
}

impl From<KindArg> for ChartKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Pie => ChartKind::Pie,
            KindArg::Bar => ChartKind::Bar,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Summary { files, sort } => {
            let sort = sort.map(SortMethod::from).unwrap_or(config.summary_sort);
            summary(files, sort).await
        }
        Commands::Chart {
            files,
            kind,
            width,
            height,
            out,
        } => {
            let kind = kind.map(ChartKind::from).unwrap_or(config.default_chart);
            chart(files, kind, width, height, out, &config).await
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ChartsConfig> {
    let Some(path) = path else {
        return Ok(ChartsConfig::default());
    };

    let config = config_parser::parse_file(path)
        .with_context(|| format!("loading config {}", path.display()))?;

    let report = ConfigValidator::validate(&config);
    for warning in &report.warnings {
        warn!("config: {warning}");
    }
    if !report.is_valid {
        anyhow::bail!("invalid config {}: {}", path.display(), report.errors.join("; "));
    }
    Ok(config)
}

/// Load and aggregate the given files; `None` when there is nothing to show.
async fn load_table(files: Vec<PathBuf>) -> Result<Option<FrequencyTable>> {
    let mut manager = DataManager::new();
    manager.add_files(files);
    if manager.files().is_empty() {
        return Ok(None);
    }

    let handle = manager.process_batch().await?;
    Ok(handle.map(|handle| {
        info!(
            documents = handle.metadata.document_count,
            labels = handle.metadata.label_count,
            "aggregated batch"
        );
        handle.table.clone()
    }))
}

async fn summary(files: Vec<PathBuf>, sort: SortMethod) -> Result<()> {
    match load_table(files).await? {
        Some(table) => {
            let summary = SummaryTable::build(&table, sort);
            println!("{}", summary.to_text());
        }
        None => println!("No data to display"),
    }
    Ok(())
}

async fn chart(
    files: Vec<PathBuf>,
    kind: ChartKind,
    width: f64,
    height: f64,
    out: PathBuf,
    config: &ChartsConfig,
) -> Result<()> {
    let Some(table) = load_table(files).await? else {
        println!("No data to display");
        return Ok(());
    };

    let mut view = ChartView::new(kind, table, config.style.clone(), config.interaction);
    let mut surface = SvgSurface::new(width, height);
    view.draw(&mut surface);

    std::fs::write(&out, surface.finish())
        .with_context(|| format!("writing {}", out.display()))?;
    info!("wrote {} chart to {}", kind, out.display());
    Ok(())
}
