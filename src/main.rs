use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use channel_catalog::{
    config::{Config, OutputLayout},
    output::DatasetWriter,
    pipeline::CatalogPipeline,
    sources::PlaylistSourceFactory,
    utils::UrlUtils,
};

#[derive(Parser)]
#[command(name = "channel-catalog")]
#[command(version)]
#[command(about = "Builds a categorized live TV channel catalog from an M3U playlist")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Playlist URL or local path (overrides config file)
    #[arg(short, long, value_name = "URL")]
    source_url: Option<String>,

    /// Combined output document path (overrides config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Output layout: combined, per_language or both
    #[arg(short, long, value_name = "LAYOUT")]
    layout: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = format!("channel_catalog={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Channel Catalog v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(source_url) = cli.source_url {
        config.source.url = source_url;
    }
    if let Some(output) = cli.output {
        config.output.path = output.into();
    }
    if let Some(layout) = cli.layout {
        config.output.layout = layout.parse::<OutputLayout>()?;
    }
    config.validate()?;

    info!(
        "Using playlist source: {}",
        UrlUtils::obfuscate_credentials(&config.source.url)
    );

    let source = PlaylistSourceFactory::create(&config.source)?;
    let pipeline = CatalogPipeline::from_config(&config);

    let output = pipeline
        .run(source.as_ref(), Utc::now().date_naive())
        .await
        .inspect_err(|e| error!("Catalog generation aborted, no output written: {}", e))?;

    let report = DatasetWriter::new(config.output.clone()).write(&output.dataset)?;

    output.summary.log();
    for path in &report.files_written {
        info!("Wrote {}", path.display());
    }
    info!(
        "Successfully generated catalog with {} channels",
        output.dataset.channels.len()
    );

    Ok(())
}
