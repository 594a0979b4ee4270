mod config;
mod di;

use crate::config::AppConfig;
use crate::di::create_app_module;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shaku::HasComponent;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tradedir_application::DirectoryAggregator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Role {
    Exporter,
    Importer,
}

#[derive(Parser)]
#[command(name = "tradedir")]
#[command(about = "Look up exporters or importers for an HS code", long_about = None)]
struct Cli {
    #[arg(long)]
    hs_code: String,

    #[arg(short, long, value_enum, default_value_t = Role::Exporter)]
    role: Role,

    /// Maximum records to return; defaults to `--default-limit`.
    #[arg(short, long)]
    limit: Option<usize>,

    #[arg(long)]
    pretty: bool,

    #[command(flatten)]
    config: AppConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!(
        "Starting trade directory lookup (min interval: {:?}, timeout: {:?})",
        cli.config.min_fetch_interval(),
        cli.config.fetch_timeout()
    );

    let module = create_app_module(&cli.config);
    let aggregator: Arc<dyn DirectoryAggregator> = module.resolve();

    let response = match cli.role {
        Role::Exporter => aggregator.get_exporters(&cli.hs_code, cli.limit).await,
        Role::Importer => aggregator.get_importers(&cli.hs_code, cli.limit).await,
    }
    .with_context(|| format!("Lookup failed for HS code {:?}", cli.hs_code))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    Ok(())
}
