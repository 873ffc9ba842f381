//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod plan;
pub mod ports;
pub mod serve;

use crate::catalog::PortCatalog;
use crate::config::Config;
use clap::{Parser, Subcommand};
use std::borrow::Cow;
use std::path::Path;

/// Greek island charter itinerary planner
#[derive(Parser)]
#[command(name = "meltemi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan a charter itinerary
    Plan(plan::PlanArgs),

    /// List and resolve catalog ports
    Ports(ports::PortsArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Load the catalog honoring configured data-path overrides
///
/// Without overrides the bundled catalog is shared process-wide.
pub(crate) fn load_catalog(config: &Config) -> Cow<'static, PortCatalog> {
    match (&config.data.ports_path, &config.data.sea_guide_path) {
        (None, None) => Cow::Borrowed(PortCatalog::shared()),
        (ports, sea_guide) => {
            let canonical = ports
                .as_deref()
                .map(|p| std::fs::read_to_string(Path::new(p)).unwrap_or_default())
                .unwrap_or_else(|| crate::constants::data::CANONICAL_PORTS_JSON.to_string());
            let guide = sea_guide
                .as_deref()
                .map(|p| std::fs::read_to_string(Path::new(p)).unwrap_or_default())
                .unwrap_or_else(|| crate::constants::data::SEA_GUIDE_JSON.to_string());
            Cow::Owned(PortCatalog::from_sources(&canonical, &guide))
        }
    }
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan(args) => plan::run(args),
        Commands::Ports(args) => ports::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
