//! Ports command handler
//!
//! Lists the merged port catalog and resolves free-text names.

use crate::catalog::Region;
use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;
use std::str::FromStr;

/// Ports command arguments
#[derive(Args)]
pub struct PortsArgs {
    /// Name to resolve; lists the whole catalog when omitted
    pub query: Option<String>,

    /// Restrict the listing to one region
    #[arg(long, short = 'r')]
    pub region: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the ports command
pub fn run(args: PortsArgs) -> Result<()> {
    let config = Config::load()?;
    let catalog = crate::cli::load_catalog(&config);

    if let Some(query) = &args.query {
        let Some(record) = catalog.resolve(query) else {
            eprintln!("No port matches '{}'", query);
            std::process::exit(1);
        };
        if args.json {
            println!("{}", serde_json::to_string_pretty(record)?);
        } else {
            println!(
                "{} ({:.4}, {:.4}) - {}, {:?}",
                record.name,
                record.lat,
                record.lon,
                record.region.display_name(),
                record.category
            );
            if !record.aliases.is_empty() {
                println!("  also known as: {}", record.aliases.join(", "));
            }
        }
        return Ok(());
    }

    let region = args
        .region
        .as_deref()
        .map(Region::from_str)
        .transpose()
        .map_err(Error::Config)?;

    let records: Vec<_> = catalog
        .records()
        .iter()
        .filter(|r| region.map(|want| r.region == want).unwrap_or(true))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for want in Region::all() {
        if region.map(|r| r != want).unwrap_or(false) {
            continue;
        }
        let in_region: Vec<_> = records.iter().filter(|r| r.region == want).collect();
        if in_region.is_empty() {
            continue;
        }
        println!("{}:", want.display_name());
        for record in in_region {
            println!("  {:20} ({:.4}, {:.4})", record.name, record.lat, record.lon);
        }
        println!();
    }

    Ok(())
}
