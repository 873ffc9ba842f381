//! meltemi CLI entry point
//!
//! Greek island charter itinerary planner - CLI + web app

use meltemi::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
