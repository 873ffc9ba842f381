//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "yacht.type")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    // Show path
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Reset config
    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            show_all_config(&config);
        }

        // Key only: show that value
        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[planning]");
    println!("time_margin = {}", config.planning.time_margin);
    println!("departure_time = \"{}\"", config.planning.departure_time);
    println!("weather_aware = {}", config.planning.weather_aware);
    println!();

    println!("[yacht]");
    println!("type = \"{}\"", config.yacht.yacht_type);
    println!("cruise_speed_knots = {}", config.yacht.cruise_speed_knots);
    println!("liters_per_hour = {}", config.yacht.liters_per_hour);
    println!("price_per_liter = {}", config.yacht.price_per_liter);
    println!();

    println!("[defaults]");
    println!("days = {}", config.defaults.days);
    println!("format = \"{}\"", config.defaults.format);
    println!("audience = \"{}\"", config.defaults.audience);
    println!();

    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
    println!();

    println!("[data]");
    match &config.data.ports_path {
        Some(path) => println!("ports_path = \"{}\"", path),
        None => println!("ports_path = \"\" # bundled"),
    }
    match &config.data.sea_guide_path {
        Some(path) => println!("sea_guide_path = \"{}\"", path),
        None => println!("sea_guide_path = \"\" # bundled"),
    }
}
