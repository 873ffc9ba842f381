//! Plan command handler
//!
//! Builds a charter itinerary from the command line.

use crate::catalog::Region;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::estimate::{Yacht, YachtType};
use crate::format::{available_formats, get_formatter, share};
use crate::itinerary::{plan, Audience, PlanRequest, Preference};
use crate::route::RouteRequest;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;
use std::str::FromStr;

/// Plan command arguments
#[derive(Args)]
pub struct PlanArgs {
    /// Starting port (name or alias)
    #[arg(long, short = 's')]
    pub start: Option<String>,

    /// Final port; defaults to the start (round trip)
    #[arg(long, short = 'e')]
    pub end: Option<String>,

    /// Trip length in sailing days
    #[arg(long, short = 'd')]
    pub days: Option<u32>,

    /// Cruising region; inferred from port names when omitted
    #[arg(long, short = 'r')]
    pub region: Option<String>,

    /// Intermediate stop to visit (repeatable)
    #[arg(long = "via")]
    pub vias: Vec<String>,

    /// Custom day-by-day stop (repeatable; overrides auto-routing)
    #[arg(long = "stop", conflicts_with_all = ["end", "days", "region", "vias"])]
    pub stops: Vec<String>,

    /// Charter start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Yacht type: motor or sailing
    #[arg(long)]
    pub yacht_type: Option<String>,

    /// Cruise speed in knots
    #[arg(long)]
    pub speed: Option<f64>,

    /// Fuel burn in liters per hour (motor)
    #[arg(long)]
    pub liters_per_hour: Option<f64>,

    /// Fuel price per liter (motor)
    #[arg(long)]
    pub price_per_liter: Option<f64>,

    /// Daily departure time (HH:MM)
    #[arg(long)]
    pub departure: Option<String>,

    /// Preference tag: family, nightlife, gastronomy (repeatable)
    #[arg(long = "preference", short = 'P')]
    pub preferences: Vec<String>,

    /// Narrative audience: captain or vip
    #[arg(long, short = 'a')]
    pub audience: Option<String>,

    /// Use forecast-sensitive departure windows
    #[arg(long)]
    pub weather_aware: bool,

    /// Rebuild a plan from a shared link or query string
    #[arg(long, conflicts_with_all = ["start", "stops"])]
    pub from_link: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the plan command
pub fn run(args: PlanArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;
    let request = build_request(&args, &config)?;

    let catalog = crate::cli::load_catalog(&config);
    let itinerary = match plan(&catalog, &request) {
        Ok(itinerary) => itinerary,
        Err(Error::UnresolvedPort(name)) => {
            eprintln!("Error: no port matches '{}'. Try `meltemi ports {}`.", name, name);
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    let format = args.format.unwrap_or(config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format(&itinerary, &request, &config)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Assemble a plan request from flags and config defaults
fn build_request(args: &PlanArgs, config: &Config) -> Result<PlanRequest> {
    if let Some(link) = &args.from_link {
        return share::decode(link);
    }

    let Some(start) = args.start.clone() else {
        eprintln!("Error: No start port specified. Use --start or --from-link");
        std::process::exit(1);
    };

    let route = if !args.stops.is_empty() {
        RouteRequest::Custom {
            start,
            day_stops: args.stops.clone(),
        }
    } else {
        let region = args
            .region
            .as_deref()
            .map(Region::from_str)
            .transpose()
            .map_err(Error::Config)?;
        RouteRequest::Region {
            end: args.end.clone().unwrap_or_else(|| start.clone()),
            start,
            days: args.days.unwrap_or(config.defaults.days),
            region,
            vias: args.vias.clone(),
        }
    };

    let yacht_type_str = args
        .yacht_type
        .clone()
        .unwrap_or_else(|| config.yacht.yacht_type.clone());
    let yacht_type = YachtType::from_str(&yacht_type_str).map_err(Error::Config)?;

    let departure_str = args
        .departure
        .clone()
        .unwrap_or_else(|| config.planning.departure_time.clone());
    let departure_time = parse_departure(&departure_str)?;

    let yacht = Yacht {
        yacht_type,
        cruise_speed_knots: args.speed.unwrap_or(config.yacht.cruise_speed_knots),
        liters_per_hour: args
            .liters_per_hour
            .unwrap_or(config.yacht.liters_per_hour),
        price_per_liter: args
            .price_per_liter
            .unwrap_or(config.yacht.price_per_liter),
        departure_time,
    };

    let start_date = match &args.date {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| Error::Config(format!("Invalid date '{}': {}", date, e)))?,
        None => Local::now().date_naive(),
    };

    let preferences = args
        .preferences
        .iter()
        .map(|p| Preference::from_str(p))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::Config)?;

    let audience_str = args
        .audience
        .clone()
        .unwrap_or_else(|| config.defaults.audience.clone());
    let audience = Audience::from_str(&audience_str).map_err(Error::Config)?;

    Ok(PlanRequest {
        route,
        yacht,
        start_date,
        preferences,
        audience,
        weather_aware: args.weather_aware || config.planning.weather_aware,
        time_margin: config.planning.time_margin,
        annotations: vec![],
    })
}

/// Accept "HH:MM" and "HH:MM:SS"
fn parse_departure(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| Error::Config(format!("Invalid departure time '{}': {}", s, e)))
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_departure() {
        assert_eq!(
            parse_departure("09:00").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            parse_departure("17:30:00").unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
        assert!(parse_departure("late morning").is_err());
    }
}
