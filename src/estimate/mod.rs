//! Per-leg sailing estimates
//!
//! This module handles:
//! - Great-circle (haversine) distance in nautical miles
//! - Duration, fuel burn, and fuel cost per leg
//! - Clock-wrapped arrival times and advisory departure windows
//!
//! These are heuristic charter estimates over straight-line distance, not
//! navigational planning; the time margin accounts for real-world routing
//! around coastlines.

use crate::catalog::Region;
use crate::constants::geo::EARTH_RADIUS_NM;
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Propulsion type; sailing yachts burn no charterer-billed fuel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YachtType {
    Motor,
    Sailing,
}

impl std::str::FromStr for YachtType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "motor" => Ok(Self::Motor),
            "sailing" | "sail" => Ok(Self::Sailing),
            _ => Err(format!("Unknown yacht type: {}", s)),
        }
    }
}

/// Charter yacht parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Yacht {
    #[serde(rename = "type")]
    pub yacht_type: YachtType,
    pub cruise_speed_knots: f64,
    /// Fuel burn at cruise; ignored for sailing yachts
    #[serde(default)]
    pub liters_per_hour: f64,
    /// Fuel price; ignored for sailing yachts
    #[serde(default)]
    pub price_per_liter: f64,
    /// Preferred daily departure time
    pub departure_time: NaiveTime,
}

/// A single day's passage between two resolved ports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    /// Whole nautical miles, minimum 1
    pub distance_nm: f64,
    /// Underway hours, two decimal places
    pub hours: f64,
    /// Whole liters; zero for sailing yachts
    pub fuel_liters: f64,
    /// Whole currency units; zero for sailing yachts
    pub cost: f64,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    /// Advisory departure window, presentation text only
    pub window: String,
}

/// Haversine great-circle distance in nautical miles
pub fn haversine_nm(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_NM * c
}

/// Estimate one leg between two coordinate pairs
///
/// Distance is rounded to whole miles and clamped to a minimum of 1 NM so
/// coincident stops never produce a zero-duration leg. `time_margin`
/// (e.g. 1.15) covers routing inefficiency versus straight-line distance.
/// The arrival time wraps modulo 24h; a leg is displayed within a single
/// calendar day.
#[allow(clippy::too_many_arguments)]
pub fn estimate_leg(
    from_name: &str,
    to_name: &str,
    from: (f64, f64),
    to: (f64, f64),
    yacht: &Yacht,
    region: Region,
    weather_aware: bool,
    time_margin: f64,
) -> Leg {
    let distance_nm = haversine_nm(from, to).round().max(1.0);
    let hours = round2(distance_nm / yacht.cruise_speed_knots * time_margin);

    let (fuel_liters, cost) = match yacht.yacht_type {
        YachtType::Sailing => (0.0, 0.0),
        YachtType::Motor => {
            let fuel = (hours * yacht.liters_per_hour).round();
            (fuel, (fuel * yacht.price_per_liter).round())
        }
    };

    let departure = yacht.departure_time;
    let arrival = departure + Duration::seconds((hours * 3600.0).round() as i64);

    Leg {
        from: from_name.to_string(),
        to: to_name.to_string(),
        distance_nm,
        hours,
        fuel_liters,
        cost,
        departure,
        arrival,
        window: departure_window(region, hours, weather_aware).to_string(),
    }
}

/// Advisory departure window by region and leg duration
///
/// Hand-tuned presentation heuristics. The Cyclades weather-aware window
/// is early: the meltemi typically builds through the afternoon. Long
/// Dodecanese passages also start early; the channel winds funnel hardest
/// after midday.
pub fn departure_window(region: Region, hours: f64, weather_aware: bool) -> &'static str {
    if weather_aware && region == Region::Cyclades {
        return "07:00-08:30";
    }
    if region == Region::Dodecanese && hours > 4.5 {
        return "07:30-08:30";
    }
    if hours <= 2.5 {
        "10:00-11:30"
    } else if hours <= 4.5 {
        "09:00-10:30"
    } else {
        "08:00-09:00"
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
