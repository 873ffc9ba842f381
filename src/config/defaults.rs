//! Default configuration values
//!
//! Named constants for all tunable parameters, including the hand-tuned
//! planning heuristics (time margin, advisory thresholds). These are
//! presentation-grade estimates, not navigational calibration.

/// Multiplier applied to straight-line passage time to cover real-world
/// routing around coastlines
pub const TIME_MARGIN: f64 = 1.15;

/// Longest supported charter, in sailing days
pub const MAX_TRIP_DAYS: u32 = 30;

/// Default daily departure time (HH:MM)
pub const DEFAULT_DEPARTURE_TIME: &str = "09:00";

/// Default yacht type
pub const DEFAULT_YACHT_TYPE: &str = "sailing";

/// Default cruise speed in knots
pub const DEFAULT_SPEED_KNOTS: f64 = 7.0;

/// Default fuel burn at cruise, liters per hour (motor yachts)
pub const DEFAULT_LITERS_PER_HOUR: f64 = 160.0;

/// Default fuel price per liter (motor yachts)
pub const DEFAULT_PRICE_PER_LITER: f64 = 1.85;

/// Default trip length in days
pub const DEFAULT_DAYS: u32 = 7;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default narrative audience
pub const DEFAULT_AUDIENCE: &str = "captain";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8787;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "meltemi";
