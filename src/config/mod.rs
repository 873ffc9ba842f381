//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/meltemi/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Planning heuristics
    #[serde(default)]
    pub planning: PlanningConfig,

    /// Default yacht parameters
    #[serde(default)]
    pub yacht: YachtConfig,

    /// Default values for plan requests
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog data source overrides
    #[serde(default)]
    pub data: DataConfig,
}

/// Planning heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Passage-time multiplier over straight-line distance
    #[serde(default = "default_time_margin")]
    pub time_margin: f64,

    /// Daily departure time, HH:MM
    #[serde(default = "default_departure_time")]
    pub departure_time: String,

    /// Shift departure windows for forecast-sensitive regions
    #[serde(default)]
    pub weather_aware: bool,
}

/// Default yacht parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YachtConfig {
    /// "motor" or "sailing"
    #[serde(rename = "type", default = "default_yacht_type")]
    pub yacht_type: String,

    /// Cruise speed in knots
    #[serde(default = "default_speed")]
    pub cruise_speed_knots: f64,

    /// Fuel burn at cruise (motor only)
    #[serde(default = "default_liters_per_hour")]
    pub liters_per_hour: f64,

    /// Fuel price per liter (motor only)
    #[serde(default = "default_price_per_liter")]
    pub price_per_liter: f64,
}

/// Default values for plan requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default trip length in days
    #[serde(default = "default_days")]
    pub days: u32,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,

    /// Default narrative audience
    #[serde(default = "default_audience")]
    pub audience: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Catalog data source overrides; unset means the bundled data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to a canonical ports JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports_path: Option<String>,

    /// Path to a sea-guide JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_guide_path: Option<String>,
}

// Default value functions for serde
fn default_time_margin() -> f64 {
    TIME_MARGIN
}
fn default_departure_time() -> String {
    DEFAULT_DEPARTURE_TIME.to_string()
}
fn default_yacht_type() -> String {
    DEFAULT_YACHT_TYPE.to_string()
}
fn default_speed() -> f64 {
    DEFAULT_SPEED_KNOTS
}
fn default_liters_per_hour() -> f64 {
    DEFAULT_LITERS_PER_HOUR
}
fn default_price_per_liter() -> f64 {
    DEFAULT_PRICE_PER_LITER
}
fn default_days() -> u32 {
    DEFAULT_DAYS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_audience() -> String {
    DEFAULT_AUDIENCE.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            time_margin: default_time_margin(),
            departure_time: default_departure_time(),
            weather_aware: false,
        }
    }
}

impl Default for YachtConfig {
    fn default() -> Self {
        Self {
            yacht_type: default_yacht_type(),
            cruise_speed_knots: default_speed(),
            liters_per_hour: default_liters_per_hour(),
            price_per_liter: default_price_per_liter(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            format: default_format(),
            audience: default_audience(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["planning", "time_margin"] => Some(self.planning.time_margin.to_string()),
            ["planning", "departure_time"] => Some(self.planning.departure_time.clone()),
            ["planning", "weather_aware"] => Some(self.planning.weather_aware.to_string()),

            ["yacht", "type"] => Some(self.yacht.yacht_type.clone()),
            ["yacht", "cruise_speed_knots"] => Some(self.yacht.cruise_speed_knots.to_string()),
            ["yacht", "liters_per_hour"] => Some(self.yacht.liters_per_hour.to_string()),
            ["yacht", "price_per_liter"] => Some(self.yacht.price_per_liter.to_string()),

            ["defaults", "days"] => Some(self.defaults.days.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),
            ["defaults", "audience"] => Some(self.defaults.audience.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["data", "ports_path"] => self.data.ports_path.clone(),
            ["data", "sea_guide_path"] => self.data.sea_guide_path.clone(),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["planning", "time_margin"] => {
                self.planning.time_margin = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid time margin: {}", value)))?;
            }
            ["planning", "departure_time"] => {
                self.planning.departure_time = value.to_string();
            }
            ["planning", "weather_aware"] => {
                self.planning.weather_aware = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid boolean value: {}", value)))?;
            }

            ["yacht", "type"] => {
                self.yacht.yacht_type = value.to_string();
            }
            ["yacht", "cruise_speed_knots"] => {
                self.yacht.cruise_speed_knots = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid speed value: {}", value)))?;
            }
            ["yacht", "liters_per_hour"] => {
                self.yacht.liters_per_hour = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid fuel burn value: {}", value)))?;
            }
            ["yacht", "price_per_liter"] => {
                self.yacht.price_per_liter = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid price value: {}", value)))?;
            }

            ["defaults", "days"] => {
                self.defaults.days = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid days value: {}", value)))?;
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }
            ["defaults", "audience"] => {
                self.defaults.audience = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }

            ["data", "ports_path"] => {
                self.data.ports_path = Some(value.to_string());
            }
            ["data", "sea_guide_path"] => {
                self.data.sea_guide_path = Some(value.to_string());
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "planning.time_margin",
            "planning.departure_time",
            "planning.weather_aware",
            "yacht.type",
            "yacht.cruise_speed_knots",
            "yacht.liters_per_hour",
            "yacht.price_per_liter",
            "defaults.days",
            "defaults.format",
            "defaults.audience",
            "server.host",
            "server.port",
            "data.ports_path",
            "data.sea_guide_path",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.planning.time_margin, 1.15);
        assert_eq!(config.yacht.yacht_type, "sailing");
        assert_eq!(config.defaults.days, 7);
        assert_eq!(config.server.port, 8787);
        assert!(config.data.ports_path.is_none());
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("yacht.type"), Some("sailing".to_string()));

        config.set("yacht.type", "motor").unwrap();
        assert_eq!(config.get("yacht.type"), Some("motor".to_string()));

        config.set("planning.time_margin", "1.2").unwrap();
        assert_eq!(config.planning.time_margin, 1.2);
        assert_eq!(config.get("planning.time_margin"), Some("1.2".to_string()));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("yacht.cruise_speed_knots", "fast").is_err());
        assert!(config.set("server.port", "not_a_port").is_err());
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.yacht.yacht_type = "motor".to_string();
            config.defaults.days = 10;
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.yacht.yacht_type, "motor");
            assert_eq!(loaded.defaults.days, 10);
        });
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.planning.time_margin, 1.15);
        assert_eq!(loaded.server.port, 8787);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[planning]"));
        assert!(toml.contains("[yacht]"));
        assert!(toml.contains("[server]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:8787");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"planning.time_margin"));
        assert!(keys.contains(&"yacht.type"));
        assert!(keys.contains(&"server.port"));
    }

    #[test]
    fn test_data_path_overrides() {
        let mut config = Config::default();
        config.set("data.ports_path", "/tmp/ports.json").unwrap();
        assert_eq!(
            config.get("data.ports_path"),
            Some("/tmp/ports.json".to_string())
        );
    }
}
