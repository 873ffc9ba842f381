//! Centralized constants for the meltemi crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in nautical miles (WGS84 approximation)
    pub const EARTH_RADIUS_NM: f64 = 3440.065;

    /// Valid latitude range in decimal degrees
    pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

    /// Valid longitude range in decimal degrees
    pub const LON_RANGE: (f64, f64) = (-180.0, 180.0);
}

/// Bundled static data sources
pub mod data {
    /// Canonical port list (id/name/coords/region/category/aliases)
    pub const CANONICAL_PORTS_JSON: &str = include_str!("../data/ports.json");

    /// Richer bilingual "sea guide" list (bays and secondary harbours)
    pub const SEA_GUIDE_JSON: &str = include_str!("../data/sea_guide.json");
}
