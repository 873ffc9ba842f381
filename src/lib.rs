//! meltemi: Greek island charter itinerary planner
//!
//! A library and CLI tool for drafting multi-day yacht charter itineraries
//! across the Greek island regions, with per-leg distance, time, fuel, and
//! cost estimates.
//!
//! ## Features
//!
//! - Merged alias-aware port catalog (canonical list + sea guide)
//! - Accent- and case-insensitive free-text port resolution
//! - Auto-routing over curated regional cruising rings
//! - Per-leg haversine estimates with advisory departure windows
//! - Day-card assembly with narrative notes and shareable links
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use meltemi::catalog::PortCatalog;
//! use meltemi::route::{build_region_route, rings};
//!
//! let catalog = PortCatalog::builtin();
//!
//! // Resolve a free-text name, aliases and accents included
//! let port = catalog.resolve("Kérkyra").unwrap();
//! println!("{} is in the {}", port.name, port.region.display_name());
//!
//! // Auto-route a week out of Lefkada
//! let region = rings::auto_pick_region("Lefkada", "Lefkada");
//! let stops = build_region_route(&catalog, "Lefkada", "Lefkada", 7, Some(region), &[]);
//! assert_eq!(stops.len(), 8);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod estimate;
pub mod format;
pub mod itinerary;
pub mod route;
pub mod server;

// Re-export commonly used types
pub use catalog::{Category, PortCatalog, PortRecord, Region};
pub use config::Config;
pub use error::{Error, Result};
pub use estimate::{Leg, Yacht, YachtType};
pub use itinerary::{plan, Audience, DayCard, Itinerary, PlanRequest, Preference};
pub use route::{build_custom_route, build_region_route, RouteRequest};
