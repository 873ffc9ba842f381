//! Port catalog: models, merge, and lookup
//!
//! This module handles:
//! - The `PortRecord` model and the `Region`/`Category` enumerations
//! - Merging the two raw sources into one de-duplicated, alias-aware catalog
//! - The process-lifetime shared catalog instance
//!
//! The catalog is read-only after construction and safe to share across
//! concurrent resolutions.

pub mod normalize;
pub mod resolve;
pub mod sources;

use crate::constants::data;
use normalize::{display_label, normalize};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Greek cruising regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Saronic,
    Cyclades,
    Ionian,
    Dodecanese,
    Sporades,
    NorthAegean,
    Crete,
}

impl Region {
    /// Human-readable region name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Saronic => "Saronic Gulf",
            Self::Cyclades => "Cyclades",
            Self::Ionian => "Ionian Sea",
            Self::Dodecanese => "Dodecanese",
            Self::Sporades => "Sporades",
            Self::NorthAegean => "North Aegean",
            Self::Crete => "Crete",
        }
    }

    /// All regions, in catalog order
    pub fn all() -> [Region; 7] {
        [
            Self::Saronic,
            Self::Cyclades,
            Self::Ionian,
            Self::Dodecanese,
            Self::Sporades,
            Self::NorthAegean,
            Self::Crete,
        ]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saronic => write!(f, "saronic"),
            Self::Cyclades => write!(f, "cyclades"),
            Self::Ionian => write!(f, "ionian"),
            Self::Dodecanese => write!(f, "dodecanese"),
            Self::Sporades => write!(f, "sporades"),
            Self::NorthAegean => write!(f, "north_aegean"),
            Self::Crete => write!(f, "crete"),
        }
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saronic" => Ok(Self::Saronic),
            "cyclades" => Ok(Self::Cyclades),
            "ionian" => Ok(Self::Ionian),
            "dodecanese" => Ok(Self::Dodecanese),
            "sporades" => Ok(Self::Sporades),
            "north_aegean" | "north-aegean" | "northaegean" => Ok(Self::NorthAegean),
            "crete" => Ok(Self::Crete),
            _ => Err(format!("Unknown region: {}", s)),
        }
    }
}

/// Mooring category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Harbor,
    Marina,
    Anchorage,
    Spot,
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "harbor" | "harbour" => Ok(Self::Harbor),
            "marina" => Ok(Self::Marina),
            "anchorage" => Ok(Self::Anchorage),
            "spot" => Ok(Self::Spot),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// A single real-world mooring location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRecord {
    /// Stable unique identifier
    pub id: String,
    /// Canonical display name
    pub name: String,
    /// WGS84 latitude, decimal degrees
    pub lat: f64,
    /// WGS84 longitude, decimal degrees
    pub lon: f64,
    pub region: Region,
    pub category: Category,
    /// Alternate names, deduplicated case/accent-insensitively
    pub aliases: Vec<String>,
}

impl PortRecord {
    /// Normalized lookup keys: name plus every alias
    pub fn lookup_keys(&self) -> Vec<String> {
        let mut keys = vec![normalize(&self.name)];
        keys.extend(self.aliases.iter().map(|a| normalize(a)));
        keys
    }

    /// Display label: the name annotated with the first clean
    /// disambiguating parenthetical among the aliases, if any
    pub fn label(&self) -> Option<String> {
        display_label(&self.name, &self.aliases)
    }

    /// Coordinate pair as (lat, lon)
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// The merged, de-duplicated port catalog
#[derive(Debug, Clone, Default)]
pub struct PortCatalog {
    records: Vec<PortRecord>,
}

impl PortCatalog {
    /// Build a catalog from the two raw source strings
    ///
    /// Pure over the file contents: canonical entries first, then sea-guide
    /// entries merged in by normalized name/alias equality.
    pub fn from_sources(canonical_json: &str, sea_guide_json: &str) -> Self {
        let mut catalog = Self::default();

        let canonical: Vec<sources::CanonicalEntry> =
            sources::parse_source("canonical", canonical_json);
        for entry in &canonical {
            if let Some(record) = sources::adapt_canonical(entry) {
                catalog.insert_or_merge(record);
            }
        }

        let guide: Vec<sources::SeaGuideEntry> =
            sources::parse_source("sea guide", sea_guide_json);
        for entry in &guide {
            if let Some(record) = sources::adapt_sea_guide(entry) {
                catalog.insert_or_merge(record);
            }
        }

        debug!("Built port catalog with {} records", catalog.len());
        catalog
    }

    /// Build from the bundled data files
    pub fn builtin() -> Self {
        Self::from_sources(data::CANONICAL_PORTS_JSON, data::SEA_GUIDE_JSON)
    }

    /// Build from source files on disk
    ///
    /// An absent or unreadable file degrades to an empty source; the
    /// catalog still builds from whatever remains.
    pub fn from_paths(canonical: &Path, sea_guide: &Path) -> Self {
        let canonical_json = std::fs::read_to_string(canonical).unwrap_or_default();
        let sea_guide_json = std::fs::read_to_string(sea_guide).unwrap_or_default();
        Self::from_sources(&canonical_json, &sea_guide_json)
    }

    /// Process-lifetime shared instance of the bundled catalog
    ///
    /// Built on first use and cached; the sources are static reference
    /// data, so rebuilding per request would only waste work.
    pub fn shared() -> &'static PortCatalog {
        static CATALOG: OnceLock<PortCatalog> = OnceLock::new();
        CATALOG.get_or_init(PortCatalog::builtin)
    }

    /// Insert a record, or merge it into an existing row sharing any
    /// normalized name/alias key
    ///
    /// Two rows may never share a key; on a key hit the incoming record's
    /// name and aliases are folded into the existing row as new aliases.
    fn insert_or_merge(&mut self, record: PortRecord) {
        let incoming_keys = record.lookup_keys();
        let existing = self.records.iter_mut().find(|r| {
            let keys = r.lookup_keys();
            incoming_keys.iter().any(|k| keys.contains(k))
        });

        match existing {
            Some(row) => {
                let mut keys = row.lookup_keys();
                for candidate in std::iter::once(&record.name).chain(record.aliases.iter()) {
                    let key = normalize(candidate);
                    if !keys.contains(&key) {
                        keys.push(key);
                        row.aliases.push(candidate.clone());
                    }
                }
            }
            None => self.records.push(record),
        }
    }

    /// All records, in catalog order
    pub fn records(&self) -> &[PortRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a free-text name against this catalog
    pub fn resolve(&self, query: &str) -> Option<&PortRecord> {
        resolve::resolve(self, query)
    }
}
