//! Raw source schemas and adapters
//!
//! The catalog is merged from two static JSON sources with different
//! shapes. Each source gets its own strict serde schema here, plus a pure
//! adapter into [`PortRecord`], so the rest of the crate never touches
//! optional fields defensively.

use crate::catalog::normalize::{looks_like_name, normalize};
use crate::catalog::{Category, PortRecord, Region};
use crate::constants::geo::{LAT_RANGE, LON_RANGE};
use serde::Deserialize;
use std::str::FromStr;
use tracing::warn;

/// An entry from the canonical port list (`ports.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct CanonicalEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub region: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// An entry from the richer bilingual sea guide (`sea_guide.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct SeaGuideEntry {
    #[serde(default)]
    pub names: SeaGuideNames,
    pub position: Option<SeaGuidePosition>,
    pub area: Option<String>,
    pub kind: Option<String>,
}

/// Bilingual names: English/transliterated and Greek
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeaGuideNames {
    pub en: Option<String>,
    pub el: Option<String>,
}

/// Nested coordinates in the sea guide shape
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SeaGuidePosition {
    pub lat: f64,
    pub lon: f64,
}

/// Parse a JSON array of one source, degrading to empty on failure
///
/// A missing, unreadable, or malformed source must not abort the catalog
/// build; the system still functions on the other source.
pub fn parse_source<T: for<'de> Deserialize<'de>>(label: &str, json: &str) -> Vec<T> {
    match serde_json::from_str(json) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping unusable {} source: {}", label, e);
            Vec::new()
        }
    }
}

/// Is this a usable WGS84 coordinate pair?
fn coords_valid(lat: f64, lon: f64) -> bool {
    lat.is_finite()
        && lon.is_finite()
        && (LAT_RANGE.0..=LAT_RANGE.1).contains(&lat)
        && (LON_RANGE.0..=LON_RANGE.1).contains(&lon)
}

/// Filter raw aliases down to name-like, normalized-key-distinct entries
///
/// `taken` holds keys already claimed by the record's display name.
fn clean_aliases(raw: &[String], taken: &mut Vec<String>) -> Vec<String> {
    let mut aliases = Vec::new();
    for alias in raw {
        let alias = alias.trim();
        if !looks_like_name(alias) {
            continue;
        }
        let key = normalize(alias);
        if taken.contains(&key) {
            continue;
        }
        taken.push(key);
        aliases.push(alias.to_string());
    }
    aliases
}

/// Adapt a canonical entry into a catalog row
///
/// Returns `None` for entries lacking a valid name, coordinates, or region.
pub fn adapt_canonical(entry: &CanonicalEntry) -> Option<PortRecord> {
    let name = entry.name.as_deref()?.trim();
    if name.is_empty() {
        return None;
    }
    let (lat, lon) = (entry.lat?, entry.lon?);
    if !coords_valid(lat, lon) {
        return None;
    }
    let region = Region::from_str(entry.region.as_deref()?).ok()?;
    let category = entry
        .category
        .as_deref()
        .and_then(|c| Category::from_str(c).ok())
        .unwrap_or(Category::Harbor);

    let mut taken = vec![normalize(name)];
    let aliases = clean_aliases(&entry.aliases, &mut taken);

    Some(PortRecord {
        id: entry.id.clone().unwrap_or_else(|| slug(name)),
        name: name.to_string(),
        lat,
        lon,
        region,
        category,
        aliases,
    })
}

/// Adapt a sea-guide entry into a catalog row
///
/// Display name prefers the non-Greek of the two bilingual names; the other
/// name becomes an alias. The sea guide's `"bay"` kind maps to anchorage.
/// Returns `None` for entries missing coordinates, a name, or an area.
pub fn adapt_sea_guide(entry: &SeaGuideEntry) -> Option<PortRecord> {
    let name = entry
        .names
        .en
        .as_deref()
        .or(entry.names.el.as_deref())?
        .trim();
    if name.is_empty() {
        return None;
    }
    let pos = entry.position?;
    if !coords_valid(pos.lat, pos.lon) {
        return None;
    }
    let region = Region::from_str(entry.area.as_deref()?).ok()?;
    let category = match entry.kind.as_deref() {
        Some("bay") => Category::Anchorage,
        Some("marina") => Category::Marina,
        Some("spot") => Category::Spot,
        _ => Category::Harbor,
    };

    // The unused bilingual name (Greek, when both exist) rides along as an
    // alias so queries in either script resolve.
    let mut raw_aliases = Vec::new();
    if entry.names.en.is_some() {
        if let Some(el) = &entry.names.el {
            raw_aliases.push(el.clone());
        }
    }
    let mut taken = vec![normalize(name)];
    let aliases = clean_aliases(&raw_aliases, &mut taken);

    Some(PortRecord {
        id: format!("sg-{}", slug(name)),
        name: name.to_string(),
        lat: pos.lat,
        lon: pos.lon,
        region,
        category,
        aliases,
    })
}

/// Derive a stable id fragment from a display name
fn slug(name: &str) -> String {
    normalize(name)
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_malformed_is_empty() {
        let entries: Vec<CanonicalEntry> = parse_source("canonical", "not json at all");
        assert!(entries.is_empty());

        let entries: Vec<CanonicalEntry> = parse_source("canonical", "{\"an\": \"object\"}");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_adapt_canonical_defaults_category() {
        let entry: CanonicalEntry = serde_json::from_str(
            r#"{ "id": "perdika", "name": "Perdika", "lat": 37.69, "lon": 23.445, "region": "saronic" }"#,
        )
        .unwrap();
        let record = adapt_canonical(&entry).unwrap();
        assert_eq!(record.category, Category::Harbor);
        assert_eq!(record.region, Region::Saronic);
    }

    #[test]
    fn test_adapt_canonical_rejects_bad_coords() {
        let entry: CanonicalEntry = serde_json::from_str(
            r#"{ "id": "x", "name": "Nowhere", "lat": 97.0, "lon": 23.0, "region": "saronic" }"#,
        )
        .unwrap();
        assert!(adapt_canonical(&entry).is_none());

        let entry: CanonicalEntry =
            serde_json::from_str(r#"{ "id": "x", "name": "Nowhere", "region": "saronic" }"#).unwrap();
        assert!(adapt_canonical(&entry).is_none());
    }

    #[test]
    fn test_adapt_canonical_filters_note_aliases() {
        let entry: CanonicalEntry = serde_json::from_str(
            r#"{ "id": "aegina", "name": "Aegina", "lat": 37.747, "lon": 23.428,
                 "region": "saronic",
                 "aliases": ["Aigina", "fuel dock open 08:00-20:00, call VHF 74"] }"#,
        )
        .unwrap();
        let record = adapt_canonical(&entry).unwrap();
        assert_eq!(record.aliases, vec!["Aigina"]);
    }

    #[test]
    fn test_adapt_sea_guide_prefers_non_greek_name() {
        let entry: SeaGuideEntry = serde_json::from_str(
            r#"{ "names": { "en": "Kleftiko", "el": "Κλεφτικό" },
                 "position": { "lat": 36.654, "lon": 24.361 },
                 "area": "cyclades", "kind": "bay" }"#,
        )
        .unwrap();
        let record = adapt_sea_guide(&entry).unwrap();
        assert_eq!(record.name, "Kleftiko");
        assert_eq!(record.category, Category::Anchorage);
        assert_eq!(record.aliases, vec!["Κλεφτικό"]);
    }

    #[test]
    fn test_adapt_sea_guide_greek_only_name() {
        let entry: SeaGuideEntry = serde_json::from_str(
            r#"{ "names": { "el": "Ύδρα" },
                 "position": { "lat": 37.35, "lon": 23.465 },
                 "area": "saronic", "kind": "harbour" }"#,
        )
        .unwrap();
        let record = adapt_sea_guide(&entry).unwrap();
        assert_eq!(record.name, "Ύδρα");
        assert_eq!(record.category, Category::Harbor);
    }

    #[test]
    fn test_adapt_sea_guide_missing_position_skipped() {
        let entry: SeaGuideEntry = serde_json::from_str(
            r#"{ "names": { "en": "Broken Entry" }, "area": "cyclades", "kind": "bay" }"#,
        )
        .unwrap();
        assert!(adapt_sea_guide(&entry).is_none());
    }
}
