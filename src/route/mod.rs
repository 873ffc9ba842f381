//! Route construction
//!
//! This module handles:
//! - `RouteRequest` (region auto-routing vs fully custom day-by-day stops)
//! - Region-mode auto-routing over the curated rings
//! - All-or-nothing validation of custom stop sequences
//!
//! Auto-routing is a heuristic: it produces a plausible, non-repetitive
//! circuit from the ring data without any coastline awareness. Edge cases
//! degrade to padding/repetition, never to a panic.

pub mod rings;

use crate::catalog::normalize::normalize;
use crate::catalog::{PortCatalog, Region};
use crate::config::defaults::MAX_TRIP_DAYS;
use crate::error::{Error, Result};
use crate::estimate::haversine_nm;
use serde::{Deserialize, Serialize};

/// A trip routing request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RouteRequest {
    /// Auto-route within a region ring
    Region {
        start: String,
        end: String,
        days: u32,
        /// `None` means infer from start/end names
        #[serde(default)]
        region: Option<Region>,
        /// Optional intermediate stops, inserted before ring fill
        #[serde(default)]
        vias: Vec<String>,
    },
    /// Fully custom day-by-day stop list
    Custom {
        start: String,
        day_stops: Vec<String>,
    },
}

impl RouteRequest {
    /// Number of sailing days this request describes
    pub fn days(&self) -> u32 {
        match self {
            Self::Region { days, .. } => *days,
            Self::Custom { day_stops, .. } => day_stops.len() as u32,
        }
    }

    /// Validate request shape at the boundary
    ///
    /// Structural problems (too few days, empty start) are errors here;
    /// unresolvable names are not, they surface later as `None` routes.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Region { start, end, days, .. } => {
                if start.trim().is_empty() || end.trim().is_empty() {
                    return Err(Error::InvalidRequest(
                        "start and end are required".to_string(),
                    ));
                }
                if *days < 2 {
                    return Err(Error::InvalidRequest(format!(
                        "a trip needs at least 2 days, got {}",
                        days
                    )));
                }
                if *days > MAX_TRIP_DAYS {
                    return Err(Error::InvalidRequest(format!(
                        "a trip may span at most {} days, got {}",
                        MAX_TRIP_DAYS, days
                    )));
                }
                Ok(())
            }
            Self::Custom { start, day_stops } => {
                if start.trim().is_empty() {
                    return Err(Error::InvalidRequest("start is required".to_string()));
                }
                if day_stops.is_empty() {
                    return Err(Error::InvalidRequest(
                        "custom mode needs at least one day stop".to_string(),
                    ));
                }
                if day_stops.len() as u32 > MAX_TRIP_DAYS {
                    return Err(Error::InvalidRequest(format!(
                        "a trip may span at most {} days, got {}",
                        MAX_TRIP_DAYS,
                        day_stops.len()
                    )));
                }
                Ok(())
            }
        }
    }

    /// Build the ordered stop-name sequence for this request
    ///
    /// Region mode always yields `days + 1` names. Custom mode is
    /// all-or-nothing and yields `None` when any stop fails to resolve.
    pub fn build(&self, catalog: &PortCatalog) -> Option<Vec<String>> {
        match self {
            Self::Region {
                start,
                end,
                days,
                region,
                vias,
            } => Some(build_region_route(
                catalog, start, end, *days, *region, vias,
            )),
            Self::Custom { start, day_stops } => build_custom_route(catalog, start, day_stops),
        }
    }
}

/// Auto-route within a region: rotate the ring to the entry nearest the
/// start, insert vias, fill from the ring, and close on the end stop
///
/// Always returns exactly `days + 1` names; repeats at the tail pad out
/// trips longer than the usable ring.
pub fn build_region_route(
    catalog: &PortCatalog,
    start: &str,
    end: &str,
    days: u32,
    region: Option<Region>,
    vias: &[String],
) -> Vec<String> {
    let region = region.unwrap_or_else(|| rings::auto_pick_region(start, end));
    let ring = rings::ring(region);

    let start_record = catalog.resolve(start);
    let (start_name, start_coords) = match start_record {
        Some(r) => (r.name.clone(), r.coords()),
        None => {
            // Unresolvable start: degenerate path, no ring seeding possible
            return degenerate_route(catalog, start, end, days, vias);
        }
    };
    if ring.is_empty() {
        return degenerate_route(catalog, start, end, days, vias);
    }

    let end_name = catalog
        .resolve(end)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| end.trim().to_string());

    // Rotate the ring to begin at the entry nearest the actual start;
    // ties break to the earliest ring position.
    let mut nearest: Option<(usize, f64)> = None;
    for (i, stop) in ring.iter().enumerate() {
        if let Some(record) = catalog.resolve(stop) {
            let d = haversine_nm(start_coords, record.coords());
            if nearest.map(|(_, best)| d < best).unwrap_or(true) {
                nearest = Some((i, d));
            }
        }
    }
    let pivot = nearest.map(|(i, _)| i).unwrap_or(0);
    let rotated: Vec<&str> = ring[pivot..].iter().chain(ring[..pivot].iter()).copied().collect();

    // Place days - 1 intermediate stops: vias first, then ring fill.
    let wanted = days.saturating_sub(1) as usize;
    let mut intermediates: Vec<String> = Vec::with_capacity(wanted);
    let previous = |ints: &Vec<String>| -> String {
        ints.last().cloned().unwrap_or_else(|| start_name.clone())
    };

    for via in vias {
        if intermediates.len() >= wanted {
            break;
        }
        let via = via.trim();
        if via.is_empty() {
            continue;
        }
        // Optional vias degrade gracefully: unresolvable ones are skipped
        let Some(record) = catalog.resolve(via) else {
            continue;
        };
        if normalize(&record.name) == normalize(&previous(&intermediates)) {
            continue;
        }
        intermediates.push(record.name.clone());
    }

    for stop in &rotated {
        if intermediates.len() >= wanted {
            break;
        }
        if normalize(stop) == normalize(&previous(&intermediates)) {
            continue;
        }
        intermediates.push((*stop).to_string());
    }

    // Avoid a zero-distance final leg: the stop before the forced end must
    // differ from it.
    let repeats_end = intermediates
        .last()
        .map(|last| normalize(last) == normalize(&end_name))
        .unwrap_or(false);
    if repeats_end {
        let before = intermediates
            .len()
            .checked_sub(2)
            .map(|i| intermediates[i].clone())
            .unwrap_or_else(|| start_name.clone());
        let substitute = rotated
            .iter()
            .find(|s| normalize(s) != normalize(&end_name) && normalize(s) != normalize(&before))
            .copied();
        if let (Some(substitute), Some(slot)) = (substitute, intermediates.last_mut()) {
            *slot = substitute.to_string();
        }
    }

    let mut route = Vec::with_capacity(days as usize + 1);
    route.push(start_name);
    route.extend(intermediates);
    route.push(end_name.clone());
    fit_length(route, days, &end_name)
}

/// Degenerate fallback when no ring walk is possible:
/// `[start, vias..., end]` padded/truncated to `days + 1`
fn degenerate_route(
    catalog: &PortCatalog,
    start: &str,
    end: &str,
    days: u32,
    vias: &[String],
) -> Vec<String> {
    let end_name = catalog
        .resolve(end)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| end.trim().to_string());

    let mut route = vec![start.trim().to_string()];
    for via in vias {
        let via = via.trim();
        if !via.is_empty() {
            route.push(via.to_string());
        }
    }
    route.push(end_name.clone());
    fit_length(route, days, &end_name)
}

/// Pad (repeating `end`) or truncate to exactly `days + 1` entries,
/// keeping `end` as the final stop
fn fit_length(mut route: Vec<String>, days: u32, end: &str) -> Vec<String> {
    let target = days as usize + 1;
    route.truncate(target);
    while route.len() < target {
        route.push(end.to_string());
    }
    if let Some(last) = route.last_mut() {
        *last = end.to_string();
    }
    route
}

/// Validate a fully custom stop sequence
///
/// Concatenates start with the day stops, drops empties, and requires
/// every entry to resolve. Returns `None` (no partial route) when any
/// entry fails or fewer than 2 entries remain.
pub fn build_custom_route(
    catalog: &PortCatalog,
    start: &str,
    day_stops: &[String],
) -> Option<Vec<String>> {
    let mut route = Vec::with_capacity(day_stops.len() + 1);
    for name in std::iter::once(start).chain(day_stops.iter().map(String::as_str)) {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        route.push(catalog.resolve(name)?.name.clone());
    }
    if route.len() < 2 {
        return None;
    }
    Some(route)
}
