//! Itinerary assembly
//!
//! This module handles:
//! - `PlanRequest`, the full planning input (route, yacht, dates, audience)
//! - Day-by-day card assembly over the built route
//! - Narrative notes by region, preference tags, and audience
//! - Additive per-day annotation merging and zero-safe totals
//!
//! Audience branching is presentation policy only: Captain and VIP receive
//! identical legs and totals, the attached narrative text differs.

use crate::catalog::PortCatalog;
use crate::catalog::Region;
use crate::error::{Error, Result};
use crate::estimate::{estimate_leg, Leg, Yacht};
use crate::route::{rings, RouteRequest};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Charterer preference tags; each active tag adds a note sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Family,
    Nightlife,
    Gastronomy,
}

impl std::str::FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "family" => Ok(Self::Family),
            "nightlife" => Ok(Self::Nightlife),
            "gastronomy" | "food" => Ok(Self::Gastronomy),
            _ => Err(format!("Unknown preference: {}", s)),
        }
    }
}

/// Narrative voice applied to the day notes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    Captain,
    Vip,
}

impl std::str::FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "captain" => Ok(Self::Captain),
            "vip" => Ok(Self::Vip),
            _ => Err(format!("Unknown audience: {}", s)),
        }
    }
}

/// Free-text notes attached to one day, typically from a shared link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marina: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beach: Option<String>,
}

impl DayAnnotation {
    /// Fill in fields the incoming annotation supplies; never clears
    /// fields already set
    pub fn merge(&mut self, incoming: &DayAnnotation) {
        if incoming.marina.is_some() {
            self.marina = incoming.marina.clone();
        }
        if incoming.food.is_some() {
            self.food = incoming.food.clone();
        }
        if incoming.beach.is_some() {
            self.beach = incoming.beach.clone();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.marina.is_none() && self.food.is_none() && self.beach.is_none()
    }
}

/// An annotation addressed to a 1-based day index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedAnnotation {
    pub day: u32,
    #[serde(flatten)]
    pub note: DayAnnotation,
}

/// One calendar day of the itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCard {
    /// 1-based
    pub day_index: u32,
    /// ISO calendar date
    pub date: NaiveDate,
    /// Absent for a layover day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg: Option<Leg>,
    pub notes: String,
    #[serde(default, skip_serializing_if = "DayAnnotation::is_empty")]
    pub annotation: DayAnnotation,
}

/// Aggregate totals over all legs; zero-safe when legs are absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub distance_nm: f64,
    pub hours: f64,
    /// `hours` formatted as "Xh Ym"
    pub duration: String,
    pub fuel_liters: f64,
    pub cost: f64,
}

/// A complete day-by-day charter plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: String,
    pub region: Region,
    pub stops: Vec<String>,
    pub days: Vec<DayCard>,
    pub totals: Totals,
}

/// Full planning input: route request plus yacht, dates, and narrative
/// selections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub route: RouteRequest,
    pub yacht: Yacht,
    /// Charter start date; day 1 falls on this date
    pub start_date: NaiveDate,
    #[serde(default)]
    pub preferences: Vec<Preference>,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default)]
    pub weather_aware: bool,
    /// Passage-time multiplier over straight-line distance
    #[serde(default = "default_time_margin")]
    pub time_margin: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<IndexedAnnotation>,
}

fn default_time_margin() -> f64 {
    crate::config::defaults::TIME_MARGIN
}

impl PlanRequest {
    /// Validate the whole request at the boundary
    ///
    /// Covers route shape plus the numeric yacht parameters; a zero or
    /// negative cruise speed would otherwise blow up the leg arithmetic.
    pub fn validate(&self) -> Result<()> {
        self.route.validate()?;
        if !self.yacht.cruise_speed_knots.is_finite() || self.yacht.cruise_speed_knots <= 0.0 {
            return Err(Error::InvalidRequest(format!(
                "cruise speed must be positive, got {}",
                self.yacht.cruise_speed_knots
            )));
        }
        if !self.yacht.liters_per_hour.is_finite() || self.yacht.liters_per_hour < 0.0 {
            return Err(Error::InvalidRequest(format!(
                "fuel burn must be non-negative, got {}",
                self.yacht.liters_per_hour
            )));
        }
        if !self.yacht.price_per_liter.is_finite() || self.yacht.price_per_liter < 0.0 {
            return Err(Error::InvalidRequest(format!(
                "fuel price must be non-negative, got {}",
                self.yacht.price_per_liter
            )));
        }
        if !self.time_margin.is_finite() || self.time_margin <= 0.0 {
            return Err(Error::InvalidRequest(format!(
                "time margin must be positive, got {}",
                self.time_margin
            )));
        }
        Ok(())
    }
}

/// Fixed per-region advisory sentence opening every day note
fn region_advisory(region: Region) -> &'static str {
    match region {
        Region::Saronic => "Sheltered waters and short hops; moor early in high season.",
        Region::Cyclades => {
            "Open Aegean crossings; watch the meltemi forecast and keep afternoons in port."
        }
        Region::Ionian => "Gentle afternoon breezes and flat seas; ideal relaxed cruising.",
        Region::Dodecanese => "Long sunny passages along the Turkish coast; carry extra water.",
        Region::Sporades => "Green islands and marine-park waters; respect protected zones.",
        Region::NorthAegean => "Quieter cruising with longer crossings; plan provisioning ahead.",
        Region::Crete => "Exposed northern coast; confirm berth availability before departure.",
    }
}

fn preference_note(preference: Preference) -> &'static str {
    match preference {
        Preference::Family => "Family picks: sandy shallows and an early taverna dinner ashore.",
        Preference::Nightlife => "Nightlife picks: the waterfront bars wake up after sunset.",
        Preference::Gastronomy => {
            "Gastronomy picks: ask for the day's catch and the local barrel wine."
        }
    }
}

/// Distance at which the Captain note flags a passage as long
const LONG_LEG_NM: f64 = 35.0;

const CAPTAIN_RISK_NOTE: &str =
    "Captain's advisory: check the morning gust forecast and brief the crew before slipping lines.";

const VIP_NOTES: [&str; 2] = [
    "Concierge: a table is held at the best waterside taverna; transfers on request.",
    "Experience: swim stop at a secluded cove before the evening approach.",
];

/// Regions where the Captain risk advisory applies regardless of leg length
fn region_triggers_risk(region: Region) -> bool {
    matches!(region, Region::Cyclades | Region::Crete)
}

fn synthesize_notes(
    region: Region,
    leg: Option<&Leg>,
    preferences: &[Preference],
    audience: Audience,
    weather_aware: bool,
) -> String {
    let mut parts = vec![region_advisory(region).to_string()];
    for preference in preferences {
        parts.push(preference_note(*preference).to_string());
    }
    match audience {
        Audience::Captain => {
            let long_leg = leg.map(|l| l.distance_nm >= LONG_LEG_NM).unwrap_or(false);
            if region_triggers_risk(region) || long_leg || weather_aware {
                parts.push(CAPTAIN_RISK_NOTE.to_string());
            }
        }
        Audience::Vip => {
            for note in VIP_NOTES {
                parts.push(note.to_string());
            }
        }
    }
    parts.join(" ")
}

/// Format fractional hours as "Xh Ym"
pub fn format_duration(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

fn totals(days: &[DayCard]) -> Totals {
    let mut distance_nm = 0.0;
    let mut hours = 0.0;
    let mut fuel_liters = 0.0;
    let mut cost = 0.0;
    for day in days {
        if let Some(leg) = &day.leg {
            distance_nm += leg.distance_nm;
            hours += leg.hours;
            fuel_liters += leg.fuel_liters;
            cost += leg.cost;
        }
    }
    Totals {
        distance_nm,
        hours,
        duration: format_duration(hours),
        fuel_liters,
        cost,
    }
}

/// The effective region of a plan, for windows and advisories
fn plan_region(request: &PlanRequest, catalog: &PortCatalog) -> Region {
    match &request.route {
        RouteRequest::Region {
            region: Some(region),
            ..
        } => *region,
        RouteRequest::Region {
            start, end, ..
        } => rings::auto_pick_region(start, end),
        RouteRequest::Custom { start, .. } => catalog
            .resolve(start)
            .map(|r| r.region)
            .unwrap_or_else(|| rings::auto_pick_region(start, start)),
    }
}

/// Build a complete itinerary from a plan request
///
/// Runs the whole pipeline: validate, build the stop sequence, estimate
/// each leg, synthesize notes, merge annotations, and total. A custom
/// route with any unresolvable stop yields [`Error::UnresolvedPort`]; no
/// partial itinerary is produced.
pub fn plan(catalog: &PortCatalog, request: &PlanRequest) -> Result<Itinerary> {
    request.validate()?;
    let stops = request.route.build(catalog).ok_or_else(|| {
        let bad = match &request.route {
            RouteRequest::Custom { start, day_stops } => std::iter::once(start.as_str())
                .chain(day_stops.iter().map(String::as_str))
                .find(|name| catalog.resolve(name).is_none())
                .unwrap_or(start),
            _ => "",
        };
        Error::UnresolvedPort(bad.to_string())
    })?;
    let region = plan_region(request, catalog);

    let mut days = Vec::with_capacity(stops.len().saturating_sub(1));
    for (i, pair) in stops.windows(2).enumerate() {
        let day_index = i as u32 + 1;
        let date = request.start_date + Duration::days(i as i64);

        // A stop that does not resolve (degenerate region routes keep the
        // raw user string) produces a layover day rather than a leg.
        let leg = match (catalog.resolve(&pair[0]), catalog.resolve(&pair[1])) {
            (Some(from), Some(to)) => Some(estimate_leg(
                &from.name,
                &to.name,
                from.coords(),
                to.coords(),
                &request.yacht,
                region,
                request.weather_aware,
                request.time_margin,
            )),
            _ => None,
        };

        let notes = synthesize_notes(
            region,
            leg.as_ref(),
            &request.preferences,
            request.audience,
            request.weather_aware,
        );
        days.push(DayCard {
            day_index,
            date,
            leg,
            notes,
            annotation: DayAnnotation::default(),
        });
    }

    for indexed in &request.annotations {
        if let Some(day) = days.iter_mut().find(|d| d.day_index == indexed.day) {
            day.annotation.merge(&indexed.note);
        }
    }

    let totals = totals(&days);
    Ok(Itinerary {
        id: Uuid::new_v4().to_string(),
        region,
        stops,
        days,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::YachtType;
    use chrono::NaiveTime;

    fn catalog() -> PortCatalog {
        PortCatalog::builtin()
    }

    fn motor_yacht() -> Yacht {
        Yacht {
            yacht_type: YachtType::Motor,
            cruise_speed_knots: 20.0,
            liters_per_hour: 180.0,
            price_per_liter: 1.80,
            departure_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        }
    }

    fn sailing_yacht() -> Yacht {
        Yacht {
            yacht_type: YachtType::Sailing,
            cruise_speed_knots: 6.5,
            liters_per_hour: 0.0,
            price_per_liter: 0.0,
            departure_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        }
    }

    fn saronic_weekend(yacht: Yacht) -> PlanRequest {
        PlanRequest {
            route: RouteRequest::Region {
                start: "Alimos".to_string(),
                end: "Alimos".to_string(),
                days: 2,
                region: Some(Region::Saronic),
                vias: vec![],
            },
            yacht,
            start_date: NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(),
            preferences: vec![],
            audience: Audience::Captain,
            weather_aware: false,
            time_margin: default_time_margin(),
            annotations: vec![],
        }
    }

    #[test]
    fn test_saronic_weekend_plan() {
        let itinerary = plan(&catalog(), &saronic_weekend(motor_yacht())).unwrap();
        assert_eq!(itinerary.stops.len(), 3);
        assert_eq!(itinerary.stops[0], "Alimos");
        assert_eq!(itinerary.stops[2], "Alimos");
        assert_eq!(itinerary.days.len(), 2);
        assert_eq!(itinerary.region, Region::Saronic);
        assert!(itinerary.days.iter().all(|d| d.leg.is_some()));
    }

    #[test]
    fn test_dates_advance_per_day() {
        let itinerary = plan(&catalog(), &saronic_weekend(motor_yacht())).unwrap();
        assert_eq!(
            itinerary.days[0].date,
            NaiveDate::from_ymd_opt(2026, 6, 6).unwrap()
        );
        assert_eq!(
            itinerary.days[1].date,
            NaiveDate::from_ymd_opt(2026, 6, 7).unwrap()
        );
        assert_eq!(itinerary.days[0].day_index, 1);
        assert_eq!(itinerary.days[1].day_index, 2);
    }

    #[test]
    fn test_zero_cruise_speed_is_rejected() {
        let mut request = saronic_weekend(motor_yacht());
        request.yacht.cruise_speed_knots = 0.0;
        assert!(matches!(
            plan(&catalog(), &request),
            Err(Error::InvalidRequest(_))
        ));

        request.yacht.cruise_speed_knots = -5.0;
        assert!(matches!(
            plan(&catalog(), &request),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_bad_yacht_numbers_are_rejected() {
        let mut request = saronic_weekend(motor_yacht());
        request.yacht.liters_per_hour = -1.0;
        assert!(matches!(
            plan(&catalog(), &request),
            Err(Error::InvalidRequest(_))
        ));

        let mut request = saronic_weekend(motor_yacht());
        request.yacht.price_per_liter = f64::NAN;
        assert!(matches!(
            plan(&catalog(), &request),
            Err(Error::InvalidRequest(_))
        ));

        let mut request = saronic_weekend(motor_yacht());
        request.time_margin = 0.0;
        assert!(matches!(
            plan(&catalog(), &request),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_custom_unresolvable_stop_is_error() {
        let request = PlanRequest {
            route: RouteRequest::Custom {
                start: "Alimos".to_string(),
                day_stops: vec!["Unknownzzz".to_string()],
            },
            ..saronic_weekend(motor_yacht())
        };
        match plan(&catalog(), &request) {
            Err(Error::UnresolvedPort(name)) => assert_eq!(name, "Unknownzzz"),
            other => panic!("expected UnresolvedPort, got {:?}", other),
        }
    }

    #[test]
    fn test_sailing_totals_have_no_fuel() {
        let request = PlanRequest {
            route: RouteRequest::Region {
                start: "Lavrion".to_string(),
                end: "Lavrion".to_string(),
                days: 5,
                region: Some(Region::Cyclades),
                vias: vec![],
            },
            ..saronic_weekend(sailing_yacht())
        };
        let itinerary = plan(&catalog(), &request).unwrap();
        assert!(itinerary
            .days
            .iter()
            .flat_map(|d| d.leg.as_ref())
            .all(|l| l.fuel_liters == 0.0 && l.cost == 0.0));
        assert_eq!(itinerary.totals.fuel_liters, 0.0);
        assert_eq!(itinerary.totals.cost, 0.0);
        assert!(itinerary.totals.distance_nm > 0.0);
    }

    #[test]
    fn test_audience_changes_notes_not_legs() {
        let captain = plan(&catalog(), &saronic_weekend(motor_yacht())).unwrap();
        let mut vip_request = saronic_weekend(motor_yacht());
        vip_request.audience = Audience::Vip;
        let vip = plan(&catalog(), &vip_request).unwrap();

        assert_eq!(captain.stops, vip.stops);
        assert_eq!(captain.totals.distance_nm, vip.totals.distance_nm);
        assert_ne!(captain.days[0].notes, vip.days[0].notes);
        assert!(vip.days[0].notes.contains("Concierge"));
    }

    #[test]
    fn test_captain_risk_note_triggers() {
        // Saronic weekend, short legs, no weather flag: no risk note
        let calm = plan(&catalog(), &saronic_weekend(motor_yacht())).unwrap();
        assert!(!calm.days[0].notes.contains("advisory"));

        // Weather-aware flips it on
        let mut stormy_request = saronic_weekend(motor_yacht());
        stormy_request.weather_aware = true;
        let stormy = plan(&catalog(), &stormy_request).unwrap();
        assert!(stormy.days[0].notes.contains("advisory"));
    }

    #[test]
    fn test_preference_notes_appended() {
        let mut request = saronic_weekend(motor_yacht());
        request.preferences = vec![Preference::Family, Preference::Gastronomy];
        let itinerary = plan(&catalog(), &request).unwrap();
        assert!(itinerary.days[0].notes.contains("Family picks"));
        assert!(itinerary.days[0].notes.contains("Gastronomy picks"));
        assert!(!itinerary.days[0].notes.contains("Nightlife"));
    }

    #[test]
    fn test_annotations_merge_by_day_index() {
        let mut request = saronic_weekend(motor_yacht());
        request.annotations = vec![
            IndexedAnnotation {
                day: 2,
                note: DayAnnotation {
                    marina: Some("Stern-to on the north quay".to_string()),
                    food: None,
                    beach: None,
                },
            },
            IndexedAnnotation {
                day: 2,
                note: DayAnnotation {
                    marina: None,
                    food: Some("Book the fish taverna".to_string()),
                    beach: None,
                },
            },
            // Out-of-range day indexes are ignored
            IndexedAnnotation {
                day: 9,
                note: DayAnnotation {
                    beach: Some("nowhere".to_string()),
                    ..Default::default()
                },
            },
        ];
        let itinerary = plan(&catalog(), &request).unwrap();
        assert!(itinerary.days[0].annotation.is_empty());
        let day2 = &itinerary.days[1].annotation;
        assert_eq!(day2.marina.as_deref(), Some("Stern-to on the north quay"));
        assert_eq!(day2.food.as_deref(), Some("Book the fish taverna"));
        assert!(day2.beach.is_none());
    }

    #[test]
    fn test_annotation_merge_keeps_existing_fields() {
        let mut base = DayAnnotation {
            marina: Some("first".to_string()),
            food: None,
            beach: None,
        };
        base.merge(&DayAnnotation {
            marina: None,
            food: Some("added".to_string()),
            beach: None,
        });
        assert_eq!(base.marina.as_deref(), Some("first"));
        assert_eq!(base.food.as_deref(), Some("added"));
    }

    #[test]
    fn test_totals_sum_legs() {
        let itinerary = plan(&catalog(), &saronic_weekend(motor_yacht())).unwrap();
        let expected_nm: f64 = itinerary
            .days
            .iter()
            .flat_map(|d| d.leg.as_ref())
            .map(|l| l.distance_nm)
            .sum();
        assert_eq!(itinerary.totals.distance_nm, expected_nm);
        assert!(itinerary.totals.duration.contains('h'));
    }

    #[test]
    fn test_layover_days_are_zero_in_totals() {
        // Unresolvable start degrades to a degenerate route whose first
        // stop never resolves, so day 1 is a layover.
        let request = PlanRequest {
            route: RouteRequest::Region {
                start: "Nowhereville".to_string(),
                end: "Aegina".to_string(),
                days: 2,
                region: Some(Region::Saronic),
                vias: vec![],
            },
            ..saronic_weekend(motor_yacht())
        };
        let itinerary = plan(&catalog(), &request).unwrap();
        assert!(itinerary.days[0].leg.is_none());
        assert!(!itinerary.days[0].notes.is_empty());
        let legged: f64 = itinerary
            .days
            .iter()
            .flat_map(|d| d.leg.as_ref())
            .map(|l| l.distance_nm)
            .sum();
        assert_eq!(itinerary.totals.distance_nm, legged);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0h 0m");
        assert_eq!(format_duration(2.13), "2h 8m");
        assert_eq!(format_duration(10.5), "10h 30m");
    }
}
