//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::ItineraryFormatter;
use crate::itinerary::{Itinerary, PlanRequest};

/// Text formatter - outputs day-by-day cards with totals
pub struct TextFormatter;

impl ItineraryFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable day cards"
    }

    fn format(
        &self,
        itinerary: &Itinerary,
        _request: &PlanRequest,
        _config: &Config,
    ) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&format!("meltemi itinerary ({})\n", itinerary.id));
        output.push_str(&format!("Region: {}\n", itinerary.region.display_name()));
        output.push_str(&format!("Route: {}\n\n", itinerary.stops.join(" -> ")));

        for day in &itinerary.days {
            output.push_str(&format!("Day {} - {}\n", day.day_index, day.date));
            match &day.leg {
                Some(leg) => {
                    output.push_str(&format!(
                        "  {} -> {}: {} NM, {:.2} h ({} - {})\n",
                        leg.from,
                        leg.to,
                        leg.distance_nm,
                        leg.hours,
                        leg.departure.format("%H:%M"),
                        leg.arrival.format("%H:%M"),
                    ));
                    output.push_str(&format!("  Suggested departure: {}\n", leg.window));
                    if leg.fuel_liters > 0.0 {
                        output.push_str(&format!(
                            "  Fuel: {} L (EUR {})\n",
                            leg.fuel_liters, leg.cost
                        ));
                    }
                }
                None => {
                    output.push_str("  Layover in port\n");
                }
            }
            if let Some(marina) = &day.annotation.marina {
                output.push_str(&format!("  Marina: {}\n", marina));
            }
            if let Some(food) = &day.annotation.food {
                output.push_str(&format!("  Food: {}\n", food));
            }
            if let Some(beach) = &day.annotation.beach {
                output.push_str(&format!("  Beach: {}\n", beach));
            }
            output.push_str(&format!("  Notes: {}\n\n", day.notes));
        }

        // Totals
        output.push_str("Totals:\n");
        output.push_str(&format!("  Distance: {} NM\n", itinerary.totals.distance_nm));
        output.push_str(&format!("  Underway: {}\n", itinerary.totals.duration));
        if itinerary.totals.fuel_liters > 0.0 {
            output.push_str(&format!(
                "  Fuel: {} L (EUR {})\n",
                itinerary.totals.fuel_liters, itinerary.totals.cost
            ));
        }

        Ok(output)
    }
}
