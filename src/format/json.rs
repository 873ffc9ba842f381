//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::ItineraryFormatter;
use crate::itinerary::{Itinerary, PlanRequest};

/// JSON formatter - outputs the full itinerary as pretty-printed JSON
pub struct JsonFormatter;

impl ItineraryFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON itinerary"
    }

    fn format(
        &self,
        itinerary: &Itinerary,
        _request: &PlanRequest,
        _config: &Config,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(itinerary)?)
    }
}
