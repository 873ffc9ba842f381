//! Shareable link encoding
//!
//! A plan request serializes to a single URL query parameter so a link
//! reproduces the plan (route, yacht, preferences, audience, annotations)
//! on any instance with the same catalog.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::ItineraryFormatter;
use crate::itinerary::{Itinerary, PlanRequest};

/// Query parameter carrying the encoded plan
const PLAN_PARAM: &str = "plan";

/// Encode a plan request into a URL query string ("plan=...")
pub fn encode(request: &PlanRequest) -> Result<String> {
    let json = serde_json::to_string(request)?;
    Ok(format!("{}={}", PLAN_PARAM, urlencoding::encode(&json)))
}

/// Decode a plan request from a URL query string
///
/// Accepts a full query string (other parameters are ignored) or the bare
/// encoded value.
pub fn decode(query: &str) -> Result<PlanRequest> {
    let value = query
        .split('&')
        .find_map(|pair| pair.strip_prefix(&format!("{}=", PLAN_PARAM)))
        .unwrap_or(query);

    let json = urlencoding::decode(value)
        .map_err(|e| Error::ShareLink(format!("Invalid link encoding: {}", e)))?;

    serde_json::from_str(&json).map_err(|e| Error::ShareLink(format!("Invalid plan link: {}", e)))
}

/// Share formatter - outputs a shareable plan path
pub struct ShareFormatter;

impl ItineraryFormatter for ShareFormatter {
    fn name(&self) -> &str {
        "share"
    }

    fn description(&self) -> &str {
        "Shareable plan link"
    }

    fn format(
        &self,
        _itinerary: &Itinerary,
        request: &PlanRequest,
        _config: &Config,
    ) -> Result<String> {
        Ok(format!("/plan?{}", encode(request)?))
    }
}
