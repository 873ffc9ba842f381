//! Output formatters
//!
//! Provides trait-based output formatting for planned itineraries.

pub mod json;
pub mod share;
pub mod text;

use crate::config::Config;
use crate::error::Result;
use crate::itinerary::{Itinerary, PlanRequest};
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait ItineraryFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a planned itinerary
    ///
    /// # Arguments
    /// * `itinerary` - The assembled plan to format
    /// * `request` - The originating request (for the share format)
    /// * `config` - Application config
    fn format(
        &self,
        itinerary: &Itinerary,
        request: &PlanRequest,
        config: &Config,
    ) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn ItineraryFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "share" => Some(Box::new(share::ShareFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON itinerary".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable day cards".to_string(),
        },
        FormatInfo {
            name: "share".to_string(),
            description: "Shareable plan link".to_string(),
        },
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("share").is_some());
        assert!(get_formatter("unknown").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
        assert!(get_formatter("Share").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 3);
        assert!(formats.iter().any(|f| f.name == "json"));
        assert!(formats.iter().any(|f| f.name == "text"));
        assert!(formats.iter().any(|f| f.name == "share"));
    }
}
