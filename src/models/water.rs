use super::datetime::deserialize_optional_datetime;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Water consumption and quality reading for a location
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WaterReading {
    #[serde(default)]
    pub location: Option<String>,
    /// Consumption in litres
    #[serde(default)]
    pub consumption: Option<f64>,
    /// Quality score reported by the API
    #[serde(default)]
    pub quality: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl WaterReading {
    pub fn location_label(&self) -> &str {
        self.location
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or("Unknown location")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_deserialization() {
        let json = r#"{
            "location": "Whitefield",
            "consumption": 1200.5,
            "quality": 87,
            "timestamp": "2025-05-05T06:30:00Z"
        }"#;
        let reading: WaterReading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.location_label(), "Whitefield");
        assert_eq!(reading.consumption, Some(1200.5));
        assert_eq!(reading.quality, Some(87.0));
        assert!(reading.timestamp.is_some());
    }

    #[test]
    fn test_blank_location_falls_back() {
        let reading: WaterReading = serde_json::from_str(r#"{ "location": "  " }"#).unwrap();
        assert_eq!(reading.location_label(), "Unknown location");
    }
}
