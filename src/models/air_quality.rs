use super::aqi::AqiCategory;
use super::datetime::{deserialize_flexible_datetime, deserialize_optional_datetime};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Deserialize;

/// Current air quality snapshot at a coordinate
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AirQualityReading {
    #[serde(deserialize_with = "deserialize_aqi")]
    pub aqi: i32,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
    #[serde(default)]
    pub co: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A single measured pollutant for display
#[derive(Clone, Debug, PartialEq)]
pub struct Pollutant {
    pub label: &'static str,
    pub value: Option<f64>,
    pub unit: &'static str,
}

impl Pollutant {
    /// Value with unit, or a dash when the API omitted it
    pub fn display_value(&self) -> String {
        match self.value {
            Some(value) => format!("{value} {}", self.unit),
            None => "—".to_string(),
        }
    }
}

impl AirQualityReading {
    pub const fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }

    /// Pollutant tiles in display order
    pub fn pollutants(&self) -> [Pollutant; 6] {
        [
            Pollutant { label: "PM2.5", value: self.pm25, unit: "μg/m³" },
            Pollutant { label: "PM10", value: self.pm10, unit: "μg/m³" },
            Pollutant { label: "O3", value: self.o3, unit: "ppb" },
            Pollutant { label: "NO2", value: self.no2, unit: "ppb" },
            Pollutant { label: "SO2", value: self.so2, unit: "ppb" },
            Pollutant { label: "CO", value: self.co, unit: "ppm" },
        ]
    }
}

/// One point of the historical trend
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AirQualityHistoryPoint {
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_aqi")]
    pub aqi: i32,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
}

/// Chart-ready columns of the trend, aligned by index. Missing particulate
/// readings stay `None` and are drawn as gaps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub aqi: Vec<f64>,
    pub pm25: Vec<Option<f64>>,
    pub pm10: Vec<Option<f64>>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Everything the air quality page renders
#[derive(Clone, Debug, PartialEq)]
pub struct AirQualitySnapshot {
    pub current: AirQualityReading,
    history: Vec<AirQualityHistoryPoint>,
}

impl AirQualitySnapshot {
    pub fn new(current: AirQualityReading, mut history: Vec<AirQualityHistoryPoint>) -> Self {
        history.sort_by_key(|p| p.timestamp);
        Self { current, history }
    }

    pub fn trend_series(&self) -> TrendSeries {
        self.trend_series_in(&Local)
    }

    /// Builds the chart columns with labels rendered in the given timezone.
    pub fn trend_series_in<Tz>(&self, tz: &Tz) -> TrendSeries
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut series = TrendSeries::default();
        for point in &self.history {
            series.labels.push(
                point
                    .timestamp
                    .with_timezone(tz)
                    .format("%d %b %H:%M")
                    .to_string(),
            );
            series.aqi.push(f64::from(point.aqi));
            series.pm25.push(point.pm25);
            series.pm10.push(point.pm10);
        }
        series
    }
}

/// Accepts integer or floating JSON numbers and rounds to the nearest index value
fn deserialize_aqi<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: f64 = Deserialize::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!("Invalid AQI value {value}")));
    }
    #[allow(clippy::cast_possible_truncation)]
    let aqi = value.round() as i32;
    Ok(aqi)
}
