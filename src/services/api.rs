use crate::config::AppConfig;
use crate::models::{
    air_quality::{AirQualityHistoryPoint, AirQualityReading, AirQualitySnapshot},
    error::AppError,
    geo::Coordinates,
    waste::WasteSummary,
    water::WaterReading,
};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::de::DeserializeOwned;

// ENDPOINTS
/// URL construction for the dashboard API.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Current reading at a coordinate.
    pub fn air_quality(&self, at: Coordinates) -> String {
        format!(
            "{}/api/airQuality/location?lat={}&lng={}",
            self.base_url, at.lat, at.lng
        )
    }

    /// Historical readings at a coordinate between two instants.
    pub fn air_quality_history(
        &self,
        at: Coordinates,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> String {
        format!(
            "{}/api/airQuality/history?lat={}&lng={}&startDate={}&endDate={}",
            self.base_url,
            at.lat,
            at.lng,
            iso_timestamp(start),
            iso_timestamp(end)
        )
    }

    pub fn waste(&self) -> String {
        format!("{}/api/waste", self.base_url)
    }

    pub fn water(&self) -> String {
        format!("{}/api/water", self.base_url)
    }
}

/// ISO-8601 UTC with milliseconds, e.g. `2025-06-01T08:00:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Trend window ending at `now` and reaching back `days` whole days.
pub fn history_window(now: DateTime<Utc>, days: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - Duration::days(days), now)
}

/// Deserializes a response body, reporting malformed JSON as a data error.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
}

/// List endpoints are summarised by their first element; the rest is ignored.
pub fn first_of<T>(items: Option<Vec<T>>) -> Option<T> {
    items.and_then(|items| items.into_iter().next())
}

// DASHBOARD CLIENT
/// HTTP client for the urban sustainability API.
pub struct DashboardClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    location: Coordinates,
    history_days: i64,
}

impl DashboardClient {
    /// Creates a client for the given configuration.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoints: Endpoints::new(config.api_base_url()),
            location: config.location(),
            history_days: config.history_days(),
        })
    }

    /// Fetches the current reading. A `null` body means there is no reading.
    pub async fn fetch_air_quality(&self) -> Result<Option<AirQualityReading>, AppError> {
        self.fetch(&self.endpoints.air_quality(self.location)).await
    }

    /// Fetches the trend ending at `now`. A `null` body is an empty trend.
    pub async fn fetch_air_quality_history(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<AirQualityHistoryPoint>, AppError> {
        let (start, end) = history_window(now, self.history_days);
        let url = self
            .endpoints
            .air_quality_history(self.location, start, end);

        let points: Option<Vec<AirQualityHistoryPoint>> = self.fetch(&url).await?;
        Ok(points.unwrap_or_default())
    }

    /// Fetches the current reading and its trend concurrently. Either failure
    /// fails the whole snapshot.
    pub async fn fetch_air_quality_snapshot(&self) -> Result<Option<AirQualitySnapshot>, AppError> {
        let (current, history) = futures::join!(
            self.fetch_air_quality(),
            self.fetch_air_quality_history(Utc::now())
        );

        let history = history?;
        Ok(current?.map(|current| AirQualitySnapshot::new(current, history)))
    }

    /// Fetches waste summaries and keeps the first.
    pub async fn fetch_waste(&self) -> Result<Option<WasteSummary>, AppError> {
        Ok(first_of(self.fetch(&self.endpoints.waste()).await?))
    }

    /// Fetches water readings and keeps the first.
    pub async fn fetch_water(&self) -> Result<Option<WaterReading>, AppError> {
        Ok(first_of(self.fetch(&self.endpoints.water()).await?))
    }

    /// Executes a single GET and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                gloo::console::warn!(&format!("Failed to read {status} body from {url}: {e}"));
                String::new()
            });
            return Err(self.error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response: {e}")))?;

        parse_body(&body)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://api.example.org/")
    }

    #[test]
    fn test_client_creation() {
        let client = DashboardClient::new(&AppConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_air_quality_url() {
        let url = endpoints().air_quality(Coordinates::new(12.9716, 77.5946));
        assert_eq!(
            url,
            "https://api.example.org/api/airQuality/location?lat=12.9716&lng=77.5946"
        );
    }

    #[test]
    fn test_history_url_carries_iso_range() {
        let end = Utc.with_ymd_and_hms(2025, 6, 7, 12, 0, 0).unwrap();
        let (start, end) = history_window(end, 6);
        let url = endpoints().air_quality_history(Coordinates::new(1.5, -2.25), start, end);

        assert_eq!(
            url,
            "https://api.example.org/api/airQuality/history?lat=1.5&lng=-2.25\
             &startDate=2025-06-01T12:00:00.000Z&endDate=2025-06-07T12:00:00.000Z"
        );
    }

    #[test]
    fn test_list_urls() {
        assert_eq!(endpoints().waste(), "https://api.example.org/api/waste");
        assert_eq!(endpoints().water(), "https://api.example.org/api/water");
    }

    #[test]
    fn test_client_uses_configured_base() {
        let config = AppConfig::builder()
            .api_base_url("http://localhost:5000")
            .build();
        let client = DashboardClient::new(&config).unwrap();
        assert_eq!(client.endpoints.waste(), "http://localhost:5000/api/waste");
    }

    fn status_error(code: u16) -> AppError {
        let client = DashboardClient::new(&AppConfig::default()).unwrap();
        let status = reqwest::StatusCode::from_u16(code).unwrap();
        client.error_for_status(status, "details")
    }

    #[test]
    fn test_not_found_status() {
        let error = status_error(404);
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(error.to_string(), "Not found: Resource not found: details");
    }

    #[test]
    fn test_client_error_status() {
        let error = status_error(418);
        assert!(matches!(error, AppError::ApiError(ref msg) if msg.starts_with("Client error 418")));
        assert!(matches!(status_error(400), AppError::ApiError(_)));
        assert!(matches!(status_error(499), AppError::ApiError(_)));
    }

    #[test]
    fn test_server_error_status() {
        let error = status_error(503);
        assert!(matches!(error, AppError::ApiError(ref msg) if msg.starts_with("Server error 503")));
        assert!(matches!(status_error(500), AppError::ApiError(_)));
    }

    #[test]
    fn test_unexpected_status() {
        let error = status_error(302);
        assert!(matches!(error, AppError::ApiError(ref msg) if msg.starts_with("Unexpected status 302")));
        assert!(error.to_string().ends_with("details"));
    }

    #[test]
    fn test_first_of_list_response() {
        let body = r#"[{ "totalWaste": 10 }, { "totalWaste": 20 }]"#;
        let items: Option<Vec<WasteSummary>> = parse_body(body).unwrap();
        let first = first_of(items).unwrap();
        assert_eq!(first.total_waste, Some(10.0));
    }

    #[test]
    fn test_empty_and_null_lists_have_no_first() {
        let empty: Option<Vec<WaterReading>> = parse_body("[]").unwrap();
        assert!(first_of(empty).is_none());

        let null: Option<Vec<WaterReading>> = parse_body("null").unwrap();
        assert!(first_of(null).is_none());
    }

    #[test]
    fn test_malformed_body_is_data_error() {
        let result: Result<Option<AirQualityReading>, _> = parse_body("<html>oops</html>");
        assert!(matches!(result, Err(AppError::DataError(_))));

        let result: Result<Option<AirQualityReading>, _> = parse_body(r#"{ "aqi": "high" }"#);
        assert!(matches!(result, Err(AppError::DataError(_))));
    }
}
