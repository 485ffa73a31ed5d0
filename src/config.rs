use crate::models::geo::Coordinates;

/// Hosted API used when no override is compiled in
pub const DEFAULT_API_URL: &str = "https://urban-sustainability-dashboard.onrender.com";

/// Bengaluru city centre
pub const DEFAULT_LOCATION: Coordinates = Coordinates::new(12.9716, 77.5946);

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Days before today included in the air quality trend (today is added on top)
    pub const HISTORY_DAYS: i64 = 6;

    /// Map zoom level for the air quality map
    pub const MAP_ZOOM: u8 = 13;

    /// Radius of the AQI circle drawn on the map, in metres
    pub const MAP_RADIUS_M: f64 = 500.0;

    /// Delay before charts re-render after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// localStorage key for the selected page
    pub const PAGE_STORAGE_KEY: &'static str = "dashboard.page";

    /// localStorage key for the theme preference
    pub const THEME_STORAGE_KEY: &'static str = "dashboard.theme";
}

// APP CONFIGURATION
/// Runtime configuration, created once at startup and provided through context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    api_base_url: String,
    location: Coordinates,
    history_days: i64,
    map_zoom: u8,
    map_radius_m: f64,
}

impl AppConfig {
    /// Creates a builder for constructing an `AppConfig`.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Builds the configuration, honouring the `API_URL` override if it was
    /// set when the bundle was compiled.
    pub fn from_env() -> Self {
        Self::from_override(option_env!("API_URL"))
    }

    /// Uses `api_url` when it is present and non-blank, the hosted default otherwise.
    pub fn from_override(api_url: Option<&str>) -> Self {
        let builder = Self::builder();
        match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => builder.api_base_url(url).build(),
            None => builder.build(),
        }
    }

    /// API root without a trailing slash
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub const fn location(&self) -> Coordinates {
        self.location
    }

    pub const fn history_days(&self) -> i64 {
        self.history_days
    }

    pub const fn map_zoom(&self) -> u8 {
        self.map_zoom
    }

    pub const fn map_radius_m(&self) -> f64 {
        self.map_radius_m
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfigBuilder::default().build()
    }
}

// APP CONFIGURATION BUILDER
/// Builder for constructing an `AppConfig` with custom settings.
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_base_url: Option<String>,
    location: Option<Coordinates>,
    history_days: Option<i64>,
    map_zoom: Option<u8>,
    map_radius_m: Option<f64>,
}

impl AppConfigBuilder {
    /// Sets the API base URL.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the monitored location.
    pub fn location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets how many days back the trend reaches.
    pub fn history_days(mut self, days: i64) -> Self {
        self.history_days = Some(days);
        self
    }

    /// Sets the map zoom level.
    pub fn map_zoom(mut self, zoom: u8) -> Self {
        self.map_zoom = Some(zoom);
        self
    }

    /// Sets the AQI circle radius in metres.
    pub fn map_radius_m(mut self, radius: f64) -> Self {
        self.map_radius_m = Some(radius);
        self
    }

    /// Builds the `AppConfig`.
    pub fn build(self) -> AppConfig {
        let api_base_url = self
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        AppConfig {
            api_base_url,
            location: self.location.unwrap_or(DEFAULT_LOCATION),
            history_days: self.history_days.unwrap_or(Config::HISTORY_DAYS).max(0),
            map_zoom: self.map_zoom.unwrap_or(Config::MAP_ZOOM).min(19),
            map_radius_m: self.map_radius_m.unwrap_or(Config::MAP_RADIUS_M),
        }
    }
}
