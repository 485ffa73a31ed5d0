#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::rc::Rc;
    use urban_dashboard::config::AppConfig;
    use urban_dashboard::hooks::{
        use_air_quality::AIR_QUALITY_ERROR, use_waste::WASTE_ERROR, use_water::WATER_ERROR,
        view_state::ViewState,
    };
    use urban_dashboard::models::{
        air_quality::{AirQualityHistoryPoint, AirQualityReading, AirQualitySnapshot},
        aqi::{AqiCategory, aqi_color, aqi_label},
        error::AppError,
        waste::WasteSummary,
        water::WaterReading,
    };
    use urban_dashboard::services::api::{Endpoints, first_of, history_window, parse_body};

    // Helper function to create a reading from a JSON body
    fn reading(json: &str) -> AirQualityReading {
        serde_json::from_str(json).unwrap()
    }

    // Helper mirroring what the page hooks do with a list response
    fn settle_list<T>(body: &str, message: &str) -> ViewState<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = parse_body::<Option<Vec<T>>>(body).map(first_of);
        ViewState::from_result(result, message)
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
    }

    // ===== AQI Classification Tests =====

    #[test]
    fn test_aqi_documented_boundaries() {
        assert_eq!(aqi_label(50), "Good");
        assert_eq!(aqi_label(51), "Moderate");
        assert_eq!(aqi_label(300), "Very Unhealthy");
        assert_eq!(aqi_label(301), "Hazardous");
    }

    #[test]
    fn test_aqi_color_is_pure() {
        for aqi in [-5, 0, 50, 51, 150, 151, 300, 301, 999] {
            assert_eq!(aqi_color(aqi), aqi_color(aqi));
            assert_eq!(aqi_color(aqi), AqiCategory::from_aqi(aqi).color());
        }
    }

    #[test]
    fn test_good_reading_renders_green() {
        let reading = reading(
            r#"{ "aqi": 42, "pm25": 10, "pm10": 20, "o3": 30, "no2": 12, "so2": 4, "co": 0.3,
                 "timestamp": "2025-06-01T08:00:00.000Z" }"#,
        );

        assert_eq!(reading.category(), AqiCategory::Good);
        assert_eq!(reading.category().label(), "Good");
        assert_eq!(reading.category().color(), "#00e400");
    }

    #[test]
    fn test_unhealthy_reading_renders_red() {
        let reading = reading(r#"{ "aqi": 175 }"#);

        assert_eq!(reading.category(), AqiCategory::Unhealthy);
        assert_eq!(reading.category().label(), "Unhealthy");
        assert_eq!(reading.category().color(), "#ff0000");
    }

    // ===== Air Quality Snapshot Tests =====

    #[test]
    fn test_empty_history_yields_empty_trend() {
        let history: Vec<AirQualityHistoryPoint> = parse_body("[]").unwrap();
        let snapshot = AirQualitySnapshot::new(reading(r#"{ "aqi": 42 }"#), history);

        let series = snapshot.trend_series_in(&Utc);
        assert!(series.is_empty());
        assert!(series.aqi.is_empty());
        assert!(series.pm25.is_empty());
        assert!(series.pm10.is_empty());
    }

    #[test]
    fn test_incomplete_history_point_keeps_page_ready() {
        let history: Vec<AirQualityHistoryPoint> = parse_body(
            r#"[
                { "timestamp": "2025-06-01T00:00:00Z", "aqi": 40, "pm25": 10, "pm10": 20 },
                { "timestamp": "2025-06-01T01:00:00Z", "aqi": 44, "pm25": 11 }
            ]"#,
        )
        .unwrap();
        let snapshot = AirQualitySnapshot::new(reading(r#"{ "aqi": 44 }"#), history);
        let state = ViewState::from_result(Ok(Some(snapshot)), AIR_QUALITY_ERROR);

        let snapshot = state.data().unwrap();
        assert_eq!(snapshot.current.aqi, 44);
        let series = snapshot.trend_series_in(&Utc);
        assert_eq!(series.len(), 2);
        assert_eq!(series.pm10, vec![Some(20.0), None]);
    }

    #[test]
    fn test_history_point_requires_timestamp_and_aqi() {
        let result: Result<Vec<AirQualityHistoryPoint>, _> =
            parse_body(r#"[{ "timestamp": "2025-06-01T00:00:00Z", "pm25": 10, "pm10": 20 }]"#);
        assert!(matches!(result, Err(AppError::DataError(_))));

        let result: Result<Vec<AirQualityHistoryPoint>, _> =
            parse_body(r#"[{ "aqi": 40, "pm25": 10, "pm10": 20 }]"#);
        assert!(matches!(result, Err(AppError::DataError(_))));
    }

    #[test]
    fn test_history_window_spans_seven_calendar_days() {
        let now = Utc.with_ymd_and_hms(2025, 6, 7, 18, 30, 0).unwrap();
        let (start, end) = history_window(now, AppConfig::default().history_days());

        assert_eq!(end, now);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap());
    }

    // ===== ViewState Tests =====

    #[test]
    fn test_view_state_variants_are_exclusive() {
        let states: Vec<ViewState<WasteSummary>> = vec![
            ViewState::Loading,
            ViewState::Error(WASTE_ERROR.to_string()),
            ViewState::Empty,
            ViewState::Ready(Rc::new(serde_json::from_str("{}").unwrap())),
        ];

        for state in &states {
            let flags = [
                state.is_loading(),
                state.error().is_some(),
                state.is_empty(),
                state.data().is_some(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{state:?}");
        }
    }

    #[test]
    fn test_view_state_equality() {
        let state1: ViewState<WaterReading> = ViewState::Loading;
        let state2: ViewState<WaterReading> = ViewState::Loading;
        assert_eq!(state1, state2);

        let state3: ViewState<WaterReading> = ViewState::Error(WATER_ERROR.to_string());
        let state4: ViewState<WaterReading> = ViewState::Error(WATER_ERROR.to_string());
        assert_eq!(state3, state4);
        assert_ne!(state1, state3);
    }

    #[test]
    fn test_empty_waste_list_is_empty_state() {
        let state: ViewState<WasteSummary> = settle_list("[]", WASTE_ERROR);
        assert!(state.is_empty());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_waste_list_uses_first_element() {
        let state: ViewState<WasteSummary> = settle_list(
            r#"[{ "totalWaste": 2500, "monthlyTrend": [] }, { "totalWaste": 1 }]"#,
            WASTE_ERROR,
        );
        assert_eq!(state.data().unwrap().total_waste, Some(2500.0));
    }

    #[test]
    fn test_malformed_water_body_is_error_state() {
        let state: ViewState<WaterReading> = settle_list("not json", WATER_ERROR);
        assert_eq!(state.error(), Some(WATER_ERROR));
        assert!(!state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_failed_request_shows_generic_message() {
        let result: Result<Option<AirQualitySnapshot>, AppError> =
            Err(AppError::ApiError("Request timeout: operation timed out".to_string()));
        let state = ViewState::from_result(result, AIR_QUALITY_ERROR);

        assert_eq!(state.error(), Some("Failed to fetch air quality data"));
        assert!(!state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_null_current_reading_is_empty_state() {
        let current: Option<AirQualityReading> = parse_body("null").unwrap();
        let snapshot = current.map(|c| AirQualitySnapshot::new(c, Vec::new()));
        let state = ViewState::from_result(Ok(snapshot), AIR_QUALITY_ERROR);
        assert!(state.is_empty());
    }

    // ===== Configuration Tests =====

    #[test]
    fn test_endpoints_follow_configured_base() {
        let config = AppConfig::builder()
            .api_base_url("http://localhost:5000/")
            .build();
        let endpoints = Endpoints::new(config.api_base_url());

        assert_eq!(endpoints.waste(), "http://localhost:5000/api/waste");
        assert!(
            endpoints
                .air_quality(config.location())
                .starts_with("http://localhost:5000/api/airQuality/location?lat=12.9716")
        );
    }
}
