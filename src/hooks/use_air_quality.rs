use yew::prelude::*;

use super::use_fetch::use_fetch;
use super::view_state::ViewState;
use crate::models::air_quality::AirQualitySnapshot;
use crate::services::api::DashboardClient;

pub const AIR_QUALITY_ERROR: &str = "Failed to fetch air quality data";

/// Current reading plus trend for the configured location
#[hook]
pub fn use_air_quality() -> UseStateHandle<ViewState<AirQualitySnapshot>> {
    use_fetch("air quality", AIR_QUALITY_ERROR, |config| async move {
        DashboardClient::new(&config)?
            .fetch_air_quality_snapshot()
            .await
    })
}
