use yew::prelude::*;

use super::use_fetch::use_fetch;
use super::view_state::ViewState;
use crate::models::water::WaterReading;
use crate::services::api::DashboardClient;

pub const WATER_ERROR: &str = "Error fetching water data";

#[hook]
pub fn use_water() -> UseStateHandle<ViewState<WaterReading>> {
    use_fetch("water", WATER_ERROR, |config| async move {
        DashboardClient::new(&config)?.fetch_water().await
    })
}
