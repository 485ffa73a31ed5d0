use yew::prelude::*;

use super::use_fetch::use_fetch;
use super::view_state::ViewState;
use crate::models::waste::WasteSummary;
use crate::services::api::DashboardClient;

pub const WASTE_ERROR: &str = "Error fetching waste data";

#[hook]
pub fn use_waste() -> UseStateHandle<ViewState<WasteSummary>> {
    use_fetch("waste", WASTE_ERROR, |config| async move {
        DashboardClient::new(&config)?.fetch_waste().await
    })
}
