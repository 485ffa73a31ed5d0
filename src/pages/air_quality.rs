use std::rc::Rc;
use yew::prelude::*;

use super::PageProps;
use crate::components::aqi_card::{AqiCard, PollutantGrid};
use crate::components::aqi_map::AqiMap;
use crate::components::status::{EmptyState, ErrorBanner, Loading};
use crate::components::trend_chart::TrendChart;
use crate::hooks::use_air_quality::use_air_quality;
use crate::hooks::use_config::use_app_config;
use crate::hooks::view_state::ViewState;

#[function_component(AirQualityPage)]
pub fn air_quality_page(props: &PageProps) -> Html {
    let state = use_air_quality();
    let config = use_app_config();

    let snapshot = match &*state {
        ViewState::Loading => return html! { <Loading /> },
        ViewState::Error(message) => return html! { <ErrorBanner message={message.clone()} /> },
        ViewState::Empty => {
            return html! { <EmptyState message="No air quality reading for this location" /> };
        }
        ViewState::Ready(snapshot) => snapshot.clone(),
    };
    let current = Rc::new(snapshot.current.clone());

    html! {
        <div class="page air-quality-page">
            <h1 class="page-title">{"Air Quality Monitoring"}</h1>

            <section class="aqi-overview">
                <AqiCard reading={current.clone()} />
                <PollutantGrid reading={current.clone()} />
            </section>

            <section class="chart-section">
                <TrendChart snapshot={snapshot} dark_mode={props.dark_mode} />
            </section>

            <section class="map-section">
                <h2>{"Air Quality Map"}</h2>
                <AqiMap
                    center={config.location()}
                    zoom={config.map_zoom()}
                    radius_m={config.map_radius_m()}
                    reading={current}
                />
            </section>
        </div>
    }
}
