use yew::prelude::*;

use super::PageProps;
use crate::components::stat_card::StatCard;
use crate::components::status::{EmptyState, ErrorBanner, Loading};
use crate::hooks::use_water::use_water;
use crate::hooks::view_state::ViewState;
use crate::models::datetime::format_local;

#[function_component(WaterPage)]
pub fn water_page(_props: &PageProps) -> Html {
    let state = use_water();

    let reading = match &*state {
        ViewState::Loading => return html! { <Loading /> },
        ViewState::Error(message) => return html! { <ErrorBanner message={message.clone()} /> },
        ViewState::Empty => return html! { <EmptyState message="No water data available" /> },
        ViewState::Ready(reading) => reading.clone(),
    };

    let consumption = reading
        .consumption
        .map_or_else(|| "—".to_string(), |litres| format!("{litres} L"));
    let quality = reading
        .quality
        .map_or_else(|| "—".to_string(), |score| format!("{score}"));

    html! {
        <div class="page water-page">
            <h1 class="page-title">{"Water Management"}</h1>

            <section class="stat-grid">
                <StatCard
                    icon="📍"
                    title="Location"
                    value={reading.location_label().to_string()}
                />
                <StatCard
                    icon="🚰"
                    title="Consumption"
                    value={consumption}
                    accent="#2196f3"
                />
                <StatCard
                    icon="💧"
                    title="Quality"
                    value={quality}
                    caption={Some(AttrValue::from("Reported quality score"))}
                    accent="#4caf50"
                />
                <StatCard
                    icon="🕒"
                    title="Last Updated"
                    value={format_local(reading.timestamp)}
                />
            </section>
        </div>
    }
}
