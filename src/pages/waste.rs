use yew::prelude::*;

use super::PageProps;
use crate::components::stat_card::StatCard;
use crate::components::status::{EmptyState, ErrorBanner, Loading};
use crate::components::waste_charts::{MonthlyTrendChart, WasteDistributionChart};
use crate::hooks::use_waste::use_waste;
use crate::hooks::view_state::ViewState;
use crate::models::waste::{DRY_WASTE_COLOR, WET_WASTE_COLOR, format_tons};

#[function_component(WastePage)]
pub fn waste_page(props: &PageProps) -> Html {
    let state = use_waste();

    let summary = match &*state {
        ViewState::Loading => return html! { <Loading /> },
        ViewState::Error(message) => return html! { <ErrorBanner message={message.clone()} /> },
        ViewState::Empty => return html! { <EmptyState message="No waste data available" /> },
        ViewState::Ready(summary) => summary.clone(),
    };

    let recycling_caption = summary
        .recycling_rate
        .map_or_else(|| "Recycling rate unavailable".to_string(), |rate| {
            format!("{rate}% recycling rate")
        });

    html! {
        <div class="page waste-page">
            <h1 class="page-title">{"Waste Management"}</h1>

            <section class="stat-grid">
                <StatCard
                    icon="🗑️"
                    title="Total Waste"
                    value={format_tons(summary.total_waste)}
                    caption={Some(AttrValue::from("Generated this month"))}
                    accent="#1976d2"
                />
                <StatCard
                    icon="♻️"
                    title="Recycled Waste"
                    value={format_tons(summary.recycled_waste)}
                    caption={Some(AttrValue::from(recycling_caption))}
                    accent={WET_WASTE_COLOR}
                />
                <StatCard
                    icon="💧"
                    title="Wet Waste"
                    value={format_tons(summary.wet_waste)}
                    caption={Some(AttrValue::from("Organic waste"))}
                    accent="#2196f3"
                />
                <StatCard
                    icon="📦"
                    title="Dry Waste"
                    value={format_tons(summary.dry_waste)}
                    caption={Some(AttrValue::from("Recyclable waste"))}
                    accent={DRY_WASTE_COLOR}
                />
            </section>

            <section class="chart-row">
                <div class="chart-section">
                    <WasteDistributionChart summary={summary.clone()} dark_mode={props.dark_mode} />
                </div>
                <div class="chart-section">
                    <MonthlyTrendChart summary={summary} dark_mode={props.dark_mode} />
                </div>
            </section>
        </div>
    }
}
