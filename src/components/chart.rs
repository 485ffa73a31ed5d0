use charming::{Chart as CharmingChart, renderer::WasmRenderer};
use gloo::events::EventListener;
use web_sys::HtmlElement;

use crate::config::Config;
use crate::utils::debounce::debounced_resize_listener;

/// Text and axis colors for the current theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub title: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
}

impl ChartPalette {
    pub const fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                title: "#e4e4e7",
                axis: "#a1a1aa",
                grid: "#404040",
            }
        } else {
            Self {
                title: "#1f2937",
                axis: "#6b7280",
                grid: "#e5e7eb",
            }
        }
    }
}

/// Renders `chart` into the element with id `chart_id`, sized to `container`.
/// A container that is not laid out yet (zero size) is skipped.
pub fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        gloo::console::error!(&format!("Render error in {chart_id}: {e:?}"));
    }
}

/// Renders now and again after every (debounced) window resize. The returned
/// listener must live as long as the chart.
pub fn mount_chart<F>(container: HtmlElement, chart_id: String, build: F) -> Option<EventListener>
where
    F: Fn() -> CharmingChart + 'static,
{
    render_chart(&container, &chart_id, &build());

    debounced_resize_listener(
        move || render_chart(&container, &chart_id, &build()),
        Config::RESIZE_DEBOUNCE_MS,
    )
}
