use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, Label, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    series::{Bar, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::chart::{ChartPalette, mount_chart};
use crate::models::waste::{DistributionSlice, WasteSummary};

const DISTRIBUTION_CHART_ID: &str = "waste-distribution-chart";
const MONTHLY_CHART_ID: &str = "waste-monthly-chart";

pub const TOTAL_BAR_COLOR: &str = "#1976d2";
pub const RECYCLED_BAR_COLOR: &str = "#4caf50";

#[derive(Properties, PartialEq)]
pub struct WasteChartProps {
    pub summary: Rc<WasteSummary>,
    pub dark_mode: bool,
}

/// Wet versus dry waste pie
#[function_component(WasteDistributionChart)]
pub fn waste_distribution_chart(props: &WasteChartProps) -> Html {
    let container_ref = use_node_ref();
    let slices = use_memo(props.summary.clone(), |summary| summary.distribution());

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (slices.clone(), container_ref, dark_mode),
            |(slices, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let slices = slices.clone();
                    let dark_mode = *dark_mode;
                    mount_chart(container, DISTRIBUTION_CHART_ID.to_string(), move || {
                        build_distribution_chart(&slices, dark_mode)
                    })
                });

                move || drop(listener)
            },
        );
    }

    if slices.is_empty() {
        return html! {
            <p class="chart-empty">{"No wet/dry breakdown reported"}</p>
        };
    }

    html! {
        <div class="chart-container chart-container-small" ref={container_ref}>
            <div id={DISTRIBUTION_CHART_ID} />
        </div>
    }
}

/// Total and recycled waste per month
#[function_component(MonthlyTrendChart)]
pub fn monthly_trend_chart(props: &WasteChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.summary.clone(), |summary| summary.monthly_series());

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (series, container_ref, dark_mode),
            |(series, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let series = series.clone();
                    let dark_mode = *dark_mode;
                    mount_chart(container, MONTHLY_CHART_ID.to_string(), move || {
                        let (months, totals, recycled) = &*series;
                        build_monthly_chart(months, totals, recycled, dark_mode)
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container chart-container-small" ref={container_ref}>
            <div id={MONTHLY_CHART_ID} />
        </div>
    }
}

pub fn build_distribution_chart(slices: &[DistributionSlice], dark_mode: bool) -> CharmingChart {
    let palette = ChartPalette::for_theme(dark_mode);

    let data: Vec<DataPointItem> = slices
        .iter()
        .map(|slice| {
            DataPointItem::new(slice.percent)
                .name(slice.name)
                .item_style(ItemStyle::new().color(slice.color))
        })
        .collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Waste Distribution")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(palette.title)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}: {c}%"))
        .legend(
            Legend::new()
                .top("bottom")
                .text_style(TextStyle::new().color(palette.axis)),
        )
        .series(
            Pie::new()
                .name("Waste")
                .radius("55%")
                .label(Label::new().formatter("{b} {c}%"))
                .data(data),
        )
}

pub fn build_monthly_chart(
    months: &[String],
    totals: &[f64],
    recycled: &[f64],
    dark_mode: bool,
) -> CharmingChart {
    let palette = ChartPalette::for_theme(dark_mode);

    CharmingChart::new()
        .title(
            Title::new()
                .text("Monthly Waste Trends")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(palette.title)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(
            Legend::new()
                .top("bottom")
                .text_style(TextStyle::new().color(palette.axis)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("16%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(months.to_vec())
                .axis_label(AxisLabel::new().color(palette.axis)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("tons")
                .axis_label(AxisLabel::new().color(palette.axis))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(palette.grid)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Bar::new()
                .name("Total Waste")
                .data(totals.to_vec())
                .item_style(ItemStyle::new().color(TOTAL_BAR_COLOR)),
        )
        .series(
            Bar::new()
                .name("Recycled Waste")
                .data(recycled.to_vec())
                .item_style(ItemStyle::new().color(RECYCLED_BAR_COLOR)),
        )
}
