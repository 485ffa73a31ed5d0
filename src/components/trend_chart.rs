use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    datatype::DataPoint,
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::chart::{ChartPalette, mount_chart};
use crate::models::air_quality::{AirQualitySnapshot, TrendSeries};

const CHART_ID: &str = "aqi-trend-chart";

pub const AQI_LINE_COLOR: &str = "#2e7d32";
pub const PM25_LINE_COLOR: &str = "#1976d2";
pub const PM10_LINE_COLOR: &str = "#ed6c02";

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub snapshot: Rc<AirQualitySnapshot>,
    pub dark_mode: bool,
}

/// 7-day AQI, PM2.5 and PM10 line chart
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.snapshot.clone(), |snapshot| snapshot.trend_series());
    let points = series.len();

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (series, container_ref, dark_mode),
            |(series, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let series = series.clone();
                    let dark_mode = *dark_mode;
                    mount_chart(container, CHART_ID.to_string(), move || {
                        build_trend_chart(&series, dark_mode)
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} aria-label={format!("Air quality trend, {points} readings")} />
        </div>
    }
}

fn line<D>(name: &str, data: &[D], color: &'static str) -> Line
where
    D: Clone + Into<DataPoint>,
{
    Line::new()
        .name(name)
        .data(data.to_vec())
        .item_style(ItemStyle::new().color(color))
        .line_style(LineStyle::new().color(color).width(2))
}

pub fn build_trend_chart(series: &TrendSeries, dark_mode: bool) -> CharmingChart {
    let palette = ChartPalette::for_theme(dark_mode);

    CharmingChart::new()
        .title(
            Title::new()
                .text("Air Quality Trend (7 Days)")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(palette.title)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .legend(
            Legend::new()
                .top("bottom")
                .text_style(TextStyle::new().color(palette.axis)),
        )
        .grid(
            Grid::new()
                .left("6%")
                .right("4%")
                .bottom("16%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().color(palette.axis)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(palette.axis))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(palette.grid)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(line("AQI", &series.aqi, AQI_LINE_COLOR))
        .series(line("PM2.5", &series.pm25, PM25_LINE_COLOR))
        .series(line("PM10", &series.pm10, PM10_LINE_COLOR))
}
