use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::air_quality::AirQualityReading;
use crate::models::geo::{Coordinates, TILE_SIZE, visible_tiles};
use crate::utils::debounce::debounced_resize_listener;

const MAP_HEIGHT: f64 = 360.0;
const FALLBACK_WIDTH: f64 = 800.0;

#[derive(Properties, PartialEq)]
pub struct AqiMapProps {
    pub center: Coordinates,
    pub zoom: u8,
    /// Circle radius in metres
    pub radius_m: f64,
    pub reading: Rc<AirQualityReading>,
}

/// OpenStreetMap tiles with an AQI-colored circle around the monitored point.
/// Clicking the circle toggles a popup with the reading.
#[function_component(AqiMap)]
pub fn aqi_map(props: &AqiMapProps) -> Html {
    let container_ref = use_node_ref();
    let width = use_state(|| FALLBACK_WIDTH);
    let popup_open = use_state(|| false);

    {
        let container_ref = container_ref.clone();
        let width = width.clone();

        use_effect_with(container_ref, move |container_ref| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                let measure = move || {
                    let measured = f64::from(container.client_width());
                    if measured > 0.0 {
                        width.set(measured);
                    }
                };
                measure();
                debounced_resize_listener(measure, Config::RESIZE_DEBOUNCE_MS)
            });

            move || drop(listener)
        });
    }

    let tiles = visible_tiles(props.center, props.zoom, *width, MAP_HEIGHT);
    let category = props.reading.category();
    let radius = props.center.meters_to_pixels(props.radius_m, props.zoom);
    let (cx, cy) = (*width / 2.0, MAP_HEIGHT / 2.0);

    let toggle_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: MouseEvent| popup_open.set(!*popup_open))
    };

    let popup_style = format!("left: {cx:.0}px; top: {:.0}px;", cy - radius);

    html! {
        <div class="map-container" ref={container_ref} style={format!("height: {MAP_HEIGHT}px;")}>
            {
                tiles.into_iter().map(|tile| {
                    let style = format!(
                        "left: {:.1}px; top: {:.1}px; width: {TILE_SIZE}px; height: {TILE_SIZE}px;",
                        tile.left, tile.top
                    );
                    html! {
                        <img class="map-tile" src={tile.url()} {style} alt="" draggable="false" />
                    }
                }).collect::<Html>()
            }
            <svg class="map-overlay" width={width.to_string()} height={MAP_HEIGHT.to_string()}>
                <circle
                    class="map-circle"
                    cx={cx.to_string()}
                    cy={cy.to_string()}
                    r={format!("{radius:.1}")}
                    stroke={category.color()}
                    fill={category.color()}
                    fill-opacity="0.3"
                    onclick={toggle_popup}
                >
                    <title>{format!("AQI {} at {}", props.reading.aqi, props.center)}</title>
                </circle>
            </svg>
            if *popup_open {
                <div class="map-popup" style={popup_style}>
                    <strong>{format!("AQI: {}", props.reading.aqi)}</strong>
                    <span>{category.label()}</span>
                </div>
            }
            <div class="map-attribution">
                {"© "}
                <a href="https://www.openstreetmap.org/copyright" target="_blank" rel="noopener">
                    {"OpenStreetMap"}
                </a>
                {" contributors"}
            </div>
        </div>
    }
}
