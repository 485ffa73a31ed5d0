use std::rc::Rc;
use yew::prelude::*;

use crate::models::air_quality::AirQualityReading;
use crate::models::datetime::format_local;

#[derive(Properties, PartialEq)]
pub struct AqiCardProps {
    pub reading: Rc<AirQualityReading>,
}

/// Current AQI, colored by category
#[function_component(AqiCard)]
pub fn aqi_card(props: &AqiCardProps) -> Html {
    let reading = &props.reading;
    let category = reading.category();
    let value_style = format!("color: {};", category.color());
    let badge_class = format!("aqi-badge {}", category.css_class());

    html! {
        <div class="aqi-card">
            <h2>{"Current Air Quality"}</h2>
            <p class="aqi-value" style={value_style}>{reading.aqi.to_string()}</p>
            <div class={badge_class}>{category.label()}</div>
            <p class="aqi-updated">{"Last updated: "}{format_local(reading.timestamp)}</p>
        </div>
    }
}

/// One tile per pollutant; values the API omitted show a dash
#[function_component(PollutantGrid)]
pub fn pollutant_grid(props: &AqiCardProps) -> Html {
    html! {
        <div class="pollutant-grid">
            {
                props.reading.pollutants().into_iter().map(|pollutant| html! {
                    <div class="pollutant-item" key={pollutant.label}>
                        <h3>{pollutant.label}</h3>
                        <p class="pollutant-value">{pollutant.display_value()}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
