use std::rc::Rc;
use yew::prelude::*;

use urban_dashboard::components::{NavTabs, ThemeToggle};
use urban_dashboard::config::AppConfig;
use urban_dashboard::hooks::use_page::use_page;
use urban_dashboard::hooks::use_theme::use_theme;
use urban_dashboard::pages::{AirQualityPage, Page, WastePage, WaterPage};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<AppConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let page = use_page();
    let theme = use_theme();
    let dark_mode = theme.effective_theme.is_dark();

    html! {
        <ContextProvider<Rc<AppConfig>> context={props.config.clone()}>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Urban Sustainability Dashboard"}</h1>
                    <NavTabs page={page.page} on_change={page.set_page.clone()} />
                    <ThemeToggle handle={theme.clone()} />
                </header>

                <main class="app-main">
                    {
                        match page.page {
                            Page::AirQuality => html! { <AirQualityPage {dark_mode} /> },
                            Page::Waste => html! { <WastePage {dark_mode} /> },
                            Page::Water => html! { <WaterPage {dark_mode} /> },
                        }
                    }
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<Rc<AppConfig>>>
    }
}

fn main() {
    let config = Rc::new(AppConfig::from_env());
    gloo::console::info!(&format!("Using API at {}", config.api_base_url()));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
