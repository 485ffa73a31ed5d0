pub mod aqi_card;
pub mod aqi_map;
pub mod chart;
pub mod nav_tabs;
pub mod stat_card;
pub mod status;
pub mod theme_toggle;
pub mod trend_chart;
pub mod waste_charts;

pub use nav_tabs::NavTabs;
pub use theme_toggle::ThemeToggle;
