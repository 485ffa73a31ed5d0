pub mod use_air_quality;
pub mod use_config;
pub mod use_fetch;
pub mod use_page;
pub mod use_theme;
pub mod use_waste;
pub mod use_water;
pub mod view_state;

pub use view_state::ViewState;
