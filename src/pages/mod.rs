pub mod air_quality;
pub mod waste;
pub mod water;

pub use air_quality::AirQualityPage;
pub use waste::WastePage;
pub use water::WaterPage;

use crate::models::error::AppError;
use yew::Properties;

/// Props shared by every page
#[derive(Properties, PartialEq)]
pub struct PageProps {
    #[prop_or_default]
    pub dark_mode: bool,
}

/// Dashboard pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    AirQuality,
    Waste,
    Water,
}

impl Page {
    /// Stable identifier used for persistence.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::AirQuality => "air-quality",
            Self::Waste => "waste",
            Self::Water => "water",
        }
    }

    /// Tab label.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AirQuality => "Air Quality",
            Self::Waste => "Waste",
            Self::Water => "Water",
        }
    }

    /// All pages.
    pub const fn all() -> &'static [Self] {
        &[Self::AirQuality, Self::Waste, Self::Water]
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|page| page.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::ConfigError(format!("Invalid page: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_parsing() {
        assert_eq!("waste".parse::<Page>().unwrap(), Page::Waste);
        assert_eq!("Air-Quality".parse::<Page>().unwrap(), Page::AirQuality);
        assert!("energy".parse::<Page>().is_err());
    }

    #[test]
    fn test_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(page.key().parse::<Page>().unwrap(), *page);
        }
    }
}
