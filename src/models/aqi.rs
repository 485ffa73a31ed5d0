/// US EPA air quality index category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Buckets an AQI reading. Upper bounds are inclusive, so a reading that
    /// sits exactly on a boundary belongs to the lower category.
    pub const fn from_aqi(aqi: i32) -> Self {
        match aqi {
            i32::MIN..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    /// Returns human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Returns color for display (hex code)
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Good => "#00e400",                        // green
            Self::Moderate => "#ffff00",                    // yellow
            Self::UnhealthyForSensitiveGroups => "#ff7e00", // orange
            Self::Unhealthy => "#ff0000",                   // red
            Self::VeryUnhealthy => "#99004c",               // magenta
            Self::Hazardous => "#7e0023",                   // maroon
        }
    }

    /// Returns CSS class name for badges
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "aqi-good",
            Self::Moderate => "aqi-moderate",
            Self::UnhealthyForSensitiveGroups => "aqi-sensitive",
            Self::Unhealthy => "aqi-unhealthy",
            Self::VeryUnhealthy => "aqi-very-unhealthy",
            Self::Hazardous => "aqi-hazardous",
        }
    }

    /// All categories in ascending severity.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Good,
            Self::Moderate,
            Self::UnhealthyForSensitiveGroups,
            Self::Unhealthy,
            Self::VeryUnhealthy,
            Self::Hazardous,
        ]
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub const fn aqi_color(aqi: i32) -> &'static str {
    AqiCategory::from_aqi(aqi).color()
}

pub const fn aqi_label(aqi: i32) -> &'static str {
    AqiCategory::from_aqi(aqi).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_lower_bucket() {
        assert_eq!(AqiCategory::from_aqi(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(51), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(100), AqiCategory::Moderate);
        assert_eq!(
            AqiCategory::from_aqi(101),
            AqiCategory::UnhealthyForSensitiveGroups
        );
        assert_eq!(
            AqiCategory::from_aqi(150),
            AqiCategory::UnhealthyForSensitiveGroups
        );
        assert_eq!(AqiCategory::from_aqi(151), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(200), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(201), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_aqi(300), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_aqi(301), AqiCategory::Hazardous);
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(AqiCategory::from_aqi(i32::MIN), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(-1), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(i32::MAX), AqiCategory::Hazardous);
    }

    #[test]
    fn test_severity_is_monotonic() {
        let mut previous = AqiCategory::from_aqi(-10);
        for aqi in -10..=600 {
            let current = AqiCategory::from_aqi(aqi);
            assert!(current >= previous, "severity dropped at aqi {aqi}");
            previous = current;
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: std::collections::HashSet<_> =
            AqiCategory::all().iter().map(AqiCategory::color).collect();
        assert_eq!(colors.len(), AqiCategory::all().len());
    }

    #[test]
    fn test_label_and_color_helpers_agree() {
        for aqi in [0, 42, 75, 125, 175, 250, 400] {
            let category = AqiCategory::from_aqi(aqi);
            assert_eq!(aqi_color(aqi), category.color());
            assert_eq!(aqi_label(aqi), category.label());
        }
    }
}
