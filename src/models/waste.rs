use serde::Deserialize;

/// One month of the waste trend
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthlyWaste {
    pub month: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub recycled: f64,
}

/// City-wide waste figures, in tons
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteSummary {
    #[serde(default)]
    pub total_waste: Option<f64>,
    #[serde(default)]
    pub recycled_waste: Option<f64>,
    #[serde(default)]
    pub recycling_rate: Option<f64>,
    #[serde(default)]
    pub wet_waste: Option<f64>,
    #[serde(default)]
    pub dry_waste: Option<f64>,
    #[serde(default)]
    pub monthly_trend: Vec<MonthlyWaste>,
}

/// Slice of the wet/dry distribution chart
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: f64,
    /// Share of the whole, rounded to a whole percent
    pub percent: f64,
    pub color: &'static str,
}

pub const WET_WASTE_COLOR: &str = "#4caf50";
pub const DRY_WASTE_COLOR: &str = "#ff9800";

impl WasteSummary {
    /// Wet and dry slices. Missing figures are left out, and an all-zero
    /// distribution yields no slices at all.
    pub fn distribution(&self) -> Vec<DistributionSlice> {
        let reported: Vec<(&'static str, f64, &'static str)> = [
            ("Wet Waste", self.wet_waste, WET_WASTE_COLOR),
            ("Dry Waste", self.dry_waste, DRY_WASTE_COLOR),
        ]
        .into_iter()
        .filter_map(|(name, value, color)| {
            value
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|value| (name, value, color))
        })
        .collect();

        let total: f64 = reported.iter().map(|(_, value, _)| value).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        reported
            .into_iter()
            .map(|(name, value, color)| DistributionSlice {
                name,
                value,
                percent: (value / total * 100.0).round(),
                color,
            })
            .collect()
    }

    /// Month labels with total and recycled columns, in API order
    pub fn monthly_series(&self) -> (Vec<String>, Vec<f64>, Vec<f64>) {
        let months = self.monthly_trend.iter().map(|m| m.month.clone()).collect();
        let totals = self.monthly_trend.iter().map(|m| m.total).collect();
        let recycled = self.monthly_trend.iter().map(|m| m.recycled).collect();
        (months, totals, recycled)
    }
}

/// Formats an optional tonnage for a card
pub fn format_tons(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v} tons"))
}
