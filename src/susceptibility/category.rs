use serde::Serialize;

/// Weighted category of the susceptibility score.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Energy,
    Land,
    Incentives,
    Resources,
    Community,
}

impl Category {
    pub const ALL: [Self; 5] =
        [Self::Energy, Self::Land, Self::Incentives, Self::Resources, Self::Community];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Energy => "Energy & Infrastructure",
            Self::Land => "Land & Zoning",
            Self::Incentives => "Incentives & Fiscal",
            Self::Resources => "Resource & Environment",
            Self::Community => "Community Power",
        }
    }

    /// Maximum number of points the category contributes.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Energy => 25.0,
            Self::Land | Self::Incentives | Self::Resources => 20.0,
            Self::Community => 15.0,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Energy => "Grid capacity, transmission, and data center clustering",
            Self::Land => "Industrial land availability and permitting ease",
            Self::Incentives => "Tax incentives and economic development programs",
            Self::Resources => "Water availability and environmental risk",
            Self::Community => "Local protections and organizing strength",
        }
    }

    /// Stronger organizing reduces susceptibility in this category.
    pub const fn is_reverse_scored(self) -> bool {
        matches!(self, Self::Community)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u8,
}
