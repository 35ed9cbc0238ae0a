use bon::Builder;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    quantity::{
        area::{SquareFeet, WattsPerSquareFoot},
        power::Megawatts,
    },
    range::EstimateRange,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DataCenterType {
    Hyperscale,
    Colocation,
    Enterprise,

    /// AI training or high-performance computing, much denser than the rest.
    AiHpc,

    NotSure,
}

impl DataCenterType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hyperscale => "Hyperscale Cloud",
            Self::Colocation => "Colocation",
            Self::Enterprise => "Enterprise",
            Self::AiHpc => "AI/HPC",
            Self::NotSure => "Not Sure",
        }
    }

    /// IT power density of the floor area.
    pub const fn power_density(kind: Option<Self>) -> EstimateRange<WattsPerSquareFoot> {
        let (low, typical, high) = match kind {
            Some(Self::AiHpc) => (400.0, 600.0, 800.0),
            _ => (150.0, 225.0, 300.0),
        };
        EstimateRange::new(
            WattsPerSquareFoot(low),
            WattsPerSquareFoot(typical),
            WattsPerSquareFoot(high),
        )
    }
}

/// Rough facility size, for when nothing more precise is known.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleBucket {
    Small,
    Medium,
    Large,
    Mega,
}

impl ScaleBucket {
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(key.trim(), true).ok()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small (1–5 MW)",
            Self::Medium => "Medium (5–50 MW)",
            Self::Large => "Large (50–200 MW)",
            Self::Mega => "Mega (200+ MW)",
        }
    }

    pub const fn it_load(self) -> EstimateRange<Megawatts> {
        let (low, typical, high) = match self {
            Self::Small => (1.0, 3.0, 5.0),
            Self::Medium => (5.0, 25.0, 50.0),
            Self::Large => (50.0, 100.0, 200.0),
            Self::Mega => (200.0, 400.0, 600.0),
        };
        EstimateRange::new(Megawatts(low), Megawatts(typical), Megawatts(high))
    }
}

/// Everything the user may know about the facility size. Any subset may be filled in.
#[must_use]
#[derive(Clone, Debug, Default, Builder)]
pub struct SizingInput {
    /// Explicit IT load.
    pub it_load: Option<Megawatts>,

    /// Total facility capacity including cooling and losses.
    pub facility_capacity: Option<Megawatts>,

    pub floor_area: Option<SquareFeet>,
    pub data_center_type: Option<DataCenterType>,

    /// Rough scale key, see [`ScaleBucket`]. Unrecognized keys still count as filled in.
    #[builder(into)]
    pub rough_scale: Option<String>,
}

impl SizingInput {
    /// Pick the most precise sizing mode that has been filled in.
    ///
    /// Explicit IT load wins over facility capacity, which wins over floor area,
    /// which wins over the rough scale. Non-positive numbers count as not filled in.
    pub fn resolve(&self, pue: f64) -> Option<Sizing> {
        if let Some(it_load) = self.it_load.filter(|it_load| it_load.0 > 0.0) {
            return Some(Sizing::ItLoad(it_load));
        }
        if let Some(capacity) = self.facility_capacity.filter(|capacity| capacity.0 > 0.0)
            && pue.is_finite()
            && pue > 0.0
        {
            return Some(Sizing::FacilityCapacity { capacity, pue });
        }
        if let Some(area) = self.floor_area.filter(|area| area.0 > 0.0) {
            return Some(Sizing::FloorArea { area, kind: self.data_center_type });
        }
        self.rough_scale()
            .map(|key| Sizing::RoughScale(ScaleBucket::from_key(key)))
    }

    /// Whether the form may be submitted: the location or the rough scale must be known,
    /// along with at least one sizing field.
    #[must_use]
    pub fn can_submit(&self, state: &str) -> bool {
        let has_sizing = self.it_load.is_some()
            || self.facility_capacity.is_some()
            || self.floor_area.is_some()
            || self.rough_scale().is_some();
        (!state.trim().is_empty() || self.rough_scale().is_some()) && has_sizing
    }

    fn rough_scale(&self) -> Option<&str> {
        self.rough_scale.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }
}

/// The sizing mode that was actually used.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "kebab-case")]
pub enum Sizing {
    ItLoad(Megawatts),
    FacilityCapacity { capacity: Megawatts, pue: f64 },
    FloorArea { area: SquareFeet, kind: Option<DataCenterType> },

    /// [`None`] stands for an unrecognized bucket, which yields zero load.
    RoughScale(Option<ScaleBucket>),
}

impl Sizing {
    /// Fractional uncertainty of an explicitly entered load.
    pub const EXPLICIT_SPREAD: f64 = 0.1;

    pub fn it_load(self) -> EstimateRange<Megawatts> {
        match self {
            Self::ItLoad(it_load) => Self::explicit_band(it_load),
            Self::FacilityCapacity { capacity, pue } => Self::explicit_band(capacity / pue),
            Self::FloorArea { area, kind } => {
                DataCenterType::power_density(kind).map(|density| area * density)
            }
            Self::RoughScale(Some(bucket)) => bucket.it_load(),
            Self::RoughScale(None) => EstimateRange::splat(Megawatts::ZERO),
        }
    }

    fn explicit_band(typical: Megawatts) -> EstimateRange<Megawatts> {
        EstimateRange::new(
            typical * (1.0 - Self::EXPLICIT_SPREAD),
            typical,
            typical * (1.0 + Self::EXPLICIT_SPREAD),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_nothing_filled_in() {
        assert_eq!(SizingInput::default().resolve(1.5), None);
        assert_eq!(SizingInput::builder().rough_scale("  ").build().resolve(1.5), None);
    }

    #[test]
    fn test_priority_order() {
        let input = SizingInput::builder()
            .it_load(Megawatts(10.0))
            .facility_capacity(Megawatts(30.0))
            .floor_area(SquareFeet(100_000.0))
            .rough_scale("mega")
            .build();
        assert_eq!(input.resolve(1.5), Some(Sizing::ItLoad(Megawatts(10.0))));

        let input = SizingInput { it_load: Some(Megawatts(0.0)), ..input };
        assert_eq!(
            input.resolve(1.5),
            Some(Sizing::FacilityCapacity { capacity: Megawatts(30.0), pue: 1.5 }),
        );

        let input = SizingInput { facility_capacity: None, ..input };
        assert_eq!(
            input.resolve(1.5),
            Some(Sizing::FloorArea { area: SquareFeet(100_000.0), kind: None }),
        );

        let input = SizingInput { floor_area: None, ..input };
        assert_eq!(input.resolve(1.5), Some(Sizing::RoughScale(Some(ScaleBucket::Mega))));
    }

    #[test]
    fn test_facility_capacity_requires_pue() {
        let input = SizingInput::builder().facility_capacity(Megawatts(30.0)).build();
        assert_eq!(input.resolve(0.0), None);
        assert_eq!(input.resolve(f64::NAN), None);
    }

    #[test]
    fn test_explicit_band() {
        let it_load = Sizing::ItLoad(Megawatts(100.0)).it_load();
        assert_abs_diff_eq!(it_load.low.0, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(it_load.typical.0, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(it_load.high.0, 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_facility_capacity_band() {
        let it_load = Sizing::FacilityCapacity { capacity: Megawatts(30.0), pue: 1.5 }.it_load();
        assert_abs_diff_eq!(it_load.low.0, 18.0, epsilon = 1e-9);
        assert_abs_diff_eq!(it_load.typical.0, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(it_load.high.0, 22.0, epsilon = 1e-9);
    }

    #[test]
    fn test_floor_area() {
        let it_load = Sizing::FloorArea { area: SquareFeet(100_000.0), kind: None }.it_load();
        assert_abs_diff_eq!(it_load.low.0, 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(it_load.typical.0, 22.5, epsilon = 1e-9);
        assert_abs_diff_eq!(it_load.high.0, 30.0, epsilon = 1e-9);

        let it_load =
            Sizing::FloorArea { area: SquareFeet(100_000.0), kind: Some(DataCenterType::AiHpc) }
                .it_load();
        assert_abs_diff_eq!(it_load.low.0, 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(it_load.typical.0, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(it_load.high.0, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_bucket_yields_zero() {
        let input = SizingInput::builder().rough_scale("gigantic").build();
        let sizing = input.resolve(1.5).unwrap();
        assert_eq!(sizing, Sizing::RoughScale(None));
        assert_eq!(sizing.it_load(), EstimateRange::splat(Megawatts::ZERO));
    }

    #[test]
    fn test_can_submit() {
        let input = SizingInput::builder().it_load(Megawatts(10.0)).build();
        assert!(input.can_submit("Ohio"));
        assert!(!input.can_submit(""));
        assert!(SizingInput::builder().rough_scale("small").build().can_submit(""));
        assert!(!SizingInput::default().can_submit("Ohio"));
    }
}
