//! Fixed tables of the footprint calculator.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    quantity::{emissions::TonnesPerMegawattHour, water::LitersPerKilowattHour},
    range::EstimateRange,
    states,
};

/// Facility cooling approach, as far as on-site water use is concerned.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CoolingSystem {
    /// Air-cooled or dry coolers.
    AirCooled,

    /// Closed-loop liquid cooling with dry heat rejection.
    AdvancedLiquid,

    /// Dry coolers with evaporative assist on hot days.
    Hybrid,

    /// Cooling towers or direct evaporative cooling.
    HeavyEvaporative,

    NotSure,
}

impl CoolingSystem {
    /// Used when the cooling system is unset or unrecognized.
    pub const FALLBACK_WUE: EstimateRange<LitersPerKilowattHour> = EstimateRange::new(
        LitersPerKilowattHour(1.5),
        LitersPerKilowattHour(2.0),
        LitersPerKilowattHour(3.0),
    );

    /// Parse a form key like `heavy-evaporative`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(key.trim(), true).ok()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AirCooled => "Air-cooled / Dry",
            Self::AdvancedLiquid => "Advanced Liquid / Dry",
            Self::Hybrid => "Hybrid",
            Self::HeavyEvaporative => "Heavy Evaporative",
            Self::NotSure => "Not Sure",
        }
    }

    pub const fn water_usage_effectiveness(self) -> EstimateRange<LitersPerKilowattHour> {
        let (low, typical, high) = match self {
            Self::AirCooled => (0.0, 0.05, 0.1),
            Self::AdvancedLiquid => (0.1, 0.25, 0.4),
            Self::Hybrid => (1.0, 1.75, 2.5),
            Self::HeavyEvaporative => (3.0, 4.0, 5.5),
            Self::NotSure => return Self::FALLBACK_WUE,
        };
        EstimateRange::new(
            LitersPerKilowattHour(low),
            LitersPerKilowattHour(typical),
            LitersPerKilowattHour(high),
        )
    }
}

pub fn water_usage_effectiveness(
    cooling_system: Option<CoolingSystem>,
) -> EstimateRange<LitersPerKilowattHour> {
    cooling_system.map_or(CoolingSystem::FALLBACK_WUE, CoolingSystem::water_usage_effectiveness)
}

const fn factors(low: f64, typical: f64, high: f64) -> EstimateRange<TonnesPerMegawattHour> {
    EstimateRange::new(
        TonnesPerMegawattHour(low),
        TonnesPerMegawattHour(typical),
        TonnesPerMegawattHour(high),
    )
}

/// Grid emissions factors by state.
pub static GRID_EMISSIONS_BY_STATE: [(&str, EstimateRange<TonnesPerMegawattHour>); 8] = [
    ("Virginia", factors(0.45, 0.55, 0.65)),
    ("Texas", factors(0.40, 0.50, 0.60)),
    ("Ohio", factors(0.55, 0.70, 0.80)),
    ("Pennsylvania", factors(0.50, 0.60, 0.70)),
    ("Illinois", factors(0.35, 0.45, 0.55)),
    ("California", factors(0.15, 0.25, 0.35)),
    ("Washington", factors(0.15, 0.25, 0.35)),
    ("Oregon", factors(0.15, 0.30, 0.40)),
];

pub const DEFAULT_GRID_EMISSIONS: EstimateRange<TonnesPerMegawattHour> = factors(0.30, 0.50, 0.70);

pub fn grid_emissions(state: &str) -> EstimateRange<TonnesPerMegawattHour> {
    states::lookup(&GRID_EMISSIONS_BY_STATE, state, DEFAULT_GRID_EMISSIONS)
}
