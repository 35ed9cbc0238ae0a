//! Electrical and cooling characteristics of the facility.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UpsType {
    #[default]
    DoubleConversion,
    LineInteractive,
    EcoMode,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
pub enum RedundancyLevel {
    #[serde(rename = "N")]
    #[value(name = "n")]
    N,

    #[default]
    #[serde(rename = "N+1")]
    #[value(name = "n+1")]
    NPlusOne,

    #[serde(rename = "N+2")]
    #[value(name = "n+2")]
    NPlusTwo,

    #[serde(rename = "2N")]
    #[value(name = "2n")]
    TwoN,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CoolingType {
    AirCooledDx,

    #[default]
    ChilledWater,

    IndirectEvaporative,
    DirectEvaporative,

    /// Direct-to-chip liquid cooling.
    Liquid,

    Immersion,
}

impl CoolingType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AirCooledDx => "Air-cooled DX",
            Self::ChilledWater => "Chilled water",
            Self::IndirectEvaporative => "Evaporative cooling (indirect)",
            Self::DirectEvaporative => "Direct evaporative cooling",
            Self::Liquid => "Liquid cooling (direct-to-chip)",
            Self::Immersion => "Immersion cooling",
        }
    }

    /// Facility energy per unit of delivered IT energy.
    pub const fn overhead_multiplier(self) -> f64 {
        match self {
            Self::AirCooledDx => 1.25,
            Self::ChilledWater => 1.15,
            Self::IndirectEvaporative => 1.12,
            Self::DirectEvaporative => 1.10,
            Self::Liquid => 1.08,
            Self::Immersion => 1.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overhead_multipliers_are_within_range() {
        for cooling_type in CoolingType::value_variants() {
            let multiplier = cooling_type.overhead_multiplier();
            assert!((1.05..=1.25).contains(&multiplier), "{cooling_type:?}");
        }
    }
}
