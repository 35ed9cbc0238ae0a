//! Grid conditions around the facility.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::quantity::emissions::TonnesPerMegawattHour;

/// Independent system operator (or balancing authority) the facility is connected to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
pub enum Iso {
    #[serde(rename = "CAISO")]
    #[value(name = "caiso")]
    Caiso,

    #[default]
    #[serde(rename = "PJM")]
    #[value(name = "pjm")]
    Pjm,

    #[serde(rename = "ERCOT")]
    #[value(name = "ercot")]
    Ercot,

    #[serde(rename = "MISO")]
    #[value(name = "miso")]
    Miso,

    #[serde(rename = "NYISO")]
    #[value(name = "nyiso")]
    Nyiso,

    #[serde(rename = "ISO-NE")]
    #[value(name = "iso-ne")]
    IsoNe,

    #[serde(rename = "SPP")]
    #[value(name = "spp")]
    Spp,

    #[serde(rename = "BPA")]
    #[value(name = "bpa")]
    Bpa,

    Other,
}

impl Iso {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Caiso => "CAISO",
            Self::Pjm => "PJM",
            Self::Ercot => "ERCOT",
            Self::Miso => "MISO",
            Self::Nyiso => "NYISO",
            Self::IsoNe => "ISO-NE",
            Self::Spp => "SPP",
            Self::Bpa => "BPA",
            Self::Other => "Other",
        }
    }
}

/// Share of renewables in the regional generation mix.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenewablePenetration {
    /// Under 20%.
    Low,

    /// 20–40%.
    #[default]
    Medium,

    /// 40–60%.
    High,

    /// Over 60%.
    VeryHigh,
}

impl RenewablePenetration {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low (<20%)",
            Self::Medium => "Medium (20-40%)",
            Self::High => "High (40-60%)",
            Self::VeryHigh => "Very High (60%+)",
        }
    }

    /// Average emissions intensity of the grid energy.
    ///
    /// Deliberately unrelated to the per-state factors of the footprint calculator.
    pub const fn emissions_factor(self) -> TonnesPerMegawattHour {
        match self {
            Self::Low => TonnesPerMegawattHour(0.65),
            Self::Medium => TonnesPerMegawattHour(0.45),
            Self::High => TonnesPerMegawattHour(0.30),
            Self::VeryHigh => TonnesPerMegawattHour(0.18),
        }
    }
}

/// What kind of generation typically sits on the margin.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MarginalEmissions {
    #[default]
    GasDominated,
    CoalGasMix,
    HydroWindHeavy,
    SolarPeaking,
    DynamicallyVaries,
}

impl MarginalEmissions {
    pub const fn label(self) -> &'static str {
        match self {
            Self::GasDominated => "Gas-dominated",
            Self::CoalGasMix => "Coal/gas mix",
            Self::HydroWindHeavy => "Hydro/wind heavy",
            Self::SolarPeaking => "Solar-peaking",
            Self::DynamicallyVaries => "Dynamically varies",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emissions_factor_decreases_with_penetration() {
        let factors = RenewablePenetration::value_variants()
            .iter()
            .map(|penetration| penetration.emissions_factor())
            .collect::<Vec<_>>();
        assert!(factors.is_sorted_by(|lhs, rhs| lhs > rhs));
    }

    #[test]
    fn test_iso_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            iso: Iso,
        }

        let wrapper: Wrapper = toml::from_str("iso = \"ISO-NE\"").unwrap();
        assert_eq!(wrapper.iso, Iso::IsoNe);
    }
}
