use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    lenient::LenientFloat,
    lodestar::{
        facility::{CoolingType, RedundancyLevel, UpsType},
        grid::{Iso, MarginalEmissions, RenewablePenetration},
        job::TrainingJobForm,
    },
};

/// Typical facility profiles to start the form from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    SmallHyperscale,
    LargeEnterprise,
    AiHpcIntensive,
    TypicalCloud,
}

impl Preset {
    /// Overwrite the job and facility fields, keeping the company, contact and the dates.
    pub fn apply(self, form: &mut TrainingJobForm) {
        let number = |value: f64| LenientFloat::from(value);
        match self {
            Self::SmallHyperscale => {
                form.gpu_hours = number(5000.0);
                form.power_per_gpu_kw = number(0.35);
                form.concurrent_gpus = number(64.0);
                form.can_chunk = true;
                form.min_chunk_duration_hours = number(4.0);
                form.max_chunks = number(4.0);
                form.iso = Iso::Pjm;
                form.renewable_penetration = RenewablePenetration::Medium;
                form.marginal_emissions = MarginalEmissions::GasDominated;
                form.ups_type = UpsType::EcoMode;
                form.redundancy = RedundancyLevel::NPlusOne;
                form.transformer_efficiency_percent = number(98.0);
                form.cooling_type = CoolingType::ChilledWater;
                form.cooling_setpoint_f = number(75.0);
                form.has_economization = true;
                form.economizer_hours = number(2000.0);
                form.onsite_solar_mw = number(5.0);
                form.onsite_wind_mw = number(0.0);
                form.battery_storage_mw = number(2.0);
                form.battery_storage_mwh = number(4.0);
                form.has_thermal_storage = false;
                form.has_ppas = false;
            }
            Self::LargeEnterprise => {
                form.gpu_hours = number(20_000.0);
                form.power_per_gpu_kw = number(0.4);
                form.concurrent_gpus = number(256.0);
                form.can_chunk = false;
                form.min_chunk_duration_hours = number(4.0);
                form.max_chunks = number(4.0);
                form.iso = Iso::Ercot;
                form.renewable_penetration = RenewablePenetration::High;
                form.marginal_emissions = MarginalEmissions::SolarPeaking;
                form.ups_type = UpsType::DoubleConversion;
                form.redundancy = RedundancyLevel::TwoN;
                form.transformer_efficiency_percent = number(98.5);
                form.cooling_type = CoolingType::AirCooledDx;
                form.cooling_setpoint_f = number(72.0);
                form.has_economization = false;
                form.economizer_hours = number(0.0);
                form.onsite_solar_mw = number(0.0);
                form.onsite_wind_mw = number(0.0);
                form.battery_storage_mw = number(0.0);
                form.battery_storage_mwh = number(0.0);
                form.has_thermal_storage = false;
                form.has_ppas = true;
            }
            Self::AiHpcIntensive => {
                form.gpu_hours = number(50_000.0);
                form.power_per_gpu_kw = number(0.7);
                form.concurrent_gpus = number(512.0);
                form.can_chunk = true;
                form.min_chunk_duration_hours = number(6.0);
                form.max_chunks = number(6.0);
                form.iso = Iso::Caiso;
                form.renewable_penetration = RenewablePenetration::VeryHigh;
                form.marginal_emissions = MarginalEmissions::HydroWindHeavy;
                form.ups_type = UpsType::LineInteractive;
                form.redundancy = RedundancyLevel::NPlusOne;
                form.transformer_efficiency_percent = number(99.0);
                form.cooling_type = CoolingType::Liquid;
                form.cooling_setpoint_f = number(80.0);
                form.has_economization = true;
                form.economizer_hours = number(3500.0);
                form.onsite_solar_mw = number(20.0);
                form.onsite_wind_mw = number(10.0);
                form.battery_storage_mw = number(15.0);
                form.battery_storage_mwh = number(60.0);
                form.has_thermal_storage = true;
                form.has_ppas = true;
            }
            Self::TypicalCloud => {
                form.gpu_hours = number(10_000.0);
                form.power_per_gpu_kw = number(0.4);
                form.concurrent_gpus = number(128.0);
                form.can_chunk = true;
                form.min_chunk_duration_hours = number(4.0);
                form.max_chunks = number(4.0);
                form.iso = Iso::Miso;
                form.renewable_penetration = RenewablePenetration::Medium;
                form.marginal_emissions = MarginalEmissions::DynamicallyVaries;
                form.ups_type = UpsType::DoubleConversion;
                form.redundancy = RedundancyLevel::NPlusOne;
                form.transformer_efficiency_percent = number(98.0);
                form.cooling_type = CoolingType::IndirectEvaporative;
                form.cooling_setpoint_f = number(75.0);
                form.has_economization = true;
                form.economizer_hours = number(2500.0);
                form.onsite_solar_mw = number(10.0);
                form.onsite_wind_mw = number(0.0);
                form.battery_storage_mw = number(5.0);
                form.battery_storage_mwh = number(10.0);
                form.has_thermal_storage = false;
                form.has_ppas = true;
            }
        }
    }
}
