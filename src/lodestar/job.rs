use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    lenient::LenientFloat,
    lodestar::{
        facility::{CoolingType, RedundancyLevel, UpsType},
        grid::{Iso, MarginalEmissions, RenewablePenetration},
        schedule::JobWindow,
    },
    quantity::{
        energy::MegawattHours,
        power::{Kilowatts, Megawatts},
        time::Hours,
    },
};

/// AI training job and the facility it runs in.
#[must_use]
#[derive(Clone, Debug, PartialEq, Builder, Serialize)]
pub struct TrainingJob {
    #[builder(into, default)]
    pub company_name: String,

    #[builder(into, default)]
    pub job_name: String,

    #[builder(into, default)]
    pub contact_email: String,

    /// Total GPU-hours of the job.
    pub gpu_hours: Hours,

    /// Average draw of a single GPU.
    #[builder(default = Kilowatts(0.4))]
    pub power_per_gpu: Kilowatts,

    pub concurrent_gpus: Option<u32>,
    pub window: Option<JobWindow>,

    /// Whether the job may be split into several runs.
    #[builder(default = true)]
    pub can_chunk: bool,

    #[builder(default = Hours(2.0))]
    pub min_chunk_duration: Hours,

    #[builder(default = 3)]
    pub max_chunks: u32,

    #[builder(default)]
    pub iso: Iso,

    #[builder(into, default)]
    pub iso_subregion: String,

    #[builder(default)]
    pub renewable_penetration: RenewablePenetration,

    #[builder(default)]
    pub marginal_emissions: MarginalEmissions,

    #[builder(default)]
    pub ups_type: UpsType,

    #[builder(default)]
    pub redundancy: RedundancyLevel,

    /// Transformer efficiency in percent.
    #[builder(default = 98.0)]
    pub transformer_efficiency: f64,

    #[builder(default)]
    pub cooling_type: CoolingType,

    /// Cooling setpoint in °F.
    #[builder(default = 75.0)]
    pub cooling_setpoint: f64,

    #[builder(default)]
    pub has_economization: bool,

    #[builder(default)]
    pub economizer_hours: Hours,

    #[builder(default)]
    pub onsite_solar: Megawatts,

    #[builder(default)]
    pub onsite_wind: Megawatts,

    #[builder(default)]
    pub battery_power: Megawatts,

    #[builder(default)]
    pub battery_energy: MegawattHours,

    #[builder(default)]
    pub has_thermal_storage: bool,

    /// Whether the operator has power purchase agreements.
    #[builder(default)]
    pub has_ppas: bool,
}

impl TrainingJob {
    /// On-site generation and storage power that can be used to shift the load.
    pub fn onsite_total(&self) -> Megawatts {
        self.onsite_solar + self.onsite_wind + self.battery_power
    }
}

/// Training job as entered in the form or a job file.
///
/// Numbers are free text here, see [`TrainingJobForm::to_job`] for the fallbacks.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TrainingJobForm {
    pub company_name: String,
    pub job_name: String,
    pub contact_email: String,
    pub gpu_hours: LenientFloat,
    pub power_per_gpu_kw: LenientFloat,
    pub concurrent_gpus: LenientFloat,
    pub earliest_start: Option<chrono::NaiveDate>,
    pub deadline: Option<chrono::NaiveDate>,
    pub can_chunk: bool,
    pub min_chunk_duration_hours: LenientFloat,
    pub max_chunks: LenientFloat,
    pub iso: Iso,
    pub iso_subregion: String,
    pub renewable_penetration: RenewablePenetration,
    pub marginal_emissions: MarginalEmissions,
    pub ups_type: UpsType,
    pub redundancy: RedundancyLevel,
    pub transformer_efficiency_percent: LenientFloat,
    pub cooling_type: CoolingType,
    pub cooling_setpoint_f: LenientFloat,
    pub has_economization: bool,
    pub economizer_hours: LenientFloat,
    pub onsite_solar_mw: LenientFloat,
    pub onsite_wind_mw: LenientFloat,
    pub battery_storage_mw: LenientFloat,
    pub battery_storage_mwh: LenientFloat,
    pub has_thermal_storage: bool,
    pub has_ppas: bool,
}

impl Default for TrainingJobForm {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            job_name: String::new(),
            contact_email: String::new(),
            gpu_hours: LenientFloat::EMPTY,
            power_per_gpu_kw: LenientFloat::from(0.4),
            concurrent_gpus: LenientFloat::EMPTY,
            earliest_start: None,
            deadline: None,
            can_chunk: true,
            min_chunk_duration_hours: LenientFloat::from(2.0),
            max_chunks: LenientFloat::from(3.0),
            iso: Iso::Pjm,
            iso_subregion: String::new(),
            renewable_penetration: RenewablePenetration::Medium,
            marginal_emissions: MarginalEmissions::GasDominated,
            ups_type: UpsType::DoubleConversion,
            redundancy: RedundancyLevel::NPlusOne,
            transformer_efficiency_percent: LenientFloat::from(98.0),
            cooling_type: CoolingType::ChilledWater,
            cooling_setpoint_f: LenientFloat::from(75.0),
            has_economization: false,
            economizer_hours: LenientFloat::from(0.0),
            onsite_solar_mw: LenientFloat::from(0.0),
            onsite_wind_mw: LenientFloat::from(0.0),
            battery_storage_mw: LenientFloat::from(0.0),
            battery_storage_mwh: LenientFloat::from(0.0),
            has_thermal_storage: false,
            has_ppas: false,
        }
    }
}

impl TrainingJobForm {
    /// Coerce the form into a job.
    ///
    /// Unparsable numbers are zero, except for the power per GPU and the transformer efficiency:
    /// those fall back to `0.4 kW` and `98%` when unparsable or zero, which also keeps
    /// the efficiency away from zero.
    pub fn to_job(&self) -> TrainingJob {
        let window = self
            .earliest_start
            .zip(self.deadline)
            .map(|(earliest_start, deadline)| JobWindow { earliest_start, deadline });
        TrainingJob::builder()
            .company_name(self.company_name.trim())
            .job_name(self.job_name.trim())
            .contact_email(self.contact_email.trim())
            .gpu_hours(Hours(self.gpu_hours.or_zero()))
            .power_per_gpu(Kilowatts(self.power_per_gpu_kw.nonzero_or(0.4)))
            .maybe_concurrent_gpus(self.concurrent_gpus.positive().map(to_count))
            .maybe_window(window)
            .can_chunk(self.can_chunk)
            .min_chunk_duration(Hours(self.min_chunk_duration_hours.or_zero()))
            .max_chunks(to_count(self.max_chunks.or_zero()))
            .iso(self.iso)
            .iso_subregion(self.iso_subregion.trim())
            .renewable_penetration(self.renewable_penetration)
            .marginal_emissions(self.marginal_emissions)
            .ups_type(self.ups_type)
            .redundancy(self.redundancy)
            .transformer_efficiency(self.transformer_efficiency_percent.nonzero_or(98.0))
            .cooling_type(self.cooling_type)
            .cooling_setpoint(self.cooling_setpoint_f.or_zero())
            .has_economization(self.has_economization)
            .economizer_hours(Hours(self.economizer_hours.or_zero()))
            .onsite_solar(Megawatts(self.onsite_solar_mw.or_zero()))
            .onsite_wind(Megawatts(self.onsite_wind_mw.or_zero()))
            .battery_power(Megawatts(self.battery_storage_mw.or_zero()))
            .battery_energy(MegawattHours(self.battery_storage_mwh.or_zero()))
            .has_thermal_storage(self.has_thermal_storage)
            .has_ppas(self.has_ppas)
            .build()
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u32 {
    value.trunc().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_default_form_matches_builder_defaults() {
        let job = TrainingJobForm::default().to_job();
        let expected = TrainingJob::builder().gpu_hours(Hours(0.0)).build();
        assert_eq!(job, expected);
    }

    #[test]
    fn test_fallbacks() {
        let form = TrainingJobForm {
            gpu_hours: "lots".parse().unwrap(),
            power_per_gpu_kw: "0".parse().unwrap(),
            transformer_efficiency_percent: "".parse().unwrap(),
            onsite_solar_mw: "n/a".parse().unwrap(),
            ..TrainingJobForm::default()
        };
        let job = form.to_job();
        assert_abs_diff_eq!(job.gpu_hours.0, 0.0);
        assert_abs_diff_eq!(job.power_per_gpu.0, 0.4);
        assert_abs_diff_eq!(job.transformer_efficiency, 98.0);
        assert_abs_diff_eq!(job.onsite_solar.0, 0.0);
    }

    #[test]
    fn test_window_requires_both_dates() {
        let earliest_start = chrono::NaiveDate::from_ymd_opt(2025, 1, 15);
        let form = TrainingJobForm { earliest_start, ..TrainingJobForm::default() };
        assert_eq!(form.to_job().window, None);

        let deadline = chrono::NaiveDate::from_ymd_opt(2025, 1, 31);
        let form = TrainingJobForm { deadline, ..form };
        assert!(form.to_job().window.is_some());
    }

    #[test]
    fn test_from_toml() {
        let form: TrainingJobForm = toml::from_str(
            r#"
            job-name = "llm-pretrain"
            gpu-hours = "10000"
            power-per-gpu-kw = 0.7
            iso = "CAISO"
            renewable-penetration = "very-high"
            cooling-type = "immersion"
            redundancy = "2N"
            can-chunk = false
            onsite-solar-mw = 20
            earliest-start = "2025-01-15"
            deadline = "2025-01-31"
            "#,
        )
        .unwrap();
        let job = form.to_job();
        assert_eq!(job.job_name, "llm-pretrain");
        assert_abs_diff_eq!(job.gpu_hours.0, 10_000.0);
        assert_abs_diff_eq!(job.power_per_gpu.0, 0.7);
        assert_eq!(job.iso, Iso::Caiso);
        assert_eq!(job.renewable_penetration, RenewablePenetration::VeryHigh);
        assert_eq!(job.cooling_type, CoolingType::Immersion);
        assert_eq!(job.redundancy, RedundancyLevel::TwoN);
        assert!(!job.can_chunk);
        assert_abs_diff_eq!(job.onsite_total().0, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(job.transformer_efficiency, 98.0);
        assert!(job.window.is_some());
    }
}
