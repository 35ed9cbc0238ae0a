use std::{fs, path::PathBuf};

use beacon::{
    lenient::LenientFloat,
    lodestar::{
        CoolingType,
        Iso,
        JobWindow,
        Preset,
        RenewablePenetration,
        TrainingJobForm,
        optimize,
    },
    prelude::*,
    tables::{build_optimization_table, build_schedule_table},
};
use chrono::Local;
use clap::Parser;

use crate::cli::OutputArgs;

#[derive(Parser)]
pub struct LodestarArgs {
    /// Training job TOML file, the other options override it.
    #[clap(long = "job-file", env = "LODESTAR_JOB_FILE")]
    job_file: Option<PathBuf>,

    /// Start from a typical facility profile.
    #[clap(long, env = "LODESTAR_PRESET")]
    preset: Option<Preset>,

    /// Allow the job to run from today till the end of the month.
    #[clap(long = "this-month")]
    this_month: bool,

    #[clap(long = "gpu-hours", env = "GPU_HOURS")]
    gpu_hours: Option<LenientFloat>,

    /// Average power per GPU in kilowatts.
    #[clap(long = "power-per-gpu-kw", env = "POWER_PER_GPU_KW")]
    power_per_gpu: Option<LenientFloat>,

    #[clap(long = "transformer-efficiency-percent", env = "TRANSFORMER_EFFICIENCY_PERCENT")]
    transformer_efficiency: Option<LenientFloat>,

    #[clap(long = "cooling-type", env = "COOLING_TYPE")]
    cooling_type: Option<CoolingType>,

    #[clap(long, env = "ISO")]
    iso: Option<Iso>,

    #[clap(long = "renewable-penetration", env = "RENEWABLE_PENETRATION")]
    renewable_penetration: Option<RenewablePenetration>,

    /// Whether the job can be split into several runs.
    #[clap(long = "can-chunk", env = "CAN_CHUNK")]
    can_chunk: Option<bool>,

    #[clap(long = "economization", env = "HAS_ECONOMIZATION")]
    has_economization: Option<bool>,

    #[clap(long = "onsite-solar-mw", env = "ONSITE_SOLAR_MW")]
    onsite_solar: Option<LenientFloat>,

    #[clap(long = "onsite-wind-mw", env = "ONSITE_WIND_MW")]
    onsite_wind: Option<LenientFloat>,

    #[clap(long = "battery-storage-mw", env = "BATTERY_STORAGE_MW")]
    battery_power: Option<LenientFloat>,
}

impl LodestarArgs {
    pub fn run(self, output: OutputArgs) -> Result {
        let form = self.form()?;
        let job = form.to_job();
        info!(
            job = %job.job_name,
            gpu_hours = ?job.gpu_hours,
            onsite = ?job.onsite_total(),
            "planning…",
        );
        if let Some(window) = job.window {
            info!(
                earliest_start = %window.earliest_start,
                deadline = %window.deadline,
                "job window",
            );
        }

        let result = optimize(&job);
        output.print(&result, |result| {
            println!("{}", build_optimization_table(result));
            println!("{}", build_schedule_table(result));
            println!(
                "Scheduling across the low-carbon windows could reduce the emissions by {:.0}%.",
                result.reduction_percent,
            );
        })
    }

    /// Job file first, then the preset, then the individual options.
    fn form(&self) -> Result<TrainingJobForm> {
        let mut form = match &self.job_file {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("failed to parse `{}`", path.display()))?
            }
            None => TrainingJobForm::default(),
        };
        if let Some(preset) = self.preset {
            debug!(?preset, "applying");
            preset.apply(&mut form);
        }

        if let Some(gpu_hours) = self.gpu_hours {
            form.gpu_hours = gpu_hours;
        }
        if let Some(power_per_gpu) = self.power_per_gpu {
            form.power_per_gpu_kw = power_per_gpu;
        }
        if let Some(transformer_efficiency) = self.transformer_efficiency {
            form.transformer_efficiency_percent = transformer_efficiency;
        }
        if let Some(cooling_type) = self.cooling_type {
            form.cooling_type = cooling_type;
        }
        if let Some(iso) = self.iso {
            form.iso = iso;
        }
        if let Some(renewable_penetration) = self.renewable_penetration {
            form.renewable_penetration = renewable_penetration;
        }
        if let Some(can_chunk) = self.can_chunk {
            form.can_chunk = can_chunk;
        }
        if let Some(has_economization) = self.has_economization {
            form.has_economization = has_economization;
        }
        if let Some(onsite_solar) = self.onsite_solar {
            form.onsite_solar_mw = onsite_solar;
        }
        if let Some(onsite_wind) = self.onsite_wind {
            form.onsite_wind_mw = onsite_wind;
        }
        if let Some(battery_power) = self.battery_power {
            form.battery_storage_mw = battery_power;
        }

        if self.this_month {
            let window = JobWindow::rest_of_month(Local::now().date_naive())
                .context("failed to find the end of the month")?;
            form.earliest_start = Some(window.earliest_start);
            form.deadline = Some(window.deadline);
        }
        Ok(form)
    }
}
