//! LODESTAR: grid-aware AI training planner.
//!
//! Estimates the energy and emissions of a training job, and how much of those emissions
//! could be avoided by shifting the job into cleaner hours.

pub mod facility;
pub mod grid;
pub mod job;
pub mod preset;
pub mod schedule;

use serde::Serialize;

pub use self::{
    facility::{CoolingType, RedundancyLevel, UpsType},
    grid::{Iso, MarginalEmissions, RenewablePenetration},
    job::{TrainingJob, TrainingJobForm},
    preset::Preset,
    schedule::{JobWindow, ScheduleBlock},
};
use crate::{
    prelude::*,
    quantity::{emissions::TonnesCo2, energy::MegawattHours, power::Megawatts},
};

/// Which scheduling flexibility the job has, the first matching one wins.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Chunkable job with significant on-site generation and storage.
    ChunkedWithOnsite,

    Chunked,
    OnsiteOnly,
    Economization,
    Inflexible,
}

impl Strategy {
    /// On-site capacity above which the job can lean on it.
    pub const ONSITE_THRESHOLD: Megawatts = Megawatts(5.0);

    pub fn of(job: &TrainingJob) -> Self {
        let has_onsite = job.onsite_total() > Self::ONSITE_THRESHOLD;
        if job.can_chunk && has_onsite {
            Self::ChunkedWithOnsite
        } else if job.can_chunk {
            Self::Chunked
        } else if has_onsite {
            Self::OnsiteOnly
        } else if job.has_economization {
            Self::Economization
        } else {
            Self::Inflexible
        }
    }

    /// Share of the baseline emissions that remains after the optimization.
    pub const fn emissions_factor(self) -> f64 {
        match self {
            Self::ChunkedWithOnsite => 0.70,
            Self::Chunked => 0.80,
            Self::OnsiteOnly => 0.88,
            Self::Economization => 0.92,
            Self::Inflexible => 1.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ChunkedWithOnsite => "Chunked runs backed by on-site power",
            Self::Chunked => "Chunked runs in low-carbon hours",
            Self::OnsiteOnly => "Continuous run backed by on-site power",
            Self::Economization => "Continuous run with economization",
            Self::Inflexible => "No flexibility",
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Baseline {
    pub total_energy: MegawattHours,
    pub co2: TonnesCo2,
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Optimized {
    pub total_energy: MegawattHours,
    pub co2: TonnesCo2,
    pub blocks: &'static [ScheduleBlock],
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub strategy: Strategy,
    pub baseline: Baseline,
    pub optimized: Optimized,

    /// Avoided emissions, in percent of the baseline.
    pub reduction_percent: f64,
}

/// Estimate the training job emissions, as is and when scheduled in the cleaner hours.
#[instrument(skip_all, fields(job = %job.job_name))]
pub fn optimize(job: &TrainingJob) -> OptimizationResult {
    let it_energy = MegawattHours::from(job.power_per_gpu * job.gpu_hours);
    let total_energy = (it_energy / (job.transformer_efficiency / 100.0)
        * job.cooling_type.overhead_multiplier())
    .finite_or_zero();
    let baseline_co2 =
        (total_energy * job.renewable_penetration.emissions_factor()).finite_or_zero();
    debug!(?it_energy, ?total_energy, ?baseline_co2, "baseline");

    let strategy = Strategy::of(job);
    let optimized_co2 = baseline_co2 * strategy.emissions_factor();
    let reduction_percent = if baseline_co2 == TonnesCo2::ZERO {
        0.0
    } else {
        (baseline_co2 - optimized_co2) / baseline_co2 * 100.0
    };
    info!(?strategy, ?baseline_co2, ?optimized_co2, reduction_percent, "optimized");

    OptimizationResult {
        strategy,
        baseline: Baseline { total_energy, co2: baseline_co2 },
        optimized: Optimized {
            total_energy,
            co2: optimized_co2,
            blocks: schedule::sample_blocks(job.can_chunk),
        },
        reduction_percent,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{power::Kilowatts, time::Hours};

    fn reference_job() -> TrainingJob {
        TrainingJob::builder()
            .gpu_hours(Hours(10_000.0))
            .power_per_gpu(Kilowatts(0.4))
            .transformer_efficiency(98.0)
            .cooling_type(CoolingType::ChilledWater)
            .renewable_penetration(RenewablePenetration::Medium)
            .can_chunk(true)
            .onsite_solar(Megawatts(10.0))
            .battery_power(Megawatts(5.0))
            .build()
    }

    #[test]
    fn test_reference_job() {
        let result = optimize(&reference_job());
        assert_eq!(result.strategy, Strategy::ChunkedWithOnsite);
        assert_abs_diff_eq!(result.baseline.total_energy.0, 4.694, epsilon = 0.001);
        assert_abs_diff_eq!(result.baseline.co2.0, 2.112, epsilon = 0.001);
        assert_abs_diff_eq!(result.optimized.co2.0, 1.479, epsilon = 0.001);
        assert_eq!(result.optimized.total_energy, result.baseline.total_energy);
        assert_abs_diff_eq!(result.reduction_percent, 30.0, epsilon = 1e-9);
        assert_eq!(result.optimized.blocks.len(), 3);
    }

    #[test]
    fn test_strategies() {
        let job = reference_job();
        assert_eq!(Strategy::of(&job), Strategy::ChunkedWithOnsite);

        let job = TrainingJob { onsite_solar: Megawatts::ZERO, ..job };
        assert_eq!(Strategy::of(&job), Strategy::Chunked);

        let job = TrainingJob { can_chunk: false, onsite_wind: Megawatts(6.0), ..job };
        assert_eq!(Strategy::of(&job), Strategy::OnsiteOnly);

        let job = TrainingJob { onsite_wind: Megawatts::ZERO, has_economization: true, ..job };
        assert_eq!(Strategy::of(&job), Strategy::Economization);

        let job = TrainingJob { has_economization: false, ..job };
        assert_eq!(Strategy::of(&job), Strategy::Inflexible);
    }

    #[test]
    fn test_onsite_threshold_is_exclusive() {
        let job = TrainingJob {
            can_chunk: false,
            onsite_solar: Megawatts(3.0),
            battery_power: Megawatts(2.0),
            ..reference_job()
        };
        assert_eq!(Strategy::of(&job), Strategy::Inflexible);
    }

    #[test]
    fn test_reduction_is_independent_of_scale() {
        for gpu_hours in [1.0, 10_000.0, 5_000_000.0] {
            let job = TrainingJob { gpu_hours: Hours(gpu_hours), ..reference_job() };
            let result = optimize(&job);
            assert_abs_diff_eq!(
                result.reduction_percent,
                (1.0 - result.strategy.emissions_factor()) * 100.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_continuous_run() {
        let job = TrainingJob {
            can_chunk: false,
            onsite_solar: Megawatts::ZERO,
            battery_power: Megawatts::ZERO,
            ..reference_job()
        };
        let result = optimize(&job);
        assert_abs_diff_eq!(result.reduction_percent, 0.0);
        assert_eq!(result.optimized.blocks, schedule::sample_blocks(false));
    }

    #[test]
    fn test_zero_gpu_hours() {
        let job = TrainingJob { gpu_hours: Hours(0.0), ..reference_job() };
        let result = optimize(&job);
        assert_eq!(result.baseline.co2, TonnesCo2::ZERO);
        assert_abs_diff_eq!(result.reduction_percent, 0.0);
    }

    #[test]
    fn test_zero_efficiency_is_guarded() {
        let job = TrainingJob { transformer_efficiency: 0.0, ..reference_job() };
        let result = optimize(&job);
        assert_eq!(result.baseline.total_energy, MegawattHours::ZERO);
        assert_abs_diff_eq!(result.reduction_percent, 0.0);
    }

    #[test]
    fn test_idempotence() {
        let lhs = optimize(&reference_job());
        let rhs = optimize(&reference_job());
        assert_eq!(lhs.baseline.co2.0.to_bits(), rhs.baseline.co2.0.to_bits());
        assert_eq!(lhs.optimized.co2.0.to_bits(), rhs.optimized.co2.0.to_bits());
        assert_eq!(lhs.reduction_percent.to_bits(), rhs.reduction_percent.to_bits());
    }
}
