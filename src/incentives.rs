//! Tax incentive transparency: how much the data center tax breaks cost, and what they deliver.

use std::{cmp::Reverse, collections::BTreeSet};

use clap::ValueEnum;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Fulfillment below this share of the claimed jobs is flagged.
pub const UNDERPERFORMING_FULFILLMENT_PERCENT: u32 = 60;

/// Single incentive program.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxIncentive {
    pub id: String,
    pub state: String,
    pub program_name: String,
    pub annual_revenue_loss_usd: f64,
    pub claimed_jobs: u32,
    pub actual_jobs: u32,

    #[serde(default)]
    pub facilities_covered: Vec<String>,
}

/// Incentive programs file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Programs {
    #[serde(default, rename = "program")]
    pub programs: Vec<TaxIncentive>,
}

impl Programs {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse the incentive programs")
    }
}

/// Jobs promised against the jobs delivered.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Jobs {
    pub claimed: u32,
    pub actual: u32,
}

impl Jobs {
    /// Claimed jobs that never materialized.
    pub fn gap(self) -> i64 {
        i64::from(self.claimed) - i64::from(self.actual)
    }

    /// Actual jobs in percent of the claimed ones, rounded.
    ///
    /// Zero when nothing was claimed.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fulfillment_percent(self) -> u32 {
        if self.claimed == 0 {
            return 0;
        }
        (f64::from(self.actual) / f64::from(self.claimed) * 100.0).round() as u32
    }

    pub fn is_underperforming(self) -> bool {
        self.fulfillment_percent() < UNDERPERFORMING_FULFILLMENT_PERCENT
    }
}

impl std::iter::Sum<Self> for Jobs {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |sum, jobs| Self {
            claimed: sum.claimed.saturating_add(jobs.claimed),
            actual: sum.actual.saturating_add(jobs.actual),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateStats {
    pub state: String,
    pub annual_revenue_loss_usd: f64,
    pub facilities_count: usize,
    pub programs_count: usize,
    pub jobs: Jobs,
    pub job_fulfillment_percent: u32,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SortBy {
    /// Largest revenue loss first.
    #[default]
    Revenue,

    /// Best job fulfillment first.
    Jobs,

    /// Alphabetically by state.
    Alpha,
}

/// National summary and per-state breakdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rollup {
    pub total_revenue_loss_usd: f64,
    pub jobs: Jobs,
    pub job_gap: i64,
    pub average_fulfillment_percent: u32,

    /// In the order the states first appear in the programs.
    pub states: Vec<StateStats>,
}

impl Rollup {
    #[instrument(skip_all, fields(n_programs = programs.len()))]
    pub fn from_programs(programs: &[TaxIncentive]) -> Self {
        let total_revenue_loss_usd =
            programs.iter().map(|program| program.annual_revenue_loss_usd).sum();
        let jobs = programs.iter().map(TaxIncentive::jobs).sum::<Jobs>();

        let states = programs
            .iter()
            .map(|program| program.state.as_str())
            .unique()
            .map(|state| {
                let programs =
                    programs.iter().filter(|program| program.state == state).collect_vec();
                let jobs = programs.iter().map(|program| program.jobs()).sum::<Jobs>();
                StateStats {
                    state: state.to_string(),
                    annual_revenue_loss_usd: programs
                        .iter()
                        .map(|program| program.annual_revenue_loss_usd)
                        .sum(),
                    facilities_count: programs
                        .iter()
                        .flat_map(|program| &program.facilities_covered)
                        .collect::<BTreeSet<_>>()
                        .len(),
                    programs_count: programs.len(),
                    jobs,
                    job_fulfillment_percent: jobs.fulfillment_percent(),
                }
            })
            .collect_vec();

        let rollup = Self {
            total_revenue_loss_usd,
            jobs,
            job_gap: jobs.gap(),
            average_fulfillment_percent: jobs.fulfillment_percent(),
            states,
        };
        debug!(
            total_revenue_loss_usd = rollup.total_revenue_loss_usd,
            job_gap = rollup.job_gap,
            n_states = rollup.states.len(),
            "rolled up",
        );
        rollup
    }

    pub fn sort_states(&mut self, sort_by: SortBy) {
        match sort_by {
            SortBy::Revenue => {
                self.states
                    .sort_by_key(|stats| Reverse(OrderedFloat(stats.annual_revenue_loss_usd)));
            }
            SortBy::Jobs => self.states.sort_by_key(|stats| Reverse(stats.job_fulfillment_percent)),
            SortBy::Alpha => self.states.sort_by(|lhs, rhs| lhs.state.cmp(&rhs.state)),
        }
    }
}

impl TaxIncentive {
    pub const fn jobs(&self) -> Jobs {
        Jobs { claimed: self.claimed_jobs, actual: self.actual_jobs }
    }
}
