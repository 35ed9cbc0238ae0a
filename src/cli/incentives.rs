use std::{fs, path::PathBuf};

use beacon::{
    incentives::{Programs, Rollup, SortBy},
    prelude::*,
    tables::{build_incentives_by_state_table, build_incentives_summary_table},
};
use clap::Parser;

use crate::cli::OutputArgs;

#[derive(Parser)]
pub struct IncentivesArgs {
    /// TOML file with the `[[program]]` entries.
    #[clap(long, env = "INCENTIVE_PROGRAMS", default_value = "programs.toml")]
    programs: PathBuf,

    #[clap(long = "sort-by", env = "INCENTIVES_SORT_BY", default_value = "revenue")]
    sort_by: SortBy,
}

impl IncentivesArgs {
    pub fn run(self, output: OutputArgs) -> Result {
        let text = fs::read_to_string(&self.programs)
            .with_context(|| format!("failed to read `{}`", self.programs.display()))?;
        let programs = Programs::from_toml(&text)?.programs;
        info!(n_programs = programs.len(), "loaded");

        let mut rollup = Rollup::from_programs(&programs);
        rollup.sort_states(self.sort_by);
        output.print(&rollup, |rollup| {
            println!("{}", build_incentives_summary_table(rollup));
            println!("{}", build_incentives_by_state_table(rollup));
        })
    }
}
