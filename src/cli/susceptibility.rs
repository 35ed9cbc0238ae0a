use beacon::{prelude::*, susceptibility::score, tables::build_susceptibility_table};
use clap::Parser;

use crate::cli::OutputArgs;

#[derive(Parser)]
pub struct SusceptibilityArgs {
    #[clap(long, env = "SUSCEPTIBILITY_STATE", default_value = "")]
    state: String,

    /// Rural, small town, suburb, or city.
    #[clap(long = "community-type", env = "COMMUNITY_TYPE", default_value = "")]
    community_type: String,

    /// How organized the local opposition is: low, medium, or high.
    #[clap(long = "organizing-strength", env = "ORGANIZING_STRENGTH", default_value = "")]
    organizing_strength: String,
}

impl SusceptibilityArgs {
    pub fn run(self, output: OutputArgs) -> Result {
        let score = score(&self.state, &self.community_type, &self.organizing_strength)
            .context("specify the state, community type and organizing strength")?;
        output.print(&score, |score| {
            println!("{}", build_susceptibility_table(score));
            println!("{}", score.insight());
        })
    }
}
