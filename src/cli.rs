mod footprint;
mod incentives;
mod lodestar;
mod susceptibility;

use beacon::prelude::*;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::cli::{
    footprint::FootprintArgs,
    incentives::IncentivesArgs,
    lodestar::LodestarArgs,
    susceptibility::SusceptibilityArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Footprint(args) => args.run(self.output),
            Command::Susceptibility(args) => args.run(self.output),
            Command::Lodestar(args) => args.run(self.output),
            Command::Incentives(args) => args.run(self.output),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the annual energy, water and emissions of a proposed data center.
    #[clap(name = "footprint")]
    Footprint(Box<FootprintArgs>),

    /// Score how attractive a community is to data center developers.
    #[clap(name = "susceptibility")]
    Susceptibility(Box<SusceptibilityArgs>),

    /// Plan a grid-aware AI training run.
    #[clap(name = "lodestar")]
    Lodestar(Box<LodestarArgs>),

    /// Summarize the data center tax incentive programs.
    #[clap(name = "incentives")]
    Incentives(Box<IncentivesArgs>),
}

#[derive(Copy, Clone, Parser)]
pub struct OutputArgs {
    /// Print JSON instead of the tables.
    #[clap(long, global = true, env = "BEACON_JSON")]
    pub json: bool,
}

impl OutputArgs {
    fn print<T: Serialize>(self, value: &T, render: impl FnOnce(&T)) -> Result {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            render(value);
        }
        Ok(())
    }
}
