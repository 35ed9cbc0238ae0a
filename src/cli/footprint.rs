use beacon::{
    footprint::{
        CoolingSystem,
        DataCenterType,
        DieselUsage,
        OperatingAssumptions,
        SizingInput,
        estimate,
    },
    lenient::LenientFloat,
    prelude::*,
    quantity::{area::SquareFeet, power::Megawatts, time::Hours},
    states,
    tables::build_footprint_table,
};
use clap::Parser;

use crate::cli::OutputArgs;

#[derive(Parser)]
pub struct FootprintArgs {
    /// US state of the site, used for the grid emissions.
    #[clap(long, env = "FOOTPRINT_STATE", default_value = "")]
    state: String,

    /// Explicit IT load in megawatts.
    #[clap(long = "it-load-mw", env = "IT_LOAD_MW")]
    it_load: Option<LenientFloat>,

    /// Total facility capacity in megawatts, converted to the IT load with the PUE.
    #[clap(long = "facility-capacity-mw", env = "FACILITY_CAPACITY_MW")]
    facility_capacity: Option<LenientFloat>,

    /// Building floor area in square feet.
    #[clap(long = "floor-area-sqft", env = "FLOOR_AREA_SQFT")]
    floor_area: Option<LenientFloat>,

    #[clap(long = "data-center-type", env = "DATA_CENTER_TYPE")]
    data_center_type: Option<DataCenterType>,

    /// Rough scale when nothing more precise is known: small, medium, large, or mega.
    #[clap(long = "rough-scale", env = "ROUGH_SCALE")]
    rough_scale: Option<String>,

    /// Power usage effectiveness.
    #[clap(long, env = "PUE", default_value = "1.5")]
    pue: LenientFloat,

    /// Typical IT utilization, from 0 to 1.
    #[clap(long = "it-utilization", env = "IT_UTILIZATION", default_value = "0.55")]
    it_utilization: LenientFloat,

    #[clap(long = "cooling-system", env = "COOLING_SYSTEM")]
    cooling_system: Option<CoolingSystem>,

    /// Backup diesel generator power in megawatts.
    #[clap(long = "diesel-generator-mw", env = "DIESEL_GENERATOR_MW")]
    diesel_generator: Option<LenientFloat>,

    #[clap(long = "diesel-hours-per-year", env = "DIESEL_HOURS_PER_YEAR", default_value = "35")]
    diesel_hours_per_year: LenientFloat,
}

impl FootprintArgs {
    pub fn run(self, output: OutputArgs) -> Result {
        let sizing = SizingInput::builder()
            .maybe_it_load(self.it_load.map(|it_load| Megawatts(it_load.or_zero())))
            .maybe_facility_capacity(
                self.facility_capacity.map(|capacity| Megawatts(capacity.or_zero())),
            )
            .maybe_floor_area(self.floor_area.map(|area| SquareFeet(area.or_zero())))
            .maybe_data_center_type(self.data_center_type)
            .maybe_rough_scale(self.rough_scale)
            .build();
        ensure!(
            sizing.can_submit(&self.state),
            "specify the state or a rough scale, and at least one of the sizing options"
        );
        if !self.state.trim().is_empty() && states::canonical(&self.state).is_none() {
            warn!(state = %self.state, "unknown state, using the default grid emissions");
        }

        let assumptions = OperatingAssumptions::builder()
            .pue(self.pue.or_zero())
            .it_utilization(self.it_utilization.or_zero())
            .maybe_cooling_system(self.cooling_system)
            .state(self.state)
            .build();
        let diesel = self.diesel_generator.map(|generator| {
            DieselUsage::builder()
                .generator(Megawatts(generator.or_zero()))
                .hours_per_year(Hours(self.diesel_hours_per_year.or_zero()))
                .build()
        });
        let footprint = estimate(&sizing, &assumptions, diesel)
            .context("none of the sizing options could be parsed as a positive number")?;

        output.print(&footprint, |footprint| {
            println!("{}", build_footprint_table(footprint));
        })
    }
}
