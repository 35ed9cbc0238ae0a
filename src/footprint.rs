//! Annual energy, peak demand, water and emissions of a proposed data center.

pub mod lookup;
pub mod sizing;

use bon::Builder;
use serde::Serialize;

pub use self::{
    lookup::CoolingSystem,
    sizing::{DataCenterType, ScaleBucket, Sizing, SizingInput},
};
use crate::{
    prelude::*,
    quantity::{
        emissions::{TonnesCo2, TonnesPerMegawattHour},
        energy::{KilowattHours, MegawattHours},
        finite_or_zero,
        power::{Kilowatts, Megawatts},
        time::Hours,
        water::{Gallons, Liters},
    },
    range::EstimateRange,
};

/// IT utilization of the low band. Not user-editable.
pub const UTILIZATION_LOW: f64 = 0.3;

/// IT utilization of the high band. Not user-editable.
pub const UTILIZATION_HIGH: f64 = 0.8;

/// Average annual household electricity use.
pub const KILOWATT_HOURS_PER_HOME: f64 = 11_000.0;

/// Average annual residential water use per person.
pub const GALLONS_PER_PERSON: f64 = 36_500.0;

#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct OperatingAssumptions {
    /// Power usage effectiveness: total facility power over IT power.
    #[builder(default = 1.5)]
    pub pue: f64,

    /// Typical IT utilization, `0..=1`.
    #[builder(default = 0.55)]
    pub it_utilization: f64,

    /// [`None`] when unknown, in which case a middle-of-the-road water use is assumed.
    pub cooling_system: Option<CoolingSystem>,

    /// State name, used to pick the grid emissions factors.
    #[builder(into, default)]
    pub state: String,
}

impl Default for OperatingAssumptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// On-site diesel backup generation.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct DieselUsage {
    pub generator: Megawatts,

    /// Typical testing and maintenance runtime.
    #[builder(default = Hours(35.0))]
    pub hours_per_year: Hours,
}

impl DieselUsage {
    pub fn emissions(self) -> TonnesCo2 {
        (self.generator * self.hours_per_year * TonnesPerMegawattHour::DIESEL_GENERATOR)
            .finite_or_zero()
    }
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Footprint {
    pub sizing: Sizing,
    pub it_load: EstimateRange<Megawatts>,

    /// Annual facility energy.
    pub energy: EstimateRange<MegawattHours>,

    pub peak_demand: EstimateRange<Megawatts>,

    /// Annual on-site water use.
    pub water: EstimateRange<Gallons>,

    /// Annual greenhouse gas emissions from the grid electricity.
    pub emissions: EstimateRange<TonnesCo2>,

    /// Number of average homes using the same electricity.
    pub homes_equivalent: EstimateRange<f64>,

    /// Number of people using the same water.
    pub people_equivalent_water: EstimateRange<f64>,

    /// Annual backup generator emissions, zero without diesel usage.
    pub diesel_emissions: TonnesCo2,
}

/// Estimate the facility footprint.
///
/// Returns [`None`] when no sizing field is filled in yet.
#[instrument(skip_all)]
pub fn estimate(
    sizing: &SizingInput,
    assumptions: &OperatingAssumptions,
    diesel: Option<DieselUsage>,
) -> Option<Footprint> {
    let pue = finite_or_zero(assumptions.pue);
    let Some(resolved) = sizing.resolve(pue) else {
        debug!("no sizing input yet");
        return None;
    };
    debug!(sizing = ?resolved, pue, "resolved the sizing");

    let it_load = resolved.it_load().map(Megawatts::finite_or_zero);
    let utilization = EstimateRange::new(
        UTILIZATION_LOW,
        finite_or_zero(assumptions.it_utilization),
        UTILIZATION_HIGH,
    );
    let it_energy = it_load.zip_with(utilization, |it_load, utilization| {
        Kilowatts::from(it_load) * utilization * Hours::ONE_YEAR
    });

    // Same PUE for all the bands, the load range already carries the uncertainty:
    let facility_energy: EstimateRange<KilowattHours> = it_energy.map(|energy| energy * pue);
    let peak_demand = it_load.map(|it_load| it_load * pue);

    let water_liters: EstimateRange<Liters> = it_energy
        .zip_with(lookup::water_usage_effectiveness(assumptions.cooling_system), |energy, wue| {
            energy * wue
        });
    let water = water_liters.map(Gallons::from);

    let energy = facility_energy.map(MegawattHours::from);
    let emissions = energy
        .zip_with(lookup::grid_emissions(&assumptions.state), |energy, factor| energy * factor);

    let footprint = Footprint {
        sizing: resolved,
        it_load,
        energy: energy.map(MegawattHours::finite_or_zero),
        peak_demand: peak_demand.map(Megawatts::finite_or_zero),
        water: water.map(Gallons::finite_or_zero),
        emissions: emissions.map(TonnesCo2::finite_or_zero),
        homes_equivalent: facility_energy
            .map(|energy| finite_or_zero(energy.0 / KILOWATT_HOURS_PER_HOME)),
        people_equivalent_water: water.map(|water| finite_or_zero(water.0 / GALLONS_PER_PERSON)),
        diesel_emissions: diesel.map_or(TonnesCo2::ZERO, DieselUsage::emissions),
    };
    debug!(
        energy = ?footprint.energy.typical,
        water = ?footprint.water.typical,
        emissions = ?footprint.emissions.typical,
        "estimated",
    );
    Some(footprint)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use clap::ValueEnum;

    use super::*;
    use crate::{footprint::lookup::GRID_EMISSIONS_BY_STATE, quantity::area::SquareFeet};

    fn assumptions(state: &str, cooling_system: Option<CoolingSystem>) -> OperatingAssumptions {
        OperatingAssumptions::builder().state(state).maybe_cooling_system(cooling_system).build()
    }

    #[test]
    fn test_no_sizing_no_result() {
        let assumptions = OperatingAssumptions::default();
        assert!(estimate(&SizingInput::default(), &assumptions, None).is_none());
    }

    #[test]
    fn test_explicit_it_load() {
        let sizing = SizingInput::builder().it_load(Megawatts(100.0)).build();
        let assumptions = assumptions("Virginia", Some(CoolingSystem::HeavyEvaporative));
        let footprint = estimate(&sizing, &assumptions, None).unwrap();

        // 100 MW × 1000 × 0.55 × 8760 = 481 800 000 kWh of IT energy:
        assert_abs_diff_eq!(footprint.energy.typical.0, 722_700.0, epsilon = 1e-6);
        assert_abs_diff_eq!(footprint.energy.low.0, 354_780.0, epsilon = 1e-6);
        assert_abs_diff_eq!(footprint.energy.high.0, 1_156_320.0, epsilon = 1e-6);

        assert_abs_diff_eq!(footprint.peak_demand.typical.0, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(footprint.peak_demand.low.0, 135.0, epsilon = 1e-9);

        // 481 800 000 kWh × 4 L/kWh / 3.785:
        assert_abs_diff_eq!(
            footprint.water.typical.0,
            481_800_000.0 * 4.0 / 3.785,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(footprint.emissions.typical.0, 722_700.0 * 0.55, epsilon = 1e-6);
        assert_abs_diff_eq!(
            footprint.homes_equivalent.typical,
            722_700_000.0 / 11_000.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            footprint.people_equivalent_water.typical,
            481_800_000.0 * 4.0 / 3.785 / 36_500.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(footprint.diesel_emissions.0, 0.0);
    }

    #[test]
    fn test_same_pue_for_all_bands() {
        let sizing = SizingInput::builder().it_load(Megawatts(10.0)).build();
        let footprint =
            estimate(&sizing, &OperatingAssumptions::builder().pue(1.2).build(), None).unwrap();
        let it_energy_low = 9.0 * 1000.0 * UTILIZATION_LOW * 8760.0;
        assert_abs_diff_eq!(footprint.energy.low.0, it_energy_low * 1.2 / 1000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_unknown_state_uses_default_factors() {
        let sizing = SizingInput::builder().rough_scale("small").build();
        let footprint = estimate(&sizing, &assumptions("Atlantis", None), None).unwrap();
        let energy = footprint.energy.typical.0;
        assert_abs_diff_eq!(footprint.emissions.typical.0, energy * 0.50, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_pue_does_not_produce_nan() {
        let sizing = SizingInput::builder()
            .facility_capacity(Megawatts(30.0))
            .floor_area(SquareFeet(10_000.0))
            .build();
        let footprint =
            estimate(&sizing, &OperatingAssumptions::builder().pue(0.0).build(), None).unwrap();
        assert!(matches!(footprint.sizing, Sizing::FloorArea { .. }));
        assert_abs_diff_eq!(footprint.energy.typical.0, 0.0);
        assert_abs_diff_eq!(footprint.homes_equivalent.typical, 0.0);
        assert!(footprint.water.typical.0 > 0.0);
    }

    #[test]
    fn test_unknown_bucket_gives_zero_ranges() {
        let sizing = SizingInput::builder().rough_scale("gigantic").build();
        let footprint = estimate(&sizing, &OperatingAssumptions::default(), None).unwrap();
        assert_eq!(footprint.energy, EstimateRange::splat(MegawattHours::ZERO));
        assert_eq!(footprint.water, EstimateRange::splat(Gallons::ZERO));
    }

    #[test]
    fn test_diesel() {
        let sizing = SizingInput::builder().rough_scale("medium").build();
        let diesel = DieselUsage::builder().generator(Megawatts(20.0)).build();
        let footprint = estimate(&sizing, &OperatingAssumptions::default(), Some(diesel)).unwrap();
        assert_abs_diff_eq!(footprint.diesel_emissions.0, 20.0 * 35.0 * 0.7, epsilon = 1e-9);
    }

    #[test]
    fn test_ranges_are_ordered() {
        let states = GRID_EMISSIONS_BY_STATE.iter().map(|(state, _)| *state).chain(["", "Maine"]);
        let cooling_systems =
            CoolingSystem::value_variants().iter().copied().map(Some).chain([None]);
        let sizings = [
            SizingInput::builder().it_load(Megawatts(42.0)).build(),
            SizingInput::builder().facility_capacity(Megawatts(60.0)).build(),
            SizingInput::builder()
                .floor_area(SquareFeet(250_000.0))
                .data_center_type(DataCenterType::AiHpc)
                .build(),
            SizingInput::builder().floor_area(SquareFeet(250_000.0)).build(),
            SizingInput::builder().rough_scale("small").build(),
            SizingInput::builder().rough_scale("mega").build(),
        ];

        for cooling_system in cooling_systems {
            for state in states.clone() {
                for sizing in &sizings {
                    let footprint =
                        estimate(sizing, &assumptions(state, cooling_system), None).unwrap();
                    let context = format!("{state:?}, {cooling_system:?}, {:?}", footprint.sizing);
                    assert!(footprint.energy.is_ordered(), "{context}");
                    assert!(footprint.peak_demand.is_ordered(), "{context}");
                    assert!(footprint.water.is_ordered(), "{context}");
                    assert!(footprint.emissions.is_ordered(), "{context}");
                }
            }
        }
    }

    #[test]
    fn test_idempotence() {
        let sizing = SizingInput::builder().floor_area(SquareFeet(123_456.0)).build();
        let assumptions = assumptions("Oregon", Some(CoolingSystem::Hybrid));
        let first = estimate(&sizing, &assumptions, None).unwrap();
        let second = estimate(&sizing, &assumptions, None).unwrap();
        assert_eq!(first.energy.typical.0.to_bits(), second.energy.typical.0.to_bits());
        assert_eq!(first.water.high.0.to_bits(), second.water.high.0.to_bits());
        assert_eq!(first.emissions.low.0.to_bits(), second.emissions.low.0.to_bits());
    }
}
