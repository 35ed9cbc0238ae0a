use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    fmt::{Compact, FormattedPercentage, MillionsOfDollars},
    footprint::{Footprint, Sizing},
    incentives::Rollup,
    lodestar::OptimizationResult,
    range::EstimateRange,
    susceptibility::SusceptibilityScore,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn range_cells<T: Copy, D: Display>(
    range: EstimateRange<T>,
    format: impl Fn(T) -> D,
) -> [Cell; 3] {
    [
        Cell::new(format(range.low)).add_attribute(Attribute::Dim),
        Cell::new(format(range.typical)),
        Cell::new(format(range.high)).add_attribute(Attribute::Dim),
    ]
    .map(|cell| cell.set_alignment(CellAlignment::Right))
}

fn describe_sizing(sizing: Sizing) -> String {
    match sizing {
        Sizing::ItLoad(it_load) => format!("IT load of {it_load}"),
        Sizing::FacilityCapacity { capacity, pue } => {
            format!("Facility capacity of {capacity} at PUE {pue:.2}")
        }
        Sizing::FloorArea { area, kind } => format!(
            "{area} of {}",
            kind.map_or("unspecified data center", |kind| kind.label()).to_lowercase(),
        ),
        Sizing::RoughScale(Some(bucket)) => format!("Rough scale: {}", bucket.label()),
        Sizing::RoughScale(None) => "Unrecognized rough scale".to_string(),
    }
}

#[must_use]
pub fn build_footprint_table(footprint: &Footprint) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Annual", "Low", "Typical", "High"]);
    table.add_row(vec![
        Cell::new(describe_sizing(footprint.sizing)).add_attribute(Attribute::Italic),
    ]);
    let rows = [
        ("IT load, MW", range_cells(footprint.it_load, |it_load| format!("{:.1}", it_load.0))),
        ("Energy, MWh", range_cells(footprint.energy, |energy| Compact(energy.0))),
        ("Peak demand, MW", range_cells(footprint.peak_demand, |peak| format!("{:.1}", peak.0))),
        ("Water, gal", range_cells(footprint.water, |water| Compact(water.0))),
        ("Emissions, t CO₂", range_cells(footprint.emissions, |emissions| Compact(emissions.0))),
        ("Homes powered", range_cells(footprint.homes_equivalent, Compact)),
        ("People's water use", range_cells(footprint.people_equivalent_water, Compact)),
    ];
    for (title, [low, typical, high]) in rows {
        table.add_row(vec![Cell::new(title), low, typical, high]);
    }
    if footprint.diesel_emissions.0 > 0.0 {
        table.add_row(vec![
            Cell::new("Backup diesel, t CO₂"),
            Cell::new(""),
            Cell::new(Compact(footprint.diesel_emissions.0))
                .set_alignment(CellAlignment::Right)
                .fg(Color::DarkYellow),
            Cell::new(""),
        ]);
    }
    table
}

#[must_use]
pub fn build_susceptibility_table(score: &SusceptibilityScore) -> Table {
    let level = score.level();
    let mut table = new_table();
    table.set_header(vec!["Category", "Score", "Out of", "What it measures"]);
    for category_score in &score.categories {
        let category = category_score.category;
        table.add_row(vec![
            Cell::new(category.name()),
            Cell::new(category_score.score).set_alignment(CellAlignment::Right),
            Cell::new(category.weight())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(category.description()).add_attribute(Attribute::Dim),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(score.total)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(level.color()),
        Cell::new(100).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        Cell::new(level).fg(level.color()),
    ]);
    table
}

#[must_use]
pub fn build_optimization_table(result: &OptimizationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Baseline", "Grid-aware"]);
    table.add_row(vec![
        Cell::new("Total energy, MWh"),
        Cell::new(format!("{:.1}", result.baseline.total_energy.0))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1}", result.optimized.total_energy.0))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Emissions, t CO₂"),
        Cell::new(format!("{:.1}", result.baseline.co2.0))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Red),
        Cell::new(format!("{:.1}", result.optimized.co2.0))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Reduction"),
        Cell::new(""),
        Cell::new(FormattedPercentage(result.reduction_percent))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Strategy"),
        Cell::new(""),
        Cell::new(result.strategy.label()).add_attribute(Attribute::Italic),
    ]);
    table
}

#[must_use]
pub fn build_schedule_table(result: &OptimizationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Start", "End"]);
    for (i, block) in result.optimized.blocks.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).add_attribute(Attribute::Dim),
            Cell::new(block.start),
            Cell::new(block.end),
        ]);
    }
    table
}

#[must_use]
pub fn build_incentives_summary_table(rollup: &Rollup) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Annual revenue loss", "Job creation gap", "Average job fulfillment"]);
    table.add_row(vec![
        Cell::new(MillionsOfDollars(rollup.total_revenue_loss_usd)).fg(Color::Red),
        Cell::new(rollup.job_gap).set_alignment(CellAlignment::Right),
        Cell::new(format!("{}%", rollup.average_fulfillment_percent))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_incentives_by_state_table(rollup: &Rollup) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "State",
        "Revenue loss",
        "Facilities",
        "Programs",
        "Claimed jobs",
        "Actual jobs",
        "Fulfillment",
    ]);
    for stats in &rollup.states {
        table.add_row(vec![
            Cell::new(&stats.state),
            Cell::new(format!("{:.1}", MillionsOfDollars(stats.annual_revenue_loss_usd)))
                .set_alignment(CellAlignment::Right),
            Cell::new(stats.facilities_count).set_alignment(CellAlignment::Right),
            Cell::new(stats.programs_count).set_alignment(CellAlignment::Right),
            Cell::new(stats.jobs.claimed).set_alignment(CellAlignment::Right),
            Cell::new(stats.jobs.actual).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}%", stats.job_fulfillment_percent))
                .set_alignment(CellAlignment::Right)
                .fg(if stats.jobs.is_underperforming() {
                    Color::Red
                } else {
                    Color::Reset
                }),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        footprint::{OperatingAssumptions, SizingInput, estimate},
        quantity::power::Megawatts,
        susceptibility::score,
    };

    #[test]
    fn test_footprint_table_rows() {
        let sizing = SizingInput::builder().it_load(Megawatts(100.0)).build();
        let footprint = estimate(&sizing, &OperatingAssumptions::default(), None).unwrap();
        let table = build_footprint_table(&footprint);
        assert_eq!(table.row_iter().count(), 8);
        assert!(table.to_string().contains("722.7K"));
    }

    #[test]
    fn test_susceptibility_table_rows() {
        let score = score("Virginia", "Rural", "low").unwrap();
        let table = build_susceptibility_table(&score);
        assert_eq!(table.row_iter().count(), 6);
        assert!(table.to_string().contains("High Susceptibility"));
    }
}
