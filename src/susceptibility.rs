//! How attractive a community looks to data center developers, on a 0–100 scale.

pub mod category;
pub mod level;
pub mod modifiers;
pub mod profile;

use std::cmp::Reverse;

use serde::Serialize;

pub use self::{
    category::{Category, CategoryScore},
    level::Level,
    modifiers::{CommunityType, OrganizingStrength},
    profile::RiskProfile,
};
use crate::prelude::*;

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SusceptibilityScore {
    /// Total score, `0..=100`.
    pub total: u8,

    /// Per-category breakdown, in the [`Category::ALL`] order.
    pub categories: [CategoryScore; 5],
}

impl SusceptibilityScore {
    pub const fn level(&self) -> Level {
        Level::of(self.total)
    }

    /// The highest-scoring category that the community does not control.
    ///
    /// Ties go to the earlier category.
    pub fn top_category(&self) -> Option<Category> {
        self.categories
            .iter()
            .filter(|score| !score.category.is_reverse_scored())
            .min_by_key(|score| Reverse(score.score))
            .map(|score| score.category)
    }

    /// Short explanation of the score, naming the main driver.
    #[must_use]
    pub fn insight(&self) -> String {
        let top_category = self.top_category().map(Category::name);
        match self.level() {
            Level::Lower => format!(
                "Your community shows lower susceptibility. {} contribute, but overall conditions \
                 do not strongly favor data center development.",
                top_category.unwrap_or("Several factors"),
            ),
            Level::Moderate => format!(
                "Your community shows moderate susceptibility. {} are primary drivers. \
                 Consider building community awareness and protections now.",
                top_category.unwrap_or("Infrastructure and incentives"),
            ),
            Level::High => format!(
                "Your community shows high susceptibility. {} create favorable conditions for \
                 developers. Strong organizing and legal protections are recommended.",
                top_category.unwrap_or("Multiple factors"),
            ),
        }
    }
}

/// Score the community.
///
/// Returns [`None`] until all three fields are filled in. An unlisted state uses the default
/// profile, unrecognized community type or organizing strength are neutral.
#[instrument(skip_all)]
pub fn score(
    state: &str,
    community_type: &str,
    organizing_strength: &str,
) -> Option<SusceptibilityScore> {
    if [state, community_type, organizing_strength].iter().any(|field| field.trim().is_empty()) {
        debug!("not all the fields are filled in yet");
        return None;
    }

    let profile = RiskProfile::of_state(state);
    let type_modifier = modifiers::community_type_modifier(community_type);
    let organizing_modifier = modifiers::organizing_strength_modifier(organizing_strength);
    debug!(?profile, type_modifier, organizing_modifier, "looked up");

    // The community type only affects energy and land:
    let energy = profile.energy_infrastructure * Category::Energy.weight() * type_modifier;
    let land = profile.land_zoning * Category::Land.weight() * type_modifier;
    let incentives = profile.incentives_fiscal * Category::Incentives.weight();
    let resources = profile.resource_environment * Category::Resources.weight();
    let community = Category::Community.weight() * (1.0 - 0.5 * organizing_modifier);

    // The total adds up the raw community points, while the breakdown shows them inverted:
    let total = to_points(energy + land + incentives + resources + community).min(100);
    let categories = [
        (Category::Energy, energy),
        (Category::Land, land),
        (Category::Incentives, incentives),
        (Category::Resources, resources),
        (Category::Community, Category::Community.weight() - community),
    ]
    .map(|(category, score)| CategoryScore { category, score: to_points(score) });

    info!(total, level = ?Level::of(total), "scored");
    Some(SusceptibilityScore { total, categories })
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_points(score: f64) -> u8 {
    score.round().clamp(0.0, f64::from(u8::MAX)) as u8
}
