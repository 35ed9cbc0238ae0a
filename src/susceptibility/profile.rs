use serde::Serialize;

use crate::states;

/// How attractive the state is to developers in each category, `0..=1`.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RiskProfile {
    pub energy_infrastructure: f64,
    pub land_zoning: f64,
    pub incentives_fiscal: f64,
    pub resource_environment: f64,
}

impl RiskProfile {
    pub const DEFAULT: Self = Self::new(0.5, 0.5, 0.5, 0.5);

    const fn new(
        energy_infrastructure: f64,
        land_zoning: f64,
        incentives_fiscal: f64,
        resource_environment: f64,
    ) -> Self {
        Self { energy_infrastructure, land_zoning, incentives_fiscal, resource_environment }
    }

    /// Look up the state profile, falling back to [`RiskProfile::DEFAULT`].
    pub fn of_state(state: &str) -> Self {
        states::lookup(&BY_STATE, state, Self::DEFAULT)
    }
}

pub static BY_STATE: [(&str, RiskProfile); 12] = [
    ("Virginia", RiskProfile::new(0.9, 0.8, 0.85, 0.7)),
    ("Texas", RiskProfile::new(0.85, 0.75, 0.8, 0.65)),
    ("Ohio", RiskProfile::new(0.8, 0.7, 0.75, 0.6)),
    ("Nevada", RiskProfile::new(0.75, 0.8, 0.9, 0.4)),
    ("Oregon", RiskProfile::new(0.7, 0.6, 0.7, 0.5)),
    ("Michigan", RiskProfile::new(0.75, 0.65, 0.7, 0.55)),
    ("Arkansas", RiskProfile::new(0.7, 0.75, 0.85, 0.6)),
    ("Nebraska", RiskProfile::new(0.65, 0.7, 0.75, 0.5)),
    ("Missouri", RiskProfile::new(0.7, 0.65, 0.7, 0.55)),
    ("Arizona", RiskProfile::new(0.75, 0.7, 0.75, 0.35)),
    ("North Carolina", RiskProfile::new(0.8, 0.7, 0.75, 0.6)),
    ("Georgia", RiskProfile::new(0.8, 0.75, 0.8, 0.55)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_state() {
        assert_eq!(RiskProfile::of_state("Nevada"), RiskProfile::new(0.75, 0.8, 0.9, 0.4));
        assert_eq!(RiskProfile::of_state("Vermont"), RiskProfile::DEFAULT);
    }

    #[test]
    fn test_profiles_are_proportions() {
        for (state, profile) in &BY_STATE {
            for value in [
                profile.energy_infrastructure,
                profile.land_zoning,
                profile.incentives_fiscal,
                profile.resource_environment,
            ] {
                assert!((0.0..=1.0).contains(&value), "{state}");
            }
        }
    }
}
