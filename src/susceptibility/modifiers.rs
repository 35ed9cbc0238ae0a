use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CommunityType {
    Rural,
    SmallTown,
    Suburb,
    City,
}

impl CommunityType {
    /// Parse the community type ignoring case, `Small Town` and `small-town` both match.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(&key.trim().replace(' ', "-"), true).ok()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rural => "Rural",
            Self::SmallTown => "Small Town",
            Self::Suburb => "Suburb",
            Self::City => "City",
        }
    }

    /// Applies to the energy and land categories only.
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Rural => 1.1,
            Self::SmallTown => 1.0,
            Self::Suburb => 0.95,
            Self::City => 0.9,
        }
    }
}

/// Self-assessed strength of local organizing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OrganizingStrength {
    /// Little to no organizing.
    Low,

    /// Some organizing.
    Medium,

    /// Strong, active coalition.
    High,
}

impl OrganizingStrength {
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(key.trim(), false).ok()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Little to no organizing",
            Self::Medium => "Some organizing",
            Self::High => "Strong, active coalition",
        }
    }

    pub const fn modifier(self) -> f64 {
        match self {
            Self::Low => 1.1,
            Self::Medium => 1.0,
            Self::High => 0.8,
        }
    }
}

/// Modifier of a free-text community type, neutral when unrecognized.
pub fn community_type_modifier(community_type: &str) -> f64 {
    CommunityType::from_key(community_type).map_or(1.0, CommunityType::modifier)
}

/// Modifier of a free-text organizing strength, neutral when unrecognized.
pub fn organizing_strength_modifier(organizing_strength: &str) -> f64 {
    OrganizingStrength::from_key(organizing_strength).map_or(1.0, OrganizingStrength::modifier)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_community_type_is_case_insensitive() {
        assert_abs_diff_eq!(community_type_modifier("Rural"), 1.1);
        assert_abs_diff_eq!(community_type_modifier("RURAL"), 1.1);
        assert_abs_diff_eq!(community_type_modifier("Small Town"), 1.0);
        assert_abs_diff_eq!(community_type_modifier("suburb"), 0.95);
        assert_abs_diff_eq!(community_type_modifier("City"), 0.9);
        assert_abs_diff_eq!(community_type_modifier("Exurb"), 1.0);
    }

    #[test]
    fn test_organizing_strength() {
        assert_abs_diff_eq!(organizing_strength_modifier("low"), 1.1);
        assert_abs_diff_eq!(organizing_strength_modifier("medium"), 1.0);
        assert_abs_diff_eq!(organizing_strength_modifier("high"), 0.8);
        assert_abs_diff_eq!(organizing_strength_modifier("heroic"), 1.0);
    }
}
