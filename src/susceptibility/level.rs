use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Lower,
    Moderate,
    High,
}

impl Level {
    /// Classify the total score, the upper bounds are inclusive.
    pub const fn of(total: u8) -> Self {
        match total {
            0..=30 => Self::Lower,
            31..=60 => Self::Moderate,
            _ => Self::High,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Lower => Color::Green,
            Self::Moderate => Color::DarkYellow,
            Self::High => Color::Red,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lower => write!(f, "Lower Susceptibility"),
            Self::Moderate => write!(f, "Moderate Susceptibility"),
            Self::High => write!(f, "High Susceptibility"),
        }
    }
}
