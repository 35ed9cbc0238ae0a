use std::fmt::{Debug, Display, Formatter};

/// Compact number: `1.2M`, `350.0K`, or a whole number below a thousand.
pub struct Compact(pub f64);

impl Debug for Compact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Compact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 >= 1_000_000.0 {
            write!(f, "{:.1}M", self.0 / 1_000_000.0)
        } else if self.0 >= 1000.0 {
            write!(f, "{:.1}K", self.0 / 1000.0)
        } else {
            write!(f, "{:.0}", self.0)
        }
    }
}

/// Value that is already in percent, one decimal unless the precision is specified.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}%", f.precision().unwrap_or(1), self.0)
    }
}

/// Dollar amount in millions, whole unless the precision is specified.
pub struct MillionsOfDollars(pub f64);

impl Display for MillionsOfDollars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.*}M", f.precision().unwrap_or(0), self.0 / 1_000_000.0)
    }
}
