use serde::{Deserialize, Serialize};

/// Low, typical and high estimates of the same quantity.
///
/// The bands are expected to be ordered when built from monotonic inputs, but nothing enforces it.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRange<T> {
    pub low: T,
    pub typical: T,
    pub high: T,
}

impl<T> EstimateRange<T> {
    pub const fn new(low: T, typical: T, high: T) -> Self {
        Self { low, typical, high }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> EstimateRange<U> {
        EstimateRange { low: f(self.low), typical: f(self.typical), high: f(self.high) }
    }

    /// Combine the matching bands of two ranges.
    pub fn zip_with<U, V>(
        self,
        other: EstimateRange<U>,
        mut f: impl FnMut(T, U) -> V,
    ) -> EstimateRange<V> {
        EstimateRange {
            low: f(self.low, other.low),
            typical: f(self.typical, other.typical),
            high: f(self.high, other.high),
        }
    }
}

impl<T: Copy> EstimateRange<T> {
    pub const fn splat(value: T) -> Self {
        Self { low: value, typical: value, high: value }
    }
}

impl<T: PartialOrd> EstimateRange<T> {
    pub fn is_ordered(&self) -> bool {
        self.low <= self.typical && self.typical <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_with() {
        let range = EstimateRange::new(1.0, 2.0, 3.0)
            .zip_with(EstimateRange::new(4.0, 5.0, 6.0), |lhs, rhs| lhs * rhs);
        assert_eq!(range, EstimateRange::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_is_ordered() {
        assert!(EstimateRange::new(1, 2, 3).is_ordered());
        assert!(EstimateRange::splat(0).is_ordered());
        assert!(!EstimateRange::new(2, 1, 3).is_ordered());
    }
}
