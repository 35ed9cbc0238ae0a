quantity!(Liters, via: f64, suffix: "L", precision: 0);
quantity!(Gallons, via: f64, suffix: "gal", precision: 0);

quantity!(
    /// Water usage effectiveness: on-site water per unit of IT energy.
    LitersPerKilowattHour, via: f64, suffix: "L/kWh", precision: 2
);

impl Liters {
    pub const PER_GALLON: f64 = 3.785;
}

impl From<Liters> for Gallons {
    fn from(liters: Liters) -> Self {
        Self(liters.0 / Liters::PER_GALLON)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_liters_to_gallons() {
        assert_abs_diff_eq!(Gallons::from(Liters(3785.0)).0, 1000.0, epsilon = 1e-9);
    }
}
