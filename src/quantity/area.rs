use crate::quantity::power::Megawatts;

quantity!(SquareFeet, via: f64, suffix: "sq ft", precision: 0);
quantity!(WattsPerSquareFoot, via: f64, suffix: "W/sq ft", precision: 0);

impl std::ops::Mul<WattsPerSquareFoot> for SquareFeet {
    type Output = Megawatts;

    fn mul(self, density: WattsPerSquareFoot) -> Self::Output {
        Megawatts(self.0 * density.0 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_floor_area_to_megawatts() {
        let it_load = SquareFeet(100_000.0) * WattsPerSquareFoot(225.0);
        assert_abs_diff_eq!(it_load.0, 22.5, epsilon = 1e-9);
    }
}
