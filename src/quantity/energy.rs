use crate::quantity::{
    emissions::{TonnesCo2, TonnesPerMegawattHour},
    water::{Liters, LitersPerKilowattHour},
};

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 0);
quantity!(MegawattHours, via: f64, suffix: "MWh", precision: 1);

implement_mul!(MegawattHours, TonnesPerMegawattHour, TonnesCo2);
implement_mul!(KilowattHours, LitersPerKilowattHour, Liters);

impl From<KilowattHours> for MegawattHours {
    fn from(kilowatt_hours: KilowattHours) -> Self {
        Self(kilowatt_hours.0 / 1000.0)
    }
}

impl From<MegawattHours> for KilowattHours {
    fn from(megawatt_hours: MegawattHours) -> Self {
        Self(megawatt_hours.0 * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{power::Megawatts, time::Hours};

    #[test]
    fn test_megawatts_over_a_year() {
        let energy = Megawatts(1.0) * Hours::ONE_YEAR;
        assert_abs_diff_eq!(energy.0, 8760.0, epsilon = 1e-9);
        assert_abs_diff_eq!(KilowattHours::from(energy).0, 8_760_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_emissions() {
        let emissions = MegawattHours(100.0) * TonnesPerMegawattHour(0.45);
        assert_abs_diff_eq!(emissions.0, 45.0, epsilon = 1e-9);
    }
}
