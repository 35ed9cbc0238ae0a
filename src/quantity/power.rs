use crate::quantity::{
    energy::{KilowattHours, MegawattHours},
    time::Hours,
};

quantity!(Kilowatts, via: f64, suffix: "kW", precision: 2);
quantity!(Megawatts, via: f64, suffix: "MW", precision: 1);

implement_mul!(Kilowatts, Hours, KilowattHours);
implement_mul!(Megawatts, Hours, MegawattHours);

impl From<Megawatts> for Kilowatts {
    fn from(megawatts: Megawatts) -> Self {
        Self(megawatts.0 * 1000.0)
    }
}

impl From<Kilowatts> for Megawatts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self(kilowatts.0 / 1000.0)
    }
}
