quantity!(
    /// Metric tonnes of CO₂ (or CO₂-equivalent).
    TonnesCo2, via: f64, suffix: "t", precision: 1
);

quantity!(
    /// Emissions intensity of the consumed or generated energy.
    TonnesPerMegawattHour, via: f64, suffix: "t/MWh", precision: 2
);

impl TonnesPerMegawattHour {
    /// Rough intensity of a diesel backup generator running at its nameplate power.
    pub const DIESEL_GENERATOR: Self = Self(0.7);
}
