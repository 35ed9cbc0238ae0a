quantity!(Hours, via: f64, suffix: "h", precision: 0);

impl Hours {
    /// Hours in a non-leap year.
    pub const ONE_YEAR: Self = Self(8760.0);
}
