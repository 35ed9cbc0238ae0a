//! US states (and DC) offered by the state pickers.

pub const US_STATES: [&str; 51] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
    "Washington DC",
];

/// Find the canonical spelling of the state name, ignoring case and surrounding whitespace.
#[must_use]
pub fn canonical(state: &str) -> Option<&'static str> {
    let state = state.trim();
    US_STATES.iter().copied().find(|known| known.eq_ignore_ascii_case(state))
}

/// Look the state up in a keyed table, falling back to the default row.
pub fn lookup<T: Copy>(table: &[(&str, T)], state: &str, default: T) -> T {
    let state = state.trim();
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(state))
        .map_or(default, |(_, value)| *value)
}
