use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Calendar month names mapped to their ordinal (January = 1 ... December = 12)
pub static MONTH_ORDER: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .into_iter()
    .zip(1..)
    .collect()
});

/// Returns the ordinal of a month name
///
/// Names outside the table sort after December.
#[must_use]
pub fn month_ordinal(name: &str) -> u32 {
    MONTH_ORDER.get(name.trim()).copied().unwrap_or(u32::MAX)
}
