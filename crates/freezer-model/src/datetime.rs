//! Calendar-month arithmetic on timestamps.
//!
//! Retention dates and warning thresholds are all expressed in whole
//! months. Chrono clamps to the end of the target month (Jan 31 + 1
//! month = Feb 28/29), which is the behavior the inventory relies on.

use chrono::{DateTime, Months, Utc};

/// Adds `months` calendar months to `instant`.
///
/// Saturates at the representable range instead of failing; dates that
/// far out never occur in inventory data.
pub fn add_months(instant: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    instant
        .checked_add_months(Months::new(months))
        .unwrap_or(instant)
}

/// Subtracts `months` calendar months from `instant`, if representable.
pub fn sub_months(instant: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    instant.checked_sub_months(Months::new(months))
}

/// Returns the instant `months` calendar months from now.
pub fn months_from_now(months: u32) -> DateTime<Utc> {
    add_months(Utc::now(), months)
}
