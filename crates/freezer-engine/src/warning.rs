//! Expiration-warning classification.

use chrono::{DateTime, Utc};

use freezer_model::WarningConfig;
use freezer_model::datetime::sub_months;

/// Severity of an item's expiration status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Warning {
    #[default]
    Ok,
    FirstWarning,
    SecondWarning,
    Expired,
}

impl Warning {
    /// Display label; empty for [`Warning::Ok`].
    pub fn label(&self) -> &'static str {
        match self {
            Warning::Ok => "",
            Warning::FirstWarning => "First Warning",
            Warning::SecondWarning => "Second Warning",
            Warning::Expired => "Expired",
        }
    }
}

/// Classifies an expiration date against a reference date.
///
/// The checks run expired, then second, then first; the thresholds are
/// not required to be disjoint and the order is the tie-break policy.
/// A threshold that cannot be computed (month underflow) is skipped.
pub fn classify(
    expiration: DateTime<Utc>,
    today: DateTime<Utc>,
    config: &WarningConfig,
) -> Warning {
    if today >= expiration {
        return Warning::Expired;
    }
    if let Some(second) = sub_months(expiration, config.months_before_second)
        && today >= second
    {
        return Warning::SecondWarning;
    }
    if let Some(first) = sub_months(expiration, config.months_before_first)
        && today >= first
    {
        return Warning::FirstWarning;
    }
    Warning::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config() -> WarningConfig {
        WarningConfig {
            months_before_first: 3,
            months_before_second: 1,
        }
    }

    fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_expired_when_expiration_in_the_past() {
        let result = classify(day(2025, 7, 1), day(2025, 8, 10), &config());
        assert_eq!(result, Warning::Expired);
    }

    #[test]
    fn test_expired_when_expiration_is_today() {
        let result = classify(day(2025, 8, 10), day(2025, 8, 10), &config());
        assert_eq!(result, Warning::Expired);
    }

    #[test]
    fn test_second_warning_within_one_month() {
        let result = classify(day(2025, 9, 9), day(2025, 8, 10), &config());
        assert_eq!(result, Warning::SecondWarning);
    }

    #[test]
    fn test_first_warning_between_one_and_three_months() {
        let result = classify(day(2025, 11, 1), day(2025, 8, 10), &config());
        assert_eq!(result, Warning::FirstWarning);
    }

    #[test]
    fn test_ok_beyond_first_warning_window() {
        let result = classify(day(2026, 2, 1), day(2025, 8, 10), &config());
        assert_eq!(result, Warning::Ok);
    }
}
