//! Overflow-checked calendar arithmetic.
//!
//! Every stepping loop in the enumerators goes through these helpers, so a
//! schedule anchored near the representable date boundary ends its
//! enumeration early instead of wrapping or panicking.

use chrono::NaiveDate;

/// Adds `days` (signed) calendar days, or `None` when the result would leave
/// the representable date range in either direction.
pub fn try_add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    chrono::Duration::try_days(days).and_then(|d| date.checked_add_signed(d))
}

/// Steps a (year, month) pair forward by `months`, or `None` on year
/// overflow. `month` is 1-based.
pub fn add_months(year: i32, month: u32, months: u32) -> Option<(i32, u32)> {
    let zero_based = i64::from(month) - 1 + i64::from(months);
    let year = i64::from(year) + zero_based.div_euclid(12);
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    Some((i32::try_from(year).ok()?, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_days_plain() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 27).unwrap();
        assert_eq!(
            try_add_days(date, 2),
            Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        );
        assert_eq!(
            try_add_days(date, -27),
            Some(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
        );
    }

    #[test]
    fn test_add_days_at_boundary_returns_none() {
        assert_eq!(try_add_days(NaiveDate::MAX, 1), None);
        assert_eq!(try_add_days(NaiveDate::MIN, -1), None);
        // Far past either boundary, not just one step.
        assert_eq!(try_add_days(NaiveDate::MAX, i64::MAX), None);
    }

    #[test]
    fn test_add_months_wraps_year() {
        assert_eq!(add_months(2025, 11, 1), Some((2025, 12)));
        assert_eq!(add_months(2025, 11, 2), Some((2026, 1)));
        assert_eq!(add_months(2025, 1, 25), Some((2027, 2)));
        assert_eq!(add_months(2025, 6, 0), Some((2025, 6)));
    }

    #[test]
    fn test_add_months_year_overflow_returns_none() {
        assert_eq!(add_months(i32::MAX, 12, 1), None);
    }
}
