//! Resolution of the enumeration anchor and the effective end bound.

use chrono::NaiveDateTime;

use crate::schedule::{DailyRule, Recurrence, Schedule};

/// How many of the schedule's step periods the default horizon spans when no
/// explicit end is configured.
const DEFAULT_HORIZON_STEPS: i32 = 1000;

/// The fallback step for schedules without a configured daily period.
fn default_step() -> chrono::Duration {
    chrono::Duration::days(3)
}

/// The local instant all enumeration starts from.
///
/// Precedence: the explicit target instant; else the reference instant's
/// date carrying the start instant's time of day; else the start instant
/// verbatim.
pub fn resolve(schedule: &Schedule) -> NaiveDateTime {
    if let Some(target) = schedule.target {
        target
    } else if let Some(reference) = schedule.reference {
        reference.date().and_time(schedule.start.time())
    } else {
        schedule.start
    }
}

/// The upper enumeration bound: the explicit end when configured, otherwise
/// a generous but finite horizon of a thousand steps past the anchor,
/// saturating at the representable maximum.
pub fn effective_end(schedule: &Schedule) -> NaiveDateTime {
    if let Some(end) = schedule.end {
        return end;
    }
    let horizon = step_of(schedule)
        .checked_mul(DEFAULT_HORIZON_STEPS)
        .unwrap_or(chrono::Duration::MAX);
    resolve(schedule)
        .checked_add_signed(horizon)
        .unwrap_or(NaiveDateTime::MAX)
}

/// The schedule's configured step: the daily period when one exists (either
/// as the daily rule itself or as a weekly/monthly slot window), else three
/// days.
fn step_of(schedule: &Schedule) -> chrono::Duration {
    let every = match &schedule.recurrence {
        Recurrence::Daily(DailyRule::Every(every)) => Some(every),
        Recurrence::Weekly(rule) => rule.slots.as_ref(),
        Recurrence::Monthly(rule) => rule.slots.as_ref(),
        _ => None,
    };
    match every {
        Some(every) => every.period.as_duration(),
        None => default_step(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{EveryRule, Period, PeriodUnit};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn base() -> Schedule {
        Schedule {
            recurrence: Recurrence::Daily(DailyRule::OnceAt(
                chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            )),
            start: at(2025, 1, 1, 9, 0),
            end: None,
            reference: None,
            target: None,
        }
    }

    #[test]
    fn test_resolve_prefers_target() {
        let schedule = Schedule {
            target: Some(at(2025, 3, 15, 14, 0)),
            reference: Some(at(2025, 2, 1, 8, 30)),
            ..base()
        };
        assert_eq!(resolve(&schedule), at(2025, 3, 15, 14, 0));
    }

    #[test]
    fn test_resolve_reference_takes_start_time() {
        let schedule = Schedule {
            reference: Some(at(2025, 2, 1, 8, 30)),
            ..base()
        };
        // Reference date, start's time of day.
        assert_eq!(resolve(&schedule), at(2025, 2, 1, 9, 0));
    }

    #[test]
    fn test_resolve_falls_back_to_start() {
        assert_eq!(resolve(&base()), at(2025, 1, 1, 9, 0));
    }

    #[test]
    fn test_effective_end_explicit() {
        let schedule = Schedule {
            end: Some(at(2025, 12, 31, 23, 59)),
            ..base()
        };
        assert_eq!(effective_end(&schedule), at(2025, 12, 31, 23, 59));
    }

    #[test]
    fn test_effective_end_defaults_to_thousand_steps() {
        // No daily period configured: 1000 x 3 days past the anchor.
        let schedule = base();
        assert_eq!(
            effective_end(&schedule),
            at(2025, 1, 1, 9, 0) + chrono::Duration::days(3000)
        );

        // With a daily period, the horizon scales with it.
        let schedule = Schedule {
            recurrence: Recurrence::Daily(DailyRule::Every(EveryRule {
                period: Period::new(2, PeriodUnit::Hours),
                window: None,
            })),
            ..base()
        };
        assert_eq!(
            effective_end(&schedule),
            at(2025, 1, 1, 9, 0) + chrono::Duration::hours(2000)
        );
    }

    #[test]
    fn test_effective_end_saturates_near_boundary() {
        let schedule = Schedule {
            start: NaiveDateTime::MAX - chrono::Duration::days(1),
            ..base()
        };
        assert_eq!(effective_end(&schedule), NaiveDateTime::MAX);
    }
}
