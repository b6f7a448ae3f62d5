//! Next-occurrence selection.
//!
//! A separate, cheaper code path from full enumeration, but one that must
//! agree with it: weekly schedules answer from the next eligible weekday,
//! daily and monthly schedules from the head of their enumeration, with the
//! reference instant standing in when the range holds nothing. One-shot
//! schedules bypass all of it and reinterpret the target instant in the
//! zone.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::anchor;
use crate::daily;
use crate::engine::Limits;
use crate::monthly;
use crate::schedule::{DailyRule, Recurrence, Schedule};
use crate::weekly;
use crate::zoned;

pub(crate) fn select(schedule: &Schedule, tz: Tz, limits: &Limits) -> Option<DateTime<Tz>> {
    match &schedule.recurrence {
        Recurrence::Once => schedule
            .target
            .and_then(|target| zoned::first_instant(target, tz)),
        Recurrence::Weekly(rule) => {
            let anchor = anchor::resolve(schedule);
            zoned::first_instant(weekly::next_eligible(anchor, &rule.weekdays), tz)
        }
        Recurrence::Daily(rule) => {
            let enumerated = daily::occurrences(schedule, rule, tz, limits);
            let picked = first_or_reference(schedule, &enumerated.occurrences, tz);
            match rule {
                // The explicit once-at time replaces the anchor's time of
                // day on whatever date was selected.
                DailyRule::OnceAt(time) => picked
                    .and_then(|dt| zoned::first_instant(dt.date_naive().and_time(*time), tz)),
                DailyRule::Every(_) => picked,
            }
        }
        Recurrence::Monthly(rule) => {
            let enumerated = monthly::occurrences(schedule, rule, tz, limits);
            first_or_reference(schedule, &enumerated.occurrences, tz)
        }
    }
}

fn first_or_reference(
    schedule: &Schedule,
    enumerated: &[DateTime<Tz>],
    tz: Tz,
) -> Option<DateTime<Tz>> {
    enumerated.first().copied().or_else(|| {
        let fallback = schedule
            .reference
            .unwrap_or_else(|| anchor::resolve(schedule));
        zoned::first_instant(fallback, tz)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{EveryRule, MonthPattern, MonthlyRule, Period, PeriodUnit, WeeklyRule};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
    use chrono_tz::America::New_York;
    use chrono_tz::UTC;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn base(recurrence: Recurrence) -> Schedule {
        Schedule {
            recurrence,
            start: at(2025, 10, 1, 9, 0),
            end: Some(at(2025, 11, 30, 23, 59)),
            reference: None,
            target: None,
        }
    }

    #[test]
    fn test_once_reinterprets_target() {
        let schedule = Schedule {
            target: Some(at(2025, 7, 4, 12, 0)),
            ..base(Recurrence::Once)
        };
        let got = select(&schedule, New_York, &Limits::default()).unwrap();
        assert_eq!(got, New_York.with_ymd_and_hms(2025, 7, 4, 12, 0, 0).unwrap());
        // No target, nothing to fire.
        assert_eq!(select(&base(Recurrence::Once), UTC, &Limits::default()), None);
    }

    #[test]
    fn test_weekly_answers_next_eligible() {
        let schedule = base(Recurrence::Weekly(WeeklyRule {
            interval: 2,
            weekdays: vec![Weekday::Mon],
            slots: None,
        }));
        let got = select(&schedule, UTC, &Limits::default()).unwrap();
        // Oct 1 2025 is a Wednesday; the first Monday on or after is Oct 6.
        assert_eq!(got, UTC.with_ymd_and_hms(2025, 10, 6, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_daily_answers_head_of_enumeration() {
        let schedule = base(Recurrence::Daily(DailyRule::Every(EveryRule {
            period: Period::new(1, PeriodUnit::Days),
            window: None,
        })));
        let got = select(&schedule, UTC, &Limits::default()).unwrap();
        assert_eq!(got, UTC.with_ymd_and_hms(2025, 10, 2, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_daily_once_at_recombines_time() {
        let schedule = base(Recurrence::Daily(DailyRule::OnceAt(
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        )));
        let got = select(&schedule, UTC, &Limits::default()).unwrap();
        // The selected date, at the explicit once-at time.
        assert_eq!(got, UTC.with_ymd_and_hms(2025, 10, 2, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_monthly_falls_back_to_reference_when_range_is_empty() {
        let schedule = Schedule {
            // Day 31 never exists inside the window (November has 30 days).
            recurrence: Recurrence::Monthly(MonthlyRule {
                pattern: MonthPattern::OnDay(31),
                interval: 1,
                slots: None,
            }),
            start: at(2025, 11, 1, 9, 0),
            end: Some(at(2025, 11, 30, 23, 59)),
            reference: Some(at(2025, 11, 5, 10, 0)),
            target: None,
        };
        let got = select(&schedule, UTC, &Limits::default()).unwrap();
        assert_eq!(got, UTC.with_ymd_and_hms(2025, 11, 5, 10, 0, 0).unwrap());
    }
}
