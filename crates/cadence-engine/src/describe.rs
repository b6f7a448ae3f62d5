//! Human-readable schedule descriptions.
//!
//! A pure downstream formatter: one English sentence per configuration,
//! built from the same data model the engine consumes. Formatting never
//! touches the zone database — descriptions are wall-clock statements.

use crate::schedule::{
    DailyRule, DaySelector, EveryRule, MonthPattern, PeriodUnit, Recurrence, Schedule,
};
use chrono::Weekday;

/// Renders `schedule` as one sentence, e.g. "Occurs every 2 weeks on Monday
/// and Thursday at 09:00, starting 2025-10-01, until 2025-11-30."
pub fn describe(schedule: &Schedule) -> String {
    let mut sentence = match &schedule.recurrence {
        Recurrence::Once => match schedule.target {
            Some(target) => format!("Occurs once at {}", target.format("%Y-%m-%d %H:%M")),
            None => "Occurs once".to_string(),
        },
        Recurrence::Daily(DailyRule::OnceAt(time)) => {
            format!("Occurs every day at {}", time.format("%H:%M"))
        }
        Recurrence::Daily(DailyRule::Every(every)) => {
            format!("Occurs {}", every_fragment(every))
        }
        Recurrence::Weekly(rule) => {
            let mut text = match rule.interval {
                0 | 1 => format!("Occurs every week on {}", weekday_list(&rule.weekdays)),
                n => format!("Occurs every {n} weeks on {}", weekday_list(&rule.weekdays)),
            };
            append_time_or_slots(&mut text, &rule.slots, schedule);
            text
        }
        Recurrence::Monthly(rule) => {
            let subject = match &rule.pattern {
                MonthPattern::OnDay(day) => format!("day {day}"),
                MonthPattern::OnOrdinal { ordinal, day } => {
                    format!("the {} {}", ordinal_name(*ordinal), selector_name(*day))
                }
            };
            let mut text = match rule.interval {
                0 | 1 => format!("Occurs on {subject} of every month"),
                n => format!("Occurs on {subject} of every {n} months"),
            };
            append_time_or_slots(&mut text, &rule.slots, schedule);
            text
        }
    };

    if !matches!(schedule.recurrence, Recurrence::Once) {
        sentence.push_str(&format!(", starting {}", schedule.start.format("%Y-%m-%d")));
        if let Some(end) = schedule.end {
            sentence.push_str(&format!(", until {}", end.format("%Y-%m-%d")));
        }
    }
    sentence.push('.');
    sentence
}

/// "every 15 minutes between 09:00 and 17:00", or without the window part.
fn every_fragment(every: &EveryRule) -> String {
    let mut text = format!(
        "every {}",
        unit_amount(every.period.count, every.period.unit)
    );
    if let Some(window) = &every.window {
        text.push_str(&format!(
            " between {} and {}",
            window.start.format("%H:%M"),
            window.end.format("%H:%M")
        ));
    }
    text
}

fn append_time_or_slots(text: &mut String, slots: &Option<EveryRule>, schedule: &Schedule) {
    match slots {
        Some(every) => {
            text.push_str(", ");
            text.push_str(&every_fragment(every));
        }
        None => {
            text.push_str(&format!(" at {}", schedule.start.time().format("%H:%M")));
        }
    }
}

fn unit_amount(count: u32, unit: PeriodUnit) -> String {
    let name = match unit {
        PeriodUnit::Minutes => "minute",
        PeriodUnit::Hours => "hour",
        PeriodUnit::Days => "day",
    };
    if count == 1 {
        format!("{count} {name}")
    } else {
        format!("{count} {name}s")
    }
}

fn ordinal_name(ordinal: crate::schedule::Ordinal) -> &'static str {
    use crate::schedule::Ordinal::*;
    match ordinal {
        First => "first",
        Second => "second",
        Third => "third",
        Fourth => "fourth",
        Last => "last",
    }
}

fn selector_name(selector: DaySelector) -> String {
    match selector {
        DaySelector::Day => "day".to_string(),
        DaySelector::Weekday => "weekday".to_string(),
        DaySelector::WeekendDay => "weekend day".to_string(),
        DaySelector::On(weekday) => weekday_name(weekday).to_string(),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn weekday_list(weekdays: &[Weekday]) -> String {
    let names: Vec<&str> = weekdays.iter().copied().map(weekday_name).collect();
    match names.as_slice() {
        [] => "no days".to_string(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{MonthlyRule, Ordinal, Period, TimeWindow, WeeklyRule};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

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
    fn test_describe_once() {
        let schedule = Schedule {
            target: Some(at(2025, 12, 25, 8, 0)),
            ..base(Recurrence::Once)
        };
        assert_eq!(describe(&schedule), "Occurs once at 2025-12-25 08:00.");
    }

    #[test]
    fn test_describe_daily_once_at() {
        let schedule = base(Recurrence::Daily(DailyRule::OnceAt(
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        )));
        assert_eq!(
            describe(&schedule),
            "Occurs every day at 14:30, starting 2025-10-01, until 2025-11-30."
        );
    }

    #[test]
    fn test_describe_daily_windowed() {
        let schedule = base(Recurrence::Daily(DailyRule::Every(EveryRule {
            period: Period::new(15, PeriodUnit::Minutes),
            window: Some(TimeWindow {
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            }),
        })));
        assert_eq!(
            describe(&schedule),
            "Occurs every 15 minutes between 09:00 and 17:00, starting 2025-10-01, until 2025-11-30."
        );
    }

    #[test]
    fn test_describe_weekly() {
        let schedule = base(Recurrence::Weekly(WeeklyRule {
            interval: 2,
            weekdays: vec![Weekday::Mon, Weekday::Thu],
            slots: None,
        }));
        assert_eq!(
            describe(&schedule),
            "Occurs every 2 weeks on Monday and Thursday at 09:00, starting 2025-10-01, until 2025-11-30."
        );
    }

    #[test]
    fn test_describe_monthly_ordinal() {
        let schedule = Schedule {
            end: None,
            ..base(Recurrence::Monthly(MonthlyRule {
                pattern: MonthPattern::OnOrdinal {
                    ordinal: Ordinal::First,
                    day: DaySelector::On(Weekday::Mon),
                },
                interval: 1,
                slots: None,
            }))
        };
        assert_eq!(
            describe(&schedule),
            "Occurs on the first Monday of every month at 09:00, starting 2025-10-01."
        );
    }

    #[test]
    fn test_describe_monthly_day_with_slots() {
        let schedule = base(Recurrence::Monthly(MonthlyRule {
            pattern: MonthPattern::OnDay(15),
            interval: 3,
            slots: Some(EveryRule {
                period: Period::new(1, PeriodUnit::Hours),
                window: Some(TimeWindow {
                    start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                }),
            }),
        }));
        assert_eq!(
            describe(&schedule),
            "Occurs on day 15 of every 3 months, every 1 hour between 09:00 and 12:00, starting 2025-10-01, until 2025-11-30."
        );
    }
}
