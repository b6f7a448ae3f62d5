//! Weekly occurrence enumeration.
//!
//! Weeks are frames of seven days starting at the anchor's date, stepped by
//! `7 x interval` days. Within each frame every configured weekday resolves
//! to the first matching date at or after the frame start. Candidates at or
//! before the next eligible instant belong to the "next occurrence" query
//! and are kept out of the future list.

use chrono::{DateTime, Datelike, NaiveDateTime, Weekday};
use chrono_tz::Tz;

use crate::anchor;
use crate::daily;
use crate::datemath;
use crate::engine::{Enumeration, Limits, StepBudget};
use crate::schedule::{EveryRule, Schedule, WeeklyRule};
use crate::zoned;

/// All weekly occurrences of `schedule` after the next eligible instant,
/// ascending and duplicate-free.
pub fn occurrences(schedule: &Schedule, rule: &WeeklyRule, tz: Tz, limits: &Limits) -> Enumeration {
    let mut budget = StepBudget::new(limits.max_steps);
    let raw = collect(schedule, rule, tz, &mut budget);
    Enumeration::from_raw(raw, &budget)
}

fn collect(
    schedule: &Schedule,
    rule: &WeeklyRule,
    tz: Tz,
    budget: &mut StepBudget,
) -> Vec<DateTime<Tz>> {
    let anchor = anchor::resolve(schedule);
    let end = anchor::effective_end(schedule);
    let eligible = next_eligible(anchor, &rule.weekdays);
    let frame_step = 7 * i64::from(rule.interval.max(1));
    let mut out = Vec::new();

    let mut frame_start = anchor.date();
    while frame_start <= end.date() {
        if !budget.step() {
            break;
        }
        for weekday in &rule.weekdays {
            let offset = days_until(frame_start.weekday(), *weekday);
            let day = match datemath::try_add_days(frame_start, offset) {
                Some(day) => day,
                None => continue,
            };
            if day > end.date() {
                continue;
            }
            match &rule.slots {
                Some(EveryRule {
                    period,
                    window: Some(window),
                }) => {
                    daily::expand_day_slots(
                        day,
                        window,
                        period.as_duration(),
                        tz,
                        Some(eligible),
                        (schedule.start, end),
                        budget,
                        &mut out,
                    );
                    if budget.exhausted() {
                        return out;
                    }
                }
                _ => {
                    let local = day.and_time(anchor.time());
                    if local > eligible && local >= schedule.start && local <= end {
                        out.extend(zoned::instants(local, tz));
                    }
                }
            }
        }
        frame_start = match datemath::try_add_days(frame_start, frame_step) {
            Some(next) => next,
            None => break,
        };
    }

    out
}

/// The earliest weekday candidate at or after the anchor, carrying the
/// anchor's time of day. An empty weekday set yields the anchor itself
/// rather than an error.
pub fn next_eligible(anchor: NaiveDateTime, weekdays: &[Weekday]) -> NaiveDateTime {
    if weekdays.is_empty() {
        return anchor;
    }
    let mut date = anchor.date();
    for _ in 0..7 {
        if weekdays.contains(&date.weekday()) {
            return date.and_time(anchor.time());
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => return anchor,
        };
    }
    anchor
}

/// Days forward (0..=6) from `from` to the next `to` weekday.
fn days_until(from: Weekday, to: Weekday) -> i64 {
    i64::from((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7)
}
