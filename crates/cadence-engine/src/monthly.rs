//! Monthly occurrence enumeration.
//!
//! Months are visited from the anchor's month to the effective end's month,
//! stepping by the configured interval. Each visited month contributes at
//! most one eligible date: a fixed day of month that must exist (day 31
//! skips February silently), or an ordinal pick from the month's
//! eligible-day set. Every month visit is charged against the step budget,
//! so degenerate interval/range combinations terminate.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::anchor;
use crate::daily;
use crate::datemath;
use crate::engine::{Enumeration, Limits, StepBudget};
use crate::schedule::{EveryRule, MonthPattern, MonthlyRule, Ordinal, Schedule};
use crate::zoned;

/// All monthly occurrences of `schedule` within its effective range,
/// ascending and duplicate-free.
pub fn occurrences(
    schedule: &Schedule,
    rule: &MonthlyRule,
    tz: Tz,
    limits: &Limits,
) -> Enumeration {
    let mut budget = StepBudget::new(limits.max_steps);
    let raw = collect(schedule, rule, tz, &mut budget);
    Enumeration::from_raw(raw, &budget)
}

fn collect(
    schedule: &Schedule,
    rule: &MonthlyRule,
    tz: Tz,
    budget: &mut StepBudget,
) -> Vec<DateTime<Tz>> {
    let anchor = anchor::resolve(schedule);
    let end = anchor::effective_end(schedule);
    let lower = schedule.start.max(anchor);
    let interval = rule.interval.max(1);
    let mut out = Vec::new();

    let (mut year, mut month) = (anchor.year(), anchor.month());
    while (year, month) <= (end.year(), end.month()) {
        if !budget.step() {
            break;
        }
        if let Some(day) = eligible_date(year, month, &rule.pattern) {
            emit_day(rule, day, tz, anchor, lower, end, budget, &mut out);
            if budget.exhausted() {
                break;
            }
        }
        (year, month) = match datemath::add_months(year, month, interval) {
            Some(next) => next,
            None => break,
        };
    }

    out
}

#[allow(clippy::too_many_arguments)]
fn emit_day(
    rule: &MonthlyRule,
    day: NaiveDate,
    tz: Tz,
    anchor: NaiveDateTime,
    lower: NaiveDateTime,
    end: NaiveDateTime,
    budget: &mut StepBudget,
    out: &mut Vec<DateTime<Tz>>,
) {
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
                None,
                (lower, end),
                budget,
                out,
            );
        }
        _ => {
            let local = day.and_time(anchor.time());
            if local >= lower && local <= end {
                out.extend(zoned::instants(local, tz));
            }
        }
    }
}

/// The month's eligible date under the configured pattern, if any.
///
/// `OnDay` requires the day to exist in the month. `OnOrdinal` indexes the
/// eligible-day set; an index past the end clamps to the last member, and
/// `Last` always takes the final member.
fn eligible_date(year: i32, month: u32, pattern: &MonthPattern) -> Option<NaiveDate> {
    match pattern {
        MonthPattern::OnDay(day) => NaiveDate::from_ymd_opt(year, month, *day),
        MonthPattern::OnOrdinal { ordinal, day } => {
            let eligible: Vec<NaiveDate> = month_days(year, month)
                .filter(|date| day.matches(date.weekday()))
                .collect();
            let index = match ordinal {
                Ordinal::First => 0,
                Ordinal::Second => 1,
                Ordinal::Third => 2,
                Ordinal::Fourth => 3,
                Ordinal::Last => eligible.len().saturating_sub(1),
            };
            eligible
                .get(index)
                .copied()
                .or_else(|| eligible.last().copied())
        }
    }
}

fn month_days(year: i32, month: u32) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    std::iter::successors(first, |date| {
        date.succ_opt().filter(|next| next.month() == date.month())
    })
}
