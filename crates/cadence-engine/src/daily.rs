//! Daily occurrence enumeration.
//!
//! Two shapes: *simple* (step whole occurrences from the anchor by the
//! configured period) and *windowed* (expand each calendar day into slots
//! between the window bounds). The per-day slot generator is shared with
//! the weekly and monthly enumerators for their daily sub-windows.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::anchor;
use crate::datemath;
use crate::engine::{Enumeration, Limits, StepBudget};
use crate::schedule::{DailyRule, EveryRule, Schedule, TimeWindow};
use crate::zoned;

/// All daily occurrences of `schedule` within its effective range,
/// ascending and duplicate-free.
pub fn occurrences(schedule: &Schedule, rule: &DailyRule, tz: Tz, limits: &Limits) -> Enumeration {
    let mut budget = StepBudget::new(limits.max_steps);
    let raw = collect(schedule, rule, tz, &mut budget);
    Enumeration::from_raw(raw, &budget)
}

fn collect(
    schedule: &Schedule,
    rule: &DailyRule,
    tz: Tz,
    budget: &mut StepBudget,
) -> Vec<DateTime<Tz>> {
    let anchor = anchor::resolve(schedule);
    let end = anchor::effective_end(schedule);
    let mut out = Vec::new();

    match rule {
        DailyRule::Every(EveryRule {
            period,
            window: Some(window),
        }) => {
            let period = period.as_duration();
            let mut day = schedule.start.date().max(anchor.date());
            while day <= end.date() {
                expand_day_slots(
                    day,
                    window,
                    period,
                    tz,
                    Some(anchor),
                    (schedule.start, end),
                    budget,
                    &mut out,
                );
                if budget.exhausted() {
                    break;
                }
                day = match datemath::try_add_days(day, 1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
        DailyRule::Every(EveryRule {
            period,
            window: None,
        }) => {
            step_from_anchor(schedule, period.as_duration(), anchor, end, tz, budget, &mut out);
        }
        DailyRule::OnceAt(_) => {
            step_from_anchor(
                schedule,
                chrono::Duration::days(1),
                anchor,
                end,
                tz,
                budget,
                &mut out,
            );
        }
    }

    out
}

/// Simple mode: one candidate per period step, strictly after the anchor,
/// kept while inside `[start, end]`.
fn step_from_anchor(
    schedule: &Schedule,
    step: chrono::Duration,
    anchor: NaiveDateTime,
    end: NaiveDateTime,
    tz: Tz,
    budget: &mut StepBudget,
    out: &mut Vec<DateTime<Tz>>,
) {
    if step <= chrono::Duration::zero() {
        return;
    }
    let mut cursor = anchor;
    loop {
        if !budget.step() {
            return;
        }
        cursor = match cursor.checked_add_signed(step) {
            Some(next) => next,
            None => return,
        };
        if cursor > end {
            return;
        }
        if cursor >= schedule.start {
            out.extend(zoned::instants(cursor, tz));
        }
    }
}

/// Expands one calendar day into window slots.
///
/// Slots run from `window.start` to `window.end` inclusive, stepping by
/// `period`; each is classified in the zone (ambiguous times contribute two
/// occurrences, invalid times none) and kept when it lies inside the
/// inclusive `range` and, when an `after` bound is given, strictly after it.
/// Advancing past midnight ends the day.
#[allow(clippy::too_many_arguments)]
pub(crate) fn expand_day_slots(
    day: NaiveDate,
    window: &TimeWindow,
    period: chrono::Duration,
    tz: Tz,
    after: Option<NaiveDateTime>,
    range: (NaiveDateTime, NaiveDateTime),
    budget: &mut StepBudget,
    out: &mut Vec<DateTime<Tz>>,
) {
    if period <= chrono::Duration::zero() || window.start > window.end {
        return;
    }
    let mut slot = window.start;
    loop {
        if !budget.step() {
            return;
        }
        let local = day.and_time(slot);
        let after_ok = after.map_or(true, |bound| local > bound);
        if after_ok && local >= range.0 && local <= range.1 {
            out.extend(zoned::instants(local, tz));
        }
        let (next, wrapped) = slot.overflowing_add_signed(period);
        if wrapped != 0 || next <= slot || next > window.end {
            return;
        }
        slot = next;
    }
}
