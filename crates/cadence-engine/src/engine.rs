//! The recurrence engine facade.
//!
//! Dispatches a [`Schedule`] to its granularity enumerator and exposes the
//! two public queries: the next occurrence and the bounded list of future
//! occurrences. Every call is a pure function of the schedule, the zone,
//! and the limits; results are ascending and duplicate-free, and the two
//! queries are complementary — the future list never repeats the next
//! occurrence.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, warn};

use crate::next;
use crate::schedule::{Recurrence, Schedule};
use crate::{daily, monthly, weekly};

/// Iteration ceiling for one evaluation call.
///
/// Counts stepping-loop iterations — calendar days, window slots, week
/// frames, month visits — not produced occurrences. The cap is a hard
/// termination guarantee for degenerate configurations (tiny periods over
/// huge ranges); hitting it truncates the result and raises the
/// `truncated` flag instead of failing the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_steps: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { max_steps: 4096 }
    }
}

/// Mutable step counter threaded through every enumeration loop.
#[derive(Debug)]
pub(crate) struct StepBudget {
    remaining: u32,
    hit_cap: bool,
}

impl StepBudget {
    pub(crate) fn new(max_steps: u32) -> Self {
        StepBudget {
            remaining: max_steps,
            hit_cap: false,
        }
    }

    /// Spends one step; `false` once the cap is hit.
    pub(crate) fn step(&mut self) -> bool {
        if self.remaining == 0 {
            self.hit_cap = true;
            false
        } else {
            self.remaining -= 1;
            true
        }
    }

    pub(crate) fn exhausted(&self) -> bool {
        self.hit_cap
    }
}

/// An ordered, duplicate-free list of future occurrences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enumeration {
    pub occurrences: Vec<DateTime<Tz>>,
    /// True when the step cap ended enumeration before the effective end.
    pub truncated: bool,
}

impl Enumeration {
    pub(crate) fn empty() -> Self {
        Enumeration {
            occurrences: Vec::new(),
            truncated: false,
        }
    }

    /// Orders and deduplicates raw enumerator output and records whether
    /// the budget ran dry.
    pub(crate) fn from_raw(mut occurrences: Vec<DateTime<Tz>>, budget: &StepBudget) -> Self {
        occurrences.sort();
        occurrences.dedup();
        Enumeration {
            occurrences,
            truncated: budget.exhausted(),
        }
    }
}

/// The paired answer for one schedule: the next occurrence plus the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub next: Option<DateTime<Tz>>,
    /// Future occurrences, ascending, never containing `next`.
    pub upcoming: Vec<DateTime<Tz>>,
    pub truncated: bool,
}

/// The next occurrence of `schedule` in `tz`, with default limits.
///
/// One-shot schedules answer with their target instant reinterpreted in
/// `tz`; recurring schedules answer with the earliest future candidate.
/// `None` only when a one-shot schedule has no target or the sole candidate
/// falls into a DST gap.
pub fn next_occurrence(schedule: &Schedule, tz: Tz) -> Option<DateTime<Tz>> {
    next_occurrence_with_limits(schedule, tz, &Limits::default())
}

pub fn next_occurrence_with_limits(
    schedule: &Schedule,
    tz: Tz,
    limits: &Limits,
) -> Option<DateTime<Tz>> {
    next::select(schedule, tz, limits)
}

/// The future occurrences of `schedule` in `tz`, with default limits.
///
/// One-shot schedules yield an empty list, as do schedules whose range
/// sits at the representable date boundary — never an error.
pub fn future_occurrences(schedule: &Schedule, tz: Tz) -> Enumeration {
    future_occurrences_with_limits(schedule, tz, &Limits::default())
}

pub fn future_occurrences_with_limits(
    schedule: &Schedule,
    tz: Tz,
    limits: &Limits,
) -> Enumeration {
    let mut enumeration = enumerate(schedule, tz, limits);
    // The head of a daily or monthly enumeration is the "next occurrence"
    // answer; the future list carries the rest. Weekly enumeration already
    // excludes everything up to the next eligible instant.
    if matches!(
        schedule.recurrence,
        Recurrence::Daily(_) | Recurrence::Monthly(_)
    ) && !enumeration.occurrences.is_empty()
    {
        enumeration.occurrences.remove(0);
    }
    enumeration
}

/// Both queries answered together.
///
/// # Examples
///
/// ```
/// use cadence_engine::{evaluate, DailyRule, EveryRule, Period, PeriodUnit, Recurrence, Schedule};
/// use chrono::NaiveDate;
///
/// let schedule = Schedule {
///     recurrence: Recurrence::Daily(DailyRule::Every(EveryRule {
///         period: Period::new(1, PeriodUnit::Days),
///         window: None,
///     })),
///     start: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
///     end: Some(NaiveDate::from_ymd_opt(2025, 10, 5).unwrap().and_hms_opt(23, 59, 0).unwrap()),
///     reference: None,
///     target: None,
/// };
///
/// let result = evaluate(&schedule, chrono_tz::UTC);
/// let next = result.next.unwrap();
/// assert_eq!(next.to_rfc3339(), "2025-10-02T09:00:00+00:00");
/// assert_eq!(result.upcoming.len(), 3); // Oct 3, 4, 5
/// assert!(!result.upcoming.contains(&next));
/// ```
pub fn evaluate(schedule: &Schedule, tz: Tz) -> Evaluation {
    evaluate_with_limits(schedule, tz, &Limits::default())
}

pub fn evaluate_with_limits(schedule: &Schedule, tz: Tz, limits: &Limits) -> Evaluation {
    let next = next::select(schedule, tz, limits);
    let enumeration = future_occurrences_with_limits(schedule, tz, limits);
    Evaluation {
        next,
        upcoming: enumeration.occurrences,
        truncated: enumeration.truncated,
    }
}

fn enumerate(schedule: &Schedule, tz: Tz, limits: &Limits) -> Enumeration {
    let enumeration = match &schedule.recurrence {
        Recurrence::Once => Enumeration::empty(),
        Recurrence::Daily(rule) => daily::occurrences(schedule, rule, tz, limits),
        Recurrence::Weekly(rule) => weekly::occurrences(schedule, rule, tz, limits),
        Recurrence::Monthly(rule) => monthly::occurrences(schedule, rule, tz, limits),
    };
    debug!(tz = %tz, count = enumeration.occurrences.len(), "expanded schedule");
    if enumeration.truncated {
        warn!(max_steps = limits.max_steps, "enumeration truncated by step cap");
    }
    enumeration
}
