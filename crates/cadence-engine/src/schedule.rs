//! The recurrence configuration data model.
//!
//! Every mutually-exclusive sub-mode is a closed sum type, so states like
//! "once-at and every-N both selected" cannot be constructed. The remaining
//! field-level constraints (positivity, ranges, non-empty weekday sets) are
//! checked by [`crate::validate::validate`] before a schedule reaches the
//! engine.
//!
//! All configuration instants are wall-clock (`Naive*`) values; the target
//! time zone is an explicit `chrono_tz::Tz` parameter on every engine call
//! rather than part of the configuration.

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One recurrence configuration, immutable per call.
///
/// `start` and the optional `end` bound the schedule; `reference` is the
/// caller-provided "now"; `target` is an explicit one-shot or
/// window-anchoring override. See [`crate::anchor`] for how the three
/// combine into the enumeration anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub recurrence: Recurrence,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub reference: Option<NaiveDateTime>,
    pub target: Option<NaiveDateTime>,
}

/// Periodicity and granularity in one sum: a schedule either fires once at
/// its target instant or repeats at one of three granularities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recurrence {
    Once,
    Daily(DailyRule),
    Weekly(WeeklyRule),
    Monthly(MonthlyRule),
}

/// Daily sub-mode: a single time of day, or a repeating period with an
/// optional intra-day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DailyRule {
    OnceAt(NaiveTime),
    Every(EveryRule),
}

/// "Occurs every N units", optionally confined to a window of the day.
///
/// Without a window the period is the step between whole occurrences; with
/// one, each day expands into slots from `window.start` to `window.end`
/// (inclusive) stepping by `period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EveryRule {
    pub period: Period,
    pub window: Option<TimeWindow>,
}

/// A duration as the configuration UI captures it: count plus unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub count: u32,
    pub unit: PeriodUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    Minutes,
    Hours,
    Days,
}

impl Period {
    pub fn new(count: u32, unit: PeriodUnit) -> Self {
        Period { count, unit }
    }

    pub fn as_duration(&self) -> chrono::Duration {
        match self.unit {
            PeriodUnit::Minutes => chrono::Duration::minutes(i64::from(self.count)),
            PeriodUnit::Hours => chrono::Duration::hours(i64::from(self.count)),
            PeriodUnit::Days => chrono::Duration::days(i64::from(self.count)),
        }
    }
}

/// An inclusive window of the day, e.g. 09:00..=17:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Weekly sub-mode: every `interval` weeks on the given weekdays, each
/// candidate day optionally expanded through a daily slot window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRule {
    pub interval: u32,
    pub weekdays: Vec<Weekday>,
    pub slots: Option<EveryRule>,
}

/// Monthly sub-mode: every `interval` months, on a fixed day of month or an
/// ordinal selection, each candidate day optionally expanded through a daily
/// slot window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRule {
    pub pattern: MonthPattern,
    pub interval: u32,
    pub slots: Option<EveryRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthPattern {
    /// A fixed day of month (1..=31). Months without that day produce no
    /// occurrence; there is no clamping to month end.
    OnDay(u32),
    /// "The first Monday", "the last weekend day", and so on.
    OnOrdinal { ordinal: Ordinal, day: DaySelector },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Which days of a month are eligible for ordinal selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySelector {
    /// Every calendar day.
    Day,
    /// Monday through Friday.
    Weekday,
    /// Saturday and Sunday.
    WeekendDay,
    /// One specific weekday.
    On(Weekday),
}

impl DaySelector {
    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DaySelector::Day => true,
            DaySelector::Weekday => !matches!(weekday, Weekday::Sat | Weekday::Sun),
            DaySelector::WeekendDay => matches!(weekday, Weekday::Sat | Weekday::Sun),
            DaySelector::On(target) => weekday == *target,
        }
    }
}
