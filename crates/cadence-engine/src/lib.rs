//! # cadence-engine
//!
//! Deterministic recurrence computation for scheduled tasks.
//!
//! Given a declarative schedule — daily, weekly, or monthly, with
//! granularity-specific sub-rules — the engine computes the next occurrence
//! relative to a reference instant and a bounded, time-zone-correct,
//! ordered list of future occurrences. All functions take explicit inputs
//! (no system clock access): the caller provides the reference "now" in the
//! schedule and the target zone on every call, keeping the engine pure and
//! testable.
//!
//! DST transitions follow the zone table: a wall-clock time that occurs
//! twice (fall back) produces two occurrences, pre-transition offset first;
//! a wall-clock time that never occurs (spring forward) produces none.
//! Iteration is bounded by the effective end plus a hard step cap, so even
//! degenerate configurations terminate with a truncated result rather than
//! spinning.
//!
//! ## Modules
//!
//! - [`schedule`] — the configuration data model (sum types per sub-mode)
//! - [`engine`] — the public queries: next occurrence, future occurrences
//! - [`validate`] — field-level validation and time-zone resolution
//! - [`describe`] — one-sentence human-readable descriptions
//! - [`anchor`] — reference-instant resolution and the effective end bound
//! - [`daily`], [`weekly`], [`monthly`] — per-granularity enumeration
//! - [`zoned`] — local wall-clock classification against the zone table
//! - [`datemath`] — overflow-checked calendar arithmetic
//! - [`error`] — error types

pub mod anchor;
pub mod daily;
pub mod datemath;
pub mod describe;
pub mod engine;
pub mod error;
pub mod monthly;
mod next;
pub mod schedule;
pub mod validate;
pub mod weekly;
pub mod zoned;

pub use describe::describe;
pub use engine::{
    evaluate, evaluate_with_limits, future_occurrences, future_occurrences_with_limits,
    next_occurrence, next_occurrence_with_limits, Enumeration, Evaluation, Limits,
};
pub use error::ScheduleError;
pub use schedule::{
    DailyRule, DaySelector, EveryRule, MonthPattern, MonthlyRule, Ordinal, Period, PeriodUnit,
    Recurrence, Schedule, TimeWindow, WeeklyRule,
};
pub use validate::{parse_time_zone, validate};
pub use zoned::LocalKind;
