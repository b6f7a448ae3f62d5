//! Field-level schedule validation.
//!
//! The data model already makes conflicting sub-modes unrepresentable, so
//! what remains is range and positivity checking plus time-zone resolution.
//! The engine assumes a schedule passed validation and does not re-check;
//! an invalid schedule that skips validation degrades to an empty result
//! rather than a panic.

use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};
use crate::schedule::{DailyRule, EveryRule, Recurrence, Schedule};

/// Checks every field-level invariant the engine relies on.
///
/// # Errors
///
/// - [`ScheduleError::InvalidRange`] — start after end, or a window whose
///   start is after its end.
/// - [`ScheduleError::MissingField`] — a one-shot schedule without a target,
///   an empty weekday set, or a weekly/monthly slot rule without a window.
/// - [`ScheduleError::InvalidField`] — zero periods or intervals, duplicate
///   weekdays, a day of month outside 1..=31.
pub fn validate(schedule: &Schedule) -> Result<()> {
    if let Some(end) = schedule.end {
        if schedule.start > end {
            return Err(ScheduleError::InvalidRange(format!(
                "start {} is after end {}",
                schedule.start, end
            )));
        }
    }

    match &schedule.recurrence {
        Recurrence::Once => {
            if schedule.target.is_none() {
                return Err(ScheduleError::MissingField(
                    "target instant for a one-shot schedule".to_string(),
                ));
            }
        }
        Recurrence::Daily(DailyRule::OnceAt(_)) => {}
        Recurrence::Daily(DailyRule::Every(every)) => {
            validate_every(every, false)?;
        }
        Recurrence::Weekly(rule) => {
            validate_interval(rule.interval, "weekly interval")?;
            if rule.weekdays.is_empty() {
                return Err(ScheduleError::MissingField("weekdays".to_string()));
            }
            let mut seen = [false; 7];
            for weekday in &rule.weekdays {
                let index = weekday.num_days_from_monday() as usize;
                if seen[index] {
                    return Err(ScheduleError::InvalidField(format!(
                        "duplicate weekday {weekday}"
                    )));
                }
                seen[index] = true;
            }
            if let Some(slots) = &rule.slots {
                validate_every(slots, true)?;
            }
        }
        Recurrence::Monthly(rule) => {
            validate_interval(rule.interval, "month interval")?;
            if let crate::schedule::MonthPattern::OnDay(day) = rule.pattern {
                if !(1..=31).contains(&day) {
                    return Err(ScheduleError::InvalidField(format!(
                        "day of month {day} outside 1..=31"
                    )));
                }
            }
            if let Some(slots) = &rule.slots {
                validate_every(slots, true)?;
            }
        }
    }

    Ok(())
}

/// Resolves the configuration's IANA time-zone id.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTimezone`] for anything the zone table
/// does not know.
pub fn parse_time_zone(id: &str) -> Result<Tz> {
    id.parse::<Tz>()
        .map_err(|_| ScheduleError::InvalidTimezone(format!("'{id}'")))
}

fn validate_every(every: &EveryRule, window_required: bool) -> Result<()> {
    if every.period.count == 0 {
        return Err(ScheduleError::InvalidField(
            "period must be positive".to_string(),
        ));
    }
    match &every.window {
        Some(window) => {
            if window.start > window.end {
                return Err(ScheduleError::InvalidRange(format!(
                    "window start {} is after window end {}",
                    window.start, window.end
                )));
            }
        }
        None => {
            if window_required {
                return Err(ScheduleError::MissingField("slot window".to_string()));
            }
        }
    }
    Ok(())
}

fn validate_interval(interval: u32, what: &str) -> Result<()> {
    if interval == 0 {
        return Err(ScheduleError::InvalidField(format!(
            "{what} must be positive"
        )));
    }
    Ok(())
}
