//! Error types for schedule validation.
//!
//! Enumeration itself never fails: boundary conditions (date overflow, DST
//! gaps, months lacking a given day) shrink the result set instead. These
//! errors belong to the validation layer and the time-zone parser.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
