//! Mapping local wall-clock times onto the UTC timeline of a zone.
//!
//! A local time is *normal* (one valid offset), *ambiguous* (two valid
//! offsets, the DST fall-back hour) or *invalid* (no valid offset, the DST
//! spring-forward gap). Ambiguous times turn into two occurrences ordered by
//! offset descending — the pre-transition instant first, which is also
//! chronological order of the underlying instants. Invalid times turn into
//! nothing; a slot landing in the gap is dropped, not an error.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

/// How one local wall-clock time resolves in a zone.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalKind {
    Normal(DateTime<Tz>),
    /// Offset-descending pair: the pre-transition (larger-offset) instant
    /// comes first.
    Ambiguous(DateTime<Tz>, DateTime<Tz>),
    Invalid,
}

pub fn classify(local: NaiveDateTime, tz: Tz) -> LocalKind {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => LocalKind::Normal(dt),
        LocalResult::Ambiguous(a, b) => {
            if offset_seconds(&a) >= offset_seconds(&b) {
                LocalKind::Ambiguous(a, b)
            } else {
                LocalKind::Ambiguous(b, a)
            }
        }
        LocalResult::None => LocalKind::Invalid,
    }
}

/// The zero, one, or two instants a local time maps to, in chronological
/// order.
pub fn instants(local: NaiveDateTime, tz: Tz) -> impl Iterator<Item = DateTime<Tz>> {
    let (first, second) = match classify(local, tz) {
        LocalKind::Normal(dt) => (Some(dt), None),
        LocalKind::Ambiguous(a, b) => (Some(a), Some(b)),
        LocalKind::Invalid => (None, None),
    };
    first.into_iter().chain(second)
}

/// The earliest instant a local time maps to, if any.
pub fn first_instant(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    instants(local, tz).next()
}

pub(crate) fn offset_seconds(dt: &DateTime<Tz>) -> i32 {
    dt.offset().fix().local_minus_utc()
}
