//! Elapsed-time computation and counter formatting.
//!
//! The counter arithmetic works on whole seconds: the millisecond
//! difference between two instants is floored to seconds and then
//! decomposed into days/hours/minutes/seconds.

use chrono::{DateTime, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Elapsed time decomposed for display.
///
/// `days` is unbounded; `hours`, `minutes` and `seconds` are the usual
/// clock remainders (0-23, 0-59, 0-59). All fields are zero when the
/// reference instant is not strictly in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedDuration {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Compute the elapsed time between a reference instant and now.
///
/// The difference is truncated to whole seconds (floor of the
/// millisecond difference / 1000). A reference at or after `now` yields
/// the all-zero duration rather than a negative one.
pub fn compute_elapsed(reference: DateTime<Utc>, now: DateTime<Utc>) -> ElapsedDuration {
    let diff_ms = now.signed_duration_since(reference).num_milliseconds();
    if diff_ms <= 0 {
        return ElapsedDuration::default();
    }

    let total_seconds = diff_ms / 1_000;
    ElapsedDuration {
        days: (total_seconds / SECS_PER_DAY) as u64,
        hours: ((total_seconds % SECS_PER_DAY) / SECS_PER_HOUR) as u32,
        minutes: ((total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE) as u32,
        seconds: (total_seconds % SECS_PER_MINUTE) as u32,
    }
}

/// Format an elapsed duration as the fixed-width counter string.
///
/// Pattern: `"{days}d {hours:02}h {minutes:02}m {seconds:02}s"` - days
/// unpadded (may exceed two digits), the rest zero-padded to width 2.
pub fn format_elapsed(elapsed: &ElapsedDuration) -> String {
    format!(
        "{}d {:02}h {:02}m {:02}s",
        elapsed.days, elapsed.hours, elapsed.minutes, elapsed.seconds
    )
}
