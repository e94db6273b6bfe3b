use chrono::NaiveTime;
use thiserror::Error;

use crate::error::{Result, TicketError};

/// chrono format for departure times in the ticket file.
pub const DEPARTURE_FORMAT: &str = "%H:%M";

/// chrono format for window bounds and other second-precision clock times.
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Why a departure time failed to parse.
#[derive(Error, Debug)]
pub enum DepartureTimeError {
    /// Not a 1-2 digit hour, a colon and exactly two minute digits.
    #[error("expected H:MM or HH:MM")]
    Shape,

    /// Right shape, but out of range (e.g. `25:00`).
    #[error(transparent)]
    Range(#[from] chrono::ParseError),
}

/// Parse an `"HH:MM"` departure time.
///
/// The hour may have one or two digits; the minute must have exactly two.
/// Surrounding whitespace and seconds are rejected.
pub fn parse_departure_time(s: &str) -> std::result::Result<NaiveTime, DepartureTimeError> {
    if !has_departure_shape(s) {
        return Err(DepartureTimeError::Shape);
    }
    Ok(NaiveTime::parse_from_str(s, DEPARTURE_FORMAT)?)
}

fn has_departure_shape(s: &str) -> bool {
    let Some((hour, minute)) = s.split_once(':') else {
        return false;
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    (1..=2).contains(&hour.len()) && minute.len() == 2 && all_digits(hour) && all_digits(minute)
}

/// Parse an `"HH:MM:SS"` clock time.
pub fn parse_clock_time(s: &str) -> std::result::Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, CLOCK_FORMAT)
}

// ── Window check ──────────────────────────────────────────────────────────────

/// Returns `true` when `target` lies strictly between `lower` and `upper`.
///
/// Both bounds are exclusive, so a target equal to either bound is outside
/// the window. Fails with [`TicketError::InvalidRange`] when `lower` is after
/// `upper`; equal bounds are a valid, empty window.
pub fn is_within(target: NaiveTime, lower: NaiveTime, upper: NaiveTime) -> Result<bool> {
    if lower > upper {
        return Err(TicketError::InvalidRange { lower, upper });
    }
    Ok(lower < target && target < upper)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
