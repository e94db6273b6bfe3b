//! Fixed time-of-day windows used to bucket departures.
//!
//! The bounds are exclusive on both sides and overlap by one second at the
//! morning/evening and evening/night seams. A departure at `13:00` therefore
//! counts as evening only, while `07:00` counts as morning only.

use chrono::NaiveTime;

use crate::error::Result;
use crate::models::Period;
use crate::time_utils::is_within;

/// An hour/minute/second triple usable in `const` context.
///
/// Fields are private so that every bound is a valid time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockBound {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockBound {
    /// `None` unless `hour < 24`, `minute < 60` and `second < 60`.
    pub const fn try_new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    /// Build a bound for the static table; an invalid literal fails const
    /// evaluation.
    const fn new(hour: u32, minute: u32, second: u32) -> Self {
        match Self::try_new(hour, minute, second) {
            Some(bound) => bound,
            None => panic!("clock bound out of range"),
        }
    }

    pub fn to_time(self) -> NaiveTime {
        // Always valid: `try_new` is the only way to build one.
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or_default()
    }
}

/// A period paired with its exclusive lower and upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub period: Period,
    pub lower: ClockBound,
    pub upper: ClockBound,
}

impl TimeWindow {
    pub const fn new(period: Period, lower: ClockBound, upper: ClockBound) -> Self {
        Self {
            period,
            lower,
            upper,
        }
    }

    /// Whether `target` falls strictly inside this window.
    pub fn contains(&self, target: NaiveTime) -> Result<bool> {
        is_within(target, self.lower.to_time(), self.upper.to_time())
    }
}

/// The four departure periods, in report order.
pub const PERIOD_WINDOWS: [TimeWindow; 4] = [
    TimeWindow::new(
        Period::Morning,
        ClockBound::new(6, 59, 59),
        ClockBound::new(13, 0, 0),
    ),
    TimeWindow::new(
        Period::Evening,
        ClockBound::new(12, 59, 59),
        ClockBound::new(20, 0, 0),
    ),
    TimeWindow::new(
        Period::Night,
        ClockBound::new(19, 59, 59),
        ClockBound::new(23, 59, 59),
    ),
    TimeWindow::new(
        Period::EarlyMorning,
        ClockBound::new(0, 0, 0),
        ClockBound::new(7, 0, 0),
    ),
];

/// Every period whose window contains `target`, in table order. May be empty.
///
/// Range errors are treated as "not contained"; the fixed windows are never
/// inverted.
pub fn periods_for(target: NaiveTime) -> Vec<Period> {
    PERIOD_WINDOWS
        .iter()
        .filter(|w| w.contains(target).unwrap_or(false))
        .map(|w| w.period)
        .collect()
}
