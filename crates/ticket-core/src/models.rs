use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single issued ticket, parsed from one line of the ticket file.
///
/// Tickets are never mutated after construction; all fields are read through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: u64,
    name: String,
    email: String,
    destination: String,
    departure_time: NaiveTime,
    price: i64,
}

impl Ticket {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        destination: impl Into<String>,
        departure_time: NaiveTime,
        price: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            destination: destination.into(),
            departure_time,
            price,
        }
    }

    /// Ticket identifier as written in the file.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Name of the ticket holder.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Holder email, unvalidated.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Destination, compared by exact string equality.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Time of day the flight departs.
    pub fn departure_time(&self) -> NaiveTime {
        self.departure_time
    }

    /// Ticket price with no currency attached.
    pub fn price(&self) -> i64 {
        self.price
    }
}

/// A named time-of-day bucket used to group departures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Morning,
    Evening,
    Night,
    EarlyMorning,
}

impl Period {
    /// Stable key used in reports, e.g. `"early_morning"`.
    pub fn key(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Evening => "evening",
            Period::Night => "night",
            Period::EarlyMorning => "early_morning",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Ticket counts per period. Every period is present, counted or not.
pub type PeriodCounts = BTreeMap<Period, usize>;
