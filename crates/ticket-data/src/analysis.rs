//! Report pipeline.
//!
//! Loads a ticket file and runs every query against it, returning a
//! [`TicketReport`] ready for printing or JSON output.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use ticket_core::error::{Result, TicketError};
use ticket_core::models::PeriodCounts;
use tracing::{debug, warn};

use crate::aggregator::{count_by_destination, count_by_period};
use crate::reader::extract;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// RFC 3339 timestamp when this report was generated.
    pub generated_at: String,
    /// Wall-clock seconds spent reading and parsing the file.
    pub load_time_seconds: f64,
}

/// The complete output of [`build_report`].
#[derive(Debug, Clone, Serialize)]
pub struct TicketReport {
    /// File the tickets were read from.
    pub source: PathBuf,
    /// Number of tickets parsed.
    pub total_tickets: usize,
    /// Destination that was queried.
    pub destination: String,
    /// Tickets to `destination`; `0` when none matched.
    pub destination_count: usize,
    /// Share of all tickets going to `destination`, in `[0, 1]`.
    pub destination_share: f64,
    /// Departures per period.
    pub period_counts: PeriodCounts,
    pub metadata: ReportMetadata,
}

impl TicketReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Load `path` and run all queries for `destination`.
///
/// A destination with no tickets is reported as a zero count and share rather
/// than an error. Any other failure aborts the report.
pub fn build_report(path: &Path, destination: &str) -> Result<TicketReport> {
    let load_start = std::time::Instant::now();
    let tickets = extract(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let (destination_count, destination_share) =
        match count_by_destination(&tickets, destination) {
            Ok(count) => (count, count as f64 / tickets.len() as f64),
            Err(TicketError::DestinationNotFound(d)) => {
                warn!("No tickets found for destination {:?}", d);
                (0, 0.0)
            }
            Err(e) => return Err(e),
        };

    let period_counts = count_by_period(&tickets)?;

    debug!(
        "Report for {}: {} tickets, {} to {:?}",
        path.display(),
        tickets.len(),
        destination_count,
        destination
    );

    Ok(TicketReport {
        source: path.to_path_buf(),
        total_tickets: tickets.len(),
        destination: destination.to_string(),
        destination_count,
        destination_share,
        period_counts,
        metadata: ReportMetadata {
            generated_at: Utc::now().to_rfc3339(),
            load_time_seconds: load_time,
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
