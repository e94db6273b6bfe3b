use std::path::PathBuf;

use chrono::NaiveTime;
use thiserror::Error;

/// All errors produced while loading and querying ticket data.
#[derive(Error, Debug)]
pub enum TicketError {
    /// The ticket file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ticket file exists but holds zero bytes.
    #[error("Empty CSV file: {0}")]
    EmptyInput(PathBuf),

    /// An aggregation was asked to run over an empty ticket sequence.
    #[error("No tickets found")]
    NoData,

    /// A line did not split into exactly six comma-separated fields.
    #[error("Line {line}: expected 6 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A field could not be converted to its target type.
    #[error("Line {line}: invalid {field} {value:?}: {reason}")]
    FieldParse {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A destination query matched zero tickets.
    #[error("No tickets found for destination {0}")]
    DestinationNotFound(String),

    /// A time window was given a lower bound after its upper bound.
    #[error("Start time {lower} must be before end time {upper}")]
    InvalidRange { lower: NaiveTime, upper: NaiveTime },
}

/// Convenience alias used throughout the ticket crates.
pub type Result<T> = std::result::Result<T, TicketError>;
