//! Ticket file loading.
//!
//! Reads a headerless, comma-separated ticket file in one go and converts each
//! line into a [`Ticket`]. Parsing is all-or-nothing: the first bad line fails
//! the whole call.

use std::path::Path;

use ticket_core::error::{Result, TicketError};
use ticket_core::models::Ticket;
use ticket_core::time_utils::parse_departure_time;
use tracing::debug;

/// Number of comma-separated fields on every ticket line.
pub const FIELD_COUNT: usize = 6;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every ticket from `path`, in file order.
///
/// A single trailing empty line (the final newline) is dropped; any other
/// blank line is treated as a record and fails to parse.
pub fn extract(path: &Path) -> Result<Vec<Ticket>> {
    let content = std::fs::read_to_string(path).map_err(|source| TicketError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if content.is_empty() {
        return Err(TicketError::EmptyInput(path.to_path_buf()));
    }

    let tickets = split_records(&content)
        .enumerate()
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} tickets from {}", tickets.len(), path.display());

    Ok(tickets)
}

/// Parse one ticket line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line_no: usize, line: &str) -> Result<Ticket> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(TicketError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let id = fields[0]
        .parse::<u64>()
        .map_err(|e| field_error(line_no, "id", fields[0], e))?;
    if id == 0 {
        return Err(field_error(line_no, "id", fields[0], "id must be positive"));
    }
    let departure_time = parse_departure_time(fields[4])
        .map_err(|e| field_error(line_no, "departure time", fields[4], e))?;
    let price = fields[5]
        .parse::<i64>()
        .map_err(|e| field_error(line_no, "price", fields[5], e))?;

    Ok(Ticket::new(
        id,
        fields[1],
        fields[2],
        fields[3],
        departure_time,
        price,
    ))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Split on `\n`, dropping only the empty piece after a final newline.
fn split_records(content: &str) -> impl Iterator<Item = &str> {
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n')
}

fn field_error(
    line: usize,
    field: &'static str,
    value: &str,
    reason: impl std::fmt::Display,
) -> TicketError {
    TicketError::FieldParse {
        line,
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
