//! Queries over a parsed ticket sequence.
//!
//! Every query fails with [`TicketError::NoData`] on an empty slice. A
//! destination with zero matches is reported as
//! [`TicketError::DestinationNotFound`], never as a zero count.

use ticket_core::error::{Result, TicketError};
use ticket_core::models::{PeriodCounts, Ticket};
use ticket_core::periods::{periods_for, PERIOD_WINDOWS};
use tracing::debug;

/// Count tickets whose destination equals `destination` exactly.
pub fn count_by_destination(tickets: &[Ticket], destination: &str) -> Result<usize> {
    if tickets.is_empty() {
        return Err(TicketError::NoData);
    }

    let count = tickets
        .iter()
        .filter(|t| t.destination() == destination)
        .count();

    if count == 0 {
        return Err(TicketError::DestinationNotFound(destination.to_string()));
    }

    Ok(count)
}

/// Count departures per period.
///
/// All four periods are present in the result. A ticket adds one to every
/// period whose window contains its departure time, so it may land in none,
/// one or several.
pub fn count_by_period(tickets: &[Ticket]) -> Result<PeriodCounts> {
    if tickets.is_empty() {
        return Err(TicketError::NoData);
    }

    let mut counts: PeriodCounts = PERIOD_WINDOWS.iter().map(|w| (w.period, 0)).collect();

    for ticket in tickets {
        for period in periods_for(ticket.departure_time()) {
            *counts.entry(period).or_insert(0) += 1;
        }
    }

    debug!("Period counts over {} tickets: {:?}", tickets.len(), counts);

    Ok(counts)
}

/// Fraction of all tickets that go to `destination`, in `[0, 1]`.
///
/// Errors from [`count_by_destination`] are returned unchanged.
pub fn average_destination(tickets: &[Ticket], destination: &str) -> Result<f64> {
    let matching = count_by_destination(tickets, destination)?;
    Ok(matching as f64 / tickets.len() as f64)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use ticket_core::models::Period;

    fn make_ticket(id: u64, destination: &str, hh_mm: (u32, u32)) -> Ticket {
        Ticket::new(
            id,
            format!("Holder {id}"),
            format!("holder{id}@example.com"),
            destination,
            NaiveTime::from_hms_opt(hh_mm.0, hh_mm.1, 0).unwrap(),
            100 * id as i64,
        )
    }

    fn sample() -> Vec<Ticket> {
        vec![
            make_ticket(1, "Finland", (17, 11)),
            make_ticket(2, "China", (20, 19)),
            make_ticket(3, "China", (18, 11)),
            make_ticket(4, "Brazil", (9, 0)),
        ]
    }

    // ── count_by_destination ──────────────────────────────────────────────────

    #[test]
    fn test_count_by_destination_empty() {
        let err = count_by_destination(&[], "China").unwrap_err();
        assert!(matches!(err, TicketError::NoData));
    }

    #[test]
    fn test_count_by_destination_matches() {
        let tickets = sample();
        assert_eq!(count_by_destination(&tickets, "China").unwrap(), 2);
        assert_eq!(count_by_destination(&tickets, "Finland").unwrap(), 1);
    }

    #[test]
    fn test_count_by_destination_not_found() {
        let err = count_by_destination(&sample(), "The Moon").unwrap_err();
        assert!(matches!(err, TicketError::DestinationNotFound(d) if d == "The Moon"));
    }

    #[test]
    fn test_count_by_destination_is_exact_match() {
        let tickets = sample();
        assert!(count_by_destination(&tickets, "china").is_err());
        assert!(count_by_destination(&tickets, "China ").is_err());
        assert!(count_by_destination(&tickets, "").is_err());
    }

    // ── count_by_period ───────────────────────────────────────────────────────

    #[test]
    fn test_count_by_period_empty() {
        let err = count_by_period(&[]).unwrap_err();
        assert!(matches!(err, TicketError::NoData));
    }

    #[test]
    fn test_count_by_period_scenario() {
        let tickets = vec![
            make_ticket(1, "A", (9, 0)),
            make_ticket(2, "A", (21, 30)),
            make_ticket(3, "A", (22, 30)),
            make_ticket(4, "A", (3, 0)),
        ];

        let counts = count_by_period(&tickets).unwrap();

        assert_eq!(counts[&Period::Morning], 1);
        assert_eq!(counts[&Period::Evening], 0);
        assert_eq!(counts[&Period::Night], 2);
        assert_eq!(counts[&Period::EarlyMorning], 1);
    }

    #[test]
    fn test_count_by_period_all_keys_present() {
        let counts = count_by_period(&[make_ticket(1, "A", (15, 0))]).unwrap();

        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&Period::Evening], 1);
        assert_eq!(counts[&Period::Morning], 0);
        assert_eq!(counts[&Period::Night], 0);
        assert_eq!(counts[&Period::EarlyMorning], 0);
    }

    #[test]
    fn test_count_by_period_boundaries() {
        let tickets = vec![
            make_ticket(1, "A", (0, 0)),
            make_ticket(2, "A", (7, 0)),
            make_ticket(3, "A", (13, 0)),
            make_ticket(4, "A", (20, 0)),
            make_ticket(5, "A", (23, 59)),
        ];

        let counts = count_by_period(&tickets).unwrap();

        // 00:00 lands nowhere; 23:59 is still inside night.
        assert_eq!(counts[&Period::Morning], 1);
        assert_eq!(counts[&Period::Evening], 1);
        assert_eq!(counts[&Period::Night], 2);
        assert_eq!(counts[&Period::EarlyMorning], 0);
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    // ── average_destination ───────────────────────────────────────────────────

    #[test]
    fn test_average_destination_half() {
        assert_eq!(average_destination(&sample(), "China").unwrap(), 0.5);
    }

    #[test]
    fn test_average_destination_quarter() {
        assert_eq!(average_destination(&sample(), "Brazil").unwrap(), 0.25);
    }

    #[test]
    fn test_average_destination_all() {
        let tickets = vec![make_ticket(1, "China", (9, 0))];
        assert_eq!(average_destination(&tickets, "China").unwrap(), 1.0);
    }

    #[test]
    fn test_average_destination_empty() {
        let result = average_destination(&[], "China");
        assert!(matches!(result, Err(TicketError::NoData)));
        assert_eq!(result.unwrap_or(0.0), 0.0);
    }

    #[test]
    fn test_average_destination_not_found_propagates() {
        let result = average_destination(&sample(), "The Moon");
        assert!(matches!(result, Err(TicketError::DestinationNotFound(_))));
        assert_eq!(result.unwrap_or(0.0), 0.0);
    }
}
