mod bootstrap;

use anyhow::{Context, Result};
use ticket_core::formatting::{format_number, format_percentage, format_period_counts};
use ticket_core::settings::Settings;
use ticket_data::analysis::{build_report, TicketReport};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Ticket report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "File: {}, Destination: {:?}, Format: {}",
        settings.file.display(),
        settings.destination,
        settings.format
    );

    let report = build_report(&settings.file, &settings.destination)
        .with_context(|| format!("failed to build report for {}", settings.file.display()))?;

    if settings.json_output() {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", render_text(&report));
    }

    Ok(())
}

/// Plain-text rendering of a report.
fn render_text(report: &TicketReport) -> String {
    format!(
        "Tickets: {}\n\
         Destination {}: {} ({})\n\
         By period:\n{}",
        format_number(report.total_tickets as f64, 0),
        report.destination,
        format_number(report.destination_count as f64, 0),
        format_percentage(report.destination_share, 2),
        indent(&format_period_counts(&report.period_counts)),
    )
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn sample_report(dir: &Path, destination: &str) -> TicketReport {
        let path = dir.join("tickets.csv");
        std::fs::write(
            &path,
            "1,A,a@x.com,China,09:00,10\n\
             2,B,b@x.com,China,21:30,20\n\
             3,C,c@x.com,Finland,22:30,30\n\
             4,D,d@x.com,Brazil,03:00,40\n",
        )
        .unwrap();
        build_report(&path, destination).unwrap()
    }

    #[test]
    fn test_render_text() {
        let tmp = TempDir::new().expect("tempdir");
        let report = sample_report(tmp.path(), "China");

        assert_eq!(
            render_text(&report),
            "Tickets: 4\n\
             Destination China: 2 (50.00%)\n\
             By period:\n  \
             morning: 1\n  \
             evening: 0\n  \
             night: 2\n  \
             early_morning: 1"
        );
    }

    #[test]
    fn test_render_text_missing_destination() {
        let tmp = TempDir::new().expect("tempdir");
        let report = sample_report(tmp.path(), "The Moon");

        assert!(render_text(&report).contains("Destination The Moon: 0 (0.00%)"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb"), "  a\n  b");
        assert_eq!(indent(""), "");
    }
}
