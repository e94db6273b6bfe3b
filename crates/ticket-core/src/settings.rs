use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Ticket statistics by destination and departure period
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ticket-report",
    about = "Ticket statistics by destination and departure period",
    version
)]
pub struct Settings {
    /// Ticket CSV file (id,name,email,destination,HH:MM,price)
    #[arg(long, default_value = "./desafio-go-bases/tickets.csv")]
    pub file: PathBuf,

    /// Destination to count and compute the share for (exact match)
    #[arg(long, default_value = "China")]
    pub destination: String,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`load`](Self::load) but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// Whether the report should be printed as JSON.
    pub fn json_output(&self) -> bool {
        self.format == "json"
    }

    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
