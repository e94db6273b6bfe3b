//! Data layer for ticket statistics.
//!
//! Responsible for reading ticket files, running the destination and period
//! queries, and assembling the combined report.

pub mod aggregator;
pub mod analysis;
pub mod reader;

pub use ticket_core as core;
