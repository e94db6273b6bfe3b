//! Core types shared by the ticket crates: the [`Ticket`](models::Ticket)
//! record, the error taxonomy, time-of-day windows and report formatting.

pub mod error;
pub mod formatting;
pub mod models;
pub mod periods;
pub mod settings;
pub mod time_utils;

pub use error::{Result, TicketError};
