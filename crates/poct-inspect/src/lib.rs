//! # poct-inspect
//!
//! Conformance report for a file of POCT1-A messages.
//!
//! Reads a JSON array of messages, checks each one against the data
//! dictionary and writes one tab-separated row per message: control id,
//! message type, a short summary, the number of violations and the first
//! violation.

#![warn(missing_docs)]

mod config;
mod report;

pub use config::{InspectConfig, InspectError, InspectResult, DEFAULT_MESSAGES_PATH};
pub use report::{load_messages, load_messages_from_path, summarize, write_report, ReportRow};
