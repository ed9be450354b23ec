//! Data models for the CSV export stream.
//!
//! This module defines the structures shared across the pipeline:
//!
//! - [`Record`] - one issue as a JSON-shaped field map
//! - [`PageHeader`] / [`HeaderState`] - one page's header and its shape,
//!   used for row decoding and drift comparison
//! - [`WorkLogEntry`] / [`CommentEntry`] - decoded semicolon-packed subfields

pub mod header;
pub mod record;
pub mod subfields;

pub use header::{HeaderState, PageHeader};
pub use record::Record;
pub use subfields::{CommentEntry, WorkLogEntry};
