//! jira-export - Stream JIRA issues from the CSV export endpoint into JSON lines
//!
//! JIRA's CSV export encodes one-to-many fields by repeating header names and
//! pages its results behind an offset cursor. This library supports:
//!
//! - Fetching export pages sequentially over blocking HTTP
//! - Rebuilding each CSV row into a JSON-shaped [`Record`], collapsing
//!   repeated columns into arrays
//! - Reporting schema drift between consecutive pages through an injected
//!   diagnostic sink
//! - Decoding the semicolon-packed work-log and comment field encodings
//! - Writing the record sequence as newline-delimited JSON
//!
//! # Example
//!
//! ```no_run
//! use jira_export::{IssueStream, ParserTable, parse_records, write_jsonl};
//!
//! let stream = IssueStream::builder("https://jira.example.com", "ORDER BY created ASC")
//!     .token("secret")
//!     .build()?;
//! let mut out = Vec::new();
//! write_jsonl(parse_records(stream, ParserTable::default()), &mut out)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod stream;

// Re-export commonly used types
pub use client::{CsvPage, FetchPage, PageFetcher};
pub use error::ExportError;
pub use models::{CommentEntry, Record, WorkLogEntry};
pub use output::write_jsonl;
pub use parsers::{ParserTable, parse_comment, parse_records, parse_work_log};
pub use stream::{DriftSink, IssueStream, SchemaDrift, decode_row};
