//! Paginated fetch-and-reshape pipeline.
//!
//! [`IssueStream`] drives a page fetcher across the server's offset cursor,
//! compares consecutive page headers for schema drift, and decodes every CSV
//! row into a [`Record`](crate::models::Record). The stream is lazy, strictly
//! ordered, and single-pass: no page is requested before the previous page's
//! rows have been consumed, and no read-ahead ever happens.

pub mod decode;
pub mod drift;
pub mod issues;

pub use decode::decode_row;
pub use drift::{DriftSink, LogDriftSink, SchemaDrift, detect_drift};
pub use issues::{IssueStream, IssueStreamBuilder};
