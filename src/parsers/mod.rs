//! Field parsers for JIRA's badly escaped CSV payloads.
//!
//! JIRA packs one-to-many relationships into single CSV fields as
//! semicolon-separated strings and does not escape semicolons inside free
//! text. The functions in [`subfields`] unpack those encodings;
//! [`parse_records`] applies a configurable table of them across the record
//! stream so callers get a uniform shape back.

pub mod records;
pub mod subfields;

pub use records::{FieldParser, ParserTable, parse_records};
pub use subfields::{parse_comment, parse_work_log};
