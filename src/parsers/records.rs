use serde_json::Value;

use crate::error::ExportError;
use crate::models::Record;
use crate::parsers::subfields::{parse_comment, parse_work_log};

/// A field-rewriting function.
///
/// Receives the field's current value (absent fields arrive as `None`) and
/// returns the replacement.
pub type FieldParser = Box<dyn Fn(Option<&Value>) -> Value>;

/// Ordered table mapping field names to parsers.
///
/// Entries are applied in declaration order, stable across calls. The
/// default table binds the two semicolon-packed encodings JIRA's export
/// carries; callers may extend it or start from [`empty`](Self::empty) with
/// their own entries.
pub struct ParserTable {
    entries: Vec<(String, FieldParser)>,
}

impl ParserTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or override the parser for `field`.
    ///
    /// A new field keeps its declaration position; overriding an existing
    /// field keeps the original position.
    pub fn with(
        mut self,
        field: impl Into<String>,
        parser: impl Fn(Option<&Value>) -> Value + 'static,
    ) -> Self {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = Box::new(parser),
            None => self.entries.push((field, Box::new(parser))),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ParserTable {
    /// The two field encodings the server embeds in its CSV export.
    fn default() -> Self {
        Self::empty()
            .with("Log Work", parse_work_log)
            .with("Comment", parse_comment)
    }
}

/// Rewrite selected fields of every record through the table's parsers.
///
/// For each record and each table entry, `record[field]` is replaced with
/// the parser's output. Absent fields are handed to the parser as `None` and
/// its result (typically null) is written back, introducing the key, so
/// every record leaves with a uniform shape. Errors from the underlying
/// stream pass through untouched.
pub fn parse_records<I>(
    records: I,
    table: ParserTable,
) -> impl Iterator<Item = Result<Record, ExportError>>
where
    I: IntoIterator<Item = Result<Record, ExportError>>,
{
    records.into_iter().map(move |record| {
        let mut record = record?;
        for (field, parser) in &table.entries {
            let parsed = parser(record.get(field));
            record.insert(field.clone(), parsed);
        }
        Ok(record)
    })
}
