use thiserror::Error;

/// Errors raised while streaming and reshaping JIRA issues.
///
/// Everything here is fatal for the stream that raised it: the iterator
/// yields the error once and then fuses. Schema drift is deliberately not an
/// error; it is reported through [`DriftSink`](crate::stream::DriftSink) and
/// the stream keeps going.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Invalid setup detected before any network activity.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The server answered a page request with a non-success status.
    #[error("failed to fetch issues from JIRA (status {status}){}; response: {body}", jql_hint(.status))]
    Transport { status: u16, body: String },

    /// The server returned more rows than were requested for one page.
    #[error("server returned more than {page_size} rows for the page starting at offset {start_at}")]
    ContractViolation { page_size: usize, start_at: usize },

    /// A row ran out of values before its header was satisfied.
    ///
    /// The row and header are out of sync, so any further decoding against
    /// this page would be unreliable.
    #[error("row is missing values for column {column:?}: expected {expected}, found {got}")]
    DecodeAnomaly {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed CSV payload: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn jql_hint(status: &u16) -> &'static str {
    if *status == 400 {
        " - perhaps the JQL query is invalid?"
    } else {
        ""
    }
}
