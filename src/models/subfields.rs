use serde::{Deserialize, Serialize};

/// One work-log entry unpacked from the `comment;started;author;timeSpentSeconds`
/// encoding.
///
/// Source strings may carry fewer than four segments; the missing trailing
/// fields are omitted from serialization entirely rather than written as
/// null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "timeSpentSeconds", skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<String>,
}

/// One comment entry unpacked from the `datetime;author;comment` encoding.
///
/// The comment text keeps any semicolons of its own, including the trailing
/// empty segments JIRA's inconsistent escaping produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
