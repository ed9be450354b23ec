use serde_json::Value;

use crate::models::{CommentEntry, WorkLogEntry};

/// Normalize a field value into the list of strings to parse.
///
/// Null, the empty string, and the empty list all mean "nothing here" and
/// map to `None`, which the callers turn into JSON null. A single string is
/// treated as a one-element list so the same logic covers both shapes.
fn input_strings(value: Option<&Value>) -> Option<Vec<&str>> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(vec![s.as_str()]),
        Value::Array(items) if !items.is_empty() => {
            Some(items.iter().filter_map(Value::as_str).collect())
        }
        _ => None,
    }
}

/// Decode JIRA's work-log encoding: `comment;started;author;timeSpentSeconds`.
///
/// The server does not escape semicolons inside the comment, so the split is
/// anchored on the right: the last three segments are the fixed fields and
/// everything before them stays in `comment`. Strings with fewer than four
/// segments keep only the keys they have values for; that tolerance matches
/// what the server actually emits and is not an error.
///
/// Returns a JSON array with one entry object per input string, in input
/// order, or null for absent/empty input.
pub fn parse_work_log(value: Option<&Value>) -> Value {
    let Some(strings) = input_strings(value) else {
        return Value::Null;
    };

    let entries: Vec<WorkLogEntry> = strings.into_iter().map(work_log_entry).collect();
    serde_json::to_value(entries).unwrap_or(Value::Null)
}

fn work_log_entry(raw: &str) -> WorkLogEntry {
    let mut segments: Vec<&str> = raw.rsplitn(4, ';').collect();
    segments.reverse();

    let mut fields = segments.into_iter();
    WorkLogEntry {
        comment: fields.next().map(str::to_owned),
        started: fields.next().map(str::to_owned),
        author: fields.next().map(str::to_owned),
        time_spent_seconds: fields.next().map(str::to_owned),
    }
}

/// Decode JIRA's comment encoding: `datetime;author;comment`.
///
/// The first two segments are fixed; the remainder stays joined as the
/// comment text, so semicolons inside it survive, including the trailing
/// empty segments produced by the server's inconsistent escaping.
///
/// Returns a JSON array with one entry object per input string, in input
/// order, or null for absent/empty input.
pub fn parse_comment(value: Option<&Value>) -> Value {
    let Some(strings) = input_strings(value) else {
        return Value::Null;
    };

    let entries: Vec<CommentEntry> = strings.into_iter().map(comment_entry).collect();
    serde_json::to_value(entries).unwrap_or(Value::Null)
}

fn comment_entry(raw: &str) -> CommentEntry {
    let mut fields = raw.splitn(3, ';');
    CommentEntry {
        datetime: fields.next().map(str::to_owned),
        author: fields.next().map(str::to_owned),
        comment: fields.next().map(str::to_owned),
    }
}
