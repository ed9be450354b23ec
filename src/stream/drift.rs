use std::collections::BTreeSet;

use crate::models::HeaderState;

/// Difference between two consecutive pages' header shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDrift {
    /// Names present in the previous page but not the current one.
    pub removed: BTreeSet<String>,
    /// Names present in the current page but not the previous one.
    pub added: BTreeSet<String>,
    /// Names whose column changed between scalar and repeated, excluding
    /// names that were fully added or removed.
    pub changed_cardinality: BTreeSet<String>,
}

/// Receives schema-drift events as the stream crosses page boundaries.
///
/// The sink is injected into [`IssueStream`](crate::stream::IssueStream) so
/// the core carries no process-wide logging state; drift is a diagnostic,
/// never an error, and the stream continues after reporting it.
pub trait DriftSink {
    fn schema_drift(&mut self, drift: &SchemaDrift);
}

/// Default sink: one warning per drifted page transition.
#[derive(Debug, Default)]
pub struct LogDriftSink;

impl DriftSink for LogDriftSink {
    fn schema_drift(&mut self, drift: &SchemaDrift) {
        tracing::warn!(
            removed = ?drift.removed,
            added = ?drift.added,
            changed_cardinality = ?drift.changed_cardinality,
            "JIRA fields changed between pages"
        );
    }
}

/// Compare a page's header shape against the previous page's.
///
/// The first page has nothing to compare against and never drifts. Later
/// pages drift when either the distinct-name set or the singleton set
/// changed; at most one event is produced per transition.
pub fn detect_drift(previous: Option<&HeaderState>, current: &HeaderState) -> Option<SchemaDrift> {
    let previous = previous?;
    if previous == current {
        return None;
    }

    let removed: BTreeSet<String> = previous.names.difference(&current.names).cloned().collect();
    let added: BTreeSet<String> = current.names.difference(&previous.names).cloned().collect();
    let mut changed_cardinality: BTreeSet<String> = previous
        .singletons
        .symmetric_difference(&current.singletons)
        .cloned()
        .collect();
    for name in removed.iter().chain(added.iter()) {
        changed_cardinality.remove(name);
    }

    Some(SchemaDrift {
        removed,
        added,
        changed_cardinality,
    })
}
