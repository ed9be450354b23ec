use std::collections::BTreeSet;

/// Header of one CSV page, as returned by the server.
///
/// JIRA encodes one-to-many fields by repeating the column name, so the raw
/// header may contain duplicates. The repetition counts, kept in first-seen
/// column order, drive row decoding; the derived [`HeaderState`] drives the
/// schema-drift comparison between consecutive pages.
#[derive(Debug, Clone)]
pub struct PageHeader {
    columns: Vec<String>,
    counts: Vec<(String, usize)>,
}

impl PageHeader {
    pub fn new(columns: Vec<String>) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for name in &columns {
            match counts.iter_mut().find(|(seen, _)| seen == name) {
                Some((_, count)) => *count += 1,
                None => counts.push((name.clone(), 1)),
            }
        }
        Self { columns, counts }
    }

    /// Raw column names, duplicates included.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Occurrence count per distinct name, in first-seen column order.
    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    /// The shape of this header for drift comparison.
    pub fn state(&self) -> HeaderState {
        HeaderState {
            names: self.counts.iter().map(|(name, _)| name.clone()).collect(),
            singletons: self
                .counts
                .iter()
                .filter(|(_, count)| *count == 1)
                .map(|(name, _)| name.clone())
                .collect(),
        }
    }
}

/// Distinct and singleton column names of one page.
///
/// Two pages have the same schema exactly when both sets match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    /// Every distinct column name in the page.
    pub names: BTreeSet<String>,
    /// Names occurring exactly once in the page.
    pub singletons: BTreeSet<String>,
}
