//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use jira_export::client::{CsvPage, FetchPage};
use jira_export::error::ExportError;
use jira_export::stream::{DriftSink, SchemaDrift};

/// One scripted response for [`ScriptedFetcher`].
pub enum ScriptedPage {
    /// A page with a header and the given data rows.
    Page {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A response whose body carried no header row at all.
    NoHeader,
    /// A transport failure.
    Fail { status: u16, body: String },
}

/// Builder for a scripted page of CSV data.
pub struct PageBuilder {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PageBuilder {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, values: &[&str]) -> Self {
        self.rows.push(values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Add `count` generated rows, one value per header column.
    pub fn generated_rows(mut self, count: usize) -> Self {
        for i in 0..count {
            self.rows
                .push(self.header.iter().map(|h| format!("{h}-{i}")).collect());
        }
        self
    }

    pub fn build(self) -> ScriptedPage {
        ScriptedPage::Page {
            header: self.header,
            rows: self.rows,
        }
    }
}

/// An in-memory page source that replays a fixed script of pages and records
/// the (page_size, start_at) pair of every request it receives.
pub struct ScriptedFetcher {
    script: RefCell<VecDeque<ScriptedPage>>,
    requests: Rc<RefCell<Vec<(usize, usize)>>>,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<ScriptedPage>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle onto the request log, usable after the fetcher moved into a
    /// stream.
    pub fn requests(&self) -> Rc<RefCell<Vec<(usize, usize)>>> {
        Rc::clone(&self.requests)
    }
}

impl FetchPage for ScriptedFetcher {
    fn fetch(
        &self,
        _jql: &str,
        page_size: usize,
        start_at: usize,
    ) -> Result<Option<CsvPage>, ExportError> {
        self.requests.borrow_mut().push((page_size, start_at));

        match self.script.borrow_mut().pop_front() {
            None | Some(ScriptedPage::NoHeader) => Ok(None),
            Some(ScriptedPage::Fail { status, body }) => {
                Err(ExportError::Transport { status, body })
            }
            Some(ScriptedPage::Page { header, rows }) => Ok(Some(CsvPage {
                header,
                rows: Box::new(rows.into_iter().map(Ok)),
            })),
        }
    }
}

/// A drift sink that records every event it receives.
#[derive(Clone, Default)]
pub struct RecordingDriftSink {
    events: Rc<RefCell<Vec<SchemaDrift>>>,
}

impl RecordingDriftSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle onto the recorded events, usable after the sink moved into a
    /// stream.
    pub fn events(&self) -> Rc<RefCell<Vec<SchemaDrift>>> {
        Rc::clone(&self.events)
    }
}

impl DriftSink for RecordingDriftSink {
    fn schema_drift(&mut self, drift: &SchemaDrift) {
        self.events.borrow_mut().push(drift.clone());
    }
}
