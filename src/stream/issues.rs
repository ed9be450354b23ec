use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::client::{CsvPage, DEFAULT_PAGE_SIZE, FetchPage, MAX_PAGE_SIZE, PageFetcher};
use crate::error::ExportError;
use crate::models::{HeaderState, PageHeader, Record};
use crate::stream::decode::decode_row;
use crate::stream::drift::{DriftSink, LogDriftSink, detect_drift};

/// Lazy, forward-only stream of issues from the server's CSV export.
///
/// Pages are fetched strictly in order: the next page is requested only once
/// every row of the current page has been pulled, and the cursor advances by
/// the number of rows the last page actually returned. A page returning
/// fewer rows than the configured page size ends the stream; a page
/// returning more is a [`ContractViolation`](ExportError::ContractViolation).
///
/// The stream is single-pass and not restartable; build a new one to
/// re-fetch from offset zero. Fatal errors are yielded once, after which the
/// iterator is fused.
pub struct IssueStream<F: FetchPage = PageFetcher> {
    fetcher: F,
    jql: String,
    page_size: usize,
    start_at: usize,
    prior_state: Option<HeaderState>,
    page: Option<PageInProgress>,
    finished: bool,
    drift_sink: Box<dyn DriftSink>,
}

struct PageInProgress {
    header: PageHeader,
    rows: Box<dyn Iterator<Item = Result<Vec<String>, ExportError>>>,
    yielded: usize,
}

enum PageStep {
    Record(Record),
    Fatal(ExportError),
    Exhausted(usize),
}

impl IssueStream {
    /// Start configuring a stream over the issues matching `jql`.
    ///
    /// An empty query matches every issue on the server.
    pub fn builder(base_url: impl Into<String>, jql: impl Into<String>) -> IssueStreamBuilder {
        IssueStreamBuilder {
            base_url: base_url.into(),
            jql: jql.into(),
            page_size: DEFAULT_PAGE_SIZE,
            token: None,
            session: None,
            drift_sink: Box::new(LogDriftSink),
        }
    }
}

impl<F: FetchPage> IssueStream<F> {
    /// Stream pages from an arbitrary source, bypassing the HTTP setup.
    pub fn over(fetcher: F, jql: impl Into<String>, page_size: usize) -> Self {
        Self {
            fetcher,
            jql: jql.into(),
            page_size,
            start_at: 0,
            prior_state: None,
            page: None,
            finished: false,
            drift_sink: Box::new(LogDriftSink),
        }
    }

    /// Replace the sink receiving schema-drift events.
    pub fn with_drift_sink(mut self, sink: Box<dyn DriftSink>) -> Self {
        self.drift_sink = sink;
        self
    }

    /// Fetch the page at the current cursor and set it up for draining.
    ///
    /// Returns false when the server sent no header row, which ends the
    /// stream cleanly.
    fn begin_page(&mut self) -> Result<bool, ExportError> {
        let Some(page) = self
            .fetcher
            .fetch(&self.jql, self.page_size, self.start_at)?
        else {
            return Ok(false);
        };

        let CsvPage { header, rows } = page;
        let header = PageHeader::new(header);
        let state = header.state();
        if let Some(drift) = detect_drift(self.prior_state.as_ref(), &state) {
            self.drift_sink.schema_drift(&drift);
        }
        self.prior_state = Some(state);

        self.page = Some(PageInProgress {
            header,
            rows,
            yielded: 0,
        });
        Ok(true)
    }
}

impl<F: FetchPage> Iterator for IssueStream<F> {
    type Item = Result<Record, ExportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if self.page.is_none() {
                match self.begin_page() {
                    Ok(true) => {}
                    Ok(false) => {
                        self.finished = true;
                        return None;
                    }
                    Err(err) => {
                        self.finished = true;
                        return Some(Err(err));
                    }
                }
            }

            let step = match self.page.as_mut() {
                None => continue,
                Some(page) => match page.rows.next() {
                    Some(Ok(_)) if page.yielded == self.page_size => {
                        // Row page_size + 1: the server broke the paging
                        // contract, and the offset arithmetic can no longer
                        // be trusted.
                        PageStep::Fatal(ExportError::ContractViolation {
                            page_size: self.page_size,
                            start_at: self.start_at,
                        })
                    }
                    Some(Ok(raw)) => {
                        page.yielded += 1;
                        match decode_row(&raw, page.header.counts()) {
                            Ok(record) => PageStep::Record(record),
                            Err(err) => PageStep::Fatal(err),
                        }
                    }
                    Some(Err(err)) => PageStep::Fatal(err),
                    None => PageStep::Exhausted(page.yielded),
                },
            };

            match step {
                PageStep::Record(record) => return Some(Ok(record)),
                PageStep::Fatal(err) => {
                    self.finished = true;
                    self.page = None;
                    return Some(Err(err));
                }
                PageStep::Exhausted(yielded) => {
                    self.page = None;
                    if yielded < self.page_size {
                        self.finished = true;
                        return None;
                    }
                    // Exactly page_size rows: the server may hold more.
                    self.start_at += yielded;
                }
            }
        }
    }
}

/// Builder for [`IssueStream`].
///
/// Exactly one of [`token`](Self::token) or [`session`](Self::session) must
/// be supplied; [`build`](Self::build) rejects every other combination
/// before any network activity happens.
pub struct IssueStreamBuilder {
    base_url: String,
    jql: String,
    page_size: usize,
    token: Option<String>,
    session: Option<Client>,
    drift_sink: Box<dyn DriftSink>,
}

impl IssueStreamBuilder {
    /// Authenticate with a bearer token.
    ///
    /// Mutually exclusive with [`session`](Self::session).
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Use a preconfigured HTTP client whose credentials are already
    /// attached.
    ///
    /// Mutually exclusive with [`token`](Self::token).
    pub fn session(mut self, client: Client) -> Self {
        self.session = Some(client);
        self
    }

    /// Rows requested per page. The server caps this at 1000.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Replace the default warning-log sink for schema-drift events.
    pub fn drift_sink(mut self, sink: Box<dyn DriftSink>) -> Self {
        self.drift_sink = sink;
        self
    }

    pub fn build(self) -> Result<IssueStream, ExportError> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ExportError::Configuration(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }

        let client = match (self.token, self.session) {
            (Some(token), None) => bearer_client(&token)?,
            (None, Some(session)) => session,
            _ => {
                return Err(ExportError::Configuration(
                    "supply exactly one of a bearer token or a preconfigured session".to_string(),
                ));
            }
        };

        let fetcher = PageFetcher::new(&self.base_url, client)?;
        Ok(IssueStream::over(fetcher, self.jql, self.page_size)
            .with_drift_sink(self.drift_sink))
    }
}

fn bearer_client(token: &str) -> Result<Client, ExportError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        ExportError::Configuration("bearer token contains bytes not allowed in a header".to_string())
    })?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(Client::builder().default_headers(headers).build()?)
}
