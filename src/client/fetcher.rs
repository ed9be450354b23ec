use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::ExportError;

/// Path of JIRA's CSV export endpoint (all fields), relative to the server root.
pub const CSV_EXPORT_PATH: &str =
    "/sr/jira.issueviews:searchrequest-csv-all-fields/temp/SearchRequest.csv";

/// Upper bound the server places on `tempMax`.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Rows requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 800;

/// One page of CSV data: the verbatim header plus a lazy row iterator.
///
/// The header is returned exactly as the server sent it, duplicate names
/// included. Rows are pulled straight off the underlying response as the
/// iterator advances; dropping the page drops the response, so the
/// connection is released even when the rows are abandoned early.
pub struct CsvPage {
    pub header: Vec<String>,
    pub rows: Box<dyn Iterator<Item = Result<Vec<String>, ExportError>>>,
}

/// A source of CSV pages.
///
/// [`PageFetcher`] implements this over HTTP; alternate sources (replayed
/// captures, in-memory fixtures) plug into
/// [`IssueStream::over`](crate::stream::IssueStream::over) through the same
/// trait.
pub trait FetchPage {
    /// Fetch the page of at most `page_size` rows starting at `start_at`.
    ///
    /// Returns `Ok(None)` when the response body carries no header row at
    /// all, which ends the stream.
    fn fetch(
        &self,
        jql: &str,
        page_size: usize,
        start_at: usize,
    ) -> Result<Option<CsvPage>, ExportError>;
}

/// Fetches CSV export pages from a JIRA server over blocking HTTP.
///
/// Holds a preconfigured [`Client`] whose identity headers (bearer token or
/// session credentials) were attached at construction; the fetcher itself
/// never mutates the client.
pub struct PageFetcher {
    client: Client,
    url: Url,
}

impl PageFetcher {
    /// Resolve the export endpoint against `base_url`.
    pub fn new(base_url: &str, client: Client) -> Result<Self, ExportError> {
        let url = Url::parse(base_url)
            .and_then(|base| base.join(CSV_EXPORT_PATH))
            .map_err(|err| {
                ExportError::Configuration(format!("invalid base URL {base_url:?}: {err}"))
            })?;
        Ok(Self { client, url })
    }

    /// The fully resolved endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl FetchPage for PageFetcher {
    fn fetch(
        &self,
        jql: &str,
        page_size: usize,
        start_at: usize,
    ) -> Result<Option<CsvPage>, ExportError> {
        tracing::debug!(%jql, page_size, start_at, "fetching issue page");

        let response = self
            .client
            .get(self.url.clone())
            .query(&[
                ("jqlQuery", jql),
                ("tempMax", &page_size.to_string()),
                ("pager/start", &start_at.to_string()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::error!(status = status.as_u16(), "JIRA rejected the page request");
            return Err(ExportError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let mut records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(response)
            .into_records();

        // The first record is the header; an empty body means the result set
        // is exhausted.
        let header: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(str::to_owned).collect(),
            None => return Ok(None),
        };

        let rows = records.filter_map(|record| match record {
            Ok(record) if record.is_empty() => None,
            Ok(record) => Some(Ok(record.iter().map(str::to_owned).collect())),
            Err(err) => Some(Err(ExportError::from(err))),
        });

        Ok(Some(CsvPage {
            header,
            rows: Box::new(rows),
        }))
    }
}
