//! HTTP access to JIRA's CSV export endpoint.

pub mod fetcher;

pub use fetcher::{
    CSV_EXPORT_PATH, CsvPage, DEFAULT_PAGE_SIZE, FetchPage, MAX_PAGE_SIZE, PageFetcher,
};
