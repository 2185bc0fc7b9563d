//! The page-range fetch-extract-aggregate pipeline.
//!
//! Sequential: one page at a time, a fixed pause between pages, no retries.
//! Failures are page-scoped; a page that cannot be fetched or extracted
//! contributes zero records and the loop moves on.

use std::thread;
use std::time::Duration;

use url::Url;

use crate::cancel::CancelToken;
use crate::error::{PageError, ScrapeError};
use crate::extract::extract_records;
use crate::fetch;
use crate::formats::BookRecord;
use crate::progress::{NullSink, ScrapeSink};
use crate::schema::PageSchema;

/// What to scrape and how politely.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    /// Catalogue root. The page file name is appended by plain string
    /// concatenation, so this must end with `/`.
    pub base_url: String,
    /// First page to fetch.
    pub start_page: u32,
    /// Page to stop before (exclusive). `start_page == end_page` is the
    /// empty run and performs no I/O.
    pub end_page: u32,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Fixed pause between consecutive page fetches. Never applied after the
    /// final page or once cancellation is observed.
    pub inter_page_delay: Duration,
}

impl ScrapeRequest {
    pub fn total_pages(&self) -> u32 {
        self.end_page.saturating_sub(self.start_page)
    }

    /// Full URL of one page: `base_url` ++ the schema's page file name.
    pub fn page_url(&self, schema: &PageSchema, page: u32) -> String {
        format!("{}{}", self.base_url, schema.page_file(page))
    }

    fn validate(&self) -> Result<(), ScrapeError> {
        let parsed = Url::parse(&self.base_url).map_err(|source| ScrapeError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ScrapeError::UnsupportedScheme {
                url: self.base_url.clone(),
            });
        }
        if !self.base_url.ends_with('/') {
            return Err(ScrapeError::MissingTrailingSlash {
                url: self.base_url.clone(),
            });
        }
        if self.start_page > self.end_page {
            return Err(ScrapeError::PageRange {
                start: self.start_page,
                end: self.end_page,
            });
        }
        Ok(())
    }
}

/// One tolerated per-page failure.
#[derive(Debug)]
pub struct PageFailure {
    pub page: u32,
    pub error: PageError,
}

/// Everything a run produced. Owned by the caller; the pipeline keeps no
/// state across calls.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Records grouped by ascending page number, document order within a
    /// page.
    pub records: Vec<BookRecord>,
    /// Pages that contributed nothing, with their causes.
    pub failures: Vec<PageFailure>,
    /// Pages processed (extracted or failed) before the run ended.
    pub pages_processed: u32,
    /// True when the run stopped early at the liveness check.
    pub cancelled: bool,
}

/// Run the pipeline over `[start_page, end_page)`.
///
/// `sink` observes records and page completions as they happen; `cancel` is
/// polled once per page iteration, before the inter-page delay and the
/// fetch. Only an invalid request or a client that cannot be built end the
/// run with an error; per-page failures land in the outcome instead.
pub fn run(
    request: &ScrapeRequest,
    schema: &PageSchema,
    sink: Option<&mut dyn ScrapeSink>,
    cancel: Option<&CancelToken>,
) -> Result<ScrapeOutcome, ScrapeError> {
    request.validate()?;
    let client = fetch::Client::new(request.request_timeout).map_err(ScrapeError::Client)?;

    let mut null = NullSink;
    let sink: &mut dyn ScrapeSink = match sink {
        Some(sink) => sink,
        None => &mut null,
    };

    let total_pages = request.total_pages();
    let mut outcome = ScrapeOutcome::default();

    for page in request.start_page..request.end_page {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            tracing::info!(page, "cancelled; stopping before this page");
            outcome.cancelled = true;
            break;
        }

        // The delay separates pages, so the first one starts immediately.
        if page > request.start_page && !request.inter_page_delay.is_zero() {
            thread::sleep(request.inter_page_delay);
        }

        let url = request.page_url(schema, page);
        match scrape_page(&client, &url, schema) {
            Ok(records) => {
                tracing::info!(page, of = total_pages, records = records.len(), "processed page");
                for record in &records {
                    sink.on_record(record);
                }
                outcome.records.extend(records);
            }
            Err(error) => {
                tracing::warn!(page, %error, "page failed; skipping");
                sink.on_page_failed(page, &error);
                outcome.failures.push(PageFailure { page, error });
            }
        }

        outcome.pages_processed += 1;
        sink.on_page(page, outcome.records.len(), total_pages);
    }

    Ok(outcome)
}

fn scrape_page(
    client: &fetch::Client,
    url: &str,
    schema: &PageSchema,
) -> Result<Vec<BookRecord>, PageError> {
    let body = client.fetch(url)?;
    Ok(extract_records(&body, schema)?)
}
