//! Progress reporting for pipeline runs.
//!
//! Frontends (the CLI, the background-worker adapter, a windowed form)
//! implement this to observe records and page progress while the pipeline
//! runs. Callbacks arrive synchronously from whichever thread drives the
//! loop, always before the inter-page delay.

use crate::error::PageError;
use crate::formats::BookRecord;

pub trait ScrapeSink {
    /// One extracted record, in page order and document order.
    fn on_record(&mut self, _record: &BookRecord) {}

    /// A page finished processing, extracted or failed. `records_so_far`
    /// counts across the whole run.
    fn on_page(&mut self, _page: u32, _records_so_far: usize, _total_pages: u32) {}

    /// A page was skipped after a tolerated failure.
    fn on_page_failed(&mut self, _page: u32, _error: &PageError) {}
}

/// A no-op sink.
pub struct NullSink;

impl ScrapeSink for NullSink {}
