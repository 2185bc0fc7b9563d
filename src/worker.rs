//! One-background-thread adapter for interactive frontends.
//!
//! The pipeline runs on a single spawned thread. The foreground polls a
//! shared snapshot and owns cancellation; the worker only ever writes the
//! counters. No pool and no channels: one worker, one page at a time, in
//! order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::thread;

use crate::cancel::CancelToken;
use crate::error::{PageError, ScrapeError};
use crate::formats::BookRecord;
use crate::progress::ScrapeSink;
use crate::schema::PageSchema;
use crate::scrape::{self, ScrapeOutcome, ScrapeRequest};

#[derive(Debug, Default)]
struct Shared {
    pages_done: AtomicU32,
    records: AtomicUsize,
    failed_pages: AtomicU32,
    finished: AtomicBool,
}

/// Point-in-time view of a running scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub pages_done: u32,
    pub total_pages: u32,
    pub records: usize,
    pub failed_pages: u32,
    pub finished: bool,
}

impl ProgressSnapshot {
    /// Pages completed over pages requested, scaled to 0..=100. Failed pages
    /// count as completed; an empty request reads as done.
    pub fn percent(&self) -> u32 {
        if self.total_pages == 0 {
            return 100;
        }
        (u64::from(self.pages_done) * 100 / u64::from(self.total_pages)) as u32
    }
}

struct SharedSink {
    shared: Arc<Shared>,
}

impl ScrapeSink for SharedSink {
    fn on_record(&mut self, _record: &BookRecord) {
        self.shared.records.fetch_add(1, Ordering::Relaxed);
    }

    fn on_page(&mut self, _page: u32, _records_so_far: usize, _total_pages: u32) {
        self.shared.pages_done.fetch_add(1, Ordering::Relaxed);
    }

    fn on_page_failed(&mut self, _page: u32, _error: &PageError) {
        self.shared.failed_pages.fetch_add(1, Ordering::Relaxed);
    }
}

/// Handle to the one background scrape thread.
pub struct ScrapeWorker {
    shared: Arc<Shared>,
    cancel: CancelToken,
    total_pages: u32,
    thread: thread::JoinHandle<Result<ScrapeOutcome, ScrapeError>>,
}

impl ScrapeWorker {
    /// Start the pipeline on a background thread.
    pub fn spawn(request: ScrapeRequest, schema: PageSchema) -> Self {
        let shared = Arc::new(Shared::default());
        let cancel = CancelToken::new();
        let total_pages = request.total_pages();

        let thread_shared = Arc::clone(&shared);
        let thread_cancel = cancel.clone();
        let thread = thread::spawn(move || {
            let mut sink = SharedSink {
                shared: Arc::clone(&thread_shared),
            };
            let result = scrape::run(&request, &schema, Some(&mut sink), Some(&thread_cancel));
            thread_shared.finished.store(true, Ordering::Relaxed);
            result
        });

        Self {
            shared,
            cancel,
            total_pages,
            thread,
        }
    }

    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            pages_done: self.shared.pages_done.load(Ordering::Relaxed),
            total_pages: self.total_pages,
            records: self.shared.records.load(Ordering::Relaxed),
            failed_pages: self.shared.failed_pages.load(Ordering::Relaxed),
            finished: self.shared.finished.load(Ordering::Relaxed),
        }
    }

    /// Request a cooperative stop; takes effect at the worker's next page
    /// boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.shared.finished.load(Ordering::Relaxed)
    }

    /// Wait for the worker and take its outcome.
    pub fn join(self) -> Result<ScrapeOutcome, ScrapeError> {
        match self.thread.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
