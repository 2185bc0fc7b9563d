//! Typed errors for the scrape pipeline.
//!
//! The split matters to callers: [`PageError`] covers everything that is
//! tolerated per page (the loop records it and moves on), while
//! [`ScrapeError`] is fatal and ends the run before any page is fetched.

use thiserror::Error;

/// A selector string in a [`crate::schema::PageSchema`] failed to parse.
#[derive(Debug, Error)]
#[error("invalid selector {selector:?}: {message}")]
pub struct SchemaError {
    pub selector: String,
    pub message: String,
}

/// Errors from fetching one page over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect failure, timeout, or any other transport-level error.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },
}

/// Errors from extracting records out of a parsed document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A matched listing entry lacks one of the expected sub-elements.
    #[error("listing entry {entry} has no {what}")]
    Missing { entry: usize, what: &'static str },
}

/// A page-scoped failure: the page contributes zero records and the run
/// continues with the next page number.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// A fatal failure: the request never turns into a page loop.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("base url is not valid: {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    /// Only http/https make sense for a catalogue fetch.
    #[error("base url must use http or https: {url}")]
    UnsupportedScheme { url: String },

    /// The page file name is appended by plain string concatenation, so the
    /// base url has to end in a path separator.
    #[error("base url must end with '/': {url}")]
    MissingTrailingSlash { url: String },

    #[error("start page {start} is past end page {end}")]
    PageRange { start: u32, end: u32 },

    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),
}
