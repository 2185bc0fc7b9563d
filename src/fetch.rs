//! Blocking HTTP transport for catalogue pages.

use std::time::Duration;

use reqwest::blocking;

use crate::error::FetchError;

pub struct Client {
    inner: blocking::Client,
}

impl Client {
    /// Build a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let inner = blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bookscrape/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { inner })
    }

    /// GET one page and return its body.
    ///
    /// Any non-success status is an error. Redirect handling is left to the
    /// transport defaults; no custom headers beyond the User-Agent.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.inner.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }
        Ok(response.text()?)
    }
}
