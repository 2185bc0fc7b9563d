#![forbid(unsafe_code)]

pub mod cancel;
pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod formats;
pub mod logging;
pub mod progress;
pub mod schema;
pub mod scrape;
pub mod worker;
