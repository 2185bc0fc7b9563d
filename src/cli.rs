use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Scrape(ScrapeArgs),
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Catalogue root the page file names are appended to (must end with '/').
    #[arg(long, default_value = "https://books.toscrape.com/catalogue/")]
    pub base_url: String,

    /// First page to fetch.
    #[arg(long, default_value_t = 1)]
    pub start_page: u32,

    /// Page to stop before (exclusive). The default covers the demo site's
    /// 50 catalogue pages.
    #[arg(long, default_value_t = 51)]
    pub end_page: u32,

    /// Pause between consecutive page fetches (politeness).
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Per-request timeout.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Do not stream records to stdout (stderr logging is unaffected).
    #[arg(long)]
    pub quiet: bool,

    /// Write the accumulated records to a timestamped JSON file after the
    /// run.
    #[arg(long)]
    pub save: bool,

    /// Directory for the saved file (implies --save; defaults to the working
    /// directory).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Saved catalogue page to read.
    #[arg(long)]
    pub input: PathBuf,

    /// Write the extracted records to a timestamped JSON file.
    #[arg(long)]
    pub save: bool,

    /// Directory for the saved file (implies --save; defaults to the working
    /// directory).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}
