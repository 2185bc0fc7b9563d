//! Thin command bodies over the core pipeline: argument-to-request mapping,
//! the console sink, Ctrl-C wiring, and the save action.

use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;

use crate::cancel::CancelToken;
use crate::cli::{ExtractArgs, ScrapeArgs};
use crate::export;
use crate::extract::extract_records;
use crate::formats::BookRecord;
use crate::progress::ScrapeSink;
use crate::schema::PageSchema;
use crate::scrape::{self, ScrapeRequest};

/// Streams records to stdout as they extract, one JSON object per line.
struct ConsoleSink {
    stdout: std::io::Stdout,
}

impl ScrapeSink for ConsoleSink {
    fn on_record(&mut self, record: &BookRecord) {
        match serde_json::to_string(record) {
            // stdout may be a closed pipe; the scrape itself can still finish.
            Ok(line) => {
                let _ = writeln!(self.stdout, "{line}");
            }
            Err(err) => tracing::error!(%err, "serialize record"),
        }
    }
}

pub fn scrape(args: ScrapeArgs) -> anyhow::Result<()> {
    let request = ScrapeRequest {
        base_url: args.base_url,
        start_page: args.start_page,
        end_page: args.end_page,
        request_timeout: Duration::from_secs(args.timeout_secs),
        inter_page_delay: Duration::from_millis(args.delay_ms),
    };
    let schema = PageSchema::default();

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel()).context("install ctrl-c handler")?;

    let mut console = ConsoleSink {
        stdout: std::io::stdout(),
    };
    let sink: Option<&mut dyn ScrapeSink> = if args.quiet {
        None
    } else {
        Some(&mut console)
    };
    let outcome = scrape::run(&request, &schema, sink, Some(&cancel))?;

    tracing::info!(
        pages = outcome.pages_processed,
        records = outcome.records.len(),
        failed_pages = outcome.failures.len(),
        cancelled = outcome.cancelled,
        "scrape finished"
    );

    save_if_requested(args.save, args.out_dir, &outcome.records)
}

pub fn extract(args: ExtractArgs) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(&args.input)
        .with_context(|| format!("read input: {}", args.input.display()))?;
    let records = extract_records(&html, &PageSchema::default())?;

    let mut stdout = std::io::stdout();
    for record in &records {
        let line = serde_json::to_string(record).context("serialize record")?;
        writeln!(stdout, "{line}").context("write record")?;
    }
    tracing::info!(records = records.len(), "extract finished");

    save_if_requested(args.save, args.out_dir, &records)
}

/// The explicit save action: a new timestamped JSON file per invocation,
/// refused when there is nothing to write.
fn save_if_requested(
    save: bool,
    out_dir: Option<PathBuf>,
    records: &[BookRecord],
) -> anyhow::Result<()> {
    if !save && out_dir.is_none() {
        return Ok(());
    }
    if records.is_empty() {
        anyhow::bail!("nothing to save: no records were extracted");
    }

    let dir = match out_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("create output dir: {}", dir.display()))?;
            dir
        }
        None => std::env::current_dir().context("resolve working directory")?,
    };

    let path = export::save_records(&dir, records).context("save records")?;
    tracing::info!(path = %path.display(), records = records.len(), "saved");
    Ok(())
}
