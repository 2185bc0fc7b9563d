//! Saving accumulated records to disk.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Local};

use crate::formats::BookRecord;

/// File name for a save performed at `now`, e.g.
/// `scraped_data_20250114_173042.json`.
pub fn save_file_name(now: DateTime<Local>) -> String {
    format!("scraped_data_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Write `records` into `dir` as a pretty-printed JSON array, named by the
/// save-time wall clock. Every save is a new file; nothing is appended or
/// overwritten. Returns the path written.
pub fn save_records(dir: &Path, records: &[BookRecord]) -> anyhow::Result<PathBuf> {
    let path = dir.join(save_file_name(Local::now()));

    let file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&path)
        .with_context(|| format!("create save file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("write records: {}", path.display()))?;
    writer
        .write_all(b"\n")
        .with_context(|| format!("write records: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush save file: {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn file_name_uses_compact_local_timestamp() {
        let at = Local.with_ymd_and_hms(2025, 1, 14, 17, 30, 42).unwrap();
        assert_eq!(save_file_name(at), "scraped_data_20250114_173042.json");
    }

    #[test]
    fn saved_file_round_trips() {
        let records = vec![
            BookRecord {
                title: "A Light in the Attic".to_owned(),
                price: "£51.77".to_owned(),
                availability: "In stock".to_owned(),
            },
            BookRecord {
                title: "Tipping the Velvet".to_owned(),
                price: "£53.74".to_owned(),
                availability: "In stock".to_owned(),
            },
        ];

        let dir = tempfile::TempDir::new().unwrap();
        let path = save_records(dir.path(), &records).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.starts_with("[\n"), "expected indented output");
        assert!(json.ends_with("]\n"), "expected a trailing newline");
        let read_back: Vec<BookRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn failed_save_reports_the_path_and_keeps_the_records() {
        let records = vec![BookRecord {
            title: "A Light in the Attic".to_owned(),
            price: "£51.77".to_owned(),
            availability: "In stock".to_owned(),
        }];

        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = save_records(&missing, &records).unwrap_err();
        assert!(err.to_string().contains("create save file"));

        // The records are untouched, so the caller can retry the save.
        let path = save_records(dir.path(), &records).unwrap();
        let read_back: Vec<BookRecord> =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(read_back, records);
    }
}
