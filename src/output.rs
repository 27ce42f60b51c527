use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::ScrapeError;

pub const NOT_AVAILABLE: &str = "N/A";

const HEADER: [&str; 2] = ["wikipedia_page", "website"];

/// One output row. `company_url` is a normalized URL or [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub wikipedia_url: String,
    pub company_url: String,
}

impl ResultRecord {
    pub fn found(wikipedia_url: &str, company_url: String) -> Self {
        ResultRecord {
            wikipedia_url: wikipedia_url.to_string(),
            company_url,
        }
    }

    pub fn missing(wikipedia_url: &str) -> Self {
        Self::found(wikipedia_url, NOT_AVAILABLE.to_string())
    }

    pub fn is_missing(&self) -> bool {
        self.company_url == NOT_AVAILABLE
    }
}

/// Write the header plus one fully quoted, CRLF-terminated row per result.
///
/// Rows go to a sibling temp file which is renamed over `path` once flushed,
/// so `path` is either untouched or complete.
pub fn write_results(path: &Path, results: &[ResultRecord]) -> Result<(), ScrapeError> {
    let tmp = temp_path(path);
    if let Err(e) = write_to(&tmp, results) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ScrapeError::file_access(path, e)
    })?;

    info!(path = %path.display(), rows = results.len(), "wrote results");
    Ok(())
}

fn write_to(path: &Path, results: &[ResultRecord]) -> Result<(), ScrapeError> {
    let file = File::create(path).map_err(|e| ScrapeError::file_access(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    writer
        .write_record(HEADER)
        .map_err(|e| ScrapeError::from_csv(path, e))?;
    for record in results {
        writer
            .serialize(record)
            .map_err(|e| ScrapeError::from_csv(path, e))?;
    }
    writer.flush().map_err(|e| ScrapeError::file_access(path, e))?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| "output".as_ref()));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_quoted_rows() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let results = vec![
            ResultRecord::found("https://en.wikipedia.org/wiki/Apple_Inc.", "https://www.apple.com/".into()),
            ResultRecord::missing("https://en.wikipedia.org/wiki/Example_Co"),
        ];
        write_results(&out, &results).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            "\"wikipedia_page\",\"website\"\r\n\
             \"https://en.wikipedia.org/wiki/Apple_Inc.\",\"https://www.apple.com/\"\r\n\
             \"https://en.wikipedia.org/wiki/Example_Co\",\"N/A\"\r\n"
        );
    }

    #[test]
    fn empty_results_still_get_header() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        write_results(&out, &[]).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "\"wikipedia_page\",\"website\"\r\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        fs::write(&out, "stale contents that are longer than the new file\n").unwrap();
        write_results(&out, &[]).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "\"wikipedia_page\",\"website\"\r\n");
        assert!(!temp_path(&out).exists());
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        write_results(&out, &[ResultRecord::found("a\"b", "c".into())]).unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert!(written.ends_with("\"a\"\"b\",\"c\"\r\n"));
    }

    #[test]
    fn unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no_such_dir").join("out.csv");
        let err = write_results(&out, &[]).unwrap_err();
        assert!(matches!(err, ScrapeError::FileAccess { .. }));
        assert!(!out.exists());
    }
}
