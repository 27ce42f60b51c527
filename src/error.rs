use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {} (line {}): {reason}", path.display(), line.map(|l| l.to_string()).unwrap_or_else(|| "?".into()))]
    Format {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no website link in infobox")]
    Extraction,
}

impl ScrapeError {
    /// Errors scoped to a single input row. The batch records "N/A" for these
    /// and keeps going; anything else aborts the run.
    pub fn is_per_record(&self) -> bool {
        matches!(self, ScrapeError::Network { .. } | ScrapeError::Extraction)
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Map a csv crate error: I/O failures are file-access problems,
    /// everything else is a malformed file.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        let line = err.position().map(|p| p.line());
        match err.into_kind() {
            csv::ErrorKind::Io(source) => ScrapeError::FileAccess { path, source },
            other => ScrapeError::Format {
                path,
                line,
                reason: format!("{:?}", other),
            },
        }
    }
}
