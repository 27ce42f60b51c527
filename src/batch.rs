use std::path::Path;

use tracing::{debug, info};

use crate::error::ScrapeError;
use crate::fetcher::PageFetcher;
use crate::input;
use crate::normalize::normalize;
use crate::output::{self, ResultRecord};
use crate::parser;
use crate::progress::Progress;

/// Counts returned after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub found: usize,
    pub missing: usize,
}

impl BatchSummary {
    fn from_results(results: &[ResultRecord]) -> Self {
        let missing = results.iter().filter(|r| r.is_missing()).count();
        BatchSummary {
            total: results.len(),
            found: results.len() - missing,
            missing,
        }
    }
}

/// Read `input`, resolve every row, then write all results to `output` once.
///
/// Per-row fetch/extraction failures become "N/A". File errors abort the run
/// before anything is written.
pub fn run(
    input: &Path,
    output: &Path,
    fetcher: &dyn PageFetcher,
    progress: &dyn Progress,
) -> Result<BatchSummary, ScrapeError> {
    let urls = input::read_urls(input)?;
    info!(input = %input.display(), rows = urls.len(), "starting batch");

    let results = process_all(&urls, fetcher, progress)?;
    output::write_results(output, &results)?;

    Ok(BatchSummary::from_results(&results))
}

/// Resolve each URL in order, one at a time.
pub fn process_all(
    urls: &[String],
    fetcher: &dyn PageFetcher,
    progress: &dyn Progress,
) -> Result<Vec<ResultRecord>, ScrapeError> {
    let total = urls.len();
    let mut results = Vec::with_capacity(total);
    progress.start(total);

    for (i, url) in urls.iter().enumerate() {
        let record = match resolve(url, fetcher) {
            Ok(company_url) => ResultRecord::found(url, company_url),
            Err(e) if e.is_per_record() => {
                debug!(url = %url, error = %e, "no website, recording N/A");
                ResultRecord::missing(url)
            }
            Err(e) => return Err(e),
        };
        results.push(record);
        progress.advance(i + 1, total);
    }

    progress.finish();
    Ok(results)
}

fn resolve(url: &str, fetcher: &dyn PageFetcher) -> Result<String, ScrapeError> {
    let page = fetcher.fetch_page(url)?;
    let html = String::from_utf8_lossy(&page);
    let raw = parser::extract_company_url(&html)?;
    Ok(normalize(&raw))
}

// ── Tests ──
