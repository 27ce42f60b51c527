pub mod dom;
pub mod infobox;

use crate::error::ScrapeError;

/// Page markup → document tree → raw website href from the infobox.
pub fn extract_company_url(html: &str) -> Result<String, ScrapeError> {
    let root = dom::parse_document(html);
    infobox::find_website(&root)
        .map(str::to_string)
        .ok_or(ScrapeError::Extraction)
}

// ── Tests ──
