use reqwest::blocking::Client;
use tracing::debug;

use crate::error::ScrapeError;

/// Source of raw page content. The batch only talks to pages through this.
pub trait PageFetcher {
    fn fetch_page(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

/// Plain blocking GET. No retries and no timeout override; status codes
/// are not inspected, so an error page is returned like any other body.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        let network = |source| ScrapeError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(network)?;
        debug!(url, status = %response.status(), "fetched");
        let body = response.bytes().map_err(network)?;
        Ok(body.to_vec())
    }
}
