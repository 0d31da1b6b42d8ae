use crate::config::HarvestConfig;
use crate::error::{ConfigError, PageError};
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::parsers::Extractor;
use crate::results::ResultRow;

/// Builder for a harvesting run over a list of URLs
pub struct Harvest {
    urls: Vec<String>,
    config: HarvestConfig,
}

impl Harvest {
    /// Create a new run over `urls` with default settings
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            config: HarvestConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: HarvestConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the delay between requests
    pub fn with_delay(mut self, seconds: f64) -> Self {
        self.config.delay_seconds = seconds;
        self
    }

    /// Override the random extra delay
    pub fn with_jitter(mut self, seconds: f64) -> Self {
        self.config.jitter_seconds = seconds;
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.config.timeout_seconds = seconds;
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Fetch and extract every URL over HTTP
    pub async fn run(&self) -> Result<Vec<ResultRow>, ConfigError> {
        self.config.validate()?;
        let mut fetcher = HttpFetcher::new(&self.config)?;
        Ok(self.run_with(&mut fetcher).await)
    }

    /// Fetch and extract every URL with the given fetcher.
    ///
    /// Returns exactly one row per input URL, in input order.
    pub async fn run_with<F: Fetcher>(&self, fetcher: &mut F) -> Vec<ResultRow> {
        let total = self.urls.len();
        let mut rows = Vec::with_capacity(total);

        for (i, url) in self.urls.iter().enumerate() {
            ::log::info!("Scraping [{}/{}]: {}", i + 1, total, url);
            rows.push(process_url(fetcher, url).await);
        }

        rows
    }
}

/// Fetch one URL and turn the outcome into its result row
pub async fn process_url<F: Fetcher>(fetcher: &mut F, url: &str) -> ResultRow {
    match scrape(fetcher, url).await {
        Ok(row) => row,
        Err(e) => {
            ::log::warn!("Error scraping {}: {}", url, e);
            ResultRow::failure(url, e)
        }
    }
}

async fn scrape<F: Fetcher>(fetcher: &mut F, url: &str) -> Result<ResultRow, PageError> {
    let body = fetcher.fetch(url).await?;
    let metadata = Extractor::extract(url, &body)?;
    Ok(ResultRow::success(metadata))
}
