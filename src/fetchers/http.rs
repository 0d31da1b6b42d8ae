use crate::config::HarvestConfig;
use crate::error::{ConfigError, FetchError};
use crate::fetchers::{Fetcher, Throttle};
use reqwest::{Client, StatusCode};
use url::Url;

/// Fetches pages with plain HTTP GET requests, one at a time
pub struct HttpFetcher {
    client: Client,
    throttle: Throttle,
}

impl HttpFetcher {
    /// Build a fetcher with the configured user agent, timeout and delay
    pub fn new(config: &HarvestConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout()?)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            throttle: Throttle::new(config.delay()?, config.jitter()?),
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&mut self, url: &str) -> Result<String, FetchError> {
        let target = parse_target(url)?;

        self.throttle.wait().await;
        ::log::debug!("GET {}", target);

        let response = self.client.get(target).send().await.map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        ::log::debug!("Received {} bytes from {}", body.len(), url);

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Only absolute http(s) URLs are fetched
fn parse_target(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!(
            "{url}: unsupported scheme {other}"
        ))),
    }
}

fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Connection(error.to_string())
    }
}
