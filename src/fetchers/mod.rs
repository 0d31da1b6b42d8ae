pub mod http;
pub mod throttle;

pub use http::HttpFetcher;
pub use throttle::Throttle;

use crate::error::FetchError;
use std::future::Future;

/// Base trait for anything that can turn a URL into page source
pub trait Fetcher {
    /// Fetch the body of `url`. Calls are sequential; implementations may
    /// delay before issuing the request to respect rate limits.
    fn fetch(&mut self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}
