pub mod html;
pub mod text;


use crate::error::ExtractError;
use crate::results::PageMetadata;

/// Main entry point for turning a fetched body into page metadata
pub struct Extractor;

impl Extractor {
    /// Extract metadata from a fetched body.
    ///
    /// Any markup is accepted and repaired; only bodies that are not text at
    /// all are rejected.
    pub fn extract(url: &str, body: &str) -> Result<PageMetadata, ExtractError> {
        if text::looks_binary(body) {
            ::log::debug!("Body of {} contains NUL bytes, refusing to parse", url);
            return Err(ExtractError::Unparseable("binary content"));
        }

        Ok(html::extract(url, body))
    }
}
