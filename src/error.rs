use std::path::PathBuf;
use thiserror::Error;

/// Why a single URL could not be fetched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("connection error: {0}")]
    Connection(String),
    #[error("HTTP status {0}")]
    Http(u16),
}

/// Why a fetched body could not be turned into page metadata
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("body is not parseable as HTML: {0}")]
    Unparseable(&'static str),
}

/// Per-URL failure, as recorded in the `error_reason` column
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl PageError {
    /// Stable label written to the CSV. Details go to the log, not the file,
    /// so repeated runs over the same content produce identical output.
    pub fn reason(&self) -> String {
        match self {
            PageError::Fetch(FetchError::InvalidUrl(_)) => "InvalidUrl".to_string(),
            PageError::Fetch(FetchError::Timeout) => "Timeout".to_string(),
            PageError::Fetch(FetchError::Connection(_)) => "ConnectionError".to_string(),
            PageError::Fetch(FetchError::Http(code)) => format!("HTTPError({code})"),
            PageError::Extract(_) => "ParseError".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidSeconds { field: &'static str, value: f64 },
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read URL list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no input file or URL given")]
    Empty,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode CSV for {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_labels() {
        assert_eq!(PageError::from(FetchError::Timeout).reason(), "Timeout");
        assert_eq!(
            PageError::from(FetchError::Connection("dns error".into())).reason(),
            "ConnectionError"
        );
        assert_eq!(PageError::from(FetchError::Http(404)).reason(), "HTTPError(404)");
        assert_eq!(
            PageError::from(FetchError::InvalidUrl("nope".into())).reason(),
            "InvalidUrl"
        );
        assert_eq!(
            PageError::from(ExtractError::Unparseable("binary content")).reason(),
            "ParseError"
        );
    }
}
