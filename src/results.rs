use crate::error::PageError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Heading levels `<h1>` through `<h6>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Lowercase tag name, also used as the CSV column name
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// SEO metadata extracted from one successfully fetched page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// URL of the page
    pub url: String,

    /// Text of the first `<title>` element
    pub title: Option<String>,

    /// Content of `<meta name="title">`
    pub meta_title: Option<String>,

    /// Content of `<meta name="description">`
    pub meta_description: Option<String>,

    /// Heading texts per level, in document order. Every level is present.
    pub headings: BTreeMap<HeadingLevel, Vec<String>>,

    /// `og:*` properties; the last tag wins for a repeated property
    pub og_tags: BTreeMap<String, String>,
}

impl PageMetadata {
    pub fn headings(&self, level: HeadingLevel) -> &[String] {
        self.headings.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn og(&self, property: &str) -> Option<&str> {
        self.og_tags.get(property).map(String::as_str)
    }
}

/// Outcome of processing one URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    Success,
    Failure,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Success => f.write_str("Success"),
            FetchStatus::Failure => f.write_str("Failure"),
        }
    }
}

/// One exported record, exactly one per input URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub url: String,

    /// Host part of the URL, empty when the URL does not parse
    pub domain: String,

    /// Extracted metadata, `None` for failures
    pub metadata: Option<PageMetadata>,

    pub error: Option<PageError>,
}

impl ResultRow {
    pub fn success(metadata: PageMetadata) -> Self {
        Self {
            url: metadata.url.clone(),
            domain: crate::utils::domain_of(&metadata.url),
            metadata: Some(metadata),
            error: None,
        }
    }

    pub fn failure(url: &str, error: PageError) -> Self {
        Self {
            url: url.to_string(),
            domain: crate::utils::domain_of(url),
            metadata: None,
            error: Some(error),
        }
    }

    pub fn status(&self) -> FetchStatus {
        if self.error.is_some() {
            FetchStatus::Failure
        } else {
            FetchStatus::Success
        }
    }

    pub fn error_reason(&self) -> Option<String> {
        self.error.as_ref().map(PageError::reason)
    }
}
