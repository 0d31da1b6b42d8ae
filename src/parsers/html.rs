use crate::parsers::text;
use crate::results::{HeadingLevel, PageMetadata};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// Selectors here are literals; a failure is a programming error
fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static CSS selector")
}

/// Extracts SEO metadata from an HTML document.
///
/// html5ever repairs malformed markup, so this never fails; missing tags simply
/// leave their fields empty.
pub fn extract(url: &str, html: &str) -> PageMetadata {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc);
    let (meta_title, meta_description) = extract_named_meta(&doc);
    let headings = extract_headings(&doc);
    let og_tags = extract_og_tags(&doc);

    ::log::debug!(
        "Extracted {} og tags and {} headings from {}",
        og_tags.len(),
        headings.values().map(Vec::len).sum::<usize>(),
        url
    );

    PageMetadata {
        url: url.to_string(),
        title,
        meta_title,
        meta_description,
        headings,
        og_tags,
    }
}

/// Text of the first `<title>` element
pub fn extract_title(doc: &Html) -> Option<String> {
    let title_selector = selector("title");
    doc.select(&title_selector)
        .next()
        .and_then(|el| text::non_empty(&element_text(el)))
}

/// First `<meta name="title">` and `<meta name="description">` contents.
/// Attribute names are compared case-insensitively.
pub fn extract_named_meta(doc: &Html) -> (Option<String>, Option<String>) {
    let meta_selector = selector("meta[name]");
    let mut meta_title = None;
    let mut meta_description = None;

    for element in doc.select(&meta_selector) {
        let Some(name) = element.value().attr("name") else {
            continue;
        };
        let content = element.value().attr("content").unwrap_or("").trim();

        match name.trim().to_ascii_lowercase().as_str() {
            "title" if meta_title.is_none() => meta_title = Some(content.to_string()),
            "description" if meta_description.is_none() => {
                meta_description = Some(content.to_string())
            }
            _ => {}
        }
    }

    (meta_title, meta_description)
}

/// Text of every heading at each level, in document order, duplicates kept
pub fn extract_headings(doc: &Html) -> BTreeMap<HeadingLevel, Vec<String>> {
    HeadingLevel::ALL
        .iter()
        .map(|&level| {
            let level_selector = selector(level.tag());
            let texts = doc.select(&level_selector).map(element_text).collect();
            (level, texts)
        })
        .collect()
}

/// All `<meta property="og:*" content=...>` tags; a repeated property keeps its last value
pub fn extract_og_tags(doc: &Html) -> BTreeMap<String, String> {
    let meta_selector = selector("meta[property]");
    let mut og_tags = BTreeMap::new();

    for element in doc.select(&meta_selector) {
        let (Some(property), Some(content)) = (
            element.value().attr("property"),
            element.value().attr("content"),
        ) else {
            continue;
        };

        let property = property.trim().to_ascii_lowercase();
        if property.starts_with("og:") {
            og_tags.insert(property, content.trim().to_string());
        }
    }

    og_tags
}

fn element_text(element: ElementRef<'_>) -> String {
    text::join_text_nodes(element.text())
}
