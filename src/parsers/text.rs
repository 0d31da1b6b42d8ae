//! Text clean-up shared by the HTML extractor.

/// Collapses every run of whitespace (including non-breaking spaces) into a
/// single space and trims both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Concatenates the text nodes of one element (like DOM `textContent`) and
/// normalizes the result
pub fn join_text_nodes<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = nodes.into_iter().collect::<String>();
    normalize_whitespace(&joined)
}

/// Normalized text, or `None` when nothing but whitespace is left
pub fn non_empty(text: &str) -> Option<String> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// True when the body is binary rather than markup (contains NUL bytes)
pub fn looks_binary(body: &str) -> bool {
    body.contains('\0')
}
