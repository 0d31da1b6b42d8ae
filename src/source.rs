use crate::error::SourceError;
use regex::Regex;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

/// Trailing `# comment` after a URL, separated by whitespace
static TRAILING_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+#.*$").expect("static regex"));

/// Parse a URL list: one URL per line, blank lines and `#` comments skipped.
///
/// Lines are not validated here. A line that is not a usable URL still
/// becomes an input so it gets its own (failed) result row.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| TRAILING_COMMENT.replace(line, "").into_owned())
        .collect()
}

/// Read a URL list from a file, or from stdin when the path is `-`
pub fn read_url_file(path: &Path) -> Result<Vec<String>, SourceError> {
    let read_err = |source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    };

    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        buf
    } else {
        fs::read_to_string(path).map_err(read_err)?
    };

    let urls = parse_url_list(&contents);
    ::log::info!("Loaded {} URL(s) from {}", urls.len(), path.display());
    Ok(urls)
}

/// Collect the inputs for a run: URLs from the file first, then the extra ones.
///
/// A file without any URL lines is a valid, empty run. Only giving neither a
/// file nor extra URLs is an error.
pub fn collect_urls(path: Option<&Path>, extra: &[String]) -> Result<Vec<String>, SourceError> {
    if path.is_none() && extra.is_empty() {
        return Err(SourceError::Empty);
    }

    let mut urls = match path {
        Some(path) => read_url_file(path)?,
        None => Vec::new(),
    };
    urls.extend(
        extra
            .iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty()),
    );

    Ok(urls)
}
