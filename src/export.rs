use crate::error::ExportError;
use crate::results::{HeadingLevel, ResultRow};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Separator between the headings of one level inside a cell
pub const HEADING_DELIMITER: &str = " | ";

/// OpenGraph properties that get their own column
pub const OG_COLUMNS: [&str; 3] = ["og:title", "og:description", "og:image"];

/// Fixed CSV header
pub const HEADER: [&str; 16] = [
    "url",
    "title",
    "meta_description",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "og:title",
    "og:description",
    "og:image",
    "status",
    "error_reason",
    "domain",
    "meta_title",
];

/// Flatten a row into CSV fields, in `HEADER` order
pub fn row_fields(row: &ResultRow) -> Vec<String> {
    let mut fields = Vec::with_capacity(HEADER.len());
    fields.push(row.url.clone());

    let meta = row.metadata.as_ref();
    fields.push(meta.and_then(|m| m.title.clone()).unwrap_or_default());
    fields.push(meta.and_then(|m| m.meta_description.clone()).unwrap_or_default());

    for level in HeadingLevel::ALL {
        fields.push(
            meta.map(|m| m.headings(level).join(HEADING_DELIMITER))
                .unwrap_or_default(),
        );
    }

    for property in OG_COLUMNS {
        fields.push(
            meta.and_then(|m| m.og(property))
                .map(str::to_string)
                .unwrap_or_default(),
        );
    }

    fields.push(row.status().to_string());
    fields.push(row.error_reason().unwrap_or_default());
    fields.push(row.domain.clone());
    fields.push(meta.and_then(|m| m.meta_title.clone()).unwrap_or_default());
    fields
}

/// Encode rows as CSV into any writer
pub fn write_csv<W: Write>(writer: W, rows: &[ResultRow]) -> Result<W, csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(row_fields(row))?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Write all rows to `path`, replacing any existing file.
///
/// The CSV goes to a temporary file next to the target and is renamed into
/// place only once complete, so the target is never left half-written.
pub fn export_csv(path: &Path, rows: &[ResultRow]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    let tmp = write_csv(tmp, rows).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    ::log::info!("Wrote {} row(s) to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, PageError};
    use crate::results::PageMetadata;
    use std::collections::BTreeMap;
    use std::fs;

    fn title_only(url: &str, title: &str) -> ResultRow {
        let headings = HeadingLevel::ALL.iter().map(|&l| (l, Vec::new())).collect();
        ResultRow::success(PageMetadata {
            url: url.to_string(),
            title: Some(title.to_string()),
            headings,
            ..PageMetadata::default()
        })
    }

    fn to_string(rows: &[ResultRow]) -> String {
        String::from_utf8(write_csv(Vec::new(), rows).unwrap()).unwrap()
    }

    #[test]
    fn test_header() {
        let out = to_string(&[]);
        assert_eq!(
            out,
            "url,title,meta_description,h1,h2,h3,h4,h5,h6,\
             og:title,og:description,og:image,status,error_reason,domain,meta_title\n"
        );
    }

    #[test]
    fn test_title_only_row() {
        let out = to_string(&[title_only("http://example.com", "Example")]);
        let line = out.lines().nth(1).unwrap();
        assert_eq!(line, "http://example.com,Example,,,,,,,,,,,Success,,example.com,");
    }

    #[test]
    fn test_failure_row() {
        let row = ResultRow::failure("http://slow.example/", FetchError::Timeout.into());
        let out = to_string(&[row]);
        let line = out.lines().nth(1).unwrap();
        assert_eq!(line, "http://slow.example/,,,,,,,,,,,,Failure,Timeout,slow.example,");
    }

    #[test]
    fn test_headings_og_and_quoting() {
        let mut headings: BTreeMap<_, _> =
            HeadingLevel::ALL.iter().map(|&l| (l, Vec::new())).collect();
        headings.insert(HeadingLevel::H1, vec!["A".to_string(), "B".to_string()]);
        headings.insert(HeadingLevel::H3, vec!["Tom, Dick \"and\" Harry".to_string()]);
        let og_tags = BTreeMap::from([
            ("og:title".to_string(), "OG".to_string()),
            ("og:url".to_string(), "https://x.example/".to_string()),
        ]);
        let row = ResultRow::success(PageMetadata {
            url: "https://x.example/".to_string(),
            meta_description: Some("desc".to_string()),
            headings,
            og_tags,
            ..PageMetadata::default()
        });

        let fields = row_fields(&row);
        assert_eq!(fields.len(), HEADER.len());
        assert_eq!(fields[2], "desc");
        assert_eq!(fields[3], "A | B");
        assert_eq!(fields[9], "OG");
        assert_eq!(fields[10], "");
        assert_eq!(fields[14], "x.example");

        let out = to_string(&[row]);
        assert!(out.contains("\"Tom, Dick \"\"and\"\" Harry\""));
    }

    #[test]
    fn test_export_preserves_order_and_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![
            title_only("https://one.example/", "One"),
            ResultRow::failure("https://two.example/", PageError::Fetch(FetchError::Http(500))),
            title_only("https://three.example/", "Three"),
        ];

        export_csv(&path, &rows).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let urls: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert_eq!(
            urls,
            vec!["https://one.example/", "https://two.example/", "https://three.example/"]
        );
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents that are longer than the new file\n".repeat(50)).unwrap();

        export_csv(&path, &[title_only("https://one.example/", "One")]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_unwritable_path_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = export_csv(&path, &[title_only("https://one.example/", "One")]).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!path.exists());
    }
}
