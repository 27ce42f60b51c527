use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ScrapeError;

/// Read Wikipedia URLs from the first column of a headerless CSV file.
///
/// Extra columns are ignored; rows keep file order. URLs are not validated
/// here, a bad one simply fails later at fetch time. An empty row has no
/// first column and fails the whole read.
pub fn read_urls(path: &Path) -> Result<Vec<String>, ScrapeError> {
    let data = fs::read(path).map_err(|e| ScrapeError::file_access(path, e))?;

    // csv skips empty lines without reporting them
    if let Some(line) = first_blank_line(&data) {
        return Err(ScrapeError::Format {
            path: path.to_path_buf(),
            line: Some(line),
            reason: "row has no fields".into(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ScrapeError::from_csv(path, e))?;
        urls.push(record.get(0).unwrap_or_default().to_string());
    }

    debug!(path = %path.display(), rows = urls.len(), "read input urls");
    Ok(urls)
}

/// 1-based line number of the first empty row. Newlines inside quoted
/// fields don't end a row; a final newline at end of file is not a row.
fn first_blank_line(data: &[u8]) -> Option<u64> {
    let mut line = 1u64;
    let mut line_empty = true;
    let mut field_start = true;
    let mut in_quotes = false;
    let mut bytes = data.iter().peekable();

    while let Some(&b) = bytes.next() {
        if in_quotes {
            match b {
                b'"' if bytes.peek() == Some(&&b'"') => {
                    bytes.next();
                }
                b'"' => in_quotes = false,
                b'\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match b {
            b'\n' => {
                if line_empty {
                    return Some(line);
                }
                line += 1;
                line_empty = true;
                field_start = true;
            }
            b'\r' => {}
            b'"' if field_start => {
                in_quotes = true;
                line_empty = false;
                field_start = false;
            }
            b',' => {
                line_empty = false;
                field_start = true;
            }
            _ => {
                line_empty = false;
                field_start = false;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn first_column_in_order() {
        let f = write_tmp(
            b"https://en.wikipedia.org/wiki/Apple_Inc.,Apple\n\
              https://en.wikipedia.org/wiki/IBM\n\
              https://en.wikipedia.org/wiki/Nokia,Nokia,Finland\n",
        );
        let urls = read_urls(f.path()).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://en.wikipedia.org/wiki/Apple_Inc.",
                "https://en.wikipedia.org/wiki/IBM",
                "https://en.wikipedia.org/wiki/Nokia",
            ]
        );
    }

    #[test]
    fn first_row_is_data_not_header() {
        let f = write_tmp(b"wikipedia_page\nhttps://en.wikipedia.org/wiki/IBM\n");
        let urls = read_urls(f.path()).unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "wikipedia_page");
    }

    #[test]
    fn quoted_field_with_comma() {
        let f = write_tmp(b"\"https://en.wikipedia.org/wiki/Foo,_Inc.\",x\r\n");
        let urls = read_urls(f.path()).unwrap();
        assert_eq!(urls, vec!["https://en.wikipedia.org/wiki/Foo,_Inc."]);
    }

    #[test]
    fn empty_file() {
        let f = write_tmp(b"");
        assert!(read_urls(f.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_urls(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ScrapeError::FileAccess { .. }));
    }

    #[test]
    fn invalid_utf8_is_format_error() {
        let f = write_tmp(b"https://en.wikipedia.org/wiki/Ok\n\xff\xfe,bad\n");
        let err = read_urls(f.path()).unwrap_err();
        assert!(matches!(err, ScrapeError::Format { .. }));
    }

    #[test]
    fn blank_row_is_format_error() {
        let f = write_tmp(b"https://a\n\nhttps://b\n");
        let err = read_urls(f.path()).unwrap_err();
        assert!(matches!(err, ScrapeError::Format { line: Some(2), .. }), "{err:?}");
    }

    #[test]
    fn trailing_blank_row_is_format_error() {
        let f = write_tmp(b"https://a\r\nhttps://b\r\n\r\n");
        let err = read_urls(f.path()).unwrap_err();
        assert!(matches!(err, ScrapeError::Format { line: Some(3), .. }), "{err:?}");
    }

    #[test]
    fn missing_final_newline_is_fine() {
        let f = write_tmp(b"https://a\r\nhttps://b");
        assert_eq!(read_urls(f.path()).unwrap(), vec!["https://a", "https://b"]);
    }

    #[test]
    fn empty_line_inside_quoted_field_is_not_a_row() {
        let f = write_tmp(b"\"https://a\n\nstill a\",x\nhttps://b\n");
        let urls = read_urls(f.path()).unwrap();
        assert_eq!(urls, vec!["https://a\n\nstill a", "https://b"]);
    }

    #[test]
    fn leading_comma_row_has_an_empty_first_field() {
        let f = write_tmp(b",only second\n");
        assert_eq!(read_urls(f.path()).unwrap(), vec![""]);
    }
}
