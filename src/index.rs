//! Crawl index: one `"<document_name> - <url or title>"` entry per line.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Separator between the document name and the rest of an index entry.
pub const ENTRY_SEPARATOR: &str = " - ";

/// Document names in index order.
///
/// Every line must contain [`ENTRY_SEPARATOR`]; the name is everything before
/// its first occurrence. The whole index is checked before returning, so a bad
/// line is reported before any document is touched. Blank lines count as bad
/// lines, including a blank line after the last entry (`"a - x\n\n"`); only the
/// final line terminator is optional.
pub fn parse_index(text: &str) -> Result<Vec<String>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| match line.split_once(ENTRY_SEPARATOR) {
            Some((name, _)) => Ok(name.to_string()),
            None => Err(Error::MalformedIndexLine {
                line: i + 1,
                content: line.to_string(),
            }),
        })
        .collect()
}

/// Read and parse the index file.
pub fn load_index(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_index(&text)
}
