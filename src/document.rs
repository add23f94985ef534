//! Crawled page text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Lowercased first line of a document, line terminator included.
///
/// The crawler writes each page as a single line, so anything after the first
/// line is ignored.
pub fn read_first_line(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| Error::io(path, e))?;
    Ok(line.to_lowercase())
}
