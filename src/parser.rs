//! Notebook JSON parsing.

use crate::error::{Error, Result};
use crate::model::Notebook;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse a notebook from a JSON string.
pub fn parse_str(json: &str) -> Result<Notebook> {
    let notebook: Notebook = serde_json::from_str(json)?;
    check_version(&notebook)?;
    log::debug!("parsed notebook with {} cells", notebook.cell_count());
    Ok(notebook)
}

/// Parse a notebook from a reader.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Notebook> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_str(&json)
}

/// Parse a notebook from a file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    let json = fs::read_to_string(path.as_ref())?;
    log::debug!("read notebook from {}", path.as_ref().display());
    parse_str(&json)
}

/// Format versions before 4 nest cells inside worksheets, which would
/// deserialize as an empty document instead of failing.
fn check_version(notebook: &Notebook) -> Result<()> {
    if notebook.nbformat < 4 {
        return Err(Error::UnsupportedVersion(notebook.nbformat));
    }
    Ok(())
}
