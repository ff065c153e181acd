//! Loading the initial entry list from a JSON or CSV file.

use crate::models::Entry;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Errors while reading an entry list.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    /// File extension is neither `.json` nor `.csv`.
    UnsupportedFormat(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Could not read entries: {}", e),
            LoadError::Json(e) => write!(f, "Invalid JSON entry list: {}", e),
            LoadError::Csv(e) => write!(f, "Invalid CSV entry list: {}", e),
            LoadError::UnsupportedFormat(name) => {
                write!(f, "Unsupported entry file '{}' (expected .json or .csv)", name)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

/// On-disk layout of an entry list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntriesFormat {
    /// A JSON array of strings.
    Json,
    /// One entry per record, first column; no header row.
    Csv,
}

impl EntriesFormat {
    /// Format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(EntriesFormat::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(EntriesFormat::Csv)
        } else {
            None
        }
    }
}

/// Read an entry list from `path`, picking the format from its extension.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>, LoadError> {
    let path = path.as_ref();
    let format = EntriesFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;
    let file = File::open(path)?;
    parse_entries(BufReader::new(file), format)
}

/// Parse an entry list. Order is preserved; CSV values are trimmed and blank ones skipped.
pub fn parse_entries<R: Read>(reader: R, format: EntriesFormat) -> Result<Vec<Entry>, LoadError> {
    match format {
        EntriesFormat::Json => Ok(serde_json::from_reader(reader)?),
        EntriesFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(reader);
            let mut entries = Vec::new();
            for record in rdr.records() {
                let record = record?;
                match record.get(0).map(str::trim) {
                    Some(name) if !name.is_empty() => entries.push(Entry::new(name)),
                    _ => {}
                }
            }
            Ok(entries)
        }
    }
}
