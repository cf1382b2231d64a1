//! Flat-file JSON persistence.
//!
//! All three data files are read and written whole: load the entire file,
//! mutate in memory, write the entire file back. There is no locking and no
//! partial write - the store assumes a single local session and no concurrent
//! external writers.
//!
//! ## Files
//!
//! - `users.json` - username -> account map ([`users::UserRepository`])
//! - `catalog.json` - product array ([`catalog::CatalogRepository`])
//! - `purchase_history.json` - purchase/return records
//!   ([`history::HistoryRepository`])

pub mod catalog;
pub mod history;
pub mod users;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use history::HistoryRepository;
pub use users::UserRepository;

/// Errors raised by the file repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing a data file failed.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file exists but does not parse as the expected JSON shape.
    #[error("malformed data in {path}: {source}")]
    Malformed {
        /// Path of the offending file.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Serializing a value for persistence failed.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Read and parse an entire JSON file.
///
/// Returns `Ok(None)` when the file does not exist yet; callers decide
/// whether that means "seed defaults" or "empty".
///
/// # Errors
///
/// Returns [`RepositoryError::Io`] if the file cannot be read and
/// [`RepositoryError::Malformed`] if it cannot be parsed.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, RepositoryError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let value = serde_json::from_str(&contents).map_err(|source| RepositoryError::Malformed {
        path: path.display().to_string(),
        source,
    })?;

    Ok(Some(value))
}

/// Serialize a value and overwrite the file with it.
///
/// Output is pretty-printed with 4-space indentation so the data files stay
/// hand-readable and diffable.
///
/// # Errors
///
/// Returns [`RepositoryError::Serialize`] if the value cannot be serialized
/// and [`RepositoryError::Io`] if the file cannot be written.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), RepositoryError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(RepositoryError::Serialize)?;
    buf.push(b'\n');

    fs::write(path, buf)?;
    Ok(())
}
