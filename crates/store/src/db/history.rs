//! Purchase history repository.

use std::path::PathBuf;

use super::RepositoryError;
use crate::config::StoreConfig;
use crate::models::PurchaseRecord;

/// Repository for the purchase history file.
///
/// The history file is created on the first checkout; a missing or
/// unparsable file reads as an empty history rather than an error, so a
/// damaged log never blocks the session.
pub struct HistoryRepository {
    path: PathBuf,
}

impl HistoryRepository {
    /// Create a repository for the configured history file.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.history_file(),
        }
    }

    /// Load the history, treating a missing or malformed file as empty.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Io`] only if the file exists but cannot
    /// be read. Parse failures are logged and swallowed.
    pub fn load_or_default(&self) -> Result<Vec<PurchaseRecord>, RepositoryError> {
        match super::read_json(&self.path) {
            Ok(Some(records)) => Ok(records),
            Ok(None) => Ok(Vec::new()),
            Err(RepositoryError::Malformed { path, source }) => {
                tracing::warn!(%path, error = %source, "unreadable purchase history; treating as empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Overwrite the history file with the given records.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the file cannot be written.
    pub fn save(&self, records: &[PurchaseRecord]) -> Result<(), RepositoryError> {
        super::write_json(&self.path, &records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{PurchaseItem, PurchaseKind};
    use rust_decimal::Decimal;
    use sakura_core::{Price, SizeCode};

    fn repo(dir: &tempfile::TempDir) -> HistoryRepository {
        HistoryRepository::new(&StoreConfig::with_data_dir(dir.path()))
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        assert!(repo(&dir).load_or_default().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("purchase_history.json"), "oops{").unwrap();
        assert!(repo(&dir).load_or_default().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        let record = PurchaseRecord::now(
            PurchaseKind::Purchase,
            vec![PurchaseItem {
                name: "Jacket".to_owned(),
                price: Price::new(Decimal::new(7_600_00, 2)),
                quantity: 1,
                size: SizeCode::parse("L").unwrap(),
            }],
        );
        repo.save(std::slice::from_ref(&record)).unwrap();

        let loaded = repo.load_or_default().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].items, record.items);
    }
}
