//! Persistence collaborator
//!
//! The core keeps transactions in memory. Durable storage is behind the
//! [`TransactionRepository`] trait: the tracker is seeded from `load()` and
//! hands its current list to `save()` when the caller wants a snapshot.
//!
//! - `MemoryRepository` keeps the snapshot in process (tests, demos)
//! - `JsonFileRepository` writes a pretty-printed JSON array to a file

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::Transaction;

/// Trait for transaction storage backends
pub trait TransactionRepository: Send + Sync {
    /// Human-readable name for this backend
    fn name(&self) -> &str;

    /// Load the stored transactions in store order (newest first)
    fn load(&self) -> Result<Vec<Transaction>>;

    /// Replace the stored transactions with this snapshot
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
}

/// In-process repository
#[derive(Debug, Default)]
pub struct MemoryRepository {
    transactions: Mutex<Vec<Transaction>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing list
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Mutex::new(transactions),
        }
    }
}

impl TransactionRepository for MemoryRepository {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Vec<Transaction>> {
        let guard = self
            .transactions
            .lock()
            .map_err(|e| Error::Storage(format!("Repository lock poisoned: {}", e)))?;
        Ok(guard.clone())
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let mut guard = self
            .transactions
            .lock()
            .map_err(|e| Error::Storage(format!("Repository lock poisoned: {}", e)))?;
        *guard = transactions.to_vec();
        Ok(())
    }
}

/// JSON file repository
///
/// A missing file loads as an empty list. Saves go to a temp file in the
/// same directory which is then renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionRepository for JsonFileRepository {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let transactions: Vec<Transaction> = serde_json::from_reader(BufReader::new(file))?;
        info!(
            path = %self.path.display(),
            count = transactions.len(),
            "Loaded transactions"
        );
        Ok(transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                Error::Storage(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let mut temp = NamedTempFile::new_in(&dir)
            .map_err(|e| Error::Storage(format!("Failed to create temp file: {}", e)))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, transactions)?;
            writer.flush()?;
        }
        temp.persist(&self.path).map_err(|e| {
            Error::Storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e.error
            ))
        })?;

        info!(
            path = %self.path.display(),
            count = transactions.len(),
            "Saved transactions"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::test_utils::transaction;
    use tempfile::TempDir;

    fn sample() -> Vec<Transaction> {
        vec![
            transaction("b", 2500.0, Category::Income, "2026-10-03T09:00:00Z"),
            transaction("a", 12.5, Category::Food, "2026-10-02T08:00:00Z"),
        ]
    }

    #[test]
    fn test_memory_repository() {
        let repo = MemoryRepository::new();
        assert!(repo.load().unwrap().is_empty());

        repo.save(&sample()).unwrap();
        assert_eq!(repo.load().unwrap(), sample());
    }

    #[test]
    fn test_json_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("tally.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_save_and_load() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested").join("tally.json"));

        repo.save(&sample()).unwrap();
        let loaded = repo.load().unwrap();
        assert_eq!(loaded, sample());
        assert!(loaded[0].is_income);
    }

    #[test]
    fn test_json_save_replaces_previous() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("tally.json"));

        repo.save(&sample()).unwrap();
        repo.save(&sample()[1..]).unwrap();
        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_json_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tally.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
