//! Persistent document storage using redb
//!
//! The whole configuration lives in a single JSON document under a fixed
//! key, mirroring the hosted document store it stands in for: one settings
//! collection, one document id.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::ConfigError;

const SETTINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("settings");

/// Document id for the one configuration record
const CONFIG_DOC_KEY: &str = "greeting_config";

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the settings table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create database
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SETTINGS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Write the full configuration document, replacing any prior value.
    ///
    /// The document is always written whole; remote partial-merge of
    /// list-valued fields is the defect class this avoids.
    pub fn save_document(&self, data: &[u8]) -> Result<(), ConfigError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SETTINGS_TABLE)?;
            table.insert(CONFIG_DOC_KEY, data)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the configuration document.
    ///
    /// Returns `None` if the store has never been seeded.
    pub fn load_document(&self) -> Result<Option<Vec<u8>>, ConfigError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;

        Ok(table.get(CONFIG_DOC_KEY)?.map(|v| v.value().to_vec()))
    }

    /// Check whether a configuration document exists.
    pub fn has_document(&self) -> Result<bool, ConfigError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;

        Ok(table.get(CONFIG_DOC_KEY)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_storage_can_be_created() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        assert!(Storage::new(&db_path).is_ok());
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_fresh_store_has_no_document() {
        let (storage, _temp) = create_test_storage();
        assert!(!storage.has_document().unwrap());
        assert!(storage.load_document().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_document() {
        let (storage, _temp) = create_test_storage();
        storage.save_document(b"{\"entry_title\":\"Hi\"}").unwrap();

        let loaded = storage.load_document().unwrap();
        assert_eq!(loaded.unwrap(), b"{\"entry_title\":\"Hi\"}");
        assert!(storage.has_document().unwrap());
    }

    #[test]
    fn test_save_replaces_prior_document() {
        let (storage, _temp) = create_test_storage();
        storage.save_document(b"first").unwrap();
        storage.save_document(b"second").unwrap();
        assert_eq!(storage.load_document().unwrap().unwrap(), b"second");
    }

    #[test]
    fn test_document_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");

        {
            let storage = Storage::new(&db_path).unwrap();
            storage.save_document(b"persisted").unwrap();
        }

        {
            let storage = Storage::new(&db_path).unwrap();
            assert_eq!(storage.load_document().unwrap().unwrap(), b"persisted");
        }
    }
}
