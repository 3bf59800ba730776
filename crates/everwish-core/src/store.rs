//! ConfigStore - the primary entry point for Everwish configuration
//!
//! ConfigStore coordinates Storage and reconciliation:
//! - Seeds the backing store with the default record on first run
//! - Keeps a reconciled in-memory snapshot of the current record
//! - Notifies subscribers on every accepted update
//! - Writes with a single explicit discipline: read the latest in-memory
//!   record, merge the patch client-side, write the full record back
//!
//! A read failure never blocks the app: the store falls back to the
//! default record and still reports itself loaded.
//!
//! # Example
//!
//! ```ignore
//! use everwish_core::{ConfigPatch, ConfigStore};
//!
//! let store = ConfigStore::open("~/.everwish/data")?;
//! let mut events = store.subscribe();
//!
//! let config = store.current();
//! store.save(ConfigPatch {
//!     entry_title: Some("Surprise!".to_string()),
//!     ..Default::default()
//! })?;
//! ```

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::reconcile::{reconcile, ConfigPatch};
use crate::storage::Storage;
use crate::types::GreetingConfig;

/// Default capacity for the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Database file name inside the data directory
const DB_FILE: &str = "everwish.redb";

/// Notifications about accepted configuration updates
#[derive(Debug, Clone)]
pub enum ConfigEvent {
    /// The configuration record changed; read `current()` for the new state
    Changed,
}

/// Whether the in-memory record was read from disk or substituted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Record read (and reconciled) from the backing store
    Stored,
    /// First run: the default record was seeded into the store
    Seeded,
    /// Read or decode failed; running on the default record
    Fallback,
}

/// Persistent, subscribable configuration store
///
/// Single-writer-in-practice with last-write-wins semantics; concurrent
/// multi-admin edits are an accepted limitation.
#[derive(Clone)]
pub struct ConfigStore {
    storage: Storage,
    current: Arc<RwLock<GreetingConfig>>,
    event_tx: broadcast::Sender<ConfigEvent>,
    load_source: LoadSource,
}

impl ConfigStore {
    /// Open (or create) the store under the given data directory.
    ///
    /// If no document exists yet the full default record is seeded exactly
    /// once. If the existing document cannot be read or decoded, the store
    /// opens on the default record and logs the failure.
    pub fn open(data_dir: impl AsRef<Path>) -> ConfigResult<Self> {
        let storage = Storage::new(data_dir.as_ref().join(DB_FILE))?;
        let defaults = GreetingConfig::default();

        let (current, load_source) = match storage.load_document() {
            Ok(Some(bytes)) => match serde_json::from_slice::<ConfigPatch>(&bytes) {
                Ok(patch) => (reconcile(Some(&patch), &defaults), LoadSource::Stored),
                Err(e) => {
                    warn!("Stored config document is not decodable, using defaults: {e}");
                    (defaults, LoadSource::Fallback)
                }
            },
            Ok(None) => {
                info!("No config document found, seeding defaults");
                match Self::write_full(&storage, &defaults) {
                    Ok(()) => (defaults, LoadSource::Seeded),
                    Err(e) => {
                        // Seeding is retried implicitly by the next save
                        warn!("Could not seed default config document: {e}");
                        (defaults, LoadSource::Fallback)
                    }
                }
            }
            Err(e) => {
                warn!("Failed to read config document, using defaults: {e}");
                (defaults, LoadSource::Fallback)
            }
        };

        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            storage,
            current: Arc::new(RwLock::new(current)),
            event_tx,
            load_source,
        })
    }

    /// The reconciled current record.
    pub fn current(&self) -> GreetingConfig {
        self.current.read().clone()
    }

    /// Where the in-memory record came from when the store was opened.
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    /// Register for change notifications.
    ///
    /// New subscribers should read [`current`](Self::current) immediately,
    /// then react to [`ConfigEvent::Changed`] for every later update.
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigEvent> {
        self.event_tx.subscribe()
    }

    /// Merge a patch into the latest record and persist the result.
    ///
    /// Read-merge-write: the patch is merged against the latest in-memory
    /// record (not the defaults), and the full merged record is written
    /// back as a whole. The in-memory snapshot is only updated - and
    /// listeners only notified - after the write lands.
    pub fn save(&self, patch: ConfigPatch) -> ConfigResult<()> {
        let merged = {
            let current = self.current.read();
            reconcile(Some(&patch), &current)
        };

        Self::write_full(&self.storage, &merged)?;

        *self.current.write() = merged;
        // Send fails only when nobody is subscribed, which is fine
        let _ = self.event_tx.send(ConfigEvent::Changed);
        Ok(())
    }

    fn write_full(storage: &Storage, config: &GreetingConfig) -> ConfigResult<()> {
        let bytes = serde_json::to_vec(config)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        storage.save_document(&bytes)
    }
}
