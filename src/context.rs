//! Config store context provider for Everwish.
//!
//! Provides the ConfigStore instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let store = use_store();
//! let ready = use_store_ready();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use everwish_core::ConfigStore;
use tokio::sync::RwLock;

/// Shared store type for context.
///
/// Wrapped in Arc<RwLock<>> so components can read concurrently and the
/// app shell can set it once opening finishes.
pub type SharedStore = Arc<RwLock<Option<ConfigStore>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the ConfigStore from context.
pub fn use_store() -> Signal<SharedStore> {
    use_context::<Signal<SharedStore>>()
}

/// Hook to check if the store has finished opening.
///
/// True even when the store fell back to the default record - a read
/// failure never blocks the UI.
pub fn use_store_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook providing a live view of the configuration record.
///
/// Starts from the default record, snaps to the stored record once the
/// store is ready, and follows every accepted save. The subscription task
/// is scoped to the calling component and cancelled on unmount, so no
/// stale callback outlives its page.
pub fn use_greeting_config() -> Signal<everwish_core::GreetingConfig> {
    let store = use_store();
    let store_ready = use_store_ready();
    let mut config = use_signal(everwish_core::GreetingConfig::default);

    use_effect(move || {
        if store_ready() {
            spawn(async move {
                let shared = store();
                let opened = shared.read().await.clone();
                let Some(st) = opened else { return };

                config.set(st.current());

                let mut events = st.subscribe();
                loop {
                    match events.recv().await {
                        Ok(everwish_core::ConfigEvent::Changed) => config.set(st.current()),
                        // Missed events still leave current() authoritative
                        Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {
                            config.set(st.current())
                        }
                        Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                    }
                }
            });
        }
    });

    config
}
