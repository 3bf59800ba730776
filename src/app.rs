use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::{get_data_dir, SharedStore};
use crate::pages::{Admin, Entry, Surprise};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Entry page with the configurable invitation
/// - `/surprise` - Countdown gate, then the unlocked greeting letter
/// - `/admin` - Password-protected settings form
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Entry {},
    #[route("/surprise")]
    Surprise {},
    #[route("/admin")]
    Admin {},
}

/// Root application component.
///
/// Provides global styles, config store context, and routing.
#[component]
pub fn App() -> Element {
    let store: Signal<SharedStore> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut store_ready: Signal<bool> = use_signal(|| false);

    // Provide store context to all child components
    use_context_provider(|| store);
    use_context_provider(|| store_ready);

    // Open the store on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            match everwish_core::ConfigStore::open(&data_dir) {
                Ok(opened) => {
                    let shared = store();
                    let mut guard = shared.write().await;
                    *guard = Some(opened);
                    drop(guard);
                    store_ready.set(true);
                    tracing::info!("ConfigStore opened");
                }
                Err(e) => {
                    // Database could not even be created; run on defaults
                    tracing::error!("Failed to open ConfigStore: {}", e);
                    store_ready.set(true);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
