//! Entry page - the first thing the recipient sees.
//!
//! A single configurable invitation card with a button leading to the
//! gate. All three texts come from the configuration record.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::ThemeOverride;
use crate::context::use_greeting_config;

/// Entry page component.
#[component]
pub fn Entry() -> Element {
    let navigator = use_navigator();
    let config = use_greeting_config();

    let begin = move |_| {
        navigator.push(Route::Surprise {});
    };

    rsx! {
        ThemeOverride {}
        main { class: "entry",
            div { class: "card entry-card",
                h1 { class: "entry-title", "{config().entry_title}" }
                p { class: "entry-subtitle", "{config().entry_subtitle}" }
                button {
                    class: "btn btn-primary btn-enter",
                    onclick: begin,
                    "{config().entry_button}"
                }
            }
        }
    }
}
