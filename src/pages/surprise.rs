//! Surprise page - countdown gate, then the unlocked letter.
//!
//! The gate holds session-lifetime state only: reloading the page locks
//! the surprise again. Which letter is shown is decided by the magic word
//! the recipient entered.

use dioxus::prelude::*;
use everwish_core::Letter;

use crate::components::{Greeting, PasswordGate, ThemeOverride};
use crate::context::use_greeting_config;

/// Surprise page component.
#[component]
pub fn Surprise() -> Element {
    let config = use_greeting_config();

    // Session state: the letter unlocked by the gate, if any
    let mut unlocked: Signal<Option<Letter>> = use_signal(|| None);

    rsx! {
        ThemeOverride {}
        main { class: "surprise",
            if let Some(letter) = unlocked() {
                Greeting { config: config(), letter }
            } else {
                PasswordGate {
                    config: config(),
                    on_unlock: move |letter: Letter| unlocked.set(Some(letter)),
                }
            }
        }
    }
}
