//! Dynamic theme injection from the configured palette.
//!
//! Emits a style element mapping the six configured colors onto the CSS
//! custom properties the global stylesheet reads.

use dioxus::prelude::*;

use crate::context::use_greeting_config;
use crate::theme::theme_css;

/// Injects `:root` custom properties for the configured theme colors.
#[component]
pub fn ThemeOverride() -> Element {
    let config = use_greeting_config();
    let css = use_memo(move || theme_css(&config.read().theme));

    rsx! {
        style { "{css}" }
    }
}
