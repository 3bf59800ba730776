//! Decorative animation layers: balloons, fireworks, sparkles.
//!
//! Pure CSS animations; each layer is a fixed set of elements with
//! staggered delays and positions. Visibility is decided per letter by
//! its decoration flags.

use dioxus::prelude::*;

const BALLOON_COLORS: &[&str] = &["#f56e88", "#f5b3c2", "#ffd166", "#8ecae6", "#b5e48c"];

/// Floating balloons, rendered while celebrating.
#[component]
pub fn Balloons() -> Element {
    rsx! {
        div { class: "decoration-layer balloons", aria_hidden: "true",
            for i in 0..10usize {
                div {
                    key: "{i}",
                    class: "balloon",
                    style: format!(
                        "left: {}%; animation-delay: {}ms; background: {};",
                        5 + i * 9,
                        i * 400,
                        BALLOON_COLORS[i % BALLOON_COLORS.len()],
                    ),
                }
            }
        }
    }
}

/// Firework bursts around the card edges.
#[component]
pub fn Fireworks() -> Element {
    rsx! {
        div { class: "decoration-layer fireworks", aria_hidden: "true",
            for i in 0..6usize {
                div {
                    key: "{i}",
                    class: "firework",
                    style: format!(
                        "left: {}%; top: {}%; animation-delay: {}ms;",
                        10 + i * 15,
                        8 + (i % 3) * 12,
                        i * 700,
                    ),
                }
            }
        }
    }
}

/// Gentle sparkle twinkle across the page.
#[component]
pub fn Sparkles() -> Element {
    rsx! {
        div { class: "decoration-layer sparkles", aria_hidden: "true",
            for i in 0..14usize {
                div {
                    key: "{i}",
                    class: "sparkle",
                    style: format!(
                        "left: {}%; top: {}%; animation-delay: {}ms;",
                        (i * 37) % 95,
                        (i * 23) % 90,
                        i * 250,
                    ),
                }
            }
        }
    }
}
