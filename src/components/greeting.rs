//! The unlocked greeting: letter content, photos, cake and decorations.
//!
//! Which decorations render is decided per letter by its visibility
//! flags. Balloons appear when the recipient presses "Celebrate!".

use dioxus::prelude::*;
use everwish_core::{AudioRequest, GenerationClient, GreetingConfig, Letter};

use crate::components::{Balloons, Fireworks, Markdown, PhotoCarousel, Sparkles};

/// Props for the greeting display.
#[derive(Props, Clone, PartialEq)]
pub struct GreetingProps {
    pub config: GreetingConfig,
    /// The letter selected by the gate
    pub letter: Letter,
}

/// Full-viewport greeting for one unlocked letter.
#[component]
pub fn Greeting(props: GreetingProps) -> Element {
    let config = props.config.clone();
    let letter = props.letter.clone();

    let mut celebrating = use_signal(|| false);

    // Spoken rendition of the letter, fetched on demand
    let mut audio_url: Signal<Option<String>> = use_signal(|| None);
    let mut audio_pending = use_signal(|| false);

    let letter_text = letter.body.clone();
    let read_aloud = move |_| {
        let text = letter_text.clone();
        audio_pending.set(true);
        spawn(async move {
            let client = GenerationClient::new(crate::generation_base_url());
            match client.generate_audio(&AudioRequest { text }).await {
                Ok(audio) => audio_url.set(Some(audio.audio_url)),
                // The button stays available for another try
                Err(e) => tracing::warn!("Audio generation failed: {}", e),
            }
            audio_pending.set(false);
        });
    };

    let background_style = if config.background_image.is_empty() {
        String::new()
    } else {
        format!(
            "background-image: url('{}'); background-size: cover; background-position: center;",
            config.background_image
        )
    };

    rsx! {
        div { class: "greeting", style: "{background_style}",
            if letter.show_sparkles {
                Sparkles {}
            }
            if letter.show_fireworks {
                Fireworks {}
            }
            if celebrating() && letter.show_balloons {
                Balloons {}
            }

            div { class: "greeting-content",
                div { class: "card greeting-card",
                    h1 { class: "greeting-title", "{letter.title}" }
                    Markdown { content: letter.body.clone() }
                    if let Some(url) = audio_url() {
                        audio { src: "{url}", controls: true, autoplay: true }
                    } else {
                        button {
                            class: "btn btn-secondary",
                            disabled: audio_pending(),
                            onclick: read_aloud,
                            if audio_pending() { "Preparing..." } else { "Read it to me" }
                        }
                    }
                }

                if !config.photo_gallery.is_empty() {
                    PhotoCarousel { photos: config.photo_gallery.clone() }
                }

                if !celebrating() {
                    button {
                        class: "btn btn-primary btn-celebrate",
                        onclick: move |_| celebrating.set(true),
                        "Celebrate!"
                    }
                }
            }

            footer { class: "greeting-footer",
                div { class: "cake",
                    div { class: "cake-candle" }
                    div { class: "cake-top" }
                    div { class: "cake-base" }
                    p { class: "cake-text", "{config.cake_text}" }
                }
            }
        }
    }
}
