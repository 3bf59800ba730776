//! Password gate card: countdown plus magic-word prompt.
//!
//! The matching rule is identical before and after the unlock instant -
//! an early correct word is a "sneak peek". Only the prompt and button
//! labels change when the countdown finishes.

use dioxus::prelude::*;
use everwish_core::countdown::{self, CountdownState};
use everwish_core::{AccessGate, GateOutcome, GreetingConfig, Letter};

/// Props for the password gate.
#[derive(Props, Clone, PartialEq)]
pub struct PasswordGateProps {
    pub config: GreetingConfig,
    /// Called with the selected letter on a successful match
    pub on_unlock: EventHandler<Letter>,
}

/// The gate card shown until a magic word matches.
#[component]
pub fn PasswordGate(props: PasswordGateProps) -> Element {
    let config = props.config.clone();
    let on_unlock = props.on_unlock;

    let mut gate = use_signal(AccessGate::new);
    let mut input = use_signal(String::new);
    let mut mismatch = use_signal(|| false);
    let mut time_up = use_signal(|| {
        countdown::tick(chrono::Utc::now(), props.config.unlock_at).is_unlocked()
    });

    let letters = config.letters.clone();
    let submit = move |_| {
        let outcome = gate.write().submit(&input.read(), &letters);
        match outcome {
            GateOutcome::Unlocked(id) => {
                if let Some(letter) = letters.iter().find(|l| l.id == id) {
                    on_unlock.call(letter.clone());
                }
            }
            GateOutcome::Mismatch => {
                // Transient failure signal; the input is cleared
                mismatch.set(true);
                input.set(String::new());
            }
        }
    };

    let prompt = if time_up() {
        config.gate_prompt_now.clone()
    } else {
        config.gate_prompt_later.clone()
    };
    let button_label = if time_up() {
        config.gate_button_now.clone()
    } else {
        config.gate_button_later.clone()
    };

    rsx! {
        div { class: "card gate-card",
            h2 { class: "gate-title", "{config.gate_title}" }
            p { class: "gate-subtitle muted", "{config.gate_subtitle}" }

            if !time_up() {
                CountdownDisplayWrapper {
                    target: config.unlock_at,
                    timer_text: config.gate_timer_text.clone(),
                    on_unlocked: move |_| time_up.set(true),
                }
            }

            p { class: "gate-prompt", "{prompt}" }
            input {
                r#type: "password",
                class: "input gate-input",
                placeholder: "Magic word",
                aria_label: "Magic word for the surprise",
                value: "{input}",
                oninput: move |e| {
                    input.set(e.value());
                    mismatch.set(false);
                },
                onkeydown: {
                    let mut submit = submit.clone();
                    move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit(());
                        }
                    }
                },
            }
            if mismatch() {
                p { class: "form-error", "That's not the magic word. Please try again!" }
            }
            button {
                class: "btn btn-primary btn-wide",
                onclick: move |_| submit(()),
                "{button_label}"
            }
        }
    }
}

/// Thin wrapper binding the countdown's state callback to "time is up".
#[component]
fn CountdownDisplayWrapper(
    target: chrono::DateTime<chrono::Utc>,
    timer_text: String,
    on_unlocked: EventHandler<()>,
) -> Element {
    rsx! {
        crate::components::CountdownDisplay {
            target,
            timer_text,
            on_state: move |state: CountdownState| {
                if state.is_unlocked() {
                    on_unlocked.call(());
                }
            },
        }
    }
}
