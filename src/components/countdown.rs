//! Countdown display driven by a one-second tick.
//!
//! The tick loop lives in a task scoped to this component, so unmounting
//! the gate cancels the timer - no leaked intervals mutating torn-down
//! state. The arithmetic itself is `everwish_core::countdown::tick`, a
//! pure function re-evaluated with a fresh `now` each second.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use everwish_core::countdown::{self, CountdownState};

/// Props for the countdown display.
#[derive(Props, Clone, PartialEq)]
pub struct CountdownDisplayProps {
    /// Absolute unlock instant to count toward
    pub target: DateTime<Utc>,
    /// Label shown above the digits (configurable "The magic awakens in:")
    pub timer_text: String,
    /// Notified whenever the evaluated state flips between locked/unlocked
    pub on_state: EventHandler<CountdownState>,
}

/// Days/hours/minutes/seconds remaining until the target instant.
#[component]
pub fn CountdownDisplay(props: CountdownDisplayProps) -> Element {
    let target = props.target;
    let mut state = use_signal(|| countdown::tick(Utc::now(), target));

    let on_state = props.on_state;
    use_effect(use_reactive!(|target| {
        spawn(async move {
            loop {
                let next = countdown::tick(Utc::now(), target);
                if next != *state.peek() {
                    state.set(next);
                    on_state.call(next);
                }
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            }
        });
    }));

    match state() {
        CountdownState::Unlocked => rsx! {
            div { class: "countdown countdown-done" }
        },
        CountdownState::Counting {
            days,
            hours,
            minutes,
            seconds,
        } => rsx! {
            div { class: "countdown",
                p { class: "countdown-label", "{props.timer_text}" }
                div { class: "countdown-digits",
                    CountdownUnit { value: days, label: "days" }
                    CountdownUnit { value: hours, label: "hours" }
                    CountdownUnit { value: minutes, label: "minutes" }
                    CountdownUnit { value: seconds, label: "seconds" }
                }
            }
        },
    }
}

#[component]
fn CountdownUnit(value: i64, label: &'static str) -> Element {
    rsx! {
        div { class: "countdown-unit",
            div { class: "countdown-value", "{value:02}" }
            div { class: "countdown-unit-label", "{label}" }
        }
    }
}
