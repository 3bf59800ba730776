//! Admin settings form.
//!
//! Edits every customizable part of the surprise through the config
//! store: unlock schedule, letters, labels, gallery and theme. The form
//! loads the stored record once, edits locally, and saves with a single
//! full patch - the store merges it against the latest state and writes
//! the full record back.
//!
//! The unlock time is edited as wall-clock fields in a chosen timezone
//! and converted to the stored absolute instant on save; the inverse
//! conversion populates the fields on load.

use chrono::NaiveDate;
use dioxus::prelude::*;
use everwish_core::schedule::{parse_timezone, to_absolute, to_editable, COMMON_TIMEZONES};
use everwish_core::{
    ConfigPatch, EditableUnlock, GenerationClient, ImageRequest, Letter, LetterId, TextRequest,
    ThemeColors,
};

use crate::context::{use_greeting_config, use_store, use_store_ready};

use crate::generation_base_url;

/// One-line save/generation feedback under the form
#[derive(Clone, PartialEq)]
struct StatusLine {
    error: bool,
    text: String,
}

/// Editable mirror of a letter
#[derive(Clone, PartialEq)]
struct LetterDraft {
    id: LetterId,
    magic_word: String,
    title: String,
    body: String,
    show_balloons: bool,
    show_fireworks: bool,
    show_sparkles: bool,
    active: bool,
}

impl From<&Letter> for LetterDraft {
    fn from(letter: &Letter) -> Self {
        Self {
            id: letter.id.clone(),
            magic_word: letter.magic_word.clone(),
            title: letter.title.clone(),
            body: letter.body.clone(),
            show_balloons: letter.show_balloons,
            show_fireworks: letter.show_fireworks,
            show_sparkles: letter.show_sparkles,
            active: letter.active,
        }
    }
}

impl LetterDraft {
    fn blank() -> Self {
        Self::from(&Letter::new("", "", ""))
    }

    fn into_letter(self) -> Letter {
        Letter {
            id: self.id,
            magic_word: self.magic_word,
            title: self.title,
            body: self.body,
            show_balloons: self.show_balloons,
            show_fireworks: self.show_fireworks,
            show_sparkles: self.show_sparkles,
            active: self.active,
        }
    }
}

/// The admin settings form; rendered only after admin login.
#[component]
pub fn AdminForm() -> Element {
    let store = use_store();
    let store_ready = use_store_ready();
    let config = use_greeting_config();

    // Unlock schedule
    let mut date = use_signal(String::new);
    let mut hour = use_signal(String::new);
    let mut minute = use_signal(String::new);
    let mut timezone = use_signal(|| "America/New_York".to_string());

    // Security
    let mut admin_password = use_signal(String::new);

    // Entry page
    let mut entry_title = use_signal(String::new);
    let mut entry_subtitle = use_signal(String::new);
    let mut entry_button = use_signal(String::new);

    // Gate page
    let mut gate_title = use_signal(String::new);
    let mut gate_subtitle = use_signal(String::new);
    let mut gate_timer_text = use_signal(String::new);
    let mut gate_prompt_now = use_signal(String::new);
    let mut gate_prompt_later = use_signal(String::new);
    let mut gate_button_now = use_signal(String::new);
    let mut gate_button_later = use_signal(String::new);

    // Greeting page
    let mut letters: Signal<Vec<LetterDraft>> = use_signal(Vec::new);
    let mut background_image = use_signal(String::new);
    let mut photo_gallery = use_signal(String::new);
    let mut cake_text = use_signal(String::new);
    let mut theme = use_signal(ThemeColors::default);

    // AI helper inputs
    let mut ai_name = use_signal(String::new);
    let mut ai_style = use_signal(String::new);
    let mut ai_image_prompt = use_signal(String::new);

    let mut status: Signal<Option<StatusLine>> = use_signal(|| None);
    let mut form_loaded = use_signal(|| false);

    // Populate the form from the stored record, once
    use_effect(move || {
        if store_ready() && !*form_loaded.peek() {
            let cfg = config();
            let tz = parse_timezone(&cfg.timezone).unwrap_or(chrono_tz::America::New_York);
            let edit = to_editable(cfg.unlock_at, tz);

            date.set(edit.date.format("%Y-%m-%d").to_string());
            hour.set(edit.hour.to_string());
            minute.set(edit.minute.to_string());
            timezone.set(cfg.timezone.clone());

            admin_password.set(cfg.admin_password.clone());
            entry_title.set(cfg.entry_title.clone());
            entry_subtitle.set(cfg.entry_subtitle.clone());
            entry_button.set(cfg.entry_button.clone());
            gate_title.set(cfg.gate_title.clone());
            gate_subtitle.set(cfg.gate_subtitle.clone());
            gate_timer_text.set(cfg.gate_timer_text.clone());
            gate_prompt_now.set(cfg.gate_prompt_now.clone());
            gate_prompt_later.set(cfg.gate_prompt_later.clone());
            gate_button_now.set(cfg.gate_button_now.clone());
            gate_button_later.set(cfg.gate_button_later.clone());

            letters.set(cfg.letters.iter().map(LetterDraft::from).collect());
            background_image.set(cfg.background_image.clone());
            photo_gallery.set(cfg.photo_gallery.join("\n"));
            cake_text.set(cfg.cake_text.clone());
            theme.set(cfg.theme.clone());

            form_loaded.set(true);
        }
    });

    // Save handler: validate, convert the schedule, write one full patch
    let save = move |_| {
        let tz = match parse_timezone(&timezone.read()) {
            Ok(tz) => tz,
            Err(e) => {
                status.set(Some(StatusLine { error: true, text: e.to_string() }));
                return;
            }
        };
        let parsed_date = match NaiveDate::parse_from_str(&date.read(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                status.set(Some(StatusLine {
                    error: true,
                    text: "Date must be in YYYY-MM-DD form.".to_string(),
                }));
                return;
            }
        };
        let (Ok(edit_hour), Ok(edit_minute)) =
            (hour.read().trim().parse::<u32>(), minute.read().trim().parse::<u32>())
        else {
            status.set(Some(StatusLine {
                error: true,
                text: "Hour and minute must be numbers.".to_string(),
            }));
            return;
        };

        let unlock_at = match to_absolute(
            &EditableUnlock { date: parsed_date, hour: edit_hour, minute: edit_minute },
            tz,
        ) {
            Ok(instant) => instant,
            Err(e) => {
                status.set(Some(StatusLine { error: true, text: e.to_string() }));
                return;
            }
        };

        let gallery: Vec<String> = photo_gallery
            .read()
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        let patch = ConfigPatch {
            unlock_at: Some(unlock_at),
            timezone: Some(timezone.read().clone()),
            admin_password: Some(admin_password.read().clone()),
            letters: Some(
                letters
                    .read()
                    .iter()
                    .cloned()
                    .map(LetterDraft::into_letter)
                    .collect(),
            ),
            background_image: Some(background_image.read().clone()),
            photo_gallery: Some(gallery),
            entry_title: Some(entry_title.read().clone()),
            entry_subtitle: Some(entry_subtitle.read().clone()),
            entry_button: Some(entry_button.read().clone()),
            gate_title: Some(gate_title.read().clone()),
            gate_subtitle: Some(gate_subtitle.read().clone()),
            gate_timer_text: Some(gate_timer_text.read().clone()),
            gate_prompt_now: Some(gate_prompt_now.read().clone()),
            gate_prompt_later: Some(gate_prompt_later.read().clone()),
            gate_button_now: Some(gate_button_now.read().clone()),
            gate_button_later: Some(gate_button_later.read().clone()),
            cake_text: Some(cake_text.read().clone()),
            theme: Some(theme.read().clone()),
        };

        spawn(async move {
            let shared = store();
            let guard = shared.read().await;
            let Some(ref st) = *guard else {
                status.set(Some(StatusLine {
                    error: true,
                    text: "Settings storage is unavailable.".to_string(),
                }));
                return;
            };
            match st.save(patch) {
                Ok(()) => status.set(Some(StatusLine {
                    error: false,
                    text: "Your settings have been saved.".to_string(),
                })),
                Err(e) => {
                    tracing::error!("Failed to save settings: {}", e);
                    status.set(Some(StatusLine {
                        error: true,
                        text: format!("Could not save settings: {}", e),
                    }));
                }
            }
        });
    };

    // Generate title/poem for one letter; prior values stay on failure
    let generate_letter_text = move |index: usize| {
        let request = TextRequest {
            name: ai_name.read().clone(),
            style_prompt: ai_style.read().clone(),
        };
        spawn(async move {
            let client = GenerationClient::new(generation_base_url());
            match client.generate_text(&request).await {
                Ok(text) => {
                    let mut drafts = letters.write();
                    if let Some(draft) = drafts.get_mut(index) {
                        draft.title = text.title;
                        draft.body = text.poem;
                    }
                    status.set(Some(StatusLine {
                        error: false,
                        text: "Generated a new title and poem.".to_string(),
                    }));
                }
                Err(e) => {
                    tracing::warn!("Text generation failed: {}", e);
                    status.set(Some(StatusLine {
                        error: true,
                        text: format!("Text generation failed, try again: {}", e),
                    }));
                }
            }
        });
    };

    let generate_background = move |_| {
        let request = ImageRequest {
            prompt: ai_image_prompt.read().clone(),
        };
        spawn(async move {
            let client = GenerationClient::new(generation_base_url());
            match client.generate_image(&request).await {
                Ok(image) => {
                    background_image.set(image.image_url);
                    status.set(Some(StatusLine {
                        error: false,
                        text: "Generated a new background image.".to_string(),
                    }));
                }
                Err(e) => {
                    tracing::warn!("Image generation failed: {}", e);
                    status.set(Some(StatusLine {
                        error: true,
                        text: format!("Image generation failed, try again: {}", e),
                    }));
                }
            }
        });
    };

    rsx! {
        div { class: "card admin-form",
            h2 { "Admin Settings" }
            p { class: "muted", "Customize every part of the birthday surprise here." }

            section {
                h3 { "Security" }
                FormField { label: "Admin Page Password",
                    input {
                        r#type: "password", class: "input",
                        value: "{admin_password}",
                        oninput: move |e| admin_password.set(e.value()),
                    }
                }
            }

            section {
                h3 { "Unlock Schedule" }
                FormField { label: "Date (YYYY-MM-DD)",
                    input {
                        class: "input", value: "{date}",
                        oninput: move |e| date.set(e.value()),
                    }
                }
                div { class: "form-row",
                    FormField { label: "Hour (0-23)",
                        input {
                            r#type: "number", min: "0", max: "23", class: "input",
                            value: "{hour}",
                            oninput: move |e| hour.set(e.value()),
                        }
                    }
                    FormField { label: "Minute (0-59)",
                        input {
                            r#type: "number", min: "0", max: "59", class: "input",
                            value: "{minute}",
                            oninput: move |e| minute.set(e.value()),
                        }
                    }
                }
                FormField { label: "Timezone (Daylight Saving handled automatically)",
                    select {
                        class: "input",
                        value: "{timezone}",
                        onchange: move |e| timezone.set(e.value()),
                        for tz in COMMON_TIMEZONES {
                            option { value: "{tz}", selected: *timezone.read() == *tz, "{tz}" }
                        }
                    }
                }
            }

            section {
                h3 { "Entry Page" }
                FormField { label: "Title",
                    input { class: "input", value: "{entry_title}",
                        oninput: move |e| entry_title.set(e.value()) }
                }
                FormField { label: "Subtitle",
                    input { class: "input", value: "{entry_subtitle}",
                        oninput: move |e| entry_subtitle.set(e.value()) }
                }
                FormField { label: "Button Text",
                    input { class: "input", value: "{entry_button}",
                        oninput: move |e| entry_button.set(e.value()) }
                }
            }

            section {
                h3 { "Password Gate" }
                FormField { label: "Title",
                    input { class: "input", value: "{gate_title}",
                        oninput: move |e| gate_title.set(e.value()) }
                }
                FormField { label: "Subtitle",
                    input { class: "input", value: "{gate_subtitle}",
                        oninput: move |e| gate_subtitle.set(e.value()) }
                }
                FormField { label: "Countdown Text",
                    input { class: "input", value: "{gate_timer_text}",
                        oninput: move |e| gate_timer_text.set(e.value()) }
                }
                FormField { label: "Early Peek Prompt",
                    input { class: "input", value: "{gate_prompt_later}",
                        oninput: move |e| gate_prompt_later.set(e.value()) }
                }
                FormField { label: "Early Peek Button Text",
                    input { class: "input", value: "{gate_button_later}",
                        oninput: move |e| gate_button_later.set(e.value()) }
                }
                FormField { label: "Unlock Prompt",
                    input { class: "input", value: "{gate_prompt_now}",
                        oninput: move |e| gate_prompt_now.set(e.value()) }
                }
                FormField { label: "Unlock Button Text",
                    input { class: "input", value: "{gate_button_now}",
                        oninput: move |e| gate_button_now.set(e.value()) }
                }
            }

            section {
                h3 { "AI Helper" }
                p { class: "muted", "Used by the per-letter and background generation buttons." }
                div { class: "form-row",
                    FormField { label: "Recipient Name",
                        input { class: "input", value: "{ai_name}",
                            oninput: move |e| ai_name.set(e.value()) }
                    }
                    FormField { label: "Style",
                        input { class: "input", placeholder: "magical and elegant",
                            value: "{ai_style}",
                            oninput: move |e| ai_style.set(e.value()) }
                    }
                }
            }

            section {
                h3 { "Letters" }
                for (i, draft) in letters.read().iter().cloned().enumerate() {
                    div { class: "letter-editor", key: "{draft.id}",
                        div { class: "form-row",
                            FormField { label: "Magic Word",
                                input { class: "input", value: "{draft.magic_word}",
                                    oninput: move |e| letters.write()[i].magic_word = e.value() }
                            }
                            FormField { label: "Title",
                                input { class: "input", value: "{draft.title}",
                                    oninput: move |e| letters.write()[i].title = e.value() }
                            }
                        }
                        FormField { label: "Letter (markdown)",
                            textarea { class: "input textarea", value: "{draft.body}",
                                oninput: move |e| letters.write()[i].body = e.value() }
                        }
                        div { class: "form-row checkboxes",
                            CheckboxField { label: "Balloons", checked: draft.show_balloons,
                                on_toggle: move |v| letters.write()[i].show_balloons = v }
                            CheckboxField { label: "Fireworks", checked: draft.show_fireworks,
                                on_toggle: move |v| letters.write()[i].show_fireworks = v }
                            CheckboxField { label: "Sparkles", checked: draft.show_sparkles,
                                on_toggle: move |v| letters.write()[i].show_sparkles = v }
                            CheckboxField { label: "Active", checked: draft.active,
                                on_toggle: move |v| letters.write()[i].active = v }
                        }
                        div { class: "form-row",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| generate_letter_text(i),
                                "Generate title & poem"
                            }
                            button {
                                class: "btn btn-danger",
                                disabled: letters.read().len() == 1,
                                onclick: move |_| { letters.write().remove(i); },
                                "Remove letter"
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| letters.write().push(LetterDraft::blank()),
                    "+ Add letter"
                }
            }

            section {
                h3 { "Greeting Page" }
                FormField { label: "Background Image URL (empty for plain color)",
                    input { class: "input", value: "{background_image}",
                        oninput: move |e| background_image.set(e.value()) }
                }
                div { class: "form-row",
                    FormField { label: "Background Prompt",
                        input { class: "input", placeholder: "sunflowers at golden hour",
                            value: "{ai_image_prompt}",
                            oninput: move |e| ai_image_prompt.set(e.value()) }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: generate_background,
                        "Generate background"
                    }
                }
                FormField { label: "Photo Gallery URLs (one per line)",
                    textarea { class: "input textarea", value: "{photo_gallery}",
                        oninput: move |e| photo_gallery.set(e.value()) }
                }
                FormField { label: "Cake Message",
                    input { class: "input", value: "{cake_text}",
                        oninput: move |e| cake_text.set(e.value()) }
                }
            }

            section {
                h3 { "Theme Colors" }
                div { class: "form-row",
                    ColorField { label: "Primary", value: theme.read().primary.clone(),
                        on_change: move |v| theme.write().primary = v }
                    ColorField { label: "Accent", value: theme.read().accent.clone(),
                        on_change: move |v| theme.write().accent = v }
                    ColorField { label: "Background", value: theme.read().background.clone(),
                        on_change: move |v| theme.write().background = v }
                }
                div { class: "form-row",
                    ColorField { label: "Foreground", value: theme.read().foreground.clone(),
                        on_change: move |v| theme.write().foreground = v }
                    ColorField { label: "Card", value: theme.read().card.clone(),
                        on_change: move |v| theme.write().card = v }
                    ColorField { label: "Border", value: theme.read().border.clone(),
                        on_change: move |v| theme.write().border = v }
                }
            }

            if let Some(line) = status() {
                p { class: if line.error { "form-error" } else { "form-success" }, "{line.text}" }
            }

            button { class: "btn btn-primary btn-wide", onclick: save, "Save All Settings" }
        }
    }
}

/// Labeled form field wrapper.
#[component]
fn FormField(label: String, children: Element) -> Element {
    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{label}" }
            {children}
        }
    }
}

#[component]
fn CheckboxField(label: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "checkbox-field",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |e| on_toggle.call(e.checked()),
            }
            span { "{label}" }
        }
    }
}

#[component]
fn ColorField(label: String, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        label { class: "form-field color-field",
            span { class: "form-label", "{label}" }
            input {
                r#type: "color",
                value: "{value}",
                onchange: move |e| on_change.call(e.value()),
            }
        }
    }
}
