//! Reconciliation of partial stored records against defaults
//!
//! The persisted document may be missing any number of fields (older
//! schema, partial admin write, freshly seeded store). [`reconcile`]
//! overlays the stored record onto a complete base record so every field
//! the UI depends on is always present.

use serde::{Deserialize, Serialize};

use crate::types::{GreetingConfig, Letter, ThemeColors};

/// A partially populated configuration record
///
/// Every top-level field is optional; absent fields keep the base value.
/// List-valued fields (`letters`, `photo_gallery`) are replaced wholesale,
/// never merged element-wise - mixing partial array updates is a known
/// corruption class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letters: Option<Vec<Letter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_gallery: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_button: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_timer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_prompt_now: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_prompt_later: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_button_now: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_button_later: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cake_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeColors>,
}

impl From<&GreetingConfig> for ConfigPatch {
    /// A fully populated patch carrying every field of `config`
    fn from(config: &GreetingConfig) -> Self {
        Self {
            unlock_at: Some(config.unlock_at),
            timezone: Some(config.timezone.clone()),
            admin_password: Some(config.admin_password.clone()),
            letters: Some(config.letters.clone()),
            background_image: Some(config.background_image.clone()),
            photo_gallery: Some(config.photo_gallery.clone()),
            entry_title: Some(config.entry_title.clone()),
            entry_subtitle: Some(config.entry_subtitle.clone()),
            entry_button: Some(config.entry_button.clone()),
            gate_title: Some(config.gate_title.clone()),
            gate_subtitle: Some(config.gate_subtitle.clone()),
            gate_timer_text: Some(config.gate_timer_text.clone()),
            gate_prompt_now: Some(config.gate_prompt_now.clone()),
            gate_prompt_later: Some(config.gate_prompt_later.clone()),
            gate_button_now: Some(config.gate_button_now.clone()),
            gate_button_later: Some(config.gate_button_later.clone()),
            cake_text: Some(config.cake_text.clone()),
            theme: Some(config.theme.clone()),
        }
    }
}

/// Overlay a possibly-partial stored record onto a complete base record.
///
/// Shallow merge, key by key: a field present in `stored` wins, an absent
/// field keeps the base value. Pure and idempotent.
///
/// Post-condition: the result always has at least one active letter. A
/// patch that would leave zero active letters keeps the base letter set
/// instead.
pub fn reconcile(stored: Option<&ConfigPatch>, base: &GreetingConfig) -> GreetingConfig {
    let mut result = base.clone();

    if let Some(patch) = stored {
        if let Some(v) = patch.unlock_at {
            result.unlock_at = v;
        }
        if let Some(ref v) = patch.timezone {
            result.timezone = v.clone();
        }
        if let Some(ref v) = patch.admin_password {
            result.admin_password = v.clone();
        }
        if let Some(ref v) = patch.letters {
            result.letters = v.clone();
        }
        if let Some(ref v) = patch.background_image {
            result.background_image = v.clone();
        }
        if let Some(ref v) = patch.photo_gallery {
            result.photo_gallery = v.clone();
        }
        if let Some(ref v) = patch.entry_title {
            result.entry_title = v.clone();
        }
        if let Some(ref v) = patch.entry_subtitle {
            result.entry_subtitle = v.clone();
        }
        if let Some(ref v) = patch.entry_button {
            result.entry_button = v.clone();
        }
        if let Some(ref v) = patch.gate_title {
            result.gate_title = v.clone();
        }
        if let Some(ref v) = patch.gate_subtitle {
            result.gate_subtitle = v.clone();
        }
        if let Some(ref v) = patch.gate_timer_text {
            result.gate_timer_text = v.clone();
        }
        if let Some(ref v) = patch.gate_prompt_now {
            result.gate_prompt_now = v.clone();
        }
        if let Some(ref v) = patch.gate_prompt_later {
            result.gate_prompt_later = v.clone();
        }
        if let Some(ref v) = patch.gate_button_now {
            result.gate_button_now = v.clone();
        }
        if let Some(ref v) = patch.gate_button_later {
            result.gate_button_later = v.clone();
        }
        if let Some(ref v) = patch.cake_text {
            result.cake_text = v.clone();
        }
        if let Some(ref v) = patch.theme {
            result.theme = v.clone();
        }
    }

    // Invariant: at least one letter exists and is active
    if result.active_letters().count() == 0 {
        result.letters = base_letter_set(base);
    }

    result
}

/// The letter set to fall back to when a record has no active letters.
///
/// Uses the base set when it satisfies the invariant itself, otherwise
/// the static default set.
fn base_letter_set(base: &GreetingConfig) -> Vec<Letter> {
    if base.active_letters().count() > 0 {
        base.letters.clone()
    } else {
        GreetingConfig::default().letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_yields_base() {
        let base = GreetingConfig::default();
        let result = reconcile(Some(&ConfigPatch::default()), &base);
        assert_eq!(result, base);
    }

    #[test]
    fn test_no_stored_record_yields_base() {
        let base = GreetingConfig::default();
        assert_eq!(reconcile(None, &base), base);
    }

    #[test]
    fn test_present_fields_win() {
        let base = GreetingConfig::default();
        let patch = ConfigPatch {
            entry_title: Some("Surprise!".to_string()),
            cake_text: Some("Make a wish".to_string()),
            ..Default::default()
        };
        let result = reconcile(Some(&patch), &base);
        assert_eq!(result.entry_title, "Surprise!");
        assert_eq!(result.cake_text, "Make a wish");
        // Untouched fields keep the base value
        assert_eq!(result.gate_title, base.gate_title);
        assert_eq!(result.timezone, base.timezone);
    }

    #[test]
    fn test_letters_replaced_wholesale() {
        let mut base = GreetingConfig::default();
        base.letters.push(Letter::new("rose", "Second", "body"));

        let replacement = vec![Letter::new("sunflower", "Only", "body")];
        let patch = ConfigPatch {
            letters: Some(replacement.clone()),
            ..Default::default()
        };
        let result = reconcile(Some(&patch), &base);
        assert_eq!(result.letters, replacement);
    }

    #[test]
    fn test_photo_gallery_replaced_wholesale() {
        let mut base = GreetingConfig::default();
        base.photo_gallery = vec!["a.png".into(), "b.png".into()];

        let patch = ConfigPatch {
            photo_gallery: Some(vec!["c.png".into()]),
            ..Default::default()
        };
        let result = reconcile(Some(&patch), &base);
        assert_eq!(result.photo_gallery, vec!["c.png".to_string()]);
    }

    #[test]
    fn test_empty_letters_fall_back_to_base_set() {
        let base = GreetingConfig::default();
        let patch = ConfigPatch {
            letters: Some(vec![]),
            ..Default::default()
        };
        let result = reconcile(Some(&patch), &base);
        assert_eq!(result.letters, base.letters);
        assert!(result.active_letters().count() > 0);
    }

    #[test]
    fn test_all_inactive_letters_fall_back_to_base_set() {
        let base = GreetingConfig::default();
        let mut inactive = Letter::new("word", "Title", "body");
        inactive.active = false;
        let patch = ConfigPatch {
            letters: Some(vec![inactive]),
            ..Default::default()
        };
        let result = reconcile(Some(&patch), &base);
        assert_eq!(result.letters, base.letters);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let base = GreetingConfig::default();
        let patch = ConfigPatch {
            entry_title: Some("Once".to_string()),
            letters: Some(vec![Letter::new("w", "T", "b")]),
            ..Default::default()
        };
        let once = reconcile(Some(&patch), &base);
        let twice = reconcile(Some(&ConfigPatch::from(&once)), &base);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_stored_fields_are_ignored() {
        // Records written by older/newer app versions may carry extra keys
        let json = r#"{"entry_title":"Hi","legacy_field":42}"#;
        let patch: ConfigPatch = serde_json::from_str(json).unwrap();
        assert_eq!(patch.entry_title.as_deref(), Some("Hi"));
    }
}
