//! Core types for Everwish
//!
//! The configuration record is a single persisted document describing all
//! customizable surprise content and timing. Every field has a statically
//! known default, so a partially populated stored record can always be
//! completed by overlaying it onto [`GreetingConfig::default()`].

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a letter
///
/// Uses ULID for time-ordered unique identifiers that sort lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterId(pub Ulid);

impl LetterId {
    /// Create a new LetterId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

impl Default for LetterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LetterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "letter_{}", self.0)
    }
}

fn default_true() -> bool {
    true
}

/// A single greeting letter behind its own magic word
///
/// Decoration flags are required booleans defaulting to `true`; a stored
/// record that omits them deserializes to the visible state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    /// Unique identifier for the letter
    pub id: LetterId,
    /// Password unlocking this letter's content
    pub magic_word: String,
    /// Headline shown above the letter body
    pub title: String,
    /// Letter body, markdown
    pub body: String,
    /// Show the balloon animation on this letter
    #[serde(default = "default_true")]
    pub show_balloons: bool,
    /// Show the fireworks animation on this letter
    #[serde(default = "default_true")]
    pub show_fireworks: bool,
    /// Show the sparkle animation on this letter
    #[serde(default = "default_true")]
    pub show_sparkles: bool,
    /// Inactive letters are kept in the record but excluded from matching
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Letter {
    /// Create a new active letter with all decorations enabled
    pub fn new(
        magic_word: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: LetterId::new(),
            magic_word: magic_word.into(),
            title: title.into(),
            body: body.into(),
            show_balloons: true,
            show_fireworks: true,
            show_sparkles: true,
            active: true,
        }
    }
}

/// Optional theme color overrides, hex values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub border: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#f56e88".to_string(),
            accent: "#f5b3c2".to_string(),
            background: "#f9f8f6".to_string(),
            foreground: "#4a4540".to_string(),
            card: "#ffffff".to_string(),
            border: "#efd9de".to_string(),
        }
    }
}

/// The complete configuration record
///
/// `unlock_at` is an absolute, zone-independent instant. The `timezone`
/// field is metadata for display/edit-time conversion only and is never
/// used to interpret the stored instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Absolute instant after which the gate switches to its unlock prompt
    pub unlock_at: DateTime<Utc>,
    /// IANA timezone id used when editing the unlock time
    pub timezone: String,
    /// Password for the admin settings page
    pub admin_password: String,
    /// Letters, each behind its own magic word
    pub letters: Vec<Letter>,
    /// Background image URL for the greeting page (empty for plain color)
    pub background_image: String,
    /// Ordered photo URLs for the carousel
    pub photo_gallery: Vec<String>,

    // Entry page
    pub entry_title: String,
    pub entry_subtitle: String,
    pub entry_button: String,

    // Gate page
    pub gate_title: String,
    pub gate_subtitle: String,
    pub gate_timer_text: String,
    pub gate_prompt_now: String,
    pub gate_prompt_later: String,
    pub gate_button_now: String,
    pub gate_button_later: String,

    /// Short message shown on the cake
    pub cake_text: String,
    /// Theme color overrides
    pub theme: ThemeColors,
}

impl GreetingConfig {
    /// Letters currently eligible for magic-word matching
    pub fn active_letters(&self) -> impl Iterator<Item = &Letter> {
        self.letters.iter().filter(|l| l.active)
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            unlock_at: Utc.with_ymd_and_hms(2025, 8, 17, 0, 0, 0).unwrap(),
            timezone: "America/New_York".to_string(),
            admin_password: "admin123".to_string(),
            letters: vec![Letter::new(
                "Best Friend",
                "Happy Birthday, Mira!",
                "Of all the stars in the night sky,\nyours is the one that shines most high.\n\
                 Through every chapter, laugh, and tear,\nyou grow more wonderful each year.\n\
                 May all your wishes, big and small,\ncome true today, have a ball!",
            )],
            background_image: String::new(),
            photo_gallery: Vec::new(),
            entry_title: "A Surprise for Mira".to_string(),
            entry_subtitle: "Click below to begin the magical celebration!".to_string(),
            entry_button: "Click to Enter".to_string(),
            gate_title: "Mira's Magical Birthday".to_string(),
            gate_subtitle: "A special surprise is waiting...".to_string(),
            gate_timer_text: "The magic awakens in:".to_string(),
            gate_prompt_now: "The time has come! Enter the magic word to unlock the surprise."
                .to_string(),
            gate_prompt_later: "Can't wait? Enter the magic word to get a sneak peek!".to_string(),
            gate_button_now: "Unlock Surprise".to_string(),
            gate_button_later: "Sneak a Peek".to_string(),
            cake_text: "Thank You!".to_string(),
            theme: ThemeColors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_id_new() {
        let id1 = LetterId::new();
        let id2 = LetterId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_letter_id_display() {
        let id = LetterId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("letter_"));
    }

    #[test]
    fn test_letter_creation() {
        let letter = Letter::new("rosebud", "Surprise", "Dear friend...");
        assert_eq!(letter.magic_word, "rosebud");
        assert!(letter.active);
        assert!(letter.show_balloons);
        assert!(letter.show_fireworks);
        assert!(letter.show_sparkles);
    }

    #[test]
    fn test_decoration_flags_default_to_visible() {
        // A record written before the flags existed omits them entirely
        let json = format!(
            r#"{{"id":"{}","magic_word":"w","title":"t","body":"b"}}"#,
            Ulid::new()
        );
        let letter: Letter = serde_json::from_str(&json).unwrap();
        assert!(letter.show_balloons);
        assert!(letter.show_fireworks);
        assert!(letter.show_sparkles);
        assert!(letter.active);
    }

    #[test]
    fn test_default_config_has_one_active_letter() {
        let config = GreetingConfig::default();
        assert_eq!(config.active_letters().count(), 1);
        assert_eq!(config.letters[0].magic_word, "Best Friend");
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GreetingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GreetingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
