//! Property-based tests for reconciliation, countdown and scheduling
//!
//! Uses proptest to verify the invariants the UI relies on.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use everwish_core::countdown::{self, CountdownState};
use everwish_core::reconcile::{reconcile, ConfigPatch};
use everwish_core::schedule::{parse_timezone, to_absolute, to_editable};
use everwish_core::types::{GreetingConfig, Letter};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short human-ish text for labels and magic words
fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{1,40}").expect("valid regex")
}

fn letter_strategy() -> impl Strategy<Value = Letter> {
    (label_strategy(), label_strategy(), label_strategy(), any::<bool>()).prop_map(
        |(word, title, body, active)| {
            let mut letter = Letter::new(word, title, body);
            letter.active = active;
            letter
        },
    )
}

/// Generate partial patches with an arbitrary subset of fields present
fn patch_strategy() -> impl Strategy<Value = ConfigPatch> {
    (
        prop::option::of(label_strategy()),
        prop::option::of(label_strategy()),
        prop::option::of(prop::collection::vec(letter_strategy(), 0..4)),
        prop::option::of(prop::collection::vec(label_strategy(), 0..4)),
        prop::option::of(timestamp_strategy()),
    )
        .prop_map(|(entry_title, cake_text, letters, photo_gallery, unlock_at)| ConfigPatch {
            entry_title,
            cake_text,
            letters,
            photo_gallery,
            unlock_at,
            ..Default::default()
        })
}

/// Timestamps between 2000-01-01 and ~2060, second precision
fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..2_871_763_200i64)
        .prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

/// Timestamps at minute precision (what the admin form can express)
fn minute_timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (15_778_080i64..47_862_720i64).prop_map(|mins| Utc.timestamp_opt(mins * 60, 0).unwrap())
}

// ============================================================================
// Reconciliation
// ============================================================================

proptest! {
    /// The reconciled record always satisfies the active-letter invariant
    #[test]
    fn reconcile_always_leaves_an_active_letter(patch in patch_strategy()) {
        let base = GreetingConfig::default();
        let result = reconcile(Some(&patch), &base);
        prop_assert!(result.active_letters().count() > 0);
    }

    /// Fields present in the patch win; absent fields keep the base value
    #[test]
    fn reconcile_present_fields_win(patch in patch_strategy()) {
        let base = GreetingConfig::default();
        let result = reconcile(Some(&patch), &base);

        match &patch.entry_title {
            Some(v) => prop_assert_eq!(&result.entry_title, v),
            None => prop_assert_eq!(&result.entry_title, &base.entry_title),
        }
        match &patch.photo_gallery {
            Some(v) => prop_assert_eq!(&result.photo_gallery, v),
            None => prop_assert_eq!(&result.photo_gallery, &base.photo_gallery),
        }
        match patch.unlock_at {
            Some(v) => prop_assert_eq!(result.unlock_at, v),
            None => prop_assert_eq!(result.unlock_at, base.unlock_at),
        }
    }

    /// reconcile(reconcile(s, d), d) == reconcile(s, d)
    #[test]
    fn reconcile_is_idempotent(patch in patch_strategy()) {
        let base = GreetingConfig::default();
        let once = reconcile(Some(&patch), &base);
        let twice = reconcile(Some(&ConfigPatch::from(&once)), &base);
        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// Countdown
// ============================================================================

proptest! {
    /// Counting components are always within their display ranges, and the
    /// reassembled total never exceeds the true remaining time
    #[test]
    fn countdown_components_are_bounded(
        now in timestamp_strategy(),
        target in timestamp_strategy(),
    ) {
        match countdown::tick(now, target) {
            CountdownState::Unlocked => prop_assert!(target <= now + chrono::Duration::milliseconds(999)),
            CountdownState::Counting { days, hours, minutes, seconds } => {
                prop_assert!(target > now);
                prop_assert!(days >= 0);
                prop_assert!((0..24).contains(&hours));
                prop_assert!((0..60).contains(&minutes));
                prop_assert!((0..60).contains(&seconds));

                let reassembled = ((days * 24 + hours) * 60 + minutes) * 60 + seconds;
                let true_secs = (target - now).num_seconds();
                prop_assert!(reassembled <= true_secs);
                prop_assert!(true_secs - reassembled <= 1);
            }
        }
    }

    /// Any instant at or past the target is unlocked
    #[test]
    fn countdown_past_target_is_unlocked(
        target in timestamp_strategy(),
        past_secs in 0i64..1_000_000,
    ) {
        let now = target + chrono::Duration::seconds(past_secs);
        prop_assert_eq!(countdown::tick(now, target), CountdownState::Unlocked);
    }
}

// ============================================================================
// Scheduling
// ============================================================================

proptest! {
    /// Editable fields round-trip to the same absolute instant in UTC,
    /// which has no transitions and therefore no ambiguous wall times
    #[test]
    fn schedule_roundtrip_in_utc(instant in minute_timestamp_strategy()) {
        let tz = parse_timezone("UTC").unwrap();
        let back = to_absolute(&to_editable(instant, tz), tz).unwrap();
        prop_assert_eq!(back, instant);
    }

    /// In a DST-observing zone, every real instant maps to editable fields
    /// that convert back to some instant displaying the same wall clock
    #[test]
    fn schedule_editable_is_always_convertible(instant in minute_timestamp_strategy()) {
        let tz = parse_timezone("America/New_York").unwrap();
        let edit = to_editable(instant, tz);
        // The wall clock came from a real instant, so it cannot be in a gap
        let back = to_absolute(&edit, tz).unwrap();
        prop_assert_eq!(to_editable(back, tz), edit);
    }
}
