//! Access gate for the greeting content
//!
//! Session-lifetime state machine: `Locked` until a submitted magic word
//! matches an active letter, then `Unlocked` for the rest of the session.
//! A mismatch is a normal control-flow outcome, not an error. The matching
//! rule is identical before and after the unlock instant; only the prompt
//! text differs ("early peek" vs "unlock"), which is the caller's concern.

use crate::types::{Letter, LetterId};

/// Current gate state for this session, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessState {
    Locked,
    Unlocked {
        /// The letter selected by the matching magic word
        letter: LetterId,
    },
}

/// Result of a single magic word submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Matched; the gate is now (or was already) unlocked for this letter
    Unlocked(LetterId),
    /// No active letter matched; the gate stays locked
    Mismatch,
}

/// Gate state machine over the configured letters
///
/// Inactive letters are excluded from matching. There is no transition
/// back to `Locked`; a reload starts a fresh session.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    state: Option<LetterId>,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AccessState {
        match &self.state {
            Some(id) => AccessState::Unlocked { letter: id.clone() },
            None => AccessState::Locked,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.state.is_some()
    }

    /// Submit a magic word against the given letters.
    ///
    /// Both sides are compared case-folded and whitespace-trimmed. The
    /// first active letter whose magic word matches selects that letter's
    /// content for display.
    pub fn submit(&mut self, input: &str, letters: &[Letter]) -> GateOutcome {
        if let Some(id) = &self.state {
            return GateOutcome::Unlocked(id.clone());
        }

        let candidate = fold(input);
        for letter in letters.iter().filter(|l| l.active) {
            if fold(&letter.magic_word) == candidate {
                self.state = Some(letter.id.clone());
                return GateOutcome::Unlocked(letter.id.clone());
            }
        }
        GateOutcome::Mismatch
    }
}

fn fold(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<Letter> {
        let mut rose = Letter::new("Rose", "For the romantic", "roses are red");
        rose.active = false;
        vec![
            Letter::new("Sunflower", "For the bright one", "hello sunshine"),
            rose,
        ]
    }

    #[test]
    fn test_exact_match_unlocks() {
        let set = letters();
        let mut gate = AccessGate::new();
        let outcome = gate.submit("Sunflower", &set);
        assert_eq!(outcome, GateOutcome::Unlocked(set[0].id.clone()));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_match_is_case_insensitive_and_trimmed() {
        let set = vec![Letter::new("Best Friend", "T", "b")];
        let mut gate = AccessGate::new();
        let outcome = gate.submit("  best friend ", &set);
        assert_eq!(outcome, GateOutcome::Unlocked(set[0].id.clone()));
    }

    #[test]
    fn test_mismatch_stays_locked() {
        let set = letters();
        let mut gate = AccessGate::new();
        assert_eq!(gate.submit("tulip", &set), GateOutcome::Mismatch);
        assert_eq!(gate.state(), AccessState::Locked);
    }

    #[test]
    fn test_inactive_letters_are_excluded() {
        let set = letters();
        let mut gate = AccessGate::new();
        // "Rose" exists but is inactive, so it must not unlock
        assert_eq!(gate.submit("rose", &set), GateOutcome::Mismatch);
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_first_matching_active_letter_wins() {
        let a = Letter::new("word", "A", "first");
        let b = Letter::new("Word", "B", "second");
        let set = vec![a.clone(), b];
        let mut gate = AccessGate::new();
        assert_eq!(gate.submit("WORD", &set), GateOutcome::Unlocked(a.id));
    }

    #[test]
    fn test_no_transition_back_to_locked() {
        let set = letters();
        let mut gate = AccessGate::new();
        let first = gate.submit("sunflower", &set);
        // A later mismatching submission keeps the unlocked letter
        let second = gate.submit("wrong", &set);
        assert_eq!(first, second);
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_empty_letter_set_never_unlocks() {
        let mut gate = AccessGate::new();
        assert_eq!(gate.submit("anything", &[]), GateOutcome::Mismatch);
    }
}
