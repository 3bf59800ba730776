//! Countdown engine for the unlock gate
//!
//! A pure function of `(now, target)`; the one-second driver lives in the
//! UI layer. Components are derived by floor division on the millisecond
//! difference rather than from wall-clock fields, so the result is
//! identical in every timezone.

use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time until the unlock instant, recomputed every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Still counting down; all components are non-negative
    Counting {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    /// The unlock instant has passed
    Unlocked,
}

impl CountdownState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, CountdownState::Unlocked)
    }
}

/// Evaluate the countdown at `now` against the absolute `target` instant.
///
/// `remaining <= 0` yields [`CountdownState::Unlocked`]; negative or zero
/// components never surface in the counting state.
pub fn tick(now: DateTime<Utc>, target: DateTime<Utc>) -> CountdownState {
    let remaining_ms = (target - now).num_milliseconds();
    if remaining_ms <= 0 {
        return CountdownState::Unlocked;
    }

    CountdownState::Counting {
        days: remaining_ms / MS_PER_DAY,
        hours: (remaining_ms / MS_PER_HOUR) % 24,
        minutes: (remaining_ms / MS_PER_MINUTE) % 60,
        seconds: (remaining_ms / MS_PER_SECOND) % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_ten_seconds_before_unlock() {
        let target = utc(2025, 8, 17, 0, 0, 0);
        let now = utc(2025, 8, 16, 23, 59, 50);
        assert_eq!(
            tick(now, target),
            CountdownState::Counting {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 10
            }
        );
    }

    #[test]
    fn test_unlocked_at_exact_target() {
        let target = utc(2025, 8, 17, 0, 0, 0);
        assert_eq!(tick(target, target), CountdownState::Unlocked);
    }

    #[test]
    fn test_unlocked_long_after_target() {
        let target = utc(2025, 8, 17, 0, 0, 0);
        let now = utc(2027, 1, 1, 12, 0, 0);
        assert_eq!(tick(now, target), CountdownState::Unlocked);
    }

    #[test]
    fn test_multi_day_countdown() {
        let target = utc(2025, 8, 17, 0, 0, 0);
        let now = utc(2025, 8, 14, 21, 58, 57);
        assert_eq!(
            tick(now, target),
            CountdownState::Counting {
                days: 2,
                hours: 2,
                minutes: 1,
                seconds: 3
            }
        );
    }

    #[test]
    fn test_sub_second_remainder_floors_to_zero() {
        let target = utc(2025, 8, 17, 0, 0, 0);
        let now = target - chrono::Duration::milliseconds(500);
        assert_eq!(
            tick(now, target),
            CountdownState::Counting {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_is_unlocked() {
        assert!(CountdownState::Unlocked.is_unlocked());
        assert!(!CountdownState::Counting {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 1
        }
        .is_unlocked());
    }
}
