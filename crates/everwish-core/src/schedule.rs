//! Conversion between the stored unlock instant and admin-editable fields
//!
//! The unlock instant is stored absolute (UTC). The admin form edits a
//! wall-clock date plus hour/minute as observed in a chosen IANA timezone,
//! so both directions go through a proper timezone-aware conversion that
//! applies the offset in effect on the edited date, including DST. A fixed
//! "current offset" subtraction is wrong around transitions and is exactly
//! what this module exists to avoid.

use chrono::{DateTime, LocalResult, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::ScheduleError;

/// Wall-clock unlock fields as shown in the admin form
///
/// Sub-minute precision is deliberately discarded: seconds are zeroed on
/// save and not surfaced on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditableUnlock {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
}

/// Parse an IANA timezone id into a [`Tz`].
pub fn parse_timezone(id: &str) -> Result<Tz, ScheduleError> {
    id.parse()
        .map_err(|_| ScheduleError::UnknownTimezone(id.to_string()))
}

/// Timezone ids offered in the admin form dropdown.
pub const COMMON_TIMEZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "Asia/Tokyo",
    "Australia/Sydney",
];

/// Convert the stored absolute instant into the wall-clock fields as
/// observed in `tz`, for display in the editable form.
pub fn to_editable(instant: DateTime<Utc>, tz: Tz) -> EditableUnlock {
    let local = instant.with_timezone(&tz);
    EditableUnlock {
        date: local.date_naive(),
        hour: local.hour(),
        minute: local.minute(),
    }
}

/// Compose edited wall-clock fields into a zoned datetime (seconds zeroed)
/// and convert it to the absolute instant for storage.
///
/// An ambiguous local time (DST fold) resolves to the earlier offset; a
/// nonexistent local time (DST gap) is an error the form surfaces.
pub fn to_absolute(edit: &EditableUnlock, tz: Tz) -> Result<DateTime<Utc>, ScheduleError> {
    if edit.hour > 23 {
        return Err(ScheduleError::HourOutOfRange(edit.hour));
    }
    if edit.minute > 59 {
        return Err(ScheduleError::MinuteOutOfRange(edit.minute));
    }

    let naive = edit
        .date
        .and_hms_opt(edit.hour, edit.minute, 0)
        .ok_or(ScheduleError::HourOutOfRange(edit.hour))?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(zoned) => Ok(zoned.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(ScheduleError::NonexistentLocalTime(
            naive.to_string(),
            tz.name().to_string(),
        )),
    }
}
