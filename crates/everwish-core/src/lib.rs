//! Everwish Core Library
//!
//! Domain logic for the Everwish birthday surprise app: the persisted,
//! subscribable configuration record, the countdown engine, the magic-word
//! access gate, and timezone-correct unlock scheduling.
//!
//! ## Overview
//!
//! Everwish is a local-first desktop app that presents a single-recipient
//! birthday surprise: an entry page, a countdown/password gate, and one or
//! more greeting "letters" unlocked by per-letter magic words. Everything
//! the recipient sees is driven by one configuration document edited on
//! the admin page.
//!
//! ## Core pieces
//!
//! - **Configuration**: [`GreetingConfig`] with a statically known default
//!   for every field; [`reconcile`] completes any partially stored record
//! - **Countdown**: [`countdown::tick`], a pure function of `(now, target)`
//! - **Gate**: [`AccessGate`], session-lifetime magic-word matching
//! - **Scheduling**: [`schedule`], wall-clock/absolute-instant conversion
//!   through real IANA timezones
//! - **Store**: [`ConfigStore`], redb-backed persistence with change
//!   subscription and read-merge-write-full save discipline
//!
//! ## Quick Start
//!
//! ```ignore
//! use everwish_core::{countdown, ConfigStore};
//!
//! let store = ConfigStore::open("~/.everwish/data")?;
//! let config = store.current();
//!
//! match countdown::tick(chrono::Utc::now(), config.unlock_at) {
//!     countdown::CountdownState::Unlocked => println!("the time has come"),
//!     state => println!("{:?}", state),
//! }
//! ```

pub mod countdown;
pub mod error;
pub mod gate;
pub mod generate;
pub mod reconcile;
pub mod schedule;
pub mod storage;
pub mod store;
pub mod types;

// Re-exports
pub use countdown::CountdownState;
pub use error::{ConfigError, ConfigResult, GenerateError, ScheduleError};
pub use gate::{AccessGate, AccessState, GateOutcome};
pub use generate::{
    AudioRequest, AudioResponse, GenerationClient, ImageRequest, ImageResponse, TextRequest,
    TextResponse,
};
pub use reconcile::{reconcile, ConfigPatch};
pub use schedule::{EditableUnlock, COMMON_TIMEZONES};
pub use storage::Storage;
pub use store::{ConfigEvent, ConfigStore, LoadSource};
pub use types::*;
