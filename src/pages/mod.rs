//! Pages for Everwish.

mod admin;
mod entry;
mod surprise;

pub use admin::Admin;
pub use entry::Entry;
pub use surprise::Surprise;
