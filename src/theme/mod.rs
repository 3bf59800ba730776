//! Visual theme for Everwish.
//!
//! `GLOBAL_STYLES` carries the full stylesheet with the default palette;
//! `theme_css` emits a small override block from the stored theme colors
//! so admin edits restyle the app live.

pub mod colors;
pub mod styles;

pub use styles::{theme_css, GLOBAL_STYLES};
