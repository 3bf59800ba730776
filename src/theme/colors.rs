//! Default color palette.
//!
//! Soft celebration aesthetic: rose, blush and warm paper. These are the
//! fallback values; the stored theme overrides them at runtime.

#![allow(dead_code)]

// === ROSE (Primary, Buttons, Headings) ===
pub const ROSE: &str = "#f56e88";
pub const ROSE_DEEP: &str = "#e0516e";
pub const ROSE_GLOW: &str = "rgba(245, 110, 136, 0.35)";

// === BLUSH (Accents, Borders, Decorations) ===
pub const BLUSH: &str = "#f5b3c2";
pub const BLUSH_BORDER: &str = "#efd9de";

// === PAPER (Backgrounds, Cards) ===
pub const PAPER: &str = "#f9f8f6";
pub const CARD_WHITE: &str = "#ffffff";

// === TEXT ===
pub const INK: &str = "#4a4540";
pub const INK_MUTED: &str = "rgba(74, 69, 64, 0.6)";

// === SEMANTIC ===
pub const DANGER: &str = "#d64545";
pub const SUCCESS: &str = "#5a9a6f";

// === CELEBRATION (Balloons, Fireworks) ===
pub const GOLD: &str = "#f2c14e";
pub const SKY: &str = "#7fb8d8";
pub const LAVENDER: &str = "#b89ad6";
pub const MINT: &str = "#8fd0b0";
