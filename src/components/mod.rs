//! UI Components for Everwish.

mod admin_form;
mod countdown;
mod decorations;
mod greeting;
mod markdown;
mod password_gate;
mod photo_carousel;
mod theme_override;

pub use admin_form::AdminForm;
pub use countdown::CountdownDisplay;
pub use decorations::{Balloons, Fireworks, Sparkles};
pub use greeting::Greeting;
pub use markdown::Markdown;
pub use password_gate::PasswordGate;
pub use photo_carousel::PhotoCarousel;
pub use theme_override::ThemeOverride;
