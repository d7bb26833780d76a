//! UI rendering modules
//!
//! Each renderer draws one region of the screen from borrowed state and holds
//! no state of its own.

pub mod badge_picker;
pub mod form;
pub mod preview_card;
pub mod status_bar;

pub use badge_picker::{badge_glyph, BadgePickerRenderer};
pub use form::FormRenderer;
pub use preview_card::PreviewCardRenderer;
pub use status_bar::{StatusBarRenderer, StatusMessage};
