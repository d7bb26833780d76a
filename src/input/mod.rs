//! Input pipeline
//!
//! Key events are translated to [`Action`]s, which the app dispatches to the
//! focused control. Pure modules are always available; key translation
//! depends on crossterm.

pub mod action;
pub mod text_input;

#[cfg(feature = "runtime")]
pub mod keybindings;

pub use action::{Action, KeyContext};
pub use text_input::TextInput;
