//! View and UI layer
//!
//! Pure ratatui rendering, independent of the terminal backend.

pub mod form;
pub mod preview;
pub mod theme;
pub mod ui;
