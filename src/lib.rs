// Composer library - exposes all core modules for testing

// Core types and config are always available
pub mod config;
pub mod model;
pub mod view;

// Runtime-only modules (require the "runtime" feature)
#[cfg(feature = "runtime")]
pub mod config_io;

// Modules with internal gating (pure types ungated, runtime code gated internally)
pub mod app;
pub mod input;
