//! Core data model
//!
//! Pure types with no terminal or runtime dependencies.

pub mod assets;
pub mod avatar;
pub mod draft;

pub use assets::{AssetCatalog, AssetRef};
pub use avatar::{AvatarError, AvatarGeometry, AvatarImage};
pub use draft::{Badge, DraftField, PostDraft};
