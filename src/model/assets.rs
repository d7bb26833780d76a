//! Static asset catalog
//!
//! Badge glyphs and the default avatar are addressed by a fixed naming
//! convention (`<badge-value>.svg`, `default-profile.svg`) and resolved against
//! an asset directory.

use std::path::{Path, PathBuf};

use super::avatar::{decode_avatar, AvatarGeometry, AvatarImage};
use super::draft::Badge;

/// File name of the default avatar asset
pub const DEFAULT_AVATAR_ASSET: &str = "default-profile.svg";

/// Raster stand-in for the default avatar, used when present next to the SVG
const DEFAULT_AVATAR_RASTER: &str = "default-profile.png";

/// A named static asset and the path it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    root: PathBuf,
}

impl AssetCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an asset by file name
    pub fn resolve(&self, name: &str) -> AssetRef {
        AssetRef {
            name: name.to_string(),
            path: self.root.join(name),
        }
    }

    /// Glyph asset for a badge, `None` for `Badge::None`
    pub fn badge_asset(&self, badge: Badge) -> Option<AssetRef> {
        if badge.is_none() {
            return None;
        }
        Some(self.resolve(&format!("{}.svg", badge.value())))
    }

    pub fn default_avatar(&self) -> AssetRef {
        self.resolve(DEFAULT_AVATAR_ASSET)
    }

    /// Decode the raster default avatar if the asset directory provides one
    pub fn load_default_avatar(&self, geometry: AvatarGeometry) -> Option<AvatarImage> {
        let path = self.root.join(DEFAULT_AVATAR_RASTER);
        let bytes = std::fs::read(&path).ok()?;
        match decode_avatar(&path, &bytes, geometry) {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("Ignoring default avatar {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new("assets")
    }
}
