//! Configuration types
//!
//! All fields have defaults, so an empty JSON object (or no file at all) is
//! a valid configuration.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::AvatarGeometry;
use crate::view::preview::Placeholders;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Colour theme name ("dark", "light", or a JSON theme in `themes_dir`)
    pub theme: String,

    /// Directory holding theme JSON files
    pub themes_dir: Option<PathBuf>,

    /// Directory holding badge glyphs and the default avatar
    pub assets_dir: Option<PathBuf>,

    /// Size of the avatar in the preview
    pub avatar: AvatarConfig,

    /// Text shown in the preview for empty fields
    pub placeholders: Placeholders,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            themes_dir: None,
            assets_dir: None,
            avatar: AvatarConfig::default(),
            placeholders: Placeholders::default(),
        }
    }
}

impl Config {
    /// JSON Schema of the config file
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Config)).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AvatarConfig {
    /// Width in terminal columns (minimum 2)
    pub columns: u16,
    /// Height in terminal rows (minimum 1)
    pub rows: u16,
}

impl AvatarConfig {
    pub fn geometry(&self) -> AvatarGeometry {
        AvatarGeometry::new(self.columns, self.rows)
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 5,
        }
    }
}
