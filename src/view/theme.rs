//! Colour themes
//!
//! Two themes are embedded (`dark`, `light`). A theme can also be loaded from
//! a JSON file whose keys mirror [`Theme`]'s fields; missing keys fall back to
//! the dark theme.

use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

/// Names of the embedded themes
pub const EMBEDDED_THEMES: &[&str] = &["dark", "light"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub title_fg: Color,
    pub label_fg: Color,
    pub border: Color,
    pub focus_border: Color,
    pub placeholder_fg: Color,
    pub muted_fg: Color,
    pub card_bg: Color,
    pub badge_selected_bg: Color,
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
    pub error_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color::Rgb(21, 32, 43),
            foreground: Color::Rgb(231, 233, 234),
            title_fg: Color::Rgb(29, 155, 240),
            label_fg: Color::Rgb(170, 184, 194),
            border: Color::Rgb(56, 68, 77),
            focus_border: Color::Rgb(29, 155, 240),
            placeholder_fg: Color::Rgb(113, 118, 123),
            muted_fg: Color::Rgb(139, 152, 165),
            card_bg: Color::Rgb(21, 32, 43),
            badge_selected_bg: Color::Rgb(16, 58, 90),
            status_bar_fg: Color::Black,
            status_bar_bg: Color::Rgb(170, 184, 194),
            error_fg: Color::Rgb(244, 33, 46),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color::Rgb(243, 244, 246),
            foreground: Color::Rgb(17, 24, 39),
            title_fg: Color::Rgb(29, 78, 216),
            label_fg: Color::Rgb(55, 65, 81),
            border: Color::Rgb(209, 213, 219),
            focus_border: Color::Rgb(59, 130, 246),
            placeholder_fg: Color::Rgb(156, 163, 175),
            muted_fg: Color::Rgb(75, 85, 99),
            card_bg: Color::White,
            badge_selected_bg: Color::Rgb(239, 246, 255),
            status_bar_fg: Color::White,
            status_bar_bg: Color::Rgb(55, 65, 81),
            error_fg: Color::Rgb(220, 38, 38),
        }
    }

    /// Look up an embedded theme, defaults to dark if not found
    pub fn from_name_embedded(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get a theme by name, defaults to dark if not found
    ///
    /// Tries `<themes_dir>/<name>.json` first, then the embedded themes.
    pub fn from_name(name: &str, themes_dir: Option<&Path>) -> Self {
        let normalized_name = name.to_lowercase().replace('_', "-");

        if let Some(dir) = themes_dir {
            let path = dir.join(format!("{}.json", normalized_name));
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(theme) => return theme,
                    Err(e) => tracing::warn!("{}", e),
                }
            }
        }

        Self::from_name_embedded(&normalized_name)
    }

    /// Embedded theme names plus any `*.json` themes in `themes_dir`
    pub fn available_themes(themes_dir: Option<&Path>) -> Vec<String> {
        let mut themes: Vec<String> = EMBEDDED_THEMES.iter().map(|s| s.to_string()).collect();

        if let Some(Ok(entries)) = themes_dir.map(std::fs::read_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem() {
                        let name = stem.to_string_lossy().to_string();
                        if !themes.iter().any(|t| t == &name) {
                            themes.push(name);
                        }
                    }
                }
            }
        }

        themes
    }

    /// Load theme from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
        let theme_file: ThemeFile = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse theme file {}: {}", path.display(), e))?;
        theme_file.try_into()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// A colour in a theme file: `[r, g, b]` or a named terminal colour
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Rgb([u8; 3]),
    Named(String),
}

impl TryFrom<ColorDef> for Color {
    type Error = String;

    fn try_from(def: ColorDef) -> Result<Self, Self::Error> {
        match def {
            ColorDef::Rgb([r, g, b]) => Ok(Color::Rgb(r, g, b)),
            ColorDef::Named(name) => {
                named_color(&name).ok_or_else(|| format!("Unknown color '{}'", name))
            }
        }
    }
}

fn named_color(name: &str) -> Option<Color> {
    Some(match name.to_lowercase().replace(['_', ' '], "").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        "reset" | "default" => Color::Reset,
        _ => return None,
    })
}

/// On-disk theme representation
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFile {
    pub name: String,
    pub background: Option<ColorDef>,
    pub foreground: Option<ColorDef>,
    pub title_fg: Option<ColorDef>,
    pub label_fg: Option<ColorDef>,
    pub border: Option<ColorDef>,
    pub focus_border: Option<ColorDef>,
    pub placeholder_fg: Option<ColorDef>,
    pub muted_fg: Option<ColorDef>,
    pub card_bg: Option<ColorDef>,
    pub badge_selected_bg: Option<ColorDef>,
    pub status_bar_fg: Option<ColorDef>,
    pub status_bar_bg: Option<ColorDef>,
    pub error_fg: Option<ColorDef>,
}

impl TryFrom<ThemeFile> for Theme {
    type Error = String;

    fn try_from(file: ThemeFile) -> Result<Self, Self::Error> {
        let base = Theme::dark();
        let pick = |def: Option<ColorDef>, fallback: Color| -> Result<Color, String> {
            def.map(Color::try_from).unwrap_or(Ok(fallback))
        };

        Ok(Theme {
            name: file.name,
            background: pick(file.background, base.background)?,
            foreground: pick(file.foreground, base.foreground)?,
            title_fg: pick(file.title_fg, base.title_fg)?,
            label_fg: pick(file.label_fg, base.label_fg)?,
            border: pick(file.border, base.border)?,
            focus_border: pick(file.focus_border, base.focus_border)?,
            placeholder_fg: pick(file.placeholder_fg, base.placeholder_fg)?,
            muted_fg: pick(file.muted_fg, base.muted_fg)?,
            card_bg: pick(file.card_bg, base.card_bg)?,
            badge_selected_bg: pick(file.badge_selected_bg, base.badge_selected_bg)?,
            status_bar_fg: pick(file.status_bar_fg, base.status_bar_fg)?,
            status_bar_bg: pick(file.status_bar_bg, base.status_bar_bg)?,
            error_fg: pick(file.error_fg, base.error_fg)?,
        })
    }
}
