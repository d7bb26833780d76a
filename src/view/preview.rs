//! Preview derivation
//!
//! [`PreviewView`] is what the preview card shows. It is computed from a
//! [`PostDraft`] on every render and holds no state of its own.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{AssetCatalog, AssetRef, AvatarImage, Badge, PostDraft};

/// Text shown in place of empty fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Placeholders {
    /// Shown when the display name is empty
    pub name: String,
    /// Shown after the "@" when the handle is empty
    pub handle: String,
    /// Shown when the post body is empty
    pub body: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            handle: "username".to_string(),
            body: "Your tweet text will appear here".to_string(),
        }
    }
}

/// One line of preview text and whether it came from a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewText {
    pub text: String,
    pub is_placeholder: bool,
}

impl PreviewText {
    fn echo_or(value: &str, placeholder: &str) -> Self {
        if value.is_empty() {
            Self {
                text: placeholder.to_string(),
                is_placeholder: true,
            }
        } else {
            Self {
                text: value.to_string(),
                is_placeholder: false,
            }
        }
    }
}

/// Badge glyph drawn beside the name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeGlyph {
    pub badge: Badge,
    pub asset: AssetRef,
}

/// Profile image area of the preview
#[derive(Debug, Clone, PartialEq)]
pub enum AvatarView {
    /// The user's decoded photo
    Photo(Arc<AvatarImage>),
    /// No photo chosen yet. `image` is set when the asset directory
    /// provides a raster version of the default avatar.
    Default {
        asset: AssetRef,
        image: Option<Arc<AvatarImage>>,
    },
}

impl AvatarView {
    pub fn is_default(&self) -> bool {
        matches!(self, AvatarView::Default { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub avatar: AvatarView,
    pub name: PreviewText,
    pub badge: Option<BadgeGlyph>,
    /// Handle including the leading "@"
    pub handle: PreviewText,
    pub body: PreviewText,
}

impl PreviewView {
    pub fn from_draft(
        draft: &PostDraft,
        assets: &AssetCatalog,
        placeholders: &Placeholders,
        default_avatar: Option<&Arc<AvatarImage>>,
    ) -> Self {
        let avatar = match &draft.avatar {
            Some(image) => AvatarView::Photo(Arc::clone(image)),
            None => AvatarView::Default {
                asset: assets.default_avatar(),
                image: default_avatar.cloned(),
            },
        };

        let badge = assets
            .badge_asset(draft.badge)
            .map(|asset| BadgeGlyph {
                badge: draft.badge,
                asset,
            });

        let mut handle = PreviewText::echo_or(&draft.handle, &placeholders.handle);
        handle.text.insert(0, '@');

        Self {
            avatar,
            name: PreviewText::echo_or(&draft.display_name, &placeholders.name),
            badge,
            handle,
            body: PreviewText::echo_or(&draft.body, &placeholders.body),
        }
    }
}
