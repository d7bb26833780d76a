//! The post draft: the single record of everything the user has entered.
//!
//! A `PostDraft` is never mutated in place. Each edit goes through one of the
//! `with_*` methods, which return a new draft with exactly one field replaced.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::avatar::AvatarImage;

/// Text fields of the draft that can be edited directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    DisplayName,
    Handle,
    Body,
}

impl DraftField {
    /// All editable text fields, in form order
    pub const ALL: [DraftField; 3] = [
        DraftField::DisplayName,
        DraftField::Handle,
        DraftField::Body,
    ];

    /// Form label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::DisplayName => "Name",
            DraftField::Handle => "Username",
            DraftField::Body => "Tweet Text",
        }
    }
}

/// Verification badge shown next to the display name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    #[default]
    #[serde(rename = "")]
    None,
    BlueTick,
    PinkTick,
    GoldenTick,
    CurlyTick,
    EmptyTick,
}

impl Badge {
    /// Every selectable option, in picker order
    pub const ALL: [Badge; 6] = [
        Badge::None,
        Badge::BlueTick,
        Badge::PinkTick,
        Badge::GoldenTick,
        Badge::CurlyTick,
        Badge::EmptyTick,
    ];

    /// Stable identifier, also the stem of the badge's asset file
    pub fn value(&self) -> &'static str {
        match self {
            Badge::None => "",
            Badge::BlueTick => "blue-tick",
            Badge::PinkTick => "pink-tick",
            Badge::GoldenTick => "golden-tick",
            Badge::CurlyTick => "curly-tick",
            Badge::EmptyTick => "empty-tick",
        }
    }

    /// Human-readable name shown in the picker
    pub fn label(&self) -> &'static str {
        match self {
            Badge::None => "No Badge",
            Badge::BlueTick => "Blue Tick",
            Badge::PinkTick => "Pink Tick",
            Badge::GoldenTick => "Golden Tick",
            Badge::CurlyTick => "Border Tick",
            Badge::EmptyTick => "Gray Tick",
        }
    }

    /// Parse a badge from its stable identifier. The empty string is `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|badge| badge.value() == value)
    }

    /// Position of this badge in `Badge::ALL`
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|badge| badge == self)
            .unwrap_or_default()
    }

    pub fn is_none(&self) -> bool {
        *self == Badge::None
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-memory record of the post being composed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub display_name: String,
    pub handle: String,
    pub body: String,
    pub avatar: Option<Arc<AvatarImage>>,
    pub badge: Badge,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a text field
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::DisplayName => &self.display_name,
            DraftField::Handle => &self.handle,
            DraftField::Body => &self.body,
        }
    }

    /// Copy of this draft with one text field replaced
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            DraftField::DisplayName => next.display_name = value,
            DraftField::Handle => next.handle = value,
            DraftField::Body => next.body = value,
        }
        next
    }

    /// Copy of this draft with the badge replaced
    pub fn with_badge(&self, badge: Badge) -> Self {
        Self {
            badge,
            ..self.clone()
        }
    }

    /// Copy of this draft with the avatar replaced (never merged)
    pub fn with_avatar(&self, avatar: Arc<AvatarImage>) -> Self {
        Self {
            avatar: Some(avatar),
            ..self.clone()
        }
    }
}
