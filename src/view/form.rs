//! Form control state: text inputs, focus and the badge picker highlight

use crate::input::{KeyContext, TextInput};
use crate::model::{Badge, DraftField};

/// The focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Photo,
    Name,
    Username,
    Text,
    Badge,
}

impl Focus {
    pub const ORDER: [Focus; 5] = [
        Focus::Photo,
        Focus::Name,
        Focus::Username,
        Focus::Text,
        Focus::Badge,
    ];

    pub fn next(self) -> Self {
        let i = self.position();
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = self.position();
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Draft field edited by this control, if it edits one directly
    pub fn draft_field(self) -> Option<DraftField> {
        match self {
            Focus::Name => Some(DraftField::DisplayName),
            Focus::Username => Some(DraftField::Handle),
            Focus::Text => Some(DraftField::Body),
            Focus::Photo | Focus::Badge => None,
        }
    }

    pub fn key_context(self) -> KeyContext {
        match self {
            Focus::Text => KeyContext::MultilineText,
            Focus::Badge => KeyContext::BadgePicker,
            Focus::Photo | Focus::Name | Focus::Username => KeyContext::TextField,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Photo => "Profile Photo",
            Focus::Badge => "Verification Badge",
            Focus::Name | Focus::Username | Focus::Text => self
                .draft_field()
                .map(|field| field.label())
                .unwrap_or_default(),
        }
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub photo: TextInput,
    pub name: TextInput,
    pub username: TextInput,
    pub text: TextInput,
    pub focus: Focus,
    /// Picker cell under the cursor (index into `Badge::ALL`)
    pub badge_highlight: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            photo: TextInput::new(),
            name: TextInput::new(),
            username: TextInput::new(),
            text: TextInput::multiline(),
            focus: Focus::Photo,
            badge_highlight: 0,
        }
    }

    /// Text input of the given control. The badge picker has none.
    pub fn input(&self, focus: Focus) -> Option<&TextInput> {
        match focus {
            Focus::Photo => Some(&self.photo),
            Focus::Name => Some(&self.name),
            Focus::Username => Some(&self.username),
            Focus::Text => Some(&self.text),
            Focus::Badge => None,
        }
    }

    pub fn input_mut(&mut self, focus: Focus) -> Option<&mut TextInput> {
        match focus {
            Focus::Photo => Some(&mut self.photo),
            Focus::Name => Some(&mut self.name),
            Focus::Username => Some(&mut self.username),
            Focus::Text => Some(&mut self.text),
            Focus::Badge => None,
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        self.input_mut(self.focus)
    }

    pub fn highlighted_badge(&self) -> Badge {
        Badge::ALL[self.badge_highlight.min(Badge::ALL.len() - 1)]
    }

    pub fn move_badge_highlight(&mut self, delta: isize) {
        let len = Badge::ALL.len() as isize;
        self.badge_highlight = (self.badge_highlight as isize + delta).rem_euclid(len) as usize;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
