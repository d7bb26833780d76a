//! Actions produced by the input layer

/// What the focused control is, which decides how keys are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Single-line text input
    TextField,
    /// Multi-line text input (Enter inserts a newline)
    MultilineText,
    /// The badge picker row
    BadgePicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // Text editing
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveLineStart,
    MoveLineEnd,
    /// Clear the focused text field
    ClearField,

    /// Enter on a single-line field or the picker
    Submit,

    // Badge picker
    BadgeHighlightPrev,
    BadgeHighlightNext,
    /// Select the badge at this picker position
    SelectBadgeAt(usize),
}
