//! Key event to action translation

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::action::{Action, KeyContext};
use crate::model::Badge;

/// Translate a key event into an action for the given context
///
/// Returns `None` for keys that do nothing in that context (and for key
/// release events on terminals that report them).
pub fn action_for_key(event: &KeyEvent, context: KeyContext) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    // Global bindings
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match context {
        KeyContext::TextField | KeyContext::MultilineText => text_action(event, context, ctrl),
        KeyContext::BadgePicker => badge_action(event),
    }
}

fn text_action(event: &KeyEvent, context: KeyContext, ctrl: bool) -> Option<Action> {
    Some(match event.code {
        KeyCode::Char('u') if ctrl => Action::ClearField,
        KeyCode::Char('a') if ctrl => Action::MoveLineStart,
        KeyCode::Char('e') if ctrl => Action::MoveLineEnd,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => Action::InsertChar(c),
        KeyCode::Enter if context == KeyContext::MultilineText => Action::InsertNewline,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::DeleteBackward,
        KeyCode::Delete => Action::DeleteForward,
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Right => Action::MoveRight,
        KeyCode::Home => Action::MoveLineStart,
        KeyCode::End => Action::MoveLineEnd,
        KeyCode::Up | KeyCode::Down if context == KeyContext::TextField => return None,
        KeyCode::Up => Action::FocusPrev,
        KeyCode::Down => Action::FocusNext,
        _ => return None,
    })
}

fn badge_action(event: &KeyEvent) -> Option<Action> {
    Some(match event.code {
        KeyCode::Left | KeyCode::Char('h') => Action::BadgeHighlightPrev,
        KeyCode::Right | KeyCode::Char('l') => Action::BadgeHighlightNext,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Submit,
        KeyCode::Up => Action::FocusPrev,
        KeyCode::Char(c) => {
            let index = c.to_digit(10)? as usize;
            if index >= Badge::ALL.len() {
                return None;
            }
            Action::SelectBadgeAt(index)
        }
        _ => return None,
    })
}
