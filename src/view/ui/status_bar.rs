//! Status bar rendering

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::view::form::Focus;
use crate::view::theme::Theme;

/// A message shown in the status bar until the next one replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Renders the status bar: last message on the left, key hints on the right
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        focus: Focus,
        message: Option<&StatusMessage>,
        loading: bool,
        theme: &Theme,
    ) {
        let base = Style::default().fg(theme.status_bar_fg).bg(theme.status_bar_bg);

        let hints = Self::hints(focus);
        let mut spans = Vec::new();
        if loading {
            spans.push(Span::styled(" Loading photo… ", base));
        }
        if let Some(message) = message {
            let style = if message.is_error {
                base.fg(theme.error_fg)
            } else {
                base
            };
            spans.push(Span::styled(format!(" {} ", message.text), style));
        }

        let used: usize = spans.iter().map(|s| s.width()).sum();
        let padding = (area.width as usize).saturating_sub(used + hints.width());
        spans.push(Span::styled(" ".repeat(padding), base));
        spans.push(Span::styled(hints, base));

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }

    fn hints(focus: Focus) -> String {
        let specific = match focus {
            Focus::Photo => "Enter load",
            Focus::Text => "Enter newline",
            Focus::Badge => "←/→ move  Enter pick  0-5 pick",
            Focus::Name | Focus::Username => "Ctrl+U clear",
        };
        format!("{}  Tab next  Esc quit ", specific)
    }
}
