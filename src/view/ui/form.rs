//! Input form rendering

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::badge_picker::BadgePickerRenderer;
use crate::input::TextInput;
use crate::model::Badge;
use crate::view::form::{Focus, FormState};
use crate::view::theme::Theme;

/// Rows given to the tweet text input, including borders
const TEXT_INPUT_HEIGHT: u16 = 6;

/// Renders the form controls
pub struct FormRenderer;

impl FormRenderer {
    /// Render all controls and place the terminal cursor in the focused one
    ///
    /// # Arguments
    /// * `frame` - The ratatui frame to render to
    /// * `area` - The rectangular area to render in
    /// * `form` - Control state (inputs, focus, picker highlight)
    /// * `selected_badge` - The badge currently chosen in the draft
    /// * `theme` - Colours
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        form: &FormState,
        selected_badge: Badge,
        theme: &Theme,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(TEXT_INPUT_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

        Self::render_input(frame, chunks[0], Focus::Photo, &form.photo, None, form, theme);
        Self::render_input(frame, chunks[1], Focus::Name, &form.name, None, form, theme);
        Self::render_input(
            frame,
            chunks[2],
            Focus::Username,
            &form.username,
            Some("@"),
            form,
            theme,
        );
        Self::render_input(frame, chunks[3], Focus::Text, &form.text, None, form, theme);

        let block = Self::block(Focus::Badge, form.focus == Focus::Badge, theme);
        let inner = block.inner(chunks[4]);
        frame.render_widget(block, chunks[4]);
        BadgePickerRenderer::render(
            frame,
            inner,
            selected_badge,
            (form.focus == Focus::Badge).then_some(form.badge_highlight),
            theme,
        );
    }

    fn block(control: Focus, focused: bool, theme: &Theme) -> Block<'static> {
        let border_style = if focused {
            Style::default().fg(theme.focus_border)
        } else {
            Style::default().fg(theme.border)
        };
        let title_style = if focused {
            Style::default()
                .fg(theme.focus_border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.label_fg)
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", control.label()), title_style))
    }

    fn render_input(
        frame: &mut Frame,
        area: Rect,
        control: Focus,
        input: &TextInput,
        prefix: Option<&str>,
        form: &FormState,
        theme: &Theme,
    ) {
        let focused = form.focus == control;
        let block = Self::block(control, focused, theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let prefix_width = prefix.map(|p| p.width()).unwrap_or(0);
        let text_width = (inner.width as usize).saturating_sub(prefix_width);
        let height = inner.height as usize;
        let (cursor_line, cursor_col) = input.cursor_line_col();

        // Scroll just far enough that the cursor cell is inside the box
        let top_line = scroll_origin(cursor_line, height);
        let left_column = scroll_origin(cursor_col, text_width);

        let text_style = Style::default().fg(theme.foreground);
        let lines: Vec<Line> = input
            .value()
            .split('\n')
            .enumerate()
            .skip(top_line)
            .take(height)
            .map(|(i, line)| {
                let mut spans = Vec::new();
                if let Some(prefix) = prefix {
                    if i == 0 {
                        spans.push(Span::styled(prefix, Style::default().fg(theme.muted_fg)));
                    }
                }
                let (pad, visible) = visible_columns(line, left_column, text_width);
                if pad > 0 {
                    spans.push(Span::raw(" ".repeat(pad)));
                }
                spans.push(Span::styled(visible, text_style));
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);

        if focused {
            let column = prefix_width + cursor_col - left_column;
            let row = cursor_line - top_line;
            let x = inner.x.saturating_add(u16::try_from(column).unwrap_or(u16::MAX));
            let y = inner.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
            if x < inner.right() && y < inner.bottom() {
                frame.set_cursor_position((x, y));
            }
        }
    }
}

/// First line (or column) to show so that `position` falls inside a window of
/// `extent` cells
fn scroll_origin(position: usize, extent: usize) -> usize {
    position.saturating_sub(extent.saturating_sub(1))
}

/// The part of `line` covering display columns `left..left + width`
///
/// Returns the text plus how many blank cells go before it. A wide grapheme
/// cut by the left edge leaves a blank, one cut by the right edge is dropped.
fn visible_columns(line: &str, left: usize, width: usize) -> (usize, &str) {
    let right = left + width;
    let mut column = 0;
    let mut start = None;
    let mut pad = 0;
    let mut end = line.len();

    for (offset, grapheme) in line.grapheme_indices(true) {
        let grapheme_width = grapheme.width();
        if start.is_none() {
            if column < left {
                column += grapheme_width;
                continue;
            }
            start = Some(offset);
            pad = (column - left).min(width);
        }
        if column + grapheme_width > right {
            end = offset;
            break;
        }
        column += grapheme_width;
    }

    match start {
        Some(start) => (pad, &line[start..end]),
        None => (0, ""),
    }
}
