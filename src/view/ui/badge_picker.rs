//! Badge picker row and badge glyph styling

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::Badge;
use crate::view::theme::Theme;

/// Terminal glyph and colour standing in for a badge's SVG asset
///
/// Returns `None` for `Badge::None`, which has no glyph.
pub fn badge_glyph(badge: Badge) -> Option<(&'static str, Color)> {
    Some(match badge {
        Badge::None => return None,
        Badge::BlueTick => ("✔", Color::Rgb(29, 155, 240)),
        Badge::PinkTick => ("✔", Color::Rgb(249, 24, 128)),
        Badge::GoldenTick => ("✔", Color::Rgb(255, 212, 0)),
        Badge::CurlyTick => ("☑", Color::Rgb(29, 155, 240)),
        Badge::EmptyTick => ("✔", Color::Rgb(130, 154, 171)),
    })
}

/// Renders the six badge options side by side
pub struct BadgePickerRenderer;

impl BadgePickerRenderer {
    /// # Arguments
    /// * `selected` - Badge currently chosen in the draft
    /// * `highlight` - Cell under the keyboard cursor, when the picker has focus
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        selected: Badge,
        highlight: Option<usize>,
        theme: &Theme,
    ) {
        let cells =
            Layout::horizontal([Constraint::Ratio(1, Badge::ALL.len() as u32); 6]).split(area);

        for (i, (badge, cell)) in Badge::ALL.iter().zip(cells.iter()).enumerate() {
            let is_selected = *badge == selected;
            let is_highlighted = highlight == Some(i);

            let mut style = if is_selected {
                Style::default().bg(theme.badge_selected_bg)
            } else {
                Style::default()
            };
            if is_highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let glyph = match badge_glyph(*badge) {
                Some((symbol, color)) => Span::styled(symbol, Style::default().fg(color)),
                None => Span::styled("✕", Style::default().fg(theme.placeholder_fg)),
            };

            let line = Line::from(vec![
                Span::styled(format!("{} ", i), Style::default().fg(theme.muted_fg)),
                glyph,
            ])
            .centered();
            frame.render_widget(Paragraph::new(line).style(style), *cell);
        }
    }
}
