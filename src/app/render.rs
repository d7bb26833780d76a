use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::App;
use crate::view::ui::{FormRenderer, PreviewCardRenderer, StatusBarRenderer};

/// Below this width the preview goes under the form instead of beside it
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Rows needed by the form controls
const FORM_HEIGHT: u16 = 18;

impl App {
    /// Render the whole screen
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let theme = &self.theme;

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
            size,
        );

        // Layout: title (1), main content, status bar (1)
        let [title_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(size);

        frame.render_widget(
            Paragraph::new(Line::from("Tweet Generator").centered()).style(
                Style::default()
                    .fg(theme.title_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            title_area,
        );

        let (form_area, preview_area) = split_main(main_area);

        FormRenderer::render(
            frame,
            form_area,
            &self.form,
            self.composer.draft().badge,
            theme,
        );

        let view = self.composer.render();
        PreviewCardRenderer::render(frame, preview_area, &view, self.geometry, theme);

        StatusBarRenderer::render(
            frame,
            status_area,
            self.form.focus,
            self.status.as_ref(),
            self.composer.pending_avatar().is_some(),
            theme,
        );
    }
}

fn split_main(area: Rect) -> (Rect, Rect) {
    if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let [form, preview] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        (form, preview)
    } else {
        let [form, preview] =
            Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)]).areas(area);
        (form, preview)
    }
}
