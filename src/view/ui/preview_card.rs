//! Preview card rendering
//!
//! Draws a [`PreviewView`] as a post: avatar on the left, name with badge and
//! handle beside it, body text underneath.

use image::RgbaImage;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::badge_picker::badge_glyph;
use crate::model::AvatarGeometry;
use crate::view::preview::{AvatarView, PreviewText, PreviewView};
use crate::view::theme::Theme;

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: &str = "▀";

/// Alpha below which a thumbnail pixel counts as transparent
const ALPHA_CUTOFF: u8 = 128;

pub struct PreviewCardRenderer;

impl PreviewCardRenderer {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        view: &PreviewView,
        geometry: AvatarGeometry,
        theme: &Theme,
    ) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Preview ",
                Style::default()
                    .fg(theme.title_fg)
                    .add_modifier(Modifier::BOLD),
            ));
        let card_area = outer.inner(area);
        frame.render_widget(outer, area);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.card_bg));
        let inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        // The header grows when a long name or handle wraps past the avatar
        let identity_width = inner.width.saturating_sub(geometry.columns.saturating_add(2));
        let header_rows = geometry.rows.max(identity_rows(view, identity_width));

        let [header, _gap, body] = Layout::vertical([
            Constraint::Length(header_rows),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let [avatar_area, _spacer, identity_area] = Layout::horizontal([
            Constraint::Length(geometry.columns),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(header);
        let avatar_area = Rect {
            height: avatar_area.height.min(geometry.rows),
            ..avatar_area
        };

        Self::render_avatar(frame.buffer_mut(), avatar_area, &view.avatar, theme);
        Self::render_identity(frame, identity_area, view, theme);

        let body_text = Text::from(
            view.body
                .text
                .split('\n')
                .map(|line| Line::from(line.to_string()))
                .collect::<Vec<_>>(),
        );
        frame.render_widget(
            Paragraph::new(body_text)
                .style(Self::text_style(&view.body, theme.foreground, theme))
                .wrap(Wrap { trim: false }),
            body,
        );
    }

    fn text_style(text: &PreviewText, color: Color, theme: &Theme) -> Style {
        if text.is_placeholder {
            Style::default().fg(theme.placeholder_fg).bg(theme.card_bg)
        } else {
            Style::default().fg(color).bg(theme.card_bg)
        }
    }

    fn render_identity(frame: &mut Frame, area: Rect, view: &PreviewView, theme: &Theme) {
        let mut name_line = vec![Span::styled(
            view.name.text.clone(),
            Self::text_style(&view.name, theme.foreground, theme).add_modifier(Modifier::BOLD),
        )];
        if let Some((symbol, color)) = view.badge.as_ref().and_then(|g| badge_glyph(g.badge)) {
            name_line.push(Span::raw(" "));
            name_line.push(Span::styled(symbol, Style::default().fg(color)));
        }

        let lines = vec![
            Line::from(name_line),
            Line::from(Span::styled(
                view.handle.text.clone(),
                Self::text_style(&view.handle, theme.muted_fg, theme),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn render_avatar(buf: &mut Buffer, area: Rect, avatar: &AvatarView, theme: &Theme) {
        match avatar {
            AvatarView::Photo(image) => {
                paint_thumbnail(buf, area, image.thumbnail(), theme.card_bg)
            }
            AvatarView::Default {
                image: Some(image), ..
            } => paint_thumbnail(buf, area, image.thumbnail(), theme.card_bg),
            AvatarView::Default { image: None, .. } => {
                let silhouette = default_silhouette(area.width as u32, area.height as u32 * 2);
                paint_thumbnail(buf, area, &silhouette, theme.card_bg);
            }
        }
    }
}

/// Rows the name and handle need when wrapped to `width` columns
fn identity_rows(view: &PreviewView, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows = |columns: usize| columns.div_ceil(width).max(1);
    let badge = if view.badge.is_some() { 2 } else { 0 };
    let total = rows(view.name.text.width() + badge) + rows(view.handle.text.width());
    u16::try_from(total).unwrap_or(u16::MAX)
}

/// Paint an RGBA image into `area`, two pixels per cell
fn paint_thumbnail(buf: &mut Buffer, area: Rect, image: &RgbaImage, background: Color) {
    let pixel = |x: u32, y: u32| -> Option<Color> {
        if x >= image.width() || y >= image.height() {
            return None;
        }
        let [r, g, b, a] = image.get_pixel(x, y).0;
        (a >= ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
    };

    for row in 0..area.height {
        for col in 0..area.width {
            let top = pixel(col as u32, row as u32 * 2);
            let bottom = pixel(col as u32, row as u32 * 2 + 1);
            if top.is_none() && bottom.is_none() {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol(HALF_BLOCK)
                    .set_fg(top.unwrap_or(background))
                    .set_bg(bottom.unwrap_or(background));
            }
        }
    }
}

/// Grey head-and-shoulders placeholder, masked to a circle
pub fn default_silhouette(width: u32, height: u32) -> RgbaImage {
    const BACKDROP: [u8; 4] = [207, 217, 222, 255];
    const FIGURE: [u8; 4] = [130, 154, 171, 255];

    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    let radius = w.min(h) / 2.0;

    RgbaImage::from_fn(width, height, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dx = px - w / 2.0;
        let dy = py - h / 2.0;
        if dx * dx + dy * dy > radius * radius {
            return image::Rgba([0, 0, 0, 0]);
        }

        // Head: circle in the upper half. Shoulders: ellipse rising from the bottom.
        let head_r = radius * 0.38;
        let hx = px - w / 2.0;
        let hy = py - (h / 2.0 - radius * 0.25);
        let in_head = hx * hx + hy * hy <= head_r * head_r;

        let sx = (px - w / 2.0) / (radius * 0.75);
        let sy = (py - (h / 2.0 + radius)) / (radius * 0.65);
        let in_shoulders = sx * sx + sy * sy <= 1.0;

        image::Rgba(if in_head || in_shoulders { FIGURE } else { BACKDROP })
    })
}
