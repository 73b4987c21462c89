//! Page header: breadcrumb trail, title, mode badge, and load state.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use pdeck_app::state::{AppState, LoadState, Mode};

use crate::theme::{palette, styles};

/// Header widget for the profile screen.
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn breadcrumb(&self) -> Line<'static> {
        let id = &self.state.session.user_id;
        Line::from(vec![
            Span::styled("Users", styles::text_muted()),
            Span::styled(" / ", styles::text_muted()),
            Span::styled(format!("Profile ({id})"), styles::text_secondary()),
        ])
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Personal Information", styles::title())];

        let badge = match self.state.mode {
            Mode::View => Span::styled(
                "  VIEW ",
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Mode::Edit => Span::styled(
                "  EDIT ",
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        spans.push(badge);
        if self.state.is_dirty() {
            spans.push(Span::styled("*", styles::status_busy()));
        }

        let name = self.state.record.display_name();
        if !name.is_empty() {
            spans.push(Span::styled(
                format!("  — {name}"),
                styles::text_secondary(),
            ));
        }
        Line::from(spans)
    }

    fn load_badge(&self) -> Span<'static> {
        match &self.state.load {
            LoadState::Loading => Span::styled("Loading…", styles::status_busy()),
            LoadState::Loaded => Span::styled("Loaded", styles::status_ok()),
            LoadState::Failed(_) => Span::styled("Load failed", styles::status_error()),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_inactive());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        buf.set_line(inner.left(), inner.top(), &self.breadcrumb(), inner.width);

        // Right-aligned load badge on the breadcrumb row.
        let badge = self.load_badge();
        let badge_width = badge.width() as u16;
        if inner.width > badge_width {
            buf.set_line(
                inner.right().saturating_sub(badge_width + 1),
                inner.top(),
                &Line::from(badge),
                badge_width,
            );
        }

        if inner.height >= 2 {
            buf.set_line(inner.left(), inner.top() + 1, &self.title_line(), inner.width);
        }
    }
}
