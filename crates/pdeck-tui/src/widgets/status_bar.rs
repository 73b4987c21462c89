//! Status bar: keybinding hints on the left, load/save status on the right.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use pdeck_app::state::{AppState, LoadState, Mode, SaveState};

use crate::theme::styles;

/// One-line status bar for the profile screen.
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.state.dialog.is_some() {
            return vec![("y", "Confirm"), ("n", "Dismiss")];
        }
        match self.state.mode {
            Mode::View => {
                let mut hints = vec![("j/k", "Scroll")];
                if self.state.session.can_edit() {
                    hints.push(("e", "Edit"));
                    hints.push(("K", "KYC"));
                }
                hints.push(("q", "Quit"));
                hints
            }
            Mode::Edit => {
                if self.state.form.editing {
                    vec![("Enter", "Confirm"), ("Ctrl+U", "Clear"), ("Esc", "Cancel")]
                } else {
                    vec![
                        ("Tab/j/k", "Navigate"),
                        ("Enter", "Edit Field"),
                        ("d", "Delete Row"),
                        ("Ctrl+S", "Save"),
                        ("Esc", "Cancel"),
                    ]
                }
            }
        }
    }

    fn status(&self) -> Option<Span<'static>> {
        match (&self.state.save, &self.state.load) {
            (SaveState::InFlight, _) => Some(Span::styled("Saving…", styles::status_busy())),
            (SaveState::Failed(error), _) => Some(Span::styled(
                format!("Save failed: {error}"),
                styles::status_error(),
            )),
            (_, LoadState::Failed(error)) => Some(Span::styled(
                format!("Load failed: {error}"),
                styles::status_error(),
            )),
            _ if self.state.is_dirty() => {
                Some(Span::styled("Unsaved changes", styles::status_busy()))
            }
            _ => None,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, label)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(key, styles::kbd_key()));
            spans.push(Span::styled(format!(" {label}"), styles::kbd_label()));
        }
        buf.set_line(area.left() + 1, area.top(), &Line::from(spans), area.width);

        if let Some(status) = self.status() {
            let width = status.width() as u16;
            if area.width > width + 1 {
                buf.set_line(
                    area.right().saturating_sub(width + 1),
                    area.top(),
                    &Line::from(status),
                    width,
                );
            }
        }
    }
}
