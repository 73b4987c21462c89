//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use pdeck_app::state::{AppState, Mode};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - the only state it touches is the
/// form scroll offset, which it clamps and nudges to keep the focused
/// entry visible.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state), areas.header);

    let form = widgets::form::build_form_lines(state);
    adjust_scroll(state, form.focus_line, form.lines.len(), areas.body.height);

    let body = Paragraph::new(form.lines).scroll((state.form.scroll, 0));
    frame.render_widget(body, areas.body);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(dialog) = &state.dialog {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }
}

/// Keep the scroll offset within the content and, in Edit mode, keep the
/// focused line on screen.
fn adjust_scroll(state: &mut AppState, focus_line: Option<usize>, line_count: usize, height: u16) {
    if height == 0 {
        return;
    }

    let max_scroll = (line_count as u16).saturating_sub(height);
    if state.form.scroll > max_scroll {
        state.form.scroll = max_scroll;
    }

    if state.mode == Mode::Edit {
        if let Some(focus) = focus_line {
            let focus = focus as u16;
            if focus < state.form.scroll {
                state.form.scroll = focus;
            } else if focus >= state.form.scroll + height {
                state.form.scroll = focus + 1 - height;
            }
        }
    }
}
