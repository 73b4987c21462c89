//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (breadcrumb + title + mode badge)
    pub header: Rect,

    /// Form body (scrollable field lines)
    pub body: Rect,

    /// Status bar (keybinding hints + load/save status)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Header: border + breadcrumb + title row + border
        Constraint::Min(3),    // Form body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_areas() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);
        assert_eq!(areas.header.height, 4);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.body.height, 25);
        assert_eq!(areas.header.y, 0);
        assert_eq!(areas.body.y, 4);
        assert_eq!(areas.status.y, 29);
    }
}
