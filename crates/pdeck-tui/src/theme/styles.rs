//! Semantic style builders for the profile screen.

use ratatui::style::{Modifier, Style};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Section headers ---
pub fn section_header() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Field rendering ---
pub fn field_label() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn required_marker() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn control() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::CONTROL_BG)
}

pub fn control_editing() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::CONTROL_EDITING_BG)
}

pub fn focus_marker() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn field_error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Actions ---
pub fn action_enabled() -> Style {
    Style::default()
        .fg(palette::STATUS_GREEN)
        .add_modifier(Modifier::BOLD)
}

pub fn action_disabled() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Status line ---
pub fn status_error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_busy() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_ok() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

// --- Keybinding hints ---
pub fn kbd_key() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn kbd_label() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Borders ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}
