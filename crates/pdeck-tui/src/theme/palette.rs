//! Color palette for the profile screen.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Focus marker, section headers
pub const ACCENT_DIM: Color = Color::DarkGray; // Dimmed accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Field values
pub const TEXT_SECONDARY: Color = Color::Gray; // Field labels
pub const TEXT_MUTED: Color = Color::DarkGray; // Hints, disabled actions
pub const TEXT_BRIGHT: Color = Color::White; // Titles

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Loaded/saved
pub const STATUS_RED: Color = Color::Red; // Errors, required markers
pub const STATUS_YELLOW: Color = Color::Yellow; // Dirty draft, in-flight

// --- Controls ---
pub const CONTROL_BG: Color = Color::Rgb(40, 40, 50); // Edit-mode input background
pub const CONTROL_EDITING_BG: Color = Color::Rgb(60, 60, 70); // Active buffer background
