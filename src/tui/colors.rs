//! Colour palette

use ratatui::style::Color;

pub const BG_DARK: Color = Color::Rgb(4, 7, 20);
pub const BORDER_COLOR: Color = Color::Rgb(70, 110, 140);

pub const TEXT_PRIMARY: Color = Color::Rgb(246, 251, 255);
pub const TEXT_SECONDARY: Color = Color::Rgb(202, 219, 241);

/// Accent for delete
pub const ACCENT_PRIMARY: Color = Color::Rgb(255, 95, 109);
/// Accent for keep
pub const ACCENT_SECONDARY: Color = Color::Rgb(29, 232, 177);
pub const ACCENT_HIGHLIGHT: Color = Color::Rgb(121, 233, 255);

pub const SKIP_COLOR: Color = Color::Rgb(255, 186, 73);
pub const UNDO_COLOR: Color = Color::Rgb(77, 143, 255);
