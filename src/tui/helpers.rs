use super::colors::*;
use crate::domain::StatusTone;
use ratatui::style::Color;

/// Formats a byte count for display ("512 B", "1.5 KB", "3.2 MB").
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

pub fn status_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Info => TEXT_SECONDARY,
        StatusTone::Active => ACCENT_HIGHLIGHT,
        StatusTone::Success => ACCENT_SECONDARY,
        StatusTone::Error => ACCENT_PRIMARY,
    }
}
