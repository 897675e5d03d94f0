// TUI module for rendering the terminal interface
pub mod colors;
pub mod helpers;
pub mod input;

// Re-exports
pub use colors::*;
pub use helpers::{format_file_size, status_color};
pub use input::{handle_key_event, KeyAction};

use crate::domain::{AppState, ImageDetails, SessionStatistics};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

/// UI view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Main triage view
    Browsing,
    /// Help overlay visible
    Help,
    /// Summary screen at end
    Summary,
    /// Welcome screen shown on first launch
    Welcome,
}

/// Renders the main triage view
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and status
            Constraint::Min(0),    // Image details
            Constraint::Length(3), // Last action
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
    render_action_line(frame, chunks[2], state);
    render_progress(frame, chunks[3], state);
    render_footer(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let status_style = Style::default()
        .fg(status_color(state.status_tone()))
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(
            " Photo Swipe ",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", state.engine().origin_dir().display()),
            Style::default().fg(TEXT_SECONDARY),
        ),
        Span::raw(" "),
        Span::styled(format!("[ {} ]", state.status()), status_style),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );

    frame.render_widget(header, area);
}

fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR));

    let paragraph = match state.current_details() {
        Some(details) => {
            let title = format!(
                " Image {} of {} ",
                state.cursor() + 1,
                state.engine().remaining_count()
            );
            Paragraph::new(details_lines(details))
                .block(block.title(title))
                .alignment(Alignment::Left)
        }
        None => Paragraph::new(completion_lines(state))
            .block(block)
            .alignment(Alignment::Center),
    };

    frame.render_widget(
        paragraph
            .style(Style::default().fg(TEXT_PRIMARY))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn details_lines(details: &ImageDetails) -> Vec<Line<'static>> {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(TEXT_SECONDARY));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", details.name),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("  Path:       "),
            Span::raw(details.path.display().to_string()),
        ]),
        Line::from(vec![
            label("  Size:       "),
            Span::raw(
                details
                    .size
                    .map(format_file_size)
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
        ]),
        Line::from(vec![
            label("  Modified:   "),
            Span::raw(
                details
                    .modified_date
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
        ]),
    ];

    match details.dimensions {
        Some((width, height)) => lines.push(Line::from(vec![
            label("  Dimensions: "),
            Span::raw(format!("{} x {} px", width, height)),
        ])),
        None => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  Could not load {}", details.name),
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "  File might be corrupted.",
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
    }

    lines
}

fn completion_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), Line::from("")];

    if state.all_sorted() {
        lines.push(Line::from(Span::styled(
            "All images sorted",
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        )));
        if state.engine().total_images() == 0 {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "No jpg, jpeg, png, webp, gif or bmp files in this directory.",
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
    } else {
        let remaining = state.engine().remaining_count();
        lines.push(Line::from(Span::styled(
            "End of queue",
            Style::default()
                .fg(SKIP_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "{} skipped image{} still pending. Press ↑ to go back.",
                remaining,
                if remaining == 1 { "" } else { "s" }
            ),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    lines
}

fn render_action_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(Span::styled(
        state.last_action().to_string(),
        Style::default().fg(TEXT_SECONDARY),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );

    frame.render_widget(paragraph, area);
}

fn render_progress(frame: &mut Frame, area: Rect, state: &AppState) {
    let stats = state.statistics();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .gauge_style(Style::default().fg(ACCENT_HIGHLIGHT).bg(BG_DARK))
        .ratio(state.progress())
        .label(format!(
            "{} / {} images sorted",
            stats.processed, stats.total
        ));

    frame.render_widget(gauge, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let separator = || Span::raw("  │  ");
    let controls = Line::from(vec![
        Span::styled(
            " ← ",
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Delete", Style::default().fg(TEXT_SECONDARY)),
        separator(),
        Span::styled(
            "→ ",
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Keep", Style::default().fg(TEXT_SECONDARY)),
        separator(),
        Span::styled("Space ", Style::default().fg(SKIP_COLOR)),
        Span::styled("Skip", Style::default().fg(TEXT_SECONDARY)),
        separator(),
        Span::styled("u ", Style::default().fg(UNDO_COLOR)),
        Span::styled("Undo", Style::default().fg(TEXT_SECONDARY)),
        separator(),
        Span::styled("? ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Help", Style::default().fg(TEXT_SECONDARY)),
        separator(),
        Span::styled("q ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Quit", Style::default().fg(TEXT_SECONDARY)),
    ]);

    let footer = Paragraph::new(controls)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Renders the summary screen at the end
pub fn render_summary(frame: &mut Frame, stats: &SessionStatistics) {
    let summary_area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, summary_area);

    let block = Block::default()
        .title(" Session Complete ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(summary_area);
    frame.render_widget(block, summary_area);

    let count = |value: usize, color: Color| {
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Summary",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("   Sorted:  "),
            count(stats.processed, ACCENT_HIGHLIGHT),
            Span::raw(" of "),
            count(stats.total, ACCENT_HIGHLIGHT),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("   ✓ ", Style::default().fg(ACCENT_SECONDARY)),
            Span::raw("Kept:     "),
            count(stats.kept, ACCENT_SECONDARY),
        ]),
        Line::from(vec![
            Span::styled("   ✗ ", Style::default().fg(ACCENT_PRIMARY)),
            Span::raw("Deleted:  "),
            count(stats.deleted, ACCENT_PRIMARY),
        ]),
        Line::from(vec![
            Span::styled("   ○ ", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("Pending:  "),
            count(stats.remaining, TEXT_SECONDARY),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press u to undo, any other key to exit",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let help_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        shortcut_line("→ / k", "Keep image", ACCENT_SECONDARY),
        shortcut_line("← / d", "Delete image", ACCENT_PRIMARY),
        shortcut_line("Space / ↓", "Skip", SKIP_COLOR),
        shortcut_line("↑ / i", "Previous image", TEXT_SECONDARY),
        shortcut_line("u / Ctrl+Z", "Undo", UNDO_COLOR),
        shortcut_line("o", "Open in viewer", TEXT_SECONDARY),
        shortcut_line("?", "Toggle help", TEXT_SECONDARY),
        shortcut_line("q / Esc", "Quit", TEXT_SECONDARY),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(help_lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

fn shortcut_line(
    keys: &'static str,
    description: &'static str,
    color: Color,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}  ", keys), Style::default().fg(color)),
        Span::raw(format!("{:<16}", description)),
    ])
}

/// Renders the welcome dialog overlay
pub fn render_welcome_overlay(frame: &mut Frame) {
    let area = centered_rect(85, 85, frame.area());
    frame.render_widget(Clear, area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let bullet = |text: &'static str| {
        Line::from(vec![
            Span::styled("  •  ", Style::default().fg(ACCENT_SECONDARY)),
            Span::raw(text),
        ])
    };

    let welcome_lines = vec![
        Line::from(""),
        heading("Welcome to pswp!"),
        Line::from(""),
        Line::from("Flash through your folders, keep the sparks, delete the noise."),
        Line::from(""),
        heading("How it works:"),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Press "),
            Span::styled(
                "→",
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to keep an image or "),
            Span::styled(
                "←",
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to delete it."),
        ]),
        Line::from(""),
        heading("Safety Features:"),
        Line::from(""),
        bullet("Nothing is erased: images are moved into kept/ and deleted/ subfolders"),
        bullet("Name clashes get a numeric suffix, existing files are never overwritten"),
        bullet("Press u to undo, as many times as you like during this session"),
        Line::from(""),
        Line::from(""),
        heading("Press any key to start..."),
    ];

    let welcome_text = Paragraph::new(welcome_lines)
        .block(
            Block::default()
                .title(Span::styled(
                    " Welcome ",
                    Style::default()
                        .fg(ACCENT_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
                .style(Style::default().bg(BG_DARK)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    frame.render_widget(welcome_text, area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TriageEngine;
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use tempfile::TempDir;

    fn setup(names: &[&str]) -> (TempDir, AppState) {
        let temp_dir = TempDir::new().unwrap();
        for name in names {
            fs::write(temp_dir.path().join(name), b"not really an image").unwrap();
        }
        let engine = TriageEngine::new(temp_dir.path()).unwrap();
        (temp_dir, AppState::new(engine))
    }

    fn draw(width: u16, height: u16, f: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(f).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn test_render_empty_directory() {
            let (_temp_dir, state) = setup(&[]);
            let buffer_str = draw(100, 30, |frame| render(frame, &state));

            assert!(buffer_str.contains("All images sorted"));
            assert!(buffer_str.contains("0 / 0 images sorted"));
        }

        #[test]
        fn test_render_with_images() {
            let (_temp_dir, state) = setup(&["a.png", "b.png"]);
            let buffer_str = draw(100, 30, |frame| render(frame, &state));

            assert!(buffer_str.contains("a.png"));
            assert!(buffer_str.contains("Image 1 of 2"));
            assert!(buffer_str.contains("0 / 2 images sorted"));
            assert!(buffer_str.contains("Last action: none yet."));
        }

        #[test]
        fn test_render_unloadable_image() {
            let (_temp_dir, state) = setup(&["broken.jpg"]);
            let buffer_str = draw(100, 30, |frame| render(frame, &state));

            assert!(buffer_str.contains("Could not load broken.jpg"));
            assert!(buffer_str.contains("Image load failed"));
        }

        #[test]
        fn test_render_progress_after_keep() {
            let (_temp_dir, mut state) = setup(&["a.png", "b.png"]);
            state.keep_current().unwrap();

            let buffer_str = draw(100, 30, |frame| render(frame, &state));

            assert!(buffer_str.contains("1 / 2 images sorted"));
            assert!(buffer_str.contains("Last action: kept a.png"));
            assert!(buffer_str.contains("b.png"));
        }

        #[test]
        fn test_render_end_of_queue_with_skipped() {
            let (_temp_dir, mut state) = setup(&["a.png"]);
            state.skip_current();

            let buffer_str = draw(100, 30, |frame| render(frame, &state));

            assert!(buffer_str.contains("End of queue"));
            assert!(buffer_str.contains("1 skipped image still pending"));
        }

        #[test]
        fn test_render_footer() {
            let (_temp_dir, state) = setup(&["a.png"]);
            let buffer_str = draw(100, 30, |frame| render(frame, &state));

            assert!(buffer_str.contains("Delete"));
            assert!(buffer_str.contains("Keep"));
            assert!(buffer_str.contains("Skip"));
            assert!(buffer_str.contains("Quit"));
        }
    }

    mod overlay_tests {
        use super::*;

        #[test]
        fn test_render_help_overlay() {
            let buffer_str = draw(100, 40, render_help_overlay);

            assert!(buffer_str.contains("Help"));
            assert!(buffer_str.contains("Keep image"));
            assert!(buffer_str.contains("Delete image"));
        }

        #[test]
        fn test_render_summary() {
            let stats = SessionStatistics {
                total: 10,
                kept: 6,
                deleted: 3,
                remaining: 1,
                processed: 9,
            };
            let buffer_str = draw(100, 40, |frame| render_summary(frame, &stats));

            assert!(buffer_str.contains("Session Complete"));
            assert!(buffer_str.contains("Sorted:  9 of 10"));
            assert!(buffer_str.contains("Kept"));
            assert!(buffer_str.contains("Deleted"));
        }

        #[test]
        fn test_render_welcome_overlay() {
            let buffer_str = draw(120, 40, render_welcome_overlay);
            assert!(buffer_str.contains("Welcome to pswp!"));
        }
    }
}
