use pswp::cli::{AppConfig, Args};
use pswp::config::UserConfig;
use pswp::domain::{AppState, TriageEngine};
use pswp::logging::init_logging;
use pswp::open_file;
use pswp::tui::{
    handle_key_event, render, render_help_overlay, render_summary, render_welcome_overlay,
    KeyAction, ViewState,
};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, process::ExitCode, time::Duration};
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let config: AppConfig = args.into();

    // Logging is best effort; the app still works without a log file.
    // Exit by returning from main so the guard flushes on drop.
    let _log_guard = match init_logging(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialise logging: {}", e);
            None
        }
    };

    let engine = match TriageEngine::new(&config.directory) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "failed to prepare directory");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_app(engine, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the TUI application over a prepared engine
fn run_app(engine: TriageEngine, config: &AppConfig) -> io::Result<()> {
    info!(
        origin = %engine.origin_dir().display(),
        images = engine.total_images(),
        "session started"
    );

    let mut app_state = AppState::new(engine);

    let mut user_config = UserConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default user config");
        eprintln!("Warning: Failed to load user config: {}", e);
        UserConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app_state, config, &mut user_config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let stats = app_state.statistics();
    info!(
        kept = stats.kept,
        deleted = stats.deleted,
        remaining = stats.remaining,
        "session ended"
    );
    println!(
        "Kept {} and deleted {} of {} images ({} still pending).",
        stats.kept, stats.deleted, stats.total, stats.remaining
    );

    result
}

/// Suspends the TUI terminal to allow external programs to run
fn suspend_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Resumes the TUI terminal after external program exits
fn resume_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(())
}

/// Main application loop
fn run_loop<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    config: &AppConfig,
    user_config: &mut UserConfig,
) -> io::Result<()> {
    let mut view_state = if config.show_welcome || !user_config.welcome_shown {
        ViewState::Welcome
    } else {
        ViewState::Browsing
    };

    loop {
        terminal.draw(|frame| {
            render(frame, app_state);

            match view_state {
                ViewState::Help => render_help_overlay(frame),
                ViewState::Summary => render_summary(frame, &app_state.statistics()),
                ViewState::Welcome => render_welcome_overlay(frame),
                ViewState::Browsing => {}
            }
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match view_state {
            ViewState::Help => {
                if matches!(
                    handle_key_event(key),
                    KeyAction::Help | KeyAction::Quit | KeyAction::None
                ) {
                    view_state = ViewState::Browsing;
                }
                continue;
            }
            ViewState::Summary => {
                // Undo from the summary goes back to sorting; anything else exits
                if handle_key_event(key) == KeyAction::Undo {
                    if app_state.undo_last().is_ok() {
                        view_state = ViewState::Browsing;
                    }
                    continue;
                }
                break;
            }
            ViewState::Welcome => {
                view_state = ViewState::Browsing;

                user_config.welcome_shown = true;
                if let Err(e) = user_config.save() {
                    warn!(error = %e, "failed to save user config");
                }
                continue;
            }
            ViewState::Browsing => {}
        }

        match handle_key_event(key) {
            KeyAction::Quit => {
                if app_state.history().is_empty() {
                    break;
                }
                view_state = ViewState::Summary;
            }
            KeyAction::Keep => {
                if app_state.keep_current().is_ok() && app_state.all_sorted() {
                    view_state = ViewState::Summary;
                }
            }
            KeyAction::Delete => {
                if app_state.delete_current().is_ok() && app_state.all_sorted() {
                    view_state = ViewState::Summary;
                }
            }
            KeyAction::Skip => {
                app_state.skip_current();
            }
            KeyAction::Previous => app_state.previous(),
            KeyAction::Undo => {
                // Failures are shown in the status line
                let _ = app_state.undo_last();
            }
            KeyAction::Help => view_state = ViewState::Help,
            KeyAction::Open => {
                let Some(path) = app_state.current_path().map(|p| p.to_path_buf()) else {
                    continue;
                };

                suspend_terminal(terminal)?;
                let open_result = open_file(&path);
                resume_terminal(terminal)?;

                if let Err(e) = open_result {
                    app_state.report_error(format!("Open failed: {}", e));
                }
            }
            KeyAction::None => {}
        }
    }

    Ok(())
}
