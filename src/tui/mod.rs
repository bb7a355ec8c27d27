// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the form, preview, and chrome
// - Flushing the debounced preview and expiring toasts

pub mod app;
pub mod clipboard;
pub mod components;
pub mod fields;
pub mod input;
pub mod layout;
pub mod theme;

use crate::config::{self, Config};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fields::FieldId;
use layout::Breakpoint;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::time::Duration;

/// Rows the form needs: fixed field rows plus its borders
const FORM_HEIGHT: u16 = 13;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including on error paths out of the loop.
pub async fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, &config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two wake sources: keyboard input and a periodic tick. The tick is what
/// fires pending work whose deadline passed between keystrokes - the
/// debounced preview rebuild and toast expiry - so it runs well below the
/// shortest debounce the config allows.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(25));

    loop {
        terminal
            .draw(|f| draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick
            _ = tick_interval.tick() => {}
        }

        // Timer-driven state: latest edit wins, expired toast disappears
        app.flush_due_preview();
        app.clear_expired_toast();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render one frame: title, form + preview, status bar
fn draw(f: &mut Frame, app: &App) {
    let bg = Block::default().style(Style::default().bg(app.theme.bg));
    f.render_widget(bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(5),    // content
            Constraint::Length(2), // status
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    // Side-by-side panes on wide terminals, stacked otherwise
    let content = chunks[1];
    if Breakpoint::from_width(content.width).at_least(Breakpoint::Wide) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(content);
        components::render_form(f, panes[0], app);
        components::render_preview(f, panes[1], app);
    } else {
        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)])
            .split(content);
        components::render_form(f, panes[0], app);
        components::render_preview(f, panes[1], app);
    }

    components::render_status(f, chunks[2], app);

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// Handle keyboard input
/// Layered dispatch: global actions → focused-row specials → text editing
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        KeyEventKind::Press => {}
        _ => return,
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    // Row-specific action keys for the select and the checkbox; these go
    // through the press tracker so they fire once per press
    match app.focused {
        FieldId::Type => match key {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                if app.handle_key_press(key) {
                    app.cycle_type_next();
                }
                return;
            }
            KeyCode::Left => {
                if app.handle_key_press(key) {
                    app.cycle_type_prev();
                }
                return;
            }
            _ => {}
        },
        FieldId::Breaking => {
            if matches!(key, KeyCode::Char(' ') | KeyCode::Enter) {
                if app.handle_key_press(key) {
                    app.toggle_breaking();
                }
                return;
            }
        }
        _ => {}
    }

    // Everything else is text input for the focused field; character keys
    // bypass the press tracker so typing repeats freely
    app.handle_field_key(key_event);
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of the focused row
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key {
        // Quit
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('c') if ctrl => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Copy the rendered message
        KeyCode::Char('y') if ctrl => {
            if app.handle_key_press(key) {
                copy_current(app);
            }
            true
        }
        // Reset the form
        KeyCode::Char('r') if ctrl => {
            if app.handle_key_press(key) {
                app.reset();
                tracing::debug!("form reset");
            }
            true
        }
        // Toggle and persist the theme
        KeyCode::Char('t') if ctrl => {
            if app.handle_key_press(key) {
                let kind = app.toggle_theme();
                config::persist_theme(kind);
                tracing::info!("theme switched to {}", kind.name());
            }
            true
        }
        // Focus movement
        KeyCode::Tab => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
            true
        }
        KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.focus_prev();
            }
            true
        }
        KeyCode::Down => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
            true
        }
        KeyCode::Up => {
            if app.handle_key_press(key) {
                app.focus_prev();
            }
            true
        }
        _ => false,
    }
}

/// Copy the preview to the clipboard
///
/// The placeholder is never copied - the action is silently skipped, same
/// as pressing copy on an untouched form. Failures are surfaced: a toast
/// plus a warning in the captured log.
fn copy_current(app: &mut App) {
    let Some(text) = app.copy_payload().map(str::to_string) else {
        return;
    };

    match clipboard::copy_to_clipboard(&text) {
        Ok(()) => {
            tracing::debug!("copied {} bytes to clipboard", text.len());
            app.show_toast("✓ Copied to clipboard");
        }
        Err(e) => {
            tracing::warn!("clipboard write failed: {e:#}");
            app.show_toast("✗ Copy failed");
        }
    }
}
