// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, request completions)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod layout;
pub mod offscreen;
pub mod query_view;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::backend::VizBackend;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Completion};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use theme::ThemeKind;
use tokio::sync::mpsc;
use traits::Interactive;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. A request still pending at quit is abandoned.
pub async fn run_tui(
    backend: Arc<dyn VizBackend>,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<()> {
    let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme {:?}, using default", config.theme);
        ThemeKind::default()
    });

    let (completion_tx, mut completion_rx) = mpsc::channel(8);
    let mut app = App::new(
        backend,
        completion_tx,
        log_buffer,
        theme_kind,
        config.demo_mode,
    );

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!("TUI started, sending queries to {}", app.target());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut completion_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (editing, submit, toggles)
/// 2. Timer ticks (spinner animation and uptime)
/// 3. Request completions from spawned request tasks
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    completion_rx: &mut mpsc::Receiver<Completion>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
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

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Request finished
            Some(completion) = completion_rx.recv() => {
                app.complete(completion);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → Submit → Query input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 2: Submit
    if key_event.code == KeyCode::Enter {
        app.submit();
        return;
    }

    // Layer 3: The input is read-only while a request is pending
    if app.view.is_loading() {
        return;
    }
    if !app.view.input.handle_key(key_event).was_handled() {
        tracing::trace!(code = ?key_event.code, "Key not bound");
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::F(2) => app.toggle_logs(),
        KeyCode::F(3) => app.cycle_theme(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> (App, mpsc::Receiver<Completion>) {
        let (tx, rx) = mpsc::channel(4);
        let backend = Arc::new(DemoBackend::with_latency(Duration::ZERO));
        (
            App::new(backend, tx, LogBuffer::new(), ThemeKind::Dark, true),
            rx,
        )
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key_event(app, press(KeyCode::Char(c)));
        }
    }

    #[tokio::test]
    async fn enter_submits_and_input_is_locked_while_loading() {
        let (mut app, mut rx) = app();
        type_str(&mut app, "sales over time");
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert!(app.view.is_loading());

        // Edits are dropped until the request finishes
        type_str(&mut app, "!!");
        handle_key_event(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.view.input.text(), "sales over time");

        app.complete(rx.recv().await.unwrap());
        type_str(&mut app, "!");
        assert_eq!(app.view.input.text(), "sales over time!");
    }

    #[tokio::test]
    async fn enter_on_blank_input_does_nothing() {
        let (mut app, _rx) = app();
        type_str(&mut app, "  ");
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert!(!app.view.is_loading());
        assert_eq!(app.requests_sent, 0);
    }

    #[test]
    fn global_keys() {
        let (mut app, _rx) = app();
        handle_key_event(&mut app, press(KeyCode::F(2)));
        assert!(app.show_logs);
        handle_key_event(&mut app, press(KeyCode::F(3)));
        assert_eq!(app.theme_kind, ThemeKind::Light);
        assert!(!app.should_quit);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert_eq!(app.view.input.text(), "");
    }

    #[test]
    fn escape_quits() {
        let (mut app, _rx) = app();
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
