// App state for the TUI
//
// Holds the query view plus everything around it: the backend handle, the
// completion channel, theme, log buffer and session counters. All mutation
// happens on the event-loop task; requests run in spawned tasks and report
// back through `Completion` messages.

use crate::backend::{VizBackend, VizOutcome};
use crate::logging::LogBuffer;
use crate::tui::query_view::QueryView;
use crate::tui::theme::{Theme, ThemeKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Result of a finished request, sent from the request task to the event loop
#[derive(Debug)]
pub struct Completion {
    pub outcome: VizOutcome,
    pub elapsed: Duration,
}

/// Main application state
pub struct App {
    /// Query input, loading flag, result and error banner
    pub view: QueryView,

    backend: Arc<dyn VizBackend>,
    completion_tx: mpsc::Sender<Completion>,

    /// Shared with the tracing layer
    pub log_buffer: LogBuffer,

    /// Whether the logs panel is visible (F2)
    pub show_logs: bool,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Drives the spinner while a request is pending
    pub animation_frame: usize,

    pub start_time: Instant,

    // Session counters for the status bar
    pub requests_sent: u64,
    pub requests_failed: u64,
    pub last_latency: Option<Duration>,

    /// Answers come from built-in data
    pub demo_mode: bool,
}

impl App {
    pub fn new(
        backend: Arc<dyn VizBackend>,
        completion_tx: mpsc::Sender<Completion>,
        log_buffer: LogBuffer,
        theme_kind: ThemeKind,
        demo_mode: bool,
    ) -> Self {
        Self {
            view: QueryView::new(),
            backend,
            completion_tx,
            log_buffer,
            show_logs: false,
            theme_kind,
            theme: theme_kind.theme(),
            should_quit: false,
            animation_frame: 0,
            start_time: Instant::now(),
            requests_sent: 0,
            requests_failed: 0,
            last_latency: None,
            demo_mode,
        }
    }

    /// Submit the current query, if allowed
    ///
    /// The request runs on its own task so the UI keeps redrawing; the
    /// outcome comes back through the completion channel.
    pub fn submit(&mut self) {
        let Some(request) = self.view.submit(self.backend.as_ref()) else {
            return;
        };

        self.requests_sent += 1;
        let tx = self.completion_tx.clone();
        let started = Instant::now();

        tokio::spawn(async move {
            let outcome = request.await;
            let completion = Completion {
                outcome,
                elapsed: started.elapsed(),
            };
            if tx.send(completion).await.is_err() {
                // Event loop is gone (app quit while the request was pending)
                tracing::debug!("Dropping completion after shutdown");
            }
        });
    }

    /// Apply a finished request to the view
    pub fn complete(&mut self, completion: Completion) {
        tracing::debug!(
            elapsed_ms = completion.elapsed.as_millis() as u64,
            "Request finished"
        );
        if completion.outcome.is_err() {
            self.requests_failed += 1;
        }
        self.last_latency = Some(completion.elapsed);
        self.view.complete(completion.outcome);
    }

    /// Where requests go, for the status bar
    pub fn target(&self) -> String {
        self.backend.target()
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Switch to the next built-in theme
    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::info!("Theme: {}", self.theme_kind.name());
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Get formatted uptime string
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed();
        let seconds = elapsed.as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoBackend;

    fn demo_app() -> (App, mpsc::Receiver<Completion>) {
        let (tx, rx) = mpsc::channel(4);
        let backend = Arc::new(DemoBackend::with_latency(Duration::ZERO));
        let app = App::new(backend, tx, LogBuffer::new(), ThemeKind::Dark, true);
        (app, rx)
    }

    #[tokio::test]
    async fn submit_round_trips_through_channel() {
        let (mut app, mut rx) = demo_app();
        app.view.input.set_text("show me sales by region");
        app.submit();
        assert!(app.view.is_loading());
        assert_eq!(app.requests_sent, 1);

        // Second submit while pending is ignored
        app.submit();
        assert_eq!(app.requests_sent, 1);

        let completion = rx.recv().await.expect("completion should arrive");
        app.complete(completion);
        assert!(!app.view.is_loading());
        assert!(app.last_latency.is_some());
        assert_eq!(app.requests_failed, 0);
        assert_eq!(
            app.view.result().map(|r| r.config.title.as_str()),
            Some("Sales by Region")
        );
    }

    #[tokio::test]
    async fn blank_query_does_not_spawn() {
        let (mut app, mut rx) = demo_app();
        app.view.input.set_text("   ");
        app.submit();
        assert_eq!(app.requests_sent, 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn theme_cycles_and_logs_toggle() {
        let (tx, _rx) = mpsc::channel(1);
        let mut app = App::new(
            Arc::new(DemoBackend::new()),
            tx,
            LogBuffer::new(),
            ThemeKind::Solarized,
            false,
        );
        app.cycle_theme();
        assert_eq!(app.theme_kind, ThemeKind::Dark);
        app.toggle_logs();
        assert!(app.show_logs);
        assert_eq!(app.uptime().len(), 8);
    }
}
