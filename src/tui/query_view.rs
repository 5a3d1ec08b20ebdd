//! Query view state
//!
//! Owns everything the user sees change over one query cycle: the input
//! text, the in-flight flag, the current result and the error banner.
//! The view never awaits anything itself. [`QueryView::submit`] hands back
//! the backend's future and the caller feeds its outcome to
//! [`QueryView::complete`] once it resolves.

use crate::backend::{VizBackend, VizOutcome};
use crate::tui::components::query_input::QueryInput;
use crate::viz::VisualizationResult;
use futures::future::BoxFuture;

/// Shown in front of every request failure
pub const ERROR_PREFIX: &str = "Failed to generate visualization: ";

#[derive(Debug, Default)]
pub struct QueryView {
    pub input: QueryInput,
    result: Option<VisualizationResult>,
    loading: bool,
    error: Option<String>,
}

impl QueryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&VisualizationResult> {
        self.result.as_ref()
    }

    /// Submit is offered only when idle with a non-blank query
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.text().trim().is_empty()
    }

    /// Start a request for the current query
    ///
    /// Returns `None` (and changes nothing) when submission is not allowed.
    /// The query goes out exactly as typed; trimming only decides emptiness.
    pub fn submit(&mut self, backend: &dyn VizBackend) -> Option<BoxFuture<'static, VizOutcome>> {
        if !self.can_submit() {
            return None;
        }

        self.loading = true;
        self.error = None;
        let query = self.input.text().to_string();
        tracing::info!(backend = backend.name(), "Submitting query: {}", query);
        Some(backend.text_to_viz(query))
    }

    /// Apply the outcome of the in-flight request
    ///
    /// A failure leaves the previous result on screen under the banner.
    pub fn complete(&mut self, outcome: VizOutcome) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                tracing::info!(
                    chart_type = result.chart_type.as_str(),
                    rows = result.data.len(),
                    "Visualization received"
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Query failed: {}", e);
                self.error = Some(format!("{}{}", ERROR_PREFIX, e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{HealthStatus, RequestFailure};
    use crate::viz::{dispatch, ChartConfig, ChartType, Visualization};
    use futures::FutureExt;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Backend that records every query and answers with a fixed outcome
    struct RecordingBackend {
        queries: Arc<Mutex<Vec<String>>>,
        outcome: VizOutcome,
    }

    impl RecordingBackend {
        fn answering(outcome: VizOutcome) -> Self {
            Self {
                queries: Arc::new(Mutex::new(Vec::new())),
                outcome,
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl VizBackend for RecordingBackend {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn target(&self) -> String {
            "memory".to_string()
        }

        fn text_to_viz(&self, query: String) -> BoxFuture<'static, VizOutcome> {
            self.queries.lock().unwrap().push(query);
            futures::future::ready(self.outcome.clone()).boxed()
        }

        fn health(&self) -> BoxFuture<'static, Result<HealthStatus, RequestFailure>> {
            futures::future::ready(Ok(HealthStatus {
                status: "healthy".to_string(),
                database: None,
            }))
            .boxed()
        }
    }

    fn bar_result() -> VisualizationResult {
        let data = json!([
            {"region": "North", "total_sales": 1500},
            {"region": "South", "total_sales": 900}
        ]);
        VisualizationResult {
            chart_type: ChartType::Bar,
            data: serde_json::from_value(data).unwrap(),
            config: ChartConfig {
                x: Some("region".to_string()),
                y: Some("total_sales".to_string()),
                title: "Sales by Region".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn submit_sends_query_once_and_stores_result() {
        let backend = RecordingBackend::answering(Ok(bar_result()));
        let mut view = QueryView::new();
        view.input.set_text("show me sales by region");

        let request = view.submit(&backend).expect("query should be sent");
        assert!(view.is_loading());
        assert!(!view.can_submit());

        view.complete(request.await);
        assert!(!view.is_loading());
        assert_eq!(view.error(), None);
        assert_eq!(view.result(), Some(&bar_result()));
        assert_eq!(backend.queries(), vec!["show me sales by region"]);
        assert!(matches!(
            view.result().map(dispatch),
            Some(Visualization::Bar(_))
        ));
    }

    #[test]
    fn query_is_sent_untrimmed() {
        let backend = RecordingBackend::answering(Ok(bar_result()));
        let mut view = QueryView::new();
        view.input.set_text("  sales over time ");

        assert!(view.submit(&backend).is_some());
        assert_eq!(backend.queries(), vec!["  sales over time "]);
    }

    #[test]
    fn blank_query_sends_nothing() {
        let backend = RecordingBackend::answering(Ok(bar_result()));
        let mut view = QueryView::new();

        assert!(view.submit(&backend).is_none());
        view.input.set_text("   \t ");
        assert!(!view.can_submit());
        assert!(view.submit(&backend).is_none());
        assert!(!view.is_loading());
        assert!(backend.queries().is_empty());
    }

    #[test]
    fn no_second_request_while_loading() {
        let backend = RecordingBackend::answering(Ok(bar_result()));
        let mut view = QueryView::new();
        view.input.set_text("sales by region");

        let first = view.submit(&backend);
        let second = view.submit(&backend);
        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(backend.queries().len(), 1);
    }

    #[tokio::test]
    async fn failure_shows_banner_and_keeps_previous_result() {
        let mut view = QueryView::new();
        view.input.set_text("sales by region");

        let ok = RecordingBackend::answering(Ok(bar_result()));
        let request = view.submit(&ok).unwrap();
        view.complete(request.await);

        let failing =
            RecordingBackend::answering(Err(RequestFailure::Network("Network Error".into())));
        let request = view.submit(&failing).unwrap();
        assert_eq!(view.error(), None);
        view.complete(request.await);

        assert_eq!(
            view.error(),
            Some("Failed to generate visualization: Network Error")
        );
        assert_eq!(view.result(), Some(&bar_result()));
        assert!(!view.is_loading());
        assert!(view.can_submit());
    }

    #[tokio::test]
    async fn status_failure_message() {
        let backend = RecordingBackend::answering(Err(RequestFailure::Status { status: 500 }));
        let mut view = QueryView::new();
        view.input.set_text("anything");

        let request = view.submit(&backend).unwrap();
        view.complete(request.await);
        assert_eq!(
            view.error(),
            Some("Failed to generate visualization: Request failed with status code 500")
        );
        assert!(view.result().is_none());
    }

    #[tokio::test]
    async fn success_clears_previous_error() {
        let mut view = QueryView::new();
        view.input.set_text("x");

        let failing = RecordingBackend::answering(Err(RequestFailure::Network("boom".into())));
        let request = view.submit(&failing).unwrap();
        view.complete(request.await);
        assert!(view.error().is_some());

        let ok = RecordingBackend::answering(Ok(bar_result()));
        let request = view.submit(&ok).unwrap();
        view.complete(request.await);
        assert_eq!(view.error(), None);
    }
}
