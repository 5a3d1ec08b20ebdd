//! Text-to-visualization backends
//!
//! The view never talks HTTP directly. It hands the query to a
//! [`VizBackend`] and awaits the returned future:
//! - [`HttpBackend`]: the real API client (`POST /query/text-to-viz`)
//! - [`crate::demo::DemoBackend`]: canned answers for offline demos
//!
//! Every failure collapses into a [`RequestFailure`] whose `Display` is the
//! transport-level message shown after the user-facing prefix.

mod http;

pub use http::HttpBackend;

use crate::viz::VisualizationResult;
use futures::future::BoxFuture;
use serde::Deserialize;

/// Outcome of one text-to-viz call
pub type VizOutcome = Result<VisualizationResult, RequestFailure>;

/// Why a request did not produce a visualization
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    /// Connection refused, DNS failure, timeout, ...
    #[error("{0}")]
    Network(String),
    /// Server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16 },
    /// Body was not a visualization result
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Reply of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}

/// Source of visualization results
///
/// Futures are `'static` so the TUI can spawn them and keep drawing while
/// the request is pending.
pub trait VizBackend: Send + Sync {
    /// Short name for logs and the status bar
    fn name(&self) -> &'static str;

    /// Where requests go (displayed to the user)
    fn target(&self) -> String;

    /// Ask the backend to turn `query` into a visualization
    fn text_to_viz(&self, query: String) -> BoxFuture<'static, VizOutcome>;

    /// Probe backend health
    fn health(&self) -> BoxFuture<'static, Result<HealthStatus, RequestFailure>>;
}
