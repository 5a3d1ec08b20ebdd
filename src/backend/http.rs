// HTTP backend - reqwest client for the text-to-viz API
//
// Wire contract:
//   POST {base_url}/query/text-to-viz   {"query": "..."}
//   -> {"chart_type": "...", "data": [...], "config": {...}}
//   GET  {base_url}/health
//
// No auth, no retries. A request timeout is only set when configured;
// otherwise the transport default applies.

use super::{HealthStatus, RequestFailure, VizBackend, VizOutcome};
use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const TEXT_TO_VIZ_PATH: &str = "/query/text-to-viz";
const HEALTH_PATH: &str = "/health";

#[derive(Debug, Serialize)]
struct QueryRequest {
    query: String,
}

/// Text-to-viz API client
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client targeting `base_url` (trailing slashes are ignored)
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!("HTTP backend targeting {}", base_url);

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl VizBackend for HttpBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    fn target(&self) -> String {
        self.base_url.clone()
    }

    fn text_to_viz(&self, query: String) -> BoxFuture<'static, VizOutcome> {
        let request = self
            .client
            .post(self.endpoint(TEXT_TO_VIZ_PATH))
            .json(&QueryRequest { query });
        send_json(request).boxed()
    }

    fn health(&self) -> BoxFuture<'static, Result<HealthStatus, RequestFailure>> {
        let request = self.client.get(self.endpoint(HEALTH_PATH));
        send_json(request).boxed()
    }
}

/// Send a request and decode a 2xx JSON body
async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, RequestFailure> {
    let response = request.send().await.map_err(network_failure)?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Backend returned {} for {}", status, response.url());
        return Err(RequestFailure::Status {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(network_failure)?;
    serde_json::from_slice(&body).map_err(|e| RequestFailure::Decode(e.to_string()))
}

fn network_failure(err: reqwest::Error) -> RequestFailure {
    if err.is_timeout() {
        RequestFailure::Network("Request timed out".to_string())
    } else {
        RequestFailure::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viz::ChartType;
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral port, returning its base URL
    async fn spawn_stub(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn posts_query_and_decodes_result() {
        // Echo the query back in the title so we can see what was sent
        let router = Router::new().route(
            "/query/text-to-viz",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "chart_type": "bar",
                    "data": [{"region": "North", "total_sales": 1000.0}],
                    "config": {"x": "region", "y": "total_sales", "title": body["query"]}
                }))
            }),
        );
        let base = spawn_stub(router).await;
        let backend = HttpBackend::new(&format!("{}/", base), None).unwrap();

        let result = backend
            .text_to_viz("  sales by region ".to_string())
            .await
            .unwrap();
        assert_eq!(result.chart_type, ChartType::Bar);
        assert_eq!(result.config.title, "  sales by region ");
        assert_eq!(result.data.len(), 1);
    }

    #[tokio::test]
    async fn non_success_status_is_a_failure() {
        let router = Router::new().route(
            "/query/text-to-viz",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Database error") }),
        );
        let backend = HttpBackend::new(&spawn_stub(router).await, None).unwrap();

        let err = backend.text_to_viz("anything".into()).await.unwrap_err();
        assert_eq!(err, RequestFailure::Status { status: 500 });
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_failure() {
        let router = Router::new().route("/query/text-to-viz", post(|| async { "not json" }));
        let backend = HttpBackend::new(&spawn_stub(router).await, None).unwrap();

        let err = backend.text_to_viz("anything".into()).await.unwrap_err();
        assert!(matches!(err, RequestFailure::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_failure() {
        // Grab a free port, then close it
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(&format!("http://{}", addr), None).unwrap();
        let err = backend.text_to_viz("anything".into()).await.unwrap_err();
        assert!(matches!(err, RequestFailure::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn health_probe() {
        let router = Router::new().route(
            "/health",
            get(|| async { Json(json!({"status": "healthy", "database": "connected"})) }),
        );
        let backend = HttpBackend::new(&spawn_stub(router).await, None).unwrap();

        let health = backend.health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.database.as_deref(), Some("connected"));
        assert!(backend.target().starts_with("http://127.0.0.1:"));
    }
}
