// Demo mode: answer queries from a built-in sales dataset
//
// Lets the TUI be explored without a running API. The answers follow the
// same keyword rules as the API service:
// - "sales by region"  -> bar chart of total sales per region (largest first)
// - "sales over time"  -> line chart of total sales per day (oldest first)
// - anything else      -> table of the first 20 rows
//
// Run with: TEXTVIZ_DEMO=1 textviz   (or: textviz --demo)

use crate::backend::{HealthStatus, RequestFailure, VizBackend, VizOutcome};
use crate::viz::{ChartConfig, ChartType, Record, VisualizationResult};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::sleep;

/// Rows returned for unmatched queries
const TABLE_ROW_LIMIT: usize = 20;

/// One row of the demo sales table
#[derive(Debug, Clone, Copy)]
struct SaleRow {
    date: &'static str,
    region: &'static str,
    product: &'static str,
    amount: f64,
}

const SALES: &[SaleRow] = &[
    SaleRow { date: "2024-01-01", region: "North", product: "Widget", amount: 1200.0 },
    SaleRow { date: "2024-01-01", region: "South", product: "Gadget", amount: 850.5 },
    SaleRow { date: "2024-01-01", region: "East", product: "Widget", amount: 640.0 },
    SaleRow { date: "2024-01-01", region: "West", product: "Doohickey", amount: 410.25 },
    SaleRow { date: "2024-01-02", region: "North", product: "Gadget", amount: 980.0 },
    SaleRow { date: "2024-01-02", region: "South", product: "Widget", amount: 1320.0 },
    SaleRow { date: "2024-01-02", region: "East", product: "Doohickey", amount: 300.0 },
    SaleRow { date: "2024-01-02", region: "West", product: "Widget", amount: 715.75 },
    SaleRow { date: "2024-01-03", region: "North", product: "Doohickey", amount: 455.0 },
    SaleRow { date: "2024-01-03", region: "South", product: "Gadget", amount: 990.0 },
    SaleRow { date: "2024-01-03", region: "East", product: "Gadget", amount: 1105.5 },
    SaleRow { date: "2024-01-03", region: "West", product: "Gadget", amount: 620.0 },
    SaleRow { date: "2024-01-04", region: "North", product: "Widget", amount: 1510.0 },
    SaleRow { date: "2024-01-04", region: "South", product: "Doohickey", amount: 380.0 },
    SaleRow { date: "2024-01-04", region: "East", product: "Widget", amount: 870.0 },
    SaleRow { date: "2024-01-04", region: "West", product: "Doohickey", amount: 505.0 },
    SaleRow { date: "2024-01-05", region: "North", product: "Gadget", amount: 1160.0 },
    SaleRow { date: "2024-01-05", region: "South", product: "Widget", amount: 1245.0 },
    SaleRow { date: "2024-01-05", region: "East", product: "Gadget", amount: 930.25 },
    SaleRow { date: "2024-01-05", region: "West", product: "Widget", amount: 880.0 },
    SaleRow { date: "2024-01-06", region: "North", product: "Widget", amount: 1390.0 },
    SaleRow { date: "2024-01-06", region: "South", product: "Gadget", amount: 1010.0 },
    SaleRow { date: "2024-01-06", region: "East", product: "Doohickey", amount: 560.0 },
    SaleRow { date: "2024-01-06", region: "West", product: "Gadget", amount: 760.5 },
];

/// Offline backend serving canned visualizations
#[derive(Debug, Clone)]
pub struct DemoBackend {
    latency: Duration,
}

impl DemoBackend {
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(600))
    }

    /// Demo backend with a custom simulated round-trip time
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VizBackend for DemoBackend {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn target(&self) -> String {
        "built-in demo data".to_string()
    }

    fn text_to_viz(&self, query: String) -> BoxFuture<'static, VizOutcome> {
        let latency = self.latency;
        async move {
            sleep(latency).await;
            let result = answer(&query);
            tracing::debug!(
                "Demo answered {:?} with {} ({} rows)",
                query,
                result.chart_type.as_str(),
                result.data.len()
            );
            Ok(result)
        }
        .boxed()
    }

    fn health(&self) -> BoxFuture<'static, Result<HealthStatus, RequestFailure>> {
        async {
            Ok(HealthStatus {
                status: "healthy".to_string(),
                database: Some("demo".to_string()),
            })
        }
        .boxed()
    }
}

/// Pick a visualization for `query` using keyword rules
pub fn answer(query: &str) -> VisualizationResult {
    let query = query.to_lowercase();

    if query.contains("sales by region") {
        sales_by_region()
    } else if query.contains("sales over time") {
        sales_over_time()
    } else {
        sales_table()
    }
}

fn sales_by_region() -> VisualizationResult {
    let mut totals: Vec<(&str, f64)> = sum_by(|row| row.region).into_iter().collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    VisualizationResult {
        chart_type: ChartType::Bar,
        data: totals
            .into_iter()
            .map(|(region, total)| record(json!({"region": region, "total_sales": total})))
            .collect(),
        config: ChartConfig {
            x: Some("region".to_string()),
            y: Some("total_sales".to_string()),
            title: "Sales by Region".to_string(),
        },
    }
}

fn sales_over_time() -> VisualizationResult {
    // BTreeMap keys are ISO dates, so iteration is chronological
    VisualizationResult {
        chart_type: ChartType::Line,
        data: sum_by(|row| row.date)
            .into_iter()
            .map(|(date, total)| record(json!({"date": date, "total_sales": total})))
            .collect(),
        config: ChartConfig {
            x: Some("date".to_string()),
            y: Some("total_sales".to_string()),
            title: "Sales Over Time".to_string(),
        },
    }
}

fn sales_table() -> VisualizationResult {
    VisualizationResult {
        chart_type: ChartType::Table,
        data: SALES
            .iter()
            .take(TABLE_ROW_LIMIT)
            .map(|row| {
                record(json!({
                    "region": row.region,
                    "product": row.product,
                    "sales_amount": row.amount,
                }))
            })
            .collect(),
        config: ChartConfig {
            x: None,
            y: None,
            title: "Sales Data".to_string(),
        },
    }
}

fn sum_by(key: impl Fn(&SaleRow) -> &'static str) -> BTreeMap<&'static str, f64> {
    let mut totals = BTreeMap::new();
    for row in SALES {
        *totals.entry(key(row)).or_insert(0.0) += row.amount;
    }
    totals
}

fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Record::new(),
    }
}
