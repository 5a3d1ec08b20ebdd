//! Visualization results returned by the text-to-viz API
//!
//! The backend decides which layout to use; this module only models what it
//! sends back and turns it into something the TUI can draw:
//! - [`VisualizationResult`]: the wire shape (`chart_type`, `data`, `config`)
//! - [`dispatch`]: pure selection of a render model from a result
//! - [`monotone`]: monotone cubic interpolation for line charts

pub mod dispatch;
pub mod monotone;

pub use dispatch::{dispatch, BarSeries, LineSeries, TableGrid, Visualization};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of returned data: field name to scalar value, in wire order
pub type Record = serde_json::Map<String, Value>;

/// Which layout the backend selected for a result
///
/// Closed over the layouts the client knows how to draw. Anything else is
/// kept verbatim in `Unknown` so the fallback can name it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    Bar,
    Line,
    Table,
    Unknown(String),
}

impl ChartType {
    pub fn as_str(&self) -> &str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Table => "table",
            ChartType::Unknown(other) => other,
        }
    }
}

impl From<String> for ChartType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "bar" => ChartType::Bar,
            "line" => ChartType::Line,
            "table" => ChartType::Table,
            _ => ChartType::Unknown(value),
        }
    }
}

impl From<ChartType> for String {
    fn from(chart_type: ChartType) -> Self {
        chart_type.as_str().to_string()
    }
}

/// Axis mapping and display title for a result
///
/// Table results from the API carry only a title, so the axis
/// keys are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default)]
    pub title: String,
}

/// Response body of `POST /query/text-to-viz`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationResult {
    pub chart_type: ChartType,
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub config: ChartConfig,
}

/// Format a scalar for display in a cell or label
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            // 1000.0 reads as "1000", like the browser did
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Numeric view of a scalar, accepting numeric strings
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
