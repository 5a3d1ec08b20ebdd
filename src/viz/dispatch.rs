// Render dispatch - pick a render model from a visualization result
//
// This is the only decision logic in the client: the backend names a layout
// in `chart_type` and we build the matching model. Drawing happens in the
// TUI chart area; everything here is pure so it can be tested without a
// terminal.

use super::{display_value, numeric_value, ChartType, Record, VisualizationResult};

/// A drawable model of one visualization result
#[derive(Debug, Clone, PartialEq)]
pub enum Visualization {
    Bar(BarSeries),
    Line(LineSeries),
    Table(TableGrid),
    /// The backend asked for a layout this client cannot draw
    Unsupported { chart_type: String },
}

impl Visualization {
    /// Fallback text for unsupported layouts
    pub fn unsupported_message(chart_type: &str) -> String {
        format!("Unsupported chart type: {}", chart_type)
    }
}

/// One bar: category label and (if numeric) its value
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub label: String,
    pub value: Option<f64>,
}

/// Single bar series keyed by `config.x` / `config.y`
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub x_key: String,
    pub y_key: String,
    pub bars: Vec<BarPoint>,
}

impl BarSeries {
    /// Largest numeric value in the series (0 if none)
    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .filter_map(|b| b.value)
            .fold(0.0_f64, f64::max)
    }
}

/// Single line series: one label per record, numeric points by record index
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub x_key: String,
    pub y_key: String,
    /// x value of every record, in order (used for axis labels)
    pub labels: Vec<String>,
    /// (record index, y) for records whose y is numeric
    pub points: Vec<(f64, f64)>,
}

impl LineSeries {
    /// Min and max of the y values, or None when there are no points
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|&(_, y)| y);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Header plus body rows, all cells pre-formatted
#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Number of columns to lay out (header or widest row)
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}

/// Select the render model for a result
pub fn dispatch(result: &VisualizationResult) -> Visualization {
    let x_key = result.config.x.clone().unwrap_or_default();
    let y_key = result.config.y.clone().unwrap_or_default();

    match &result.chart_type {
        ChartType::Bar => Visualization::Bar(BarSeries {
            bars: result
                .data
                .iter()
                .map(|record| BarPoint {
                    label: field_label(record, &x_key),
                    value: record.get(&y_key).and_then(numeric_value),
                })
                .collect(),
            x_key,
            y_key,
        }),
        ChartType::Line => Visualization::Line(LineSeries {
            labels: result
                .data
                .iter()
                .map(|record| field_label(record, &x_key))
                .collect(),
            points: result
                .data
                .iter()
                .enumerate()
                .filter_map(|(idx, record)| {
                    record
                        .get(&y_key)
                        .and_then(numeric_value)
                        .map(|y| (idx as f64, y))
                })
                .collect(),
            x_key,
            y_key,
        }),
        ChartType::Table => Visualization::Table(table_grid(&result.data)),
        ChartType::Unknown(other) => Visualization::Unsupported {
            chart_type: other.clone(),
        },
    }
}

fn field_label(record: &Record, key: &str) -> String {
    record.get(key).map(display_value).unwrap_or_default()
}

/// Header from the first record's keys; each row in its own field order
fn table_grid(data: &[Record]) -> TableGrid {
    let header = data
        .first()
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default();

    let rows = data
        .iter()
        .map(|record| record.values().map(display_value).collect())
        .collect();

    TableGrid { header, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(value: serde_json::Value) -> VisualizationResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn bar_uses_configured_axes() {
        let viz = dispatch(&result(json!({
            "chart_type": "bar",
            "data": [
                {"region": "North", "total_sales": 1000},
                {"region": "South", "total_sales": 750.5}
            ],
            "config": {"x": "region", "y": "total_sales", "title": "Sales by Region"}
        })));

        let Visualization::Bar(series) = viz else {
            panic!("expected bar");
        };
        assert_eq!(series.x_key, "region");
        assert_eq!(series.y_key, "total_sales");
        assert_eq!(
            series.bars,
            vec![
                BarPoint {
                    label: "North".into(),
                    value: Some(1000.0)
                },
                BarPoint {
                    label: "South".into(),
                    value: Some(750.5)
                },
            ]
        );
        assert_eq!(series.max_value(), 1000.0);
    }

    #[test]
    fn bar_with_non_numeric_value() {
        let viz = dispatch(&result(json!({
            "chart_type": "bar",
            "data": [{"region": "East", "total_sales": "lots"}],
            "config": {"x": "region", "y": "total_sales", "title": ""}
        })));
        let Visualization::Bar(series) = viz else {
            panic!("expected bar");
        };
        assert_eq!(series.bars[0].value, None);
        assert_eq!(series.max_value(), 0.0);
    }

    #[test]
    fn line_indexes_records_and_skips_gaps() {
        let viz = dispatch(&result(json!({
            "chart_type": "line",
            "data": [
                {"date": "2024-01-01", "total_sales": 10},
                {"date": "2024-01-02", "total_sales": null},
                {"date": "2024-01-03", "total_sales": 30}
            ],
            "config": {"x": "date", "y": "total_sales", "title": "Sales Over Time"}
        })));
        let Visualization::Line(series) = viz else {
            panic!("expected line");
        };
        assert_eq!(series.labels, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(series.points, vec![(0.0, 10.0), (2.0, 30.0)]);
        assert_eq!(series.y_range(), Some((10.0, 30.0)));
    }

    #[test]
    fn table_header_follows_first_record() {
        let viz = dispatch(&result(json!({
            "chart_type": "table",
            "data": [
                {"region": "North", "product": "Widget", "sales_amount": 100},
                {"region": "South", "product": "Gadget", "sales_amount": 250.25}
            ],
            "config": {"title": "Sales Data"}
        })));
        let Visualization::Table(grid) = viz else {
            panic!("expected table");
        };
        assert_eq!(grid.header, vec!["region", "product", "sales_amount"]);
        assert_eq!(
            grid.rows,
            vec![
                vec!["North", "Widget", "100"],
                vec!["South", "Gadget", "250.25"]
            ]
        );
        assert_eq!(grid.column_count(), 3);
    }

    #[test]
    fn table_rows_keep_their_own_order() {
        let parsed = result(json!({"chart_type": "table", "data": [], "config": {}}));
        let mut data = Vec::new();
        for raw in [r#"{"a":1,"b":2}"#, r#"{"b":3,"a":4}"#] {
            data.push(serde_json::from_str::<Record>(raw).unwrap());
        }
        let viz = dispatch(&VisualizationResult { data, ..parsed });
        let Visualization::Table(grid) = viz else {
            panic!("expected table");
        };
        assert_eq!(grid.header, vec!["a", "b"]);
        assert_eq!(grid.rows[1], vec!["3", "4"]);
    }

    #[test]
    fn empty_table_has_empty_header() {
        let viz = dispatch(&result(json!({
            "chart_type": "table",
            "data": [],
            "config": {"title": "Nothing"}
        })));
        assert_eq!(
            viz,
            Visualization::Table(TableGrid {
                header: vec![],
                rows: vec![]
            })
        );
    }

    #[test]
    fn unknown_chart_type_falls_back() {
        let viz = dispatch(&result(json!({
            "chart_type": "pie",
            "data": [{"slice": "a", "size": 1}],
            "config": {"title": "Pie"}
        })));
        assert_eq!(
            viz,
            Visualization::Unsupported {
                chart_type: "pie".into()
            }
        );
        assert!(Visualization::unsupported_message("pie").contains("pie"));
    }

    #[test]
    fn dispatch_is_idempotent() {
        let input = result(json!({
            "chart_type": "line",
            "data": [{"date": "d1", "v": 1}, {"date": "d2", "v": 3}],
            "config": {"x": "date", "y": "v", "title": "t"}
        }));
        assert_eq!(dispatch(&input), dispatch(&input));
    }
}
