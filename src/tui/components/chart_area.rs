// Chart area component
//
// Draws the current visualization result: bar chart, line chart, table, or
// the fallback message for layouts this client does not know. The result
// title sits in the block header above the chart.

use crate::tui::theme::Theme;
use crate::viz::monotone::monotone_x;
use crate::viz::{dispatch, BarSeries, LineSeries, TableGrid, Visualization, VisualizationResult};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph,
        Row, Table, Wrap,
    },
    Frame,
};

/// Bar heights are scaled so the tallest bar is this value
const BAR_SCALE_MAX: f64 = 1000.0;
const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 12;
/// Interpolated samples drawn between two data points
const LINE_SAMPLES: usize = 8;

/// Render the chart area
///
/// With no result the area stays empty apart from its border.
pub fn render(f: &mut Frame, area: Rect, result: Option<&VisualizationResult>, theme: &Theme) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(false));

    let Some(result) = result else {
        f.render_widget(block.title(" Visualization "), area);
        return;
    };

    if !result.config.title.is_empty() {
        block = block.title(
            Line::styled(format!(" {} ", result.config.title), theme.title_style()).centered(),
        );
    }

    match dispatch(result) {
        Visualization::Bar(series) => render_bar(f, area, block, &series, theme),
        Visualization::Line(series) => render_line(f, area, block, &series, theme),
        Visualization::Table(grid) => render_table(f, area, block, &grid, theme),
        Visualization::Unsupported { chart_type } => {
            let message = Paragraph::new(Visualization::unsupported_message(&chart_type))
                .style(Style::default().fg(theme.highlight))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(message, area);
        }
    }
}

fn render_empty(f: &mut Frame, area: Rect, block: Block, text: &str, theme: &Theme) {
    let placeholder = Paragraph::new(text.to_string())
        .style(theme.muted_style())
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(placeholder, area);
}

fn render_bar(f: &mut Frame, area: Rect, block: Block, series: &BarSeries, theme: &Theme) {
    if series.bars.is_empty() {
        render_empty(f, area, block, "No data", theme);
        return;
    }

    // Bars that don't fit are summarized in the bottom border
    let inner_width = area.width.saturating_sub(2);
    let shown = series.bars.len().min(bar_capacity(inner_width).max(1));
    let hidden = series.bars.len() - shown;
    let block = if hidden > 0 {
        block.title_bottom(Line::from(format!(" +{} more ", hidden)).right_aligned())
    } else {
        block
    };

    let max = series.max_value();
    let scale = if max > 0.0 { BAR_SCALE_MAX / max } else { 1.0 };

    let bars: Vec<Bar> = series.bars[..shown]
        .iter()
        .map(|point| {
            let (height, text) = match point.value {
                Some(v) => ((v.max(0.0) * scale).round() as u64, format_amount(v)),
                None => (0, "n/a".to_string()),
            };
            // Zero-height bars never show their value text, so it joins the label
            let label = if height == 0 {
                format!("{} {}", point.label, text)
            } else {
                point.label.clone()
            };
            Bar::default()
                .label(Line::from(label))
                .value(height)
                .text_value(text)
                .style(Style::default().fg(theme.chart_primary))
                .value_style(
                    Style::default()
                        .fg(theme.chart_primary)
                        .add_modifier(Modifier::REVERSED),
                )
        })
        .collect();

    let width = bar_width(inner_width, bars.len());

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .max(BAR_SCALE_MAX as u64)
        .label_style(Style::default().fg(theme.fg))
        .style(Style::default().fg(theme.fg));

    f.render_widget(chart, area);
}

/// Widest bar that still fits every bar in `inner_width` columns
fn bar_width(inner_width: u16, count: usize) -> u16 {
    let count = count.max(1) as u16;
    let gaps = BAR_GAP.saturating_mul(count.saturating_sub(1));
    (inner_width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

/// Most one-column bars (with gaps) that fit in `inner_width` columns
fn bar_capacity(inner_width: u16) -> usize {
    (inner_width.saturating_add(BAR_GAP) / (1 + BAR_GAP)) as usize
}

fn render_line(f: &mut Frame, area: Rect, block: Block, series: &LineSeries, theme: &Theme) {
    let Some((lo, hi)) = series.y_range() else {
        render_empty(f, area, block, "No data", theme);
        return;
    };

    let y_min = lo.min(0.0);
    let y_max = if hi > y_min { hi } else { y_min + 1.0 };
    let x_max = (series.labels.len().saturating_sub(1) as f64).max(1.0);

    let curve = monotone_x(&series.points, LINE_SAMPLES);
    let datasets = vec![
        Dataset::default()
            .name(series.y_key.clone())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.chart_primary))
            .data(&curve),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme.chart_secondary))
            .data(&series.points),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(series.x_key.clone())
                .style(theme.muted_style())
                .bounds([0.0, x_max])
                .labels(x_labels(&series.labels)),
        )
        .y_axis(
            Axis::default()
                .style(theme.muted_style())
                .bounds([y_min, y_max])
                .labels(vec![
                    format_amount(y_min),
                    format_amount((y_min + y_max) / 2.0),
                    format_amount(y_max),
                ]),
        )
        // Single series, the legend would only repeat the y key
        .hidden_legend_constraints((Constraint::Length(0), Constraint::Length(0)));

    f.render_widget(chart, area);
}

/// First, middle and last category labels
fn x_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => labels.to_vec(),
        n => vec![
            labels[0].clone(),
            labels[(n - 1) / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

fn render_table(f: &mut Frame, area: Rect, block: Block, grid: &TableGrid, theme: &Theme) {
    let columns = grid.column_count();
    if columns == 0 {
        render_empty(f, area, block, "No rows", theme);
        return;
    }

    let header = Row::new(grid.header.iter().map(|h| Cell::from(h.clone()))).style(
        Style::default()
            .fg(theme.table_header)
            .add_modifier(Modifier::BOLD),
    );
    let rows = grid
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.clone()))));
    let widths = vec![Constraint::Fill(1); columns];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .style(Style::default().fg(theme.fg))
        .block(block);

    f.render_widget(table, area);
}

/// Number formatting for bar text and axis labels
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else if value.abs() >= 100.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::offscreen::render_to_string;
    use crate::viz::{ChartConfig, ChartType};
    use serde_json::json;

    fn result(
        chart_type: &str,
        data: serde_json::Value,
        x: Option<&str>,
        y: Option<&str>,
    ) -> VisualizationResult {
        VisualizationResult {
            chart_type: ChartType::from(chart_type.to_string()),
            data: serde_json::from_value(data).unwrap(),
            config: ChartConfig {
                x: x.map(str::to_string),
                y: y.map(str::to_string),
                title: "Sales by Region".to_string(),
            },
        }
    }

    fn draw(result: Option<&VisualizationResult>) -> String {
        let theme = Theme::default();
        render_to_string(80, 20, |f| {
            let area = f.area();
            render(f, area, result, &theme);
        })
        .unwrap()
    }

    #[test]
    fn bar_chart_shows_title_labels_and_values() {
        let r = result(
            "bar",
            json!([
                {"region": "North", "total_sales": 1500},
                {"region": "South", "total_sales": 900.5},
                {"region": "East", "total_sales": "n/a"}
            ]),
            Some("region"),
            Some("total_sales"),
        );
        let text = draw(Some(&r));
        assert!(text.contains("Sales by Region"));
        assert!(text.contains("North"));
        assert!(text.contains("South"));
        assert!(text.contains("East"));
        assert!(text.contains("1500"));
    }

    #[test]
    fn zero_and_negative_values_stay_readable() {
        let r = result(
            "bar",
            json!([
                {"region": "North", "total_sales": 10},
                {"region": "West", "total_sales": 0},
                {"region": "South", "total_sales": -5}
            ]),
            Some("region"),
            Some("total_sales"),
        );
        let text = draw(Some(&r));
        assert!(text.contains("West 0"));
        assert!(text.contains("South -5"));
        assert!(!text.contains("North 10"));
    }

    #[test]
    fn overflowing_bars_are_counted() {
        let rows: Vec<_> = (0..60)
            .map(|i| json!({"region": format!("r{}", i), "total_sales": i + 1}))
            .collect();
        let r = result("bar", json!(rows), Some("region"), Some("total_sales"));
        let theme = Theme::default();
        let text = render_to_string(40, 20, |f| {
            let area = f.area();
            render(f, area, Some(&r), &theme);
        })
        .unwrap();
        // 38 inner columns hold 19 one-column bars
        assert!(text.contains("+41 more"), "{}", text);
        // 78 hold 39
        assert!(draw(Some(&r)).contains("+21 more"));
    }

    #[test]
    fn table_shows_header_and_cells() {
        let r = result(
            "table",
            json!([
                {"region": "North", "product": "Widget", "sales_amount": 1200},
                {"region": "South", "product": "Gadget", "sales_amount": 850.5}
            ]),
            None,
            None,
        );
        let text = draw(Some(&r));
        let header_line = text.lines().find(|l| l.contains("region")).unwrap();
        let region = header_line.find("region").unwrap();
        let product = header_line.find("product").unwrap();
        let amount = header_line.find("sales_amount").unwrap();
        assert!(region < product && product < amount);
        assert!(text.contains("Widget"));
        assert!(text.contains("850.5"));
    }

    #[test]
    fn line_chart_labels_first_and_last_dates() {
        let r = result(
            "line",
            json!([
                {"date": "2024-01-01", "total_sales": 3100},
                {"date": "2024-01-02", "total_sales": 3315},
                {"date": "2024-01-03", "total_sales": 3170}
            ]),
            Some("date"),
            Some("total_sales"),
        );
        let text = draw(Some(&r));
        assert!(text.contains("2024-01-01"));
        assert!(text.contains("2024-01-03"));
    }

    #[test]
    fn unknown_chart_type_falls_back() {
        let r = result("pie", json!([{"a": 1}]), Some("a"), Some("a"));
        let text = draw(Some(&r));
        assert!(text.contains("Unsupported chart type: pie"));
    }

    #[test]
    fn no_result_draws_only_the_frame() {
        let text = draw(None);
        assert!(text.contains("Visualization"));
        assert!(!text.contains("Unsupported"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let r = result(
            "bar",
            json!([{"region": "North", "total_sales": 10}, {"region": "West", "total_sales": 4}]),
            Some("region"),
            Some("total_sales"),
        );
        assert_eq!(draw(Some(&r)), draw(Some(&r)));
    }

    #[test]
    fn bar_width_fits_and_clamps() {
        assert_eq!(bar_width(78, 4), MAX_BAR_WIDTH);
        assert_eq!(bar_width(20, 5), 3);
        assert_eq!(bar_width(3, 10), 1);
        assert_eq!(bar_width(10, 0), 10);
    }

    #[test]
    fn bar_capacity_counts_gaps() {
        assert_eq!(bar_capacity(38), 19);
        assert_eq!(bar_capacity(1), 1);
        assert_eq!(bar_capacity(0), 0);
    }

    #[test]
    fn axis_labels_pick_first_middle_last() {
        let labels: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        assert_eq!(x_labels(&labels), vec!["a", "c", "e"]);
        assert_eq!(x_labels(&labels[..1]), vec!["a"]);
        assert!(x_labels(&[]).is_empty());
    }

    #[test]
    fn amounts_format_compactly() {
        assert_eq!(format_amount(1500.0), "1500");
        assert_eq!(format_amount(850.5), "850.5");
        assert_eq!(format_amount(0.126), "0.13");
    }
}
