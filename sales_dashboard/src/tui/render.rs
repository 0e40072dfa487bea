use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use sales_forecast::pipeline::ForecastReport;

pub fn draw(f: &mut Frame, report: &ForecastReport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_title(f, report, chunks[0]);
    draw_metrics(f, report, chunks[1]);
    draw_chart(f, report, chunks[2]);
    draw_footer(f, chunks[3]);
}

fn draw_title(f: &mut Frame, report: &ForecastReport, area: Rect) {
    let title = Paragraph::new(format!(
        "Sales Forecast Dashboard — {}",
        report.model_name
    ))
    .style(Style::default().add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn draw_metrics(f: &mut Frame, report: &ForecastReport, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let summary = &report.summary;
    let metrics = [
        ("Mean forecast", format!("{:.0}", summary.mean)),
        ("Max forecast", format!("{:.0}", summary.max)),
        ("Min forecast", format!("{:.0}", summary.min)),
        ("Peak month", summary.peak_month_label()),
    ];

    for ((label, value), column) in metrics.into_iter().zip(columns.iter()) {
        let widget = Paragraph::new(value)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(label));
        f.render_widget(widget, *column);
    }
}

fn draw_chart(f: &mut Frame, report: &ForecastReport, area: Rect) {
    let history: Vec<(f64, f64)> = report
        .history
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| (i as f64, record.sales))
        .collect();

    let offset = history.len();
    let forecast: Vec<(f64, f64)> = report
        .forecast
        .iter()
        .enumerate()
        .map(|(i, point)| ((offset + i) as f64, point.predicted_sales))
        .collect();

    let values = history
        .iter()
        .chain(forecast.iter())
        .map(|(_, y)| *y)
        .collect::<Vec<_>>();
    let y_min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let padding = ((y_max - y_min) * 0.05).max(1.0);
    let y_bounds = [y_min - padding, y_max + padding];

    // Boundary between the last observed month and the first forecast month
    let boundary_x = offset as f64 - 0.5;
    let boundary = [(boundary_x, y_bounds[0]), (boundary_x, y_bounds[1])];

    let datasets = vec![
        Dataset::default()
            .name("Sales history")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&history),
        Dataset::default()
            .name("12-month forecast")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&forecast),
        Dataset::default()
            .marker(symbols::Marker::Bar)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&boundary),
    ];

    let x_max = (offset + report.forecast.len()).saturating_sub(1) as f64;
    let x_labels = x_axis_labels(report);
    let y_labels = vec![
        format!("{:.0}", y_bounds[0]),
        format!("{:.0}", (y_bounds[0] + y_bounds[1]) / 2.0),
        format!("{:.0}", y_bounds[1]),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Sales History with 12-Month Forecast"),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Sales")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn x_axis_labels(report: &ForecastReport) -> Vec<String> {
    let mut labels = Vec::with_capacity(3);
    if let Some(first) = report.history.records().first() {
        labels.push(first.period.format("%b %y").to_string());
    }
    if let Some(last) = report.history.last() {
        labels.push(last.period.format("%b %y").to_string());
    }
    if let Some(end) = report.forecast.last() {
        labels.push(end.period.format("%b %y").to_string());
    }
    labels
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from("q / Esc: quit"))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
