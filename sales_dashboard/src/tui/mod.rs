pub mod render;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use sales_forecast::pipeline::ForecastReport;
use std::io::stdout;
use std::time::Duration;

/// Draw the report and wait until the user quits. The report is immutable
/// for the lifetime of the dashboard; the loop only redraws so resizes are
/// picked up.
pub fn run_dashboard(report: &ForecastReport) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = dashboard_loop(&mut terminal, report);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn dashboard_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    report: &ForecastReport,
) -> Result<()> {
    loop {
        terminal.draw(|f| render::draw(f, report))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    return Ok(());
                }
            }
        }
    }
}

/// Plain-text rendering for terminals where the alternate screen is
/// unwanted.
pub fn print_plain(report: &ForecastReport) {
    println!("Model: {}", report.model_name);
    println!();
    println!("{}", report.summary);
    println!("Forecast for the next 12 months:");
    for point in &report.forecast {
        println!(
            "  {}  {:.0}",
            point.period.format("%Y-%m"),
            point.predicted_sales
        );
    }
}
