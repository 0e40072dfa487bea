mod config;
mod tui;

use anyhow::{bail, Result};
use config::DashboardConfig;
use sales_forecast::models::{LinearSalesModel, SalesModel};
use sales_forecast::pipeline::{ForecastPipeline, RunInputs};
use std::sync::Arc;
use tracing::info;

const USAGE: &str = "\
Usage: sales_dashboard [OPTIONS] <SALES_CSV> <COVARIATE_A> <COVARIATE_B> <CURRENT_SALES>

Arguments:
  <SALES_CSV>      Sales spreadsheet (columns Ano, Mês, TARGET, PARAMETRO 5, PARAMETRO 8)
  <COVARIATE_A>    Current value of PARAMETRO 5
  <COVARIATE_B>    Current value of PARAMETRO 8
  <CURRENT_SALES>  Current-period sales figure

Options:
  --plain  Print the report instead of drawing the dashboard
  --help   Show this message";

struct CliArgs {
    inputs: RunInputs,
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };

    let config = DashboardConfig::load()?;
    let model = LinearSalesModel::from_path(&config.model_path)?;
    info!(model = model.name(), "model artifact loaded");

    let pipeline = ForecastPipeline::new(Arc::new(model));

    // All anticipated failures are user-input problems: surface one
    // message and render nothing.
    let report = match pipeline.run(&args.inputs) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    info!(
        history = report.history.len(),
        forecast = report.forecast.len(),
        "forecast generated"
    );

    if args.plain {
        tui::print_plain(&report);
    } else {
        tui::run_dashboard(&report)?;
    }

    Ok(())
}

/// Parse command-line arguments. Positional arguments may be omitted; the
/// pipeline reports the combined missing-inputs message for them.
fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<CliArgs>> {
    let mut inputs = RunInputs::default();
    let mut plain = false;
    let mut position = 0;

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--plain" => plain = true,
            flag if flag.starts_with("--") => bail!("unknown option '{}'", flag),
            value => {
                match position {
                    0 => inputs.file = Some(value.into()),
                    1 => inputs.param_a = Some(parse_number("COVARIATE_A", value)?),
                    2 => inputs.param_b = Some(parse_number("COVARIATE_B", value)?),
                    3 => inputs.current_sales = Some(parse_number("CURRENT_SALES", value)?),
                    _ => bail!("unexpected argument '{}'", value),
                }
                position += 1;
            }
        }
    }

    Ok(Some(CliArgs { inputs, plain }))
}

fn parse_number(name: &str, value: &str) -> Result<f64> {
    match value.parse() {
        Ok(number) => Ok(number),
        Err(_) => bail!("{} must be a number, found '{}'", name, value),
    }
}
