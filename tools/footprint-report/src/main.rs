//! footprint-report: interactive carbon footprint calculator.
//!
//! Asks for seven monthly figures on stdin, prints the annual breakdown, and
//! writes two SVG charts plus an HTML report to the working directory:
//!   pie_chart.svg, bar_chart.svg, carbon_footprint_report.html
//!
//! Existing files with those names are overwritten.

mod config;
mod error;
mod prompt;
mod render;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use footprint_engine::{assess, Assessment};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::ReportConfig;
use crate::error::ReportError;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
    .with_writer(io::stderr)
    .without_time()
    .init();

  if let Err(e) = run(&ReportConfig::default()) {
    eprintln!("footprint-report error: {}", e);
    process::exit(1);
  }
}

fn run(config: &ReportConfig) -> Result<(), ReportError> {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut input = stdin.lock();
  let mut out = stdout.lock();

  writeln!(out, "Welcome to the Carbon Emission Tracker!")?;
  let inputs = prompt::collect_inputs(&mut input, &mut out)?;
  let assessment = assess(&inputs)?;
  print_summary(&mut out, &assessment)?;

  let files = render::write_report(&assessment, config)?;
  debug!(
    pie_chart = %files.pie_chart.display(),
    bar_chart = %files.bar_chart.display(),
    "charts embedded in report"
  );
  writeln!(out, "\n{}", report_generated_line(&files.report))?;
  out.flush()?;
  Ok(())
}

/// Console confirmation naming the document format and path.
fn report_generated_line(path: &Path) -> String {
  format!("HTML Report Generated: '{}'", path.display())
}

fn print_summary<W: Write>(out: &mut W, assessment: &Assessment) -> io::Result<()> {
  writeln!(out, "\n Emissions Breakdown (Annual, in Tons)")?;
  for (category, tons) in assessment.emissions.iter() {
    writeln!(out, "{}", render::document::breakdown_line(category.label(), tons))?;
  }
  Ok(())
}
