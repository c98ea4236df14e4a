//! Report rendering: two chart images and one document, written to disk.

pub mod chart;
pub mod document;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use footprint_engine::Assessment;
use tracing::info;

use crate::config::ReportConfig;
use crate::error::ReportError;

pub use chart::{BarChart, PieChart};

/// Paths of the files a report run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFiles {
  pub pie_chart: PathBuf,
  pub bar_chart: PathBuf,
  pub report: PathBuf,
}

/// Render both charts and the document and write them, overwriting existing
/// files. Charts are written first since the document references them.
pub fn write_report(assessment: &Assessment, config: &ReportConfig) -> Result<ReportFiles, ReportError> {
  let files = ReportFiles {
    pie_chart: config.pie_chart_path(),
    bar_chart: config.bar_chart_path(),
    report: config.report_path(),
  };

  let pie = PieChart::from_emissions(&assessment.emissions);
  write_file(&files.pie_chart, &pie.to_svg())?;

  let bar = BarChart::from_emissions(&assessment.emissions);
  write_file(&files.bar_chart, &bar.to_svg())?;

  let doc = document::render_document(assessment, config, Utc::now());
  write_file(&files.report, &doc)?;

  Ok(files)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
  fs::write(path, contents).map_err(|e| ReportError::write(path, e))?;
  info!(path = %path.display(), bytes = contents.len(), "wrote report artifact");
  Ok(())
}

/// Minimal escaping for text placed in HTML or SVG.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}
