//! Report output configuration with sane defaults.

use std::path::PathBuf;

/// Where and under which names the report artifacts are written.
#[derive(Debug, Clone)]
pub struct ReportConfig {
  /// Directory all three files land in. Existing files are overwritten.
  pub output_dir: PathBuf,
  pub pie_chart_file: String,
  pub bar_chart_file: String,
  pub report_file: String,
  /// Document heading.
  pub title: String,
}

impl Default for ReportConfig {
  fn default() -> Self {
    Self {
      output_dir: PathBuf::from("."),
      pie_chart_file: "pie_chart.svg".to_string(),
      bar_chart_file: "bar_chart.svg".to_string(),
      report_file: "carbon_footprint_report.html".to_string(),
      title: "CARBON FOOTPRINT REPORT".to_string(),
    }
  }
}

impl ReportConfig {
  pub fn pie_chart_path(&self) -> PathBuf {
    self.output_dir.join(&self.pie_chart_file)
  }

  pub fn bar_chart_path(&self) -> PathBuf {
    self.output_dir.join(&self.bar_chart_file)
  }

  pub fn report_path(&self) -> PathBuf {
    self.output_dir.join(&self.report_file)
  }
}
