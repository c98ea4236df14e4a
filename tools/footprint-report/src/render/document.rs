//! HTML report document: breakdown text, colored advice, and the two charts.
//!
//! The document is a single HTML file, not a PDF. Charts are linked by
//! relative file name, so the document must stay next to the two SVG files.

use chrono::{DateTime, SecondsFormat, Utc};
use footprint_engine::Assessment;

use super::escape;
use crate::config::ReportConfig;

/// One breakdown line, e.g. `Energy Emissions: 2.65 tons CO2`.
pub fn breakdown_line(label: &str, tons: f64) -> String {
  format!("{} Emissions: {:.2} tons CO2", label, tons)
}

/// Render the complete document. Chart images are referenced by the file
/// names in `config`, relative to the document.
pub fn render_document(assessment: &Assessment, config: &ReportConfig, generated_at: DateTime<Utc>) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    <p class="generated">Generated {generated}</p>
{breakdown}
{advice}
{charts}
</body>
</html>
"#,
    title = escape(&config.title),
    css = inline_css(),
    generated = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    breakdown = render_breakdown(assessment),
    advice = render_advice(assessment),
    charts = render_charts(config),
  )
}

fn render_breakdown(assessment: &Assessment) -> String {
  let mut out = String::from(
    "    <section class=\"breakdown\">\n        <h2>=== Emissions Breakdown (Annual, in Tons) ===</h2>\n",
  );
  for (category, tons) in assessment.emissions.iter() {
    out.push_str(&format!(
      "        <p>{}</p>\n",
      escape(&breakdown_line(category.label(), tons))
    ));
  }
  out.push_str("    </section>");
  out
}

fn render_advice(assessment: &Assessment) -> String {
  let mut out = String::from("    <section class=\"advice\">\n");
  for severity in &assessment.severities {
    let category = severity.category;
    out.push_str(&format!(
      "        <h3 style=\"color: {}\">{} Emissions - {}:</h3>\n",
      severity.color.hex(),
      category.label(),
      severity.level.label()
    ));
    for line in assessment.suggestions.get(category) {
      out.push_str(&format!(
        "        <p class=\"line\">{}</p>\n",
        escape(&format!("  - {}", line))
      ));
    }
  }
  out.push_str("    </section>");
  out
}

fn render_charts(config: &ReportConfig) -> String {
  format!(
    r#"    <section class="charts">
        <h2>  EMISSIONS VISUALIZATION:</h2>
        <div class="row">
            <img src="{pie}" alt="Overall emissions distribution">
            <img src="{bar}" alt="Emissions by category">
        </div>
    </section>"#,
    pie = escape(&config.pie_chart_file),
    bar = escape(&config.bar_chart_file),
  )
}

fn inline_css() -> &'static str {
  "body { font-family: Arial, sans-serif; max-width: 900px; margin: 2em auto; color: #000; } \
   h1 { text-align: center; font-size: 1.6em; } \
   .generated { text-align: center; color: #666; font-size: 0.8em; } \
   h2, h3 { white-space: pre; } \
   .line { white-space: pre-wrap; margin: 0.2em 0; } \
   .row { display: flex; gap: 2%; } \
   .row img { width: 49%; }"
}
