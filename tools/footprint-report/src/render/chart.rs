//! Pie and bar charts as explicit values rendered to standalone SVG.

use std::f64::consts::PI;
use std::fmt::Write as _;

use footprint_engine::EmissionsResult;

use super::escape;

const WIDTH: f64 = 500.0;
const HEIGHT: f64 = 400.0;

/// Default slice colors, one per category.
const PIE_COLORS: [&str; 3] = ["#1f77b4", "#ff7f0e", "#2ca02c"];
/// Bar colors in category order.
const BAR_COLORS: [&str; 3] = ["blue", "green", "orange"];

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
  pub label: String,
  pub value: f64,
  pub color: String,
}

/// Proportional distribution. Slices run counter-clockwise from `start_angle`
/// (degrees from the positive x axis).
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
  pub title: String,
  pub start_angle: f64,
  pub slices: Vec<Slice>,
}

impl PieChart {
  pub fn from_emissions(emissions: &EmissionsResult) -> Self {
    let slices = emissions
      .iter()
      .zip(PIE_COLORS)
      .map(|((category, tons), color)| Slice {
        label: category.key().to_string(),
        value: tons,
        color: color.to_string(),
      })
      .collect();
    Self {
      title: "Overall Emissions Distribution (tons)".to_string(),
      start_angle: 140.0,
      slices,
    }
  }

  pub fn total(&self) -> f64 {
    self.slices.iter().map(|s| s.value.max(0.0)).sum()
  }

  pub fn to_svg(&self) -> String {
    let (cx, cy, r) = (WIDTH / 2.0, HEIGHT / 2.0 + 15.0, 140.0);
    let mut body = String::new();
    let total = self.total();

    if !(total > 0.0 && total.is_finite()) {
      let _ = write!(
        body,
        r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="none" stroke="#999999"/><text x="{cx:.2}" y="{cy:.2}" text-anchor="middle">no data</text>"##,
      );
      return svg_document(&self.title, &body);
    }

    let visible: Vec<&Slice> = self.slices.iter().filter(|s| s.value > 0.0).collect();
    let mut angle = self.start_angle;
    for slice in visible.iter() {
      let fraction = slice.value / total;
      let sweep = 360.0 * fraction;
      let end = angle + sweep;

      if visible.len() == 1 {
        let _ = write!(
          body,
          r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}"/>"#,
          escape(&slice.color)
        );
      } else {
        let (x0, y0) = polar(cx, cy, r, angle);
        let (x1, y1) = polar(cx, cy, r, end);
        let large_arc = if sweep > 180.0 { 1 } else { 0 };
        let _ = write!(
          body,
          r#"<path d="M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {x1:.2} {y1:.2} Z" fill="{}"/>"#,
          escape(&slice.color)
        );
      }

      let mid = angle + sweep / 2.0;
      let (lx, ly) = polar(cx, cy, r * 1.1, mid);
      let anchor = if mid.to_radians().cos() >= 0.0 { "start" } else { "end" };
      let (px, py) = polar(cx, cy, r * 0.6, mid);
      let _ = write!(
        body,
        r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="{anchor}">{}</text><text x="{px:.2}" y="{py:.2}" text-anchor="middle">{:.1}%</text>"#,
        escape(&slice.label),
        fraction * 100.0
      );

      angle = end;
    }

    svg_document(&self.title, &body)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
  pub label: String,
  pub value: f64,
  pub color: String,
}

/// Absolute values per category on a linear axis starting at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
  pub title: String,
  pub x_label: String,
  pub y_label: String,
  pub bars: Vec<Bar>,
}

impl BarChart {
  pub fn from_emissions(emissions: &EmissionsResult) -> Self {
    let bars = emissions
      .iter()
      .zip(BAR_COLORS)
      .map(|((category, tons), color)| Bar {
        label: category.key().to_string(),
        value: tons,
        color: color.to_string(),
      })
      .collect();
    Self {
      title: "Emissions by Category (tons)".to_string(),
      x_label: "Categories".to_string(),
      y_label: "CO2 Emissions (tons)".to_string(),
      bars,
    }
  }

  pub fn to_svg(&self) -> String {
    let (left, right, top, bottom) = (70.0, WIDTH - 20.0, 50.0, HEIGHT - 60.0);
    let plot_h = bottom - top;
    let max = self
      .bars
      .iter()
      .map(|b| b.value)
      .filter(|v| v.is_finite())
      .fold(0.0_f64, f64::max);
    let y_max = nice_ceiling(max);
    let mut body = String::new();

    let ticks = 5;
    for i in 0..=ticks {
      let value = y_max * i as f64 / ticks as f64;
      let y = bottom - plot_h * value / y_max;
      let _ = write!(
        body,
        r##"<line x1="{left:.2}" y1="{y:.2}" x2="{right:.2}" y2="{y:.2}" stroke="#dddddd"/><text x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"##,
        left - 6.0,
        y + 4.0,
        tick_label(value)
      );
    }

    let slot = if self.bars.is_empty() {
      0.0
    } else {
      (right - left) / self.bars.len() as f64
    };
    for (i, bar) in self.bars.iter().enumerate() {
      let value = if bar.value.is_finite() { bar.value.max(0.0) } else { 0.0 };
      let h = plot_h * value / y_max;
      let x = left + slot * i as f64 + slot * 0.1;
      let w = slot * 0.8;
      let _ = write!(
        body,
        r#"<rect x="{x:.2}" y="{:.2}" width="{w:.2}" height="{h:.2}" fill="{}"/><text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
        bottom - h,
        escape(&bar.color),
        x + w / 2.0,
        bottom + 18.0,
        escape(&bar.label)
      );
    }

    let _ = write!(
      body,
      r##"<line x1="{left:.2}" y1="{bottom:.2}" x2="{right:.2}" y2="{bottom:.2}" stroke="#000000"/><line x1="{left:.2}" y1="{top:.2}" x2="{left:.2}" y2="{bottom:.2}" stroke="#000000"/>"##,
    );
    let _ = write!(
      body,
      r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text><text x="18" y="{:.2}" text-anchor="middle" transform="rotate(-90 18 {:.2})">{}</text>"#,
      (left + right) / 2.0,
      HEIGHT - 20.0,
      escape(&self.x_label),
      (top + bottom) / 2.0,
      (top + bottom) / 2.0,
      escape(&self.y_label)
    );

    svg_document(&self.title, &body)
  }
}

/// Point on a circle, angle in degrees counter-clockwise from +x, SVG y-down.
fn polar(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
  let rad = degrees * PI / 180.0;
  (cx + r * rad.cos(), cy - r * rad.sin())
}

/// Smallest 1/2/2.5/5 x 10^n at or above `v`; 1.0 for empty data.
pub fn nice_ceiling(v: f64) -> f64 {
  if !(v > 0.0 && v.is_finite()) {
    return 1.0;
  }
  let magnitude = 10f64.powf(v.log10().floor());
  let f = v / magnitude;
  let nice = if f <= 1.0 {
    1.0
  } else if f <= 2.0 {
    2.0
  } else if f <= 2.5 {
    2.5
  } else if f <= 5.0 {
    5.0
  } else {
    10.0
  };
  nice * magnitude
}

fn tick_label(v: f64) -> String {
  let s = format!("{:.2}", v);
  s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn svg_document(title: &str, body: &str) -> String {
  format!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12"><rect width="100%" height="100%" fill="white"/><text x="{cx}" y="28" text-anchor="middle" font-size="16">{title}</text>{body}</svg>
"#,
    w = WIDTH,
    h = HEIGHT,
    cx = WIDTH / 2.0,
    title = escape(title),
    body = body
  )
}
