//! Severity levels for report headers and advice bands for suggestions.
//!
//! The two use different upper thresholds (3 tons vs 4 tons). They are kept
//! separate on purpose; do not merge them.

use serde::{Deserialize, Serialize};

/// RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
  pub const RED: Rgb = Rgb(255, 0, 0);
  pub const YELLOW: Rgb = Rgb(255, 255, 0);
  pub const GREEN: Rgb = Rgb(0, 128, 0);

  /// `#rrggbb`.
  pub fn hex(self) -> String {
    format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
  Low,
  Medium,
  High,
}

impl SeverityLevel {
  pub fn color(self) -> Rgb {
    match self {
      Self::High => Rgb::RED,
      Self::Medium => Rgb::YELLOW,
      Self::Low => Rgb::GREEN,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }
}

pub const HIGH_ABOVE_TONS: f64 = 3.0;
pub const MEDIUM_FROM_TONS: f64 = 1.5;

/// Level and color for an annual tonnage. Anything not matched (including NaN)
/// is Low.
pub fn classify(tons: f64) -> (SeverityLevel, Rgb) {
  let level = if tons > HIGH_ABOVE_TONS {
    SeverityLevel::High
  } else if (MEDIUM_FROM_TONS..=HIGH_ABOVE_TONS).contains(&tons) {
    SeverityLevel::Medium
  } else {
    SeverityLevel::Low
  };
  (level, level.color())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceBand {
  Low,
  Moderate,
  VeryHigh,
}

pub const VERY_HIGH_ABOVE_TONS: f64 = 4.0;
pub const MODERATE_FROM_TONS: f64 = 1.5;

impl AdviceBand {
  pub fn for_tons(tons: f64) -> Self {
    if tons > VERY_HIGH_ABOVE_TONS {
      Self::VeryHigh
    } else if (MODERATE_FROM_TONS..=VERY_HIGH_ABOVE_TONS).contains(&tons) {
      Self::Moderate
    } else {
      Self::Low
    }
  }
}
