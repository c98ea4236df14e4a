//! Core types for the footprint engine (JSON contracts + pipeline values).

use serde::{Deserialize, Serialize};

use crate::severity::{AdviceBand, Rgb, SeverityLevel};
use crate::validate::Bounds;

// ---------------------------------------------------------------------------
// Inputs (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// Monthly self-reported quantities. Fuel efficiency and recycling percent are
/// rates and are never annualized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
  pub electricity_kwh: f64,
  pub gas_therms: f64,
  pub fuel_liters: f64,
  pub travel_miles: f64,
  pub fuel_efficiency_mpl: f64,
  pub waste_kg: f64,
  pub recycling_percent: f64,
}

impl RawInputs {
  pub fn get(&self, field: InputField) -> f64 {
    match field {
      InputField::Electricity => self.electricity_kwh,
      InputField::Gas => self.gas_therms,
      InputField::Fuel => self.fuel_liters,
      InputField::TravelDistance => self.travel_miles,
      InputField::FuelEfficiency => self.fuel_efficiency_mpl,
      InputField::Waste => self.waste_kg,
      InputField::RecyclingPercent => self.recycling_percent,
    }
  }

  pub fn set(&mut self, field: InputField, value: f64) {
    let slot = match field {
      InputField::Electricity => &mut self.electricity_kwh,
      InputField::Gas => &mut self.gas_therms,
      InputField::Fuel => &mut self.fuel_liters,
      InputField::TravelDistance => &mut self.travel_miles,
      InputField::FuelEfficiency => &mut self.fuel_efficiency_mpl,
      InputField::Waste => &mut self.waste_kg,
      InputField::RecyclingPercent => &mut self.recycling_percent,
    };
    *slot = value;
  }
}

impl Default for RawInputs {
  /// All-zero placeholder; fails `validate` until every field is filled.
  fn default() -> Self {
    Self {
      electricity_kwh: 0.0,
      gas_therms: 0.0,
      fuel_liters: 0.0,
      travel_miles: 0.0,
      fuel_efficiency_mpl: 0.0,
      waste_kg: 0.0,
      recycling_percent: 0.0,
    }
  }
}

/// Questionnaire section a field is asked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
  Energy,
  Transportation,
  Waste,
}

impl Section {
  pub fn heading(self) -> &'static str {
    match self {
      Self::Energy => "Energy Consumption",
      Self::Transportation => "Transportation",
      Self::Waste => "Waste Management",
    }
  }
}

/// One of the seven questionnaire fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
  Electricity,
  Gas,
  Fuel,
  TravelDistance,
  FuelEfficiency,
  Waste,
  RecyclingPercent,
}

impl InputField {
  /// Prompt order.
  pub const ALL: [InputField; 7] = [
    Self::Electricity,
    Self::Gas,
    Self::Fuel,
    Self::TravelDistance,
    Self::FuelEfficiency,
    Self::Waste,
    Self::RecyclingPercent,
  ];

  /// JSON key of the field in `RawInputs`.
  pub fn key(self) -> &'static str {
    match self {
      Self::Electricity => "electricity_kwh",
      Self::Gas => "gas_therms",
      Self::Fuel => "fuel_liters",
      Self::TravelDistance => "travel_miles",
      Self::FuelEfficiency => "fuel_efficiency_mpl",
      Self::Waste => "waste_kg",
      Self::RecyclingPercent => "recycling_percent",
    }
  }

  pub fn prompt(self) -> &'static str {
    match self {
      Self::Electricity => "Enter monthly electricity usage (kWh)",
      Self::Gas => "Enter monthly natural gas usage (therms)",
      Self::Fuel => "Enter monthly fuel usage (liters)",
      Self::TravelDistance => "Enter monthly total travel distance (miles)",
      Self::FuelEfficiency => "Enter fuel efficiency (miles per Liter)",
      Self::Waste => "Enter monthly waste generated (kg)",
      Self::RecyclingPercent => "Enter recycling percentage (0-100)",
    }
  }

  pub fn section(self) -> Section {
    match self {
      Self::Electricity | Self::Gas | Self::Fuel => Section::Energy,
      Self::TravelDistance | Self::FuelEfficiency => Section::Transportation,
      Self::Waste | Self::RecyclingPercent => Section::Waste,
    }
  }

  pub fn bounds(self) -> Bounds<f64> {
    match self {
      Self::RecyclingPercent => Bounds::between(0.0, 100.0),
      _ => Bounds::at_least(0.0),
    }
  }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Energy,
  Transportation,
  Waste,
}

impl Category {
  pub const ALL: [Category; 3] = [Self::Energy, Self::Transportation, Self::Waste];

  pub fn key(self) -> &'static str {
    match self {
      Self::Energy => "energy",
      Self::Transportation => "transportation",
      Self::Waste => "waste",
    }
  }

  /// Capitalized display name.
  pub fn label(self) -> &'static str {
    match self {
      Self::Energy => "Energy",
      Self::Transportation => "Transportation",
      Self::Waste => "Waste",
    }
  }
}

// ---------------------------------------------------------------------------
// Pipeline values (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Annual emissions in tons CO2 per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult {
  pub energy: f64,
  pub transportation: f64,
  pub waste: f64,
}

impl EmissionsResult {
  pub fn get(&self, category: Category) -> f64 {
    match category {
      Category::Energy => self.energy,
      Category::Transportation => self.transportation,
      Category::Waste => self.waste,
    }
  }

  /// (category, tons) in category order.
  pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
    Category::ALL.into_iter().map(move |c| (c, self.get(c)))
  }
}

/// Ordered advisory lines per category. The first line of each list carries
/// the band preamble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
  pub energy: Vec<String>,
  pub transportation: Vec<String>,
  pub waste: Vec<String>,
}

impl SuggestionSet {
  pub fn get(&self, category: Category) -> &[String] {
    match category {
      Category::Energy => &self.energy,
      Category::Transportation => &self.transportation,
      Category::Waste => &self.waste,
    }
  }

  pub fn iter<'a>(&'a self) -> impl Iterator<Item = (Category, &'a [String])> + 'a {
    Category::ALL.into_iter().map(move |c| (c, self.get(c)))
  }
}

/// Classification of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategorySeverity {
  pub category: Category,
  pub tons: f64,
  pub level: SeverityLevel,
  pub color: Rgb,
  pub advice_band: AdviceBand,
}

/// Full result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
  pub emissions: EmissionsResult,
  pub severities: Vec<CategorySeverity>,
  pub suggestions: SuggestionSet,
}

impl Assessment {
  pub fn severity(&self, category: Category) -> Option<&CategorySeverity> {
    self.severities.iter().find(|s| s.category == category)
  }
}
