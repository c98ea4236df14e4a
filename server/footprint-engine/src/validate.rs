//! Input validation: parse one raw entry and bounds-check it.
//!
//! Zero is rejected for every field, including those whose minimum is zero.
//! A genuinely zero monthly usage therefore cannot be entered.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{EngineError, ValidationError};
use crate::types::{InputField, RawInputs};

/// Numeric types a questionnaire entry can be parsed as.
pub trait Numeric: FromStr + PartialOrd + Copy + Display {
  const ZERO: Self;

  fn is_finite(self) -> bool;
}

impl Numeric for f64 {
  const ZERO: Self = 0.0;

  fn is_finite(self) -> bool {
    f64::is_finite(self)
  }
}

/// Inclusive range an entry must fall in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
  pub min: T,
  pub max: Option<T>,
}

impl<T: Numeric> Bounds<T> {
  pub fn at_least(min: T) -> Self {
    Self { min, max: None }
  }

  pub fn between(min: T, max: T) -> Self {
    Self {
      min,
      max: Some(max),
    }
  }
}

/// Parse `raw` as `T` and check it against `bounds`.
///
/// Checks run in order: parse, minimum, zero, maximum. The first failure wins.
pub fn parse_and_validate<T: Numeric>(raw: &str, bounds: &Bounds<T>) -> Result<T, ValidationError> {
  let trimmed = raw.trim();
  let value: T = trimmed.parse().map_err(|_| ValidationError::Parse {
    input: trimmed.to_string(),
  })?;
  if !value.is_finite() {
    return Err(ValidationError::NotFinite {
      input: trimmed.to_string(),
    });
  }
  check_bounds(value, bounds)?;
  Ok(value)
}

/// Range checks only, for values that arrive already parsed.
pub fn check_bounds<T: Numeric>(value: T, bounds: &Bounds<T>) -> Result<(), ValidationError> {
  if value < bounds.min {
    return Err(ValidationError::BelowMinimum {
      min: bounds.min.to_string(),
    });
  }
  if value == T::ZERO {
    return Err(ValidationError::Zero);
  }
  if let Some(max) = bounds.max {
    if value > max {
      return Err(ValidationError::AboveMaximum {
        max: max.to_string(),
      });
    }
  }
  Ok(())
}

impl RawInputs {
  /// Apply the questionnaire rules to every field. Used when inputs arrive as
  /// JSON instead of through the prompt loop.
  pub fn validate(&self) -> Result<(), EngineError> {
    for field in InputField::ALL {
      let value = self.get(field);
      if !value.is_finite() {
        return Err(EngineError::validation(field.key(), "must be a finite number"));
      }
      check_bounds(value, &field.bounds())
        .map_err(|e| EngineError::validation(field.key(), e.to_string()))?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> RawInputs {
    RawInputs {
      electricity_kwh: 100.0,
      gas_therms: 20.0,
      fuel_liters: 10.0,
      travel_miles: 500.0,
      fuel_efficiency_mpl: 10.0,
      waste_kg: 50.0,
      recycling_percent: 50.0,
    }
  }

  #[test]
  fn accepts_positive_value_with_whitespace() {
    let v = parse_and_validate::<f64>("  42.5\n", &Bounds::at_least(0.0)).unwrap();
    assert_eq!(v, 42.5);
  }

  #[test]
  fn rejects_zero_even_when_minimum_is_zero() {
    let err = parse_and_validate::<f64>("0", &Bounds::at_least(0.0)).unwrap_err();
    assert_eq!(err, ValidationError::Zero);
    let err = parse_and_validate::<f64>("-0.0", &Bounds::at_least(0.0)).unwrap_err();
    assert_eq!(err, ValidationError::Zero);
  }

  #[test]
  fn rejects_below_minimum_before_zero_check() {
    let err = parse_and_validate::<f64>("-3", &Bounds::at_least(0.0)).unwrap_err();
    assert_eq!(err, ValidationError::BelowMinimum { min: "0".to_string() });
    assert_eq!(err.to_string(), "Value must be greater than or equal to 0.");
  }

  #[test]
  fn rejects_above_maximum() {
    let bounds = Bounds::between(0.0, 100.0);
    assert_eq!(parse_and_validate::<f64>("100", &bounds).unwrap(), 100.0);
    let err = parse_and_validate::<f64>("100.5", &bounds).unwrap_err();
    assert_eq!(err.to_string(), "Value must be less than or equal to 100.");
  }

  #[test]
  fn rejects_unparsable_and_non_finite() {
    let bounds = Bounds::at_least(0.0);
    assert!(matches!(
      parse_and_validate::<f64>("ten", &bounds),
      Err(ValidationError::Parse { .. })
    ));
    assert!(matches!(
      parse_and_validate::<f64>("", &bounds),
      Err(ValidationError::Parse { .. })
    ));
    assert!(matches!(
      parse_and_validate::<f64>("inf", &bounds),
      Err(ValidationError::NotFinite { .. })
    ));
    assert!(matches!(
      parse_and_validate::<f64>("NaN", &bounds),
      Err(ValidationError::NotFinite { .. })
    ));
  }

  #[test]
  fn raw_inputs_validate_reports_field_key() {
    assert!(sample().validate().is_ok());

    let mut zero_efficiency = sample();
    zero_efficiency.fuel_efficiency_mpl = 0.0;
    match zero_efficiency.validate() {
      Err(EngineError::Validation { field, .. }) => assert_eq!(field, "fuel_efficiency_mpl"),
      other => panic!("expected validation error, got {:?}", other),
    }

    let mut over = sample();
    over.recycling_percent = 101.0;
    match over.validate() {
      Err(EngineError::Validation { field, reason }) => {
        assert_eq!(field, "recycling_percent");
        assert!(reason.contains("less than or equal to 100"));
      }
      other => panic!("expected validation error, got {:?}", other),
    }
  }

  #[test]
  fn default_inputs_are_invalid() {
    assert!(RawInputs::default().validate().is_err());
  }
}
