//! Structured error types for the footprint engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("division by zero: {field} must not be zero")]
  DivisionByZero { field: String },

  #[error("out of range: {category} emissions are not a finite number")]
  NonFinite { category: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn validation(field: &str, reason: impl Into<String>) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.into(),
    }
  }

  pub fn division_by_zero(field: &str) -> Self {
    Self::DivisionByZero {
      field: field.to_string(),
    }
  }

  pub fn non_finite(category: &str) -> Self {
    Self::NonFinite {
      category: category.to_string(),
    }
  }
}

/// Why a single raw entry was rejected. The prompt loop recovers from all of
/// these by asking again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
  #[error("could not convert {input:?} to a number.")]
  Parse { input: String },

  #[error("{input:?} is not a finite number.")]
  NotFinite { input: String },

  #[error("Value must be greater than or equal to {min}.")]
  BelowMinimum { min: String },

  #[error("Value cannot be zero. Please enter a valid number greater than zero.")]
  Zero,

  #[error("Value must be less than or equal to {max}.")]
  AboveMaximum { max: String },
}
