//! Carbon Footprint Engine: fixed-factor annual estimate; no DB, no network.
//! Used by the binary for stdin/stdout; also called as a library by the
//! interactive report tool.

pub mod emissions;
pub mod error;
pub mod severity;
pub mod suggest;
pub mod types;
pub mod validate;

pub use emissions::calculate_emissions;
pub use error::{EngineError, ValidationError};
pub use severity::{classify, AdviceBand, Rgb, SeverityLevel};
pub use suggest::suggest;
pub use types::{
  Assessment, Category, CategorySeverity, EmissionsResult, InputField, RawInputs, Section,
  SuggestionSet,
};
pub use validate::{parse_and_validate, Bounds, Numeric};

/// Run the pipeline on inputs that already passed validation (no I/O).
pub fn assess(inputs: &RawInputs) -> Result<Assessment, EngineError> {
  let emissions = calculate_emissions(inputs)?;
  let severities = emissions
    .iter()
    .map(|(category, tons)| {
      let (level, color) = classify(tons);
      CategorySeverity {
        category,
        tons,
        level,
        color,
        advice_band: AdviceBand::for_tons(tons),
      }
    })
    .collect();
  let suggestions = suggest(&emissions);

  Ok(Assessment {
    emissions,
    severities,
    suggestions,
  })
}

/// Validate, then run the pipeline. Entry point for callers that did not go
/// through the prompt loop.
pub fn run(inputs: &RawInputs) -> Result<Assessment, EngineError> {
  inputs.validate()?;
  assess(inputs)
}

/// JSON in, JSON out: parse one `RawInputs` object and serialize the
/// resulting `Assessment`.
pub fn run_json(raw: &str) -> Result<Vec<u8>, EngineError> {
  let inputs: RawInputs = serde_json::from_str(raw)?;
  let out = run(&inputs)?;
  Ok(serde_json::to_vec(&out)?)
}
