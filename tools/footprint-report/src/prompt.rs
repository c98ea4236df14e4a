//! Console questionnaire: ask each field until the entry validates.

use std::io::{BufRead, Write};

use footprint_engine::{parse_and_validate, Bounds, InputField, Numeric, RawInputs, ValidationError};
use tracing::debug;

use crate::error::PromptError;

/// Message shown after a rejected entry, before asking again.
pub fn retry_message(err: &ValidationError) -> String {
  match err {
    ValidationError::Zero => err.to_string(),
    _ => format!("Invalid input. {} Please try again.", err),
  }
}

/// Ask `prompt` until the answer passes `bounds`.
///
/// Only a valid value or closed input ends the loop.
pub fn get_valid_input<T, R, W>(
  input: &mut R,
  output: &mut W,
  prompt: &str,
  bounds: &Bounds<T>,
) -> Result<T, PromptError>
where
  T: Numeric,
  R: BufRead,
  W: Write,
{
  let mut line = String::new();
  loop {
    write!(output, "{}: ", prompt)?;
    output.flush()?;

    line.clear();
    if input.read_line(&mut line)? == 0 {
      return Err(PromptError::InputClosed {
        field: prompt.to_string(),
      });
    }

    match parse_and_validate(&line, bounds) {
      Ok(value) => return Ok(value),
      Err(e) => {
        debug!(field = prompt, error = %e, "rejected entry");
        writeln!(output, "{}", retry_message(&e))?;
      }
    }
  }
}

/// Run the full questionnaire in section order.
pub fn collect_inputs<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<RawInputs, PromptError> {
  let mut inputs = RawInputs::default();
  let mut section = None;
  for field in InputField::ALL {
    if section != Some(field.section()) {
      section = Some(field.section());
      writeln!(output, "\n=== {} ===", field.section().heading())?;
    }
    let value = get_valid_input(input, output, field.prompt(), &field.bounds())?;
    inputs.set(field, value);
  }
  Ok(inputs)
}
