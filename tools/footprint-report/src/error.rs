//! Error types for the interactive report tool.

use std::io;
use std::path::PathBuf;

use footprint_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
  #[error("input closed before {field} was answered")]
  InputClosed { field: String },

  #[error("console: {0}")]
  Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ReportError {
  #[error(transparent)]
  Prompt(#[from] PromptError),

  #[error(transparent)]
  Engine(#[from] EngineError),

  #[error("cannot write {}: {source}", .path.display())]
  Write { path: PathBuf, source: io::Error },

  #[error("console: {0}")]
  Console(#[from] io::Error),
}

impl ReportError {
  pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Write {
      path: path.into(),
      source,
    }
  }
}
