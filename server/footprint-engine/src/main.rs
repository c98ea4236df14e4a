//! Binary entrypoint: read one RawInputs JSON object from stdin, write one
//! Assessment JSON object to stdout.

use footprint_engine::run_json;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
    .with_writer(io::stderr)
    .without_time()
    .init();

  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "footprint-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let json = run_json(&raw)?;
  io::stdout().write_all(&json)?;
  Ok(())
}
