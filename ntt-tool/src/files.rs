//! Reading and writing coefficient files.

use std::error::Error;
use std::fs;

use kyber_ntt::{Coefficients, text};

pub fn read(path: &str) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path).map_err(|e| format!("cannot read '{path}': {e}").into())
}

/// Read exactly 256 coefficients, reduced modulo q.
pub fn read_coefficients(path: &str) -> Result<Coefficients, Box<dyn Error>> {
    let content = read(path)?;
    text::parse_coefficients(&content).map_err(|e| format!("'{path}': {e}").into())
}

/// Write `contents` to `path` and report how many values it holds.
pub fn write(path: &str, contents: &str, count: usize) -> Result<(), Box<dyn Error>> {
    fs::write(path, contents).map_err(|e| format!("cannot write '{path}': {e}"))?;
    println!("Wrote {count} values to '{path}'");
    Ok(())
}
