//! CLI command implementations

pub mod report;
pub mod rgb;
pub mod xyy;

use anyhow::{Result, bail};

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Step-by-step human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Checks an 8-bit channel given on the command line.
pub fn channel_8bit(value: i64) -> Result<u8> {
    match u8::try_from(value) {
        Ok(v) => Ok(v),
        Err(_) => bail!("Value {} out of range 0-255", value),
    }
}

/// Checks a normalized xyY component given on the command line.
pub fn unit_interval(value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        bail!("Value {} out of range 0.0 - 1.0", value);
    }
    Ok(value)
}
