//! `rgb` command: RGB -> XYZ -> xyY, then back to RGB as a check.

use anyhow::{Context, Result};
use tracing::info;
use xyy_color::{ConvertConfig, Pipeline, RgbColor};

use super::Output;
use super::report::Report;
use crate::RgbArgs;

/// Index of the first step converting back from xyY.
const CHECK_STEP: usize = 2;

pub fn run(args: RgbArgs, config: &ConvertConfig, output: Output) -> Result<()> {
    let report = convert(&args, config)?;
    report.print(output)
}

fn convert(args: &RgbArgs, config: &ConvertConfig) -> Result<Report> {
    let raw = [
        super::channel_8bit(args.r)?,
        super::channel_8bit(args.g)?,
        super::channel_8bit(args.b)?,
    ];
    info!(?raw, gamma = config.gamma, "converting RGB to xyY");

    let results = Pipeline::rgb_round_trip(*config)
        .run(RgbColor::from_8bit(raw).into())
        .context("RGB round trip failed")?;

    let title = format!("Converting RGB [{} {} {}] to xyY", raw[0], raw[1], raw[2]);
    Ok(Report::new(title, config, &results).with_check_from(CHECK_STEP))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(r: i64, g: i64, b: i64) -> RgbArgs {
        RgbArgs { r, g, b }
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = convert(&args(256, 0, 0), &ConvertConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Value 256 out of range 0-255");
        assert!(convert(&args(0, -5, 0), &ConvertConfig::default()).is_err());
    }

    #[test]
    fn test_round_trip_report() {
        let report = convert(&args(255, 128, 0), &ConvertConfig::default()).unwrap();
        assert_eq!(report.title, "Converting RGB [255 128 0] to xyY");
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[1].step, "XYZ -> xyY");
        assert_eq!(report.steps[3].output.rgb_8bit, Some([255, 128, 0]));
    }

    #[test]
    fn test_black_uses_fallback_chromaticity() {
        let report = convert(&args(0, 0, 0), &ConvertConfig::default()).unwrap();
        let [x, y, luminance] = report.steps[1].output.values;
        assert!((x - 0.345669).abs() < 1e-6);
        assert!((y - 0.358496).abs() < 1e-6);
        assert_eq!(luminance, 0.0);
        assert_eq!(report.steps[3].output.rgb_8bit, Some([0, 0, 0]));
    }
}
