//! `xyy` command: xyY -> XYZ -> RGB.

use anyhow::{Context, Result};
use tracing::info;
use xyy_color::{ConvertConfig, Pipeline, XyyColor};

use super::Output;
use super::report::Report;
use crate::XyyArgs;

pub fn run(args: XyyArgs, config: &ConvertConfig, output: Output) -> Result<()> {
    let report = convert(&args, config)?;
    report.print(output)
}

fn convert(args: &XyyArgs, config: &ConvertConfig) -> Result<Report> {
    let xyy = XyyColor::new(
        super::unit_interval(args.x)?,
        super::unit_interval(args.y)?,
        super::unit_interval(args.luminance)?,
    );
    info!(x = xyy.x, y = xyy.y, luminance = xyy.luminance, "converting xyY to RGB");

    let results = Pipeline::xyy_to_rgb(*config)
        .run(xyy.into())
        .with_context(|| format!("Cannot convert xyY [{}] to RGB", xyy))?;

    let title = format!("Converting xyY [{} {} {}] to RGB", args.x, args.y, args.luminance);
    Ok(Report::new(title, config, &results))
}
