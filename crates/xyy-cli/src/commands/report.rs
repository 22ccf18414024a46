//! Step-by-step conversion report, as text or JSON.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use xyy_color::{Color, ConvertConfig, Space, StepResult};

use super::Output;

const RULE: &str = "------------------------------------";

/// One color value as reported.
#[derive(Debug, Clone, Serialize)]
pub struct ValueReport {
    pub space: &'static str,
    pub values: [f64; 3],
    /// Only for RGB values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb_8bit: Option<[u8; 3]>,
}

impl From<Color> for ValueReport {
    fn from(color: Color) -> Self {
        let rgb_8bit = match color {
            Color::Rgb(rgb) => Some(rgb.to_8bit()),
            _ => None,
        };
        Self {
            space: color.space().name(),
            values: color.to_array(),
            rgb_8bit,
        }
    }
}

/// One executed conversion step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: String,
    pub input: ValueReport,
    pub output: ValueReport,
    #[serde(skip)]
    touches_rgb: bool,
}

impl From<&StepResult> for StepReport {
    fn from(r: &StepResult) -> Self {
        Self {
            step: r.step.to_string(),
            input: r.input.into(),
            output: r.output.into(),
            touches_rgb: r.step.input() == Space::Rgb || r.step.output() == Space::Rgb,
        }
    }
}

/// Everything a command prints.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub gamma: f64,
    pub black_floor: f64,
    pub steps: Vec<StepReport>,
    /// Index of the first step of the reverse "check" conversion.
    #[serde(skip)]
    check_from: Option<usize>,
}

impl Report {
    pub fn new(title: impl Into<String>, config: &ConvertConfig, results: &[StepResult]) -> Self {
        Self {
            title: title.into(),
            gamma: config.gamma,
            black_floor: config.black_floor,
            steps: results.iter().map(StepReport::from).collect(),
            check_from: None,
        }
    }

    /// Marks steps from `index` on as the reverse check.
    pub fn with_check_from(mut self, index: usize) -> Self {
        self.check_from = Some(index);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    pub fn print(&self, output: Output) -> Result<()> {
        match output {
            Output::Text => print!("{}", self),
            Output::Json => println!("{}", self.to_json()?),
        }
        Ok(())
    }

    fn gamma_enabled(&self) -> bool {
        self.gamma > 0.0
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, label: &str, value: &ValueReport) -> fmt::Result {
    let [a, b, c] = value.values;
    if let Some([r, g, bl]) = value.rgb_8bit {
        writeln!(f, "{} {}: {} {} {}", value.space, label, r, g, bl)?;
    }
    writeln!(f, "{} {}: {:.6} {:.6} {:.6}", value.space, label, a, b, c)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for (i, step) in self.steps.iter().enumerate() {
            if self.check_from == Some(i) {
                writeln!(f, "{}", RULE)?;
                writeln!(f, "Converting xyY back to RGB for check")?;
                writeln!(f, "{}", RULE)?;
            }
            writeln!(f, "{}", step.step)?;
            if step.touches_rgb && self.gamma_enabled() {
                writeln!(f, "With gamma correction {}", self.gamma)?;
            }
            write_value(f, "input", &step.input)?;
            write_value(f, "output", &step.output)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xyy_color::{Pipeline, RgbColor, XyyColor};

    fn round_trip_report(config: ConvertConfig) -> Report {
        let results = Pipeline::rgb_round_trip(config)
            .run(RgbColor::from_8bit([255, 255, 255]).into())
            .unwrap();
        Report::new("Converting RGB [255 255 255] to xyY", &config, &results).with_check_from(2)
    }

    #[test]
    fn test_text_report_layout() {
        let text = round_trip_report(ConvertConfig::default()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Converting RGB [255 255 255] to xyY");
        assert_eq!(lines[1], "RGB -> XYZ");
        assert_eq!(lines[2], "RGB input: 255 255 255");
        assert_eq!(lines[3], "RGB input: 1.000000 1.000000 1.000000");
        assert_eq!(lines[4], "XYZ output: 1.000000 1.000000 1.000000");
        assert!(text.contains("xyY output: 0.333333 0.333333 1.000000"));
        assert!(text.contains("Converting xyY back to RGB for check"));
        assert!(text.trim_end().ends_with("RGB output: 1.000000 1.000000 1.000000"));
        assert!(!text.contains("With gamma correction"));
    }

    #[test]
    fn test_text_report_mentions_gamma() {
        let text = round_trip_report(ConvertConfig::default().with_gamma(2.4)).to_string();
        assert_eq!(text.matches("With gamma correction 2.4").count(), 2);
    }

    #[test]
    fn test_json_report() {
        let config = ConvertConfig::default();
        let results = Pipeline::xyy_to_rgb(config)
            .run(XyyColor::new(0.32023, 0.33156, 0.0).into())
            .unwrap();
        let json = Report::new("xyY to RGB", &config, &results).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["gamma"], 0.0);
        assert_eq!(value["steps"].as_array().unwrap().len(), 2);
        assert_eq!(value["steps"][0]["step"], "xyY -> XYZ");
        assert_eq!(value["steps"][1]["output"]["space"], "RGB");
        assert_eq!(value["steps"][1]["output"]["rgb_8bit"], serde_json::json!([0, 0, 0]));
        assert!(value["steps"][0]["input"].get("rgb_8bit").is_none());
        assert!(value.get("check_from").is_none());
    }
}
