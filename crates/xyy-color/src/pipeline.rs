//! Conversion pipeline.
//!
//! A pipeline is a sequence of conversion steps between the three color
//! spaces. Steps are applied in order and each one must accept the space the
//! previous step produced:
//!
//! 1. [`Step::RgbToXyz`] - gamma decode, then RGB -> XYZ matrix
//! 2. [`Step::XyzToXyy`] - chromaticity normalization
//! 3. [`Step::XyyToXyz`] - denormalization (fails on `y == 0`)
//! 4. [`Step::XyzToRgb`] - XYZ -> RGB matrix, then gamma encode
//!
//! # Example
//!
//! ```rust
//! use xyy_color::{Color, ConvertConfig, Pipeline, RgbColor};
//!
//! let pipeline = Pipeline::rgb_round_trip(ConvertConfig::default());
//! let report = pipeline.run(RgbColor::from_8bit([10, 200, 30]).into())?;
//!
//! assert_eq!(report.len(), 4);
//! let Color::Rgb(back) = report[3].output else { unreachable!() };
//! assert_eq!(back.to_8bit(), [10, 200, 30]);
//! # Ok::<(), xyy_color::ColorError>(())
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::color::{Color, Space};
use crate::convert::{rgb_to_xyz_with, xyy_to_xyz, xyz_to_rgb_with, xyz_to_xyy};
use crate::{ColorError, ColorResult, ConvertConfig};

/// A single conversion in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// RGB to XYZ (gamma decode first when enabled).
    RgbToXyz,
    /// XYZ to xyY.
    XyzToXyy,
    /// xyY to XYZ.
    XyyToXyz,
    /// XYZ to RGB (gamma encode and clamp when enabled).
    XyzToRgb,
}

impl Step {
    /// Space this step consumes.
    pub const fn input(self) -> Space {
        match self {
            Self::RgbToXyz => Space::Rgb,
            Self::XyzToXyy | Self::XyzToRgb => Space::Xyz,
            Self::XyyToXyz => Space::Xyy,
        }
    }

    /// Space this step produces.
    pub const fn output(self) -> Space {
        match self {
            Self::RgbToXyz | Self::XyyToXyz => Space::Xyz,
            Self::XyzToXyy => Space::Xyy,
            Self::XyzToRgb => Space::Rgb,
        }
    }

    /// Applies this step to one value.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidPipeline`] if `color` is not in [`Step::input`],
    /// otherwise whatever the underlying conversion returns.
    pub fn apply(self, color: Color, config: &ConvertConfig) -> ColorResult<Color> {
        let codec = config.codec();
        let out: Color = match (self, color) {
            (Self::RgbToXyz, Color::Rgb(rgb)) => rgb_to_xyz_with(rgb, &codec).into(),
            (Self::XyzToXyy, Color::Xyz(xyz)) => xyz_to_xyy(xyz).into(),
            (Self::XyyToXyz, Color::Xyy(xyy)) => xyy_to_xyz(xyy)?.into(),
            (Self::XyzToRgb, Color::Xyz(xyz)) => xyz_to_rgb_with(xyz, &codec).into(),
            (step, color) => {
                return Err(ColorError::InvalidPipeline(format!(
                    "{} expects {} input, got {}",
                    step,
                    step.input(),
                    color.space()
                )));
            }
        };
        Ok(out)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input(), self.output())
    }
}

/// Input and output of one executed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// The step that ran.
    pub step: Step,
    /// Value fed in.
    pub input: Color,
    /// Value produced.
    pub output: Color,
}

/// A conversion pipeline.
///
/// Holds the conversion settings and an ordered list of steps.
///
/// # Example
///
/// ```rust
/// use xyy_color::{ConvertConfig, Pipeline, Step};
///
/// // Same as Pipeline::xyy_to_rgb
/// let pipeline = Pipeline::new(ConvertConfig::default().with_gamma(2.4))
///     .push(Step::XyyToXyz)
///     .push(Step::XyzToRgb);
/// assert_eq!(pipeline.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: ConvertConfig,
    steps: Vec<Step>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new(config: ConvertConfig) -> Self {
        Self { config, steps: Vec::new() }
    }

    /// RGB -> XYZ -> xyY, then back xyY -> XYZ -> RGB.
    pub fn rgb_round_trip(config: ConvertConfig) -> Self {
        Self::new(config)
            .push(Step::RgbToXyz)
            .push(Step::XyzToXyy)
            .push(Step::XyyToXyz)
            .push(Step::XyzToRgb)
    }

    /// xyY -> XYZ -> RGB.
    pub fn xyy_to_rgb(config: ConvertConfig) -> Self {
        Self::new(config).push(Step::XyyToXyz).push(Step::XyzToRgb)
    }

    /// Adds a step to the pipeline.
    pub fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Returns the number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the steps in the pipeline.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the conversion settings.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Checks that every step accepts what the previous one produces,
    /// starting from `start`.
    pub fn validate(&self, start: Space) -> ColorResult<()> {
        let mut space = start;
        for (i, step) in self.steps.iter().enumerate() {
            if step.input() != space {
                return Err(ColorError::InvalidPipeline(format!(
                    "step {} ({}) expects {} input, got {}",
                    i,
                    step,
                    step.input(),
                    space
                )));
            }
            space = step.output();
        }
        Ok(())
    }

    /// Runs every step and records each intermediate value.
    ///
    /// The pipeline is validated against `color` before any step runs.
    pub fn run(&self, color: Color) -> ColorResult<Vec<StepResult>> {
        self.validate(color.space())?;
        debug!(
            steps = self.steps.len(),
            gamma = self.config.gamma,
            black_floor = self.config.black_floor,
            "running pipeline"
        );

        let mut results = Vec::with_capacity(self.steps.len());
        let mut current = color;
        for &step in &self.steps {
            let output = step.apply(current, &self.config)?;
            trace!(%step, input = %current, output = %output, "step");
            results.push(StepResult { step, input: current, output });
            current = output;
        }
        Ok(results)
    }

    /// Runs the pipeline and returns only the final value.
    ///
    /// An empty pipeline returns `color` unchanged.
    pub fn apply(&self, color: Color) -> ColorResult<Color> {
        let results = self.run(color)?;
        Ok(results.last().map_or(color, |r| r.output))
    }
}
