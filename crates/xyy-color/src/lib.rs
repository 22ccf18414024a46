//! # xyy-color
//!
//! Conversion between RGB, CIE XYZ and CIE xyY.
//!
//! This crate combines the workspace into a single API:
//!
//! - **Color types** - [`RgbColor`], [`XyzColor`], [`XyyColor`]
//! - **Conversions** - the four transforms in [`convert`]
//! - **Settings** - [`ConvertConfig`] (gamma exponent, black floor)
//! - **Pipeline** - chained conversions with per-step reporting
//!
//! # Architecture
//!
//! ```text
//!                    xyy-color
//!                        |
//!            +-----------+-----------+
//!            |                       |
//!      xyy-transfer            xyy-primaries
//!                                    |
//!                                xyy-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use xyy_color::prelude::*;
//!
//! let config = ConvertConfig::default();
//! let rgb = RgbColor::from_8bit([255, 255, 255]);
//!
//! let xyz = rgb.to_xyz(&config);
//! let xyy = xyz.to_xyy();
//! assert!((xyy.x - 1.0 / 3.0).abs() < 1e-9);
//! assert!((xyy.luminance - 1.0).abs() < 1e-9);
//!
//! let back = xyy.to_xyz()?.to_rgb(&config);
//! assert_eq!(back.to_8bit(), [255, 255, 255]);
//! # Ok::<(), ColorError>(())
//! ```
//!
//! # Gamma
//!
//! Gamma is off by default (`gamma = 0.0`): RGB is treated as linear and the
//! XYZ -> RGB result is not clamped. With a positive exponent, RGB input is
//! decoded with the piecewise curve in [`transfer::gamma`] and output is
//! encoded then clamped to `[black_floor, 1]` (values under the floor become 0).
//!
//! # Dependencies
//!
//! - `xyy-math` - Vec3, Mat3
//! - `xyy-transfer` - Gamma curve
//! - `xyy-primaries` - CIE RGB matrices and reference white
//!
//! # Used By
//!
//! - `xyy-cli` - the `rgb2xyy` binary
//! - `xyy-bench` - benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod config;
mod error;
mod pipeline;
pub mod convert;

pub use color::{Color, MAX_8BIT, RgbColor, Space, XyyColor, XyzColor};
pub use config::ConvertConfig;
pub use convert::{rgb_to_xyz, xyy_to_xyz, xyz_to_rgb, xyz_to_xyy};
pub use error::{ColorError, ColorResult};
pub use pipeline::{Pipeline, Step, StepResult};

// Re-export sub-crates for convenience
pub use xyy_math as math;
pub use xyy_primaries as primaries;
pub use xyy_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Color, ColorError, ColorResult, ConvertConfig, Pipeline, RgbColor, Space, Step,
        StepResult, XyyColor, XyzColor,
    };
    pub use crate::convert::{rgb_to_xyz, xyy_to_xyz, xyz_to_rgb, xyz_to_xyy};

    pub use xyy_primaries::{CIE_RGB_TO_XYZ, REFERENCE_WHITE_XY, XYZ_TO_CIE_RGB};
    pub use xyy_transfer::{GammaCodec, REFERENCE_BLACK_FLOOR};
}
