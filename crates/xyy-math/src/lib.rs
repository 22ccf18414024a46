//! # xyy-math
//!
//! Math primitives for tristimulus color conversion.
//!
//! - [`Vec3`] - 3D vectors for RGB/XYZ/xyY triplets
//! - [`Mat3`] - 3x3 matrices for linear color space transforms
//!
//! # Design
//!
//! Everything is `f64` so that a forward transform followed by its inverse
//! reproduces the input to well below display precision. Matrices are stored
//! **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Construction, determinant and inverse are `const fn`, which lets fixed
//! matrix pairs be derived at compile time.
//!
//! # Usage
//!
//! ```rust
//! use xyy_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4887180, 0.3106803, 0.2006017],
//!     [0.1762044, 0.8129847, 0.0108109],
//!     [0.0000000, 0.0102048, 0.9897952],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Used By
//!
//! - `xyy-primaries` - Fixed RGB/XYZ matrices
//! - `xyy-color` - Color conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
