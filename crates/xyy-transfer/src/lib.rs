//! # xyy-transfer
//!
//! Gamma transfer curve for encoding and decoding RGB channels.
//!
//! The curve is the sRGB piecewise shape (linear toe + power segment) with
//! the exponent left as a parameter. An exponent of `0.0` (or any negative
//! value) disables correction entirely.
//!
//! # Terminology
//!
//! - **decode**: Encoded -> Linear, applied before the RGB-to-XYZ matrix
//! - **encode**: Linear -> Encoded, applied after the XYZ-to-RGB matrix,
//!   followed by a clamp into [0, 1] with a configurable black floor
//!
//! # Usage
//!
//! ```rust
//! use xyy_transfer::gamma;
//!
//! let linear = gamma::decode(0.5, 2.4);
//! let encoded = gamma::encode(linear, 2.4);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `xyy-color` - RGB <-> XYZ transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;

pub use gamma::{GammaCodec, REFERENCE_BLACK_FLOOR};
pub use gamma::{decode as gamma_decode, encode as gamma_encode};
