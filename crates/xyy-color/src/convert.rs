//! The four conversions between RGB, XYZ and xyY.
//!
//! ```text
//! RGB -> (gamma decode) -> XYZ -> (normalize)   -> xyY
//! xyY -> (denormalize)  -> XYZ -> (gamma encode) -> RGB
//! ```
//!
//! All functions are pure. Gamma is passed explicitly, either as a bare
//! exponent or through a [`GammaCodec`] / [`ConvertConfig`].
//!
//! # Example
//!
//! ```rust
//! use xyy_color::convert::{rgb_to_xyz, xyz_to_xyy, xyy_to_xyz, xyz_to_rgb};
//! use xyy_color::RgbColor;
//!
//! let rgb = RgbColor::from_8bit([200, 120, 40]);
//! let xyz = rgb_to_xyz(rgb, 0.0);
//! let xyy = xyz_to_xyy(xyz);
//! let back = xyz_to_rgb(xyy_to_xyz(xyy)?, 0.0);
//! assert_eq!(back.to_8bit(), [200, 120, 40]);
//! # Ok::<(), xyy_color::ColorError>(())
//! ```

use crate::{ColorError, ColorResult, ConvertConfig, RgbColor, XyyColor, XyzColor};
use tracing::trace;
use xyy_math::Vec3;
use xyy_primaries::{CIE_RGB_TO_XYZ, REFERENCE_WHITE_XY, XYZ_TO_CIE_RGB};
use xyy_transfer::GammaCodec;

/// RGB to XYZ with an explicit codec.
#[inline]
pub fn rgb_to_xyz_with(rgb: RgbColor, codec: &GammaCodec) -> XyzColor {
    let linear = Vec3::from_array(codec.decode_rgb(rgb.to_array()));
    XyzColor::from(CIE_RGB_TO_XYZ * linear)
}

/// RGB to XYZ (CIE RGB, reference white E).
///
/// Channels are gamma-decoded first when `gamma > 0`. No clamping.
///
/// # Example
///
/// ```rust
/// use xyy_color::{RgbColor, convert::rgb_to_xyz};
///
/// let xyz = rgb_to_xyz(RgbColor::WHITE, 0.0);
/// assert!((xyz.x - 1.0).abs() < 1e-12);
/// assert!((xyz.y - 1.0).abs() < 1e-12);
/// assert!((xyz.z - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rgb_to_xyz(rgb: RgbColor, gamma: f64) -> XyzColor {
    rgb_to_xyz_with(rgb, &GammaCodec::new(gamma))
}

/// XYZ to xyY.
///
/// When `X + Y + Z == 0` (black) the chromaticity is undefined and the
/// reference white chromaticity is used instead. Luminance always passes
/// through unchanged.
///
/// # Example
///
/// ```rust
/// use xyy_color::{XyzColor, convert::xyz_to_xyy};
///
/// let black = xyz_to_xyy(XyzColor::ZERO);
/// assert!((black.x - 0.34567).abs() < 1e-5);
/// assert!((black.y - 0.35850).abs() < 1e-5);
/// assert_eq!(black.luminance, 0.0);
/// ```
pub fn xyz_to_xyy(xyz: XyzColor) -> XyyColor {
    let sum = xyz.sum();
    if sum != 0.0 {
        XyyColor::new(xyz.x / sum, xyz.y / sum, xyz.y)
    } else {
        trace!(?xyz, "zero XYZ sum, using reference white chromaticity");
        let (x, y) = REFERENCE_WHITE_XY;
        XyyColor::new(x, y, xyz.y)
    }
}

/// xyY to XYZ.
///
/// # Errors
///
/// - [`ColorError::NonFinite`] if any component is NaN or infinite
/// - [`ColorError::ZeroChromaticityY`] if `y == 0`
///
/// # Example
///
/// ```rust
/// use xyy_color::{XyyColor, ColorError, convert::xyy_to_xyz};
///
/// let xyz = xyy_to_xyz(XyyColor::new(0.25, 0.5, 0.8))?;
/// assert_eq!(xyz.y, 0.8);
/// assert!((xyz.x - 0.4).abs() < 1e-12);
///
/// let err = xyy_to_xyz(XyyColor::new(0.3, 0.0, 0.5));
/// assert!(matches!(err, Err(ColorError::ZeroChromaticityY { .. })));
/// # Ok::<(), ColorError>(())
/// ```
pub fn xyy_to_xyz(xyy: XyyColor) -> ColorResult<XyzColor> {
    if !xyy.is_finite() {
        return Err(ColorError::NonFinite(format!("xyY {:?}", xyy.to_array())));
    }
    if xyy.y == 0.0 {
        return Err(ColorError::ZeroChromaticityY {
            x: xyy.x,
            y: xyy.y,
            luminance: xyy.luminance,
        });
    }

    let scale = xyy.luminance / xyy.y;
    Ok(XyzColor::new(xyy.x * scale, xyy.luminance, xyy.z() * scale))
}

/// XYZ to RGB with an explicit codec.
#[inline]
pub fn xyz_to_rgb_with(xyz: XyzColor, codec: &GammaCodec) -> RgbColor {
    let linear = XYZ_TO_CIE_RGB * Vec3::from(xyz);
    RgbColor::from_array(codec.encode_rgb(linear.to_array()))
}

/// XYZ to RGB (CIE RGB, reference white E).
///
/// With `gamma > 0` channels are gamma-encoded and clamped (below the
/// reference black floor of 0.1 -> 0, above 1 -> 1). With gamma disabled
/// the linear result is returned as is and may leave [0, 1].
///
/// # Example
///
/// ```rust
/// use xyy_color::{XyzColor, convert::xyz_to_rgb};
///
/// // Out-of-gamut XYZ: negative red without gamma, clamped with it
/// let xyz = XyzColor::new(0.1, 0.5, 0.1);
/// assert!(xyz_to_rgb(xyz, 0.0).r < 0.0);
/// assert_eq!(xyz_to_rgb(xyz, 2.4).r, 0.0);
/// ```
#[inline]
pub fn xyz_to_rgb(xyz: XyzColor, gamma: f64) -> RgbColor {
    xyz_to_rgb_with(xyz, &GammaCodec::new(gamma))
}

impl RgbColor {
    /// Converts to XYZ using `config`.
    #[inline]
    pub fn to_xyz(self, config: &ConvertConfig) -> XyzColor {
        rgb_to_xyz_with(self, &config.codec())
    }
}

impl XyzColor {
    /// Converts to xyY.
    #[inline]
    pub fn to_xyy(self) -> XyyColor {
        xyz_to_xyy(self)
    }

    /// Converts to RGB using `config`.
    #[inline]
    pub fn to_rgb(self, config: &ConvertConfig) -> RgbColor {
        xyz_to_rgb_with(self, &config.codec())
    }
}

impl XyyColor {
    /// Converts to XYZ. See [`xyy_to_xyz`].
    #[inline]
    pub fn to_xyz(self) -> ColorResult<XyzColor> {
        xyy_to_xyz(self)
    }
}
