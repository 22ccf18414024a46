//! Color value types.
//!
//! Three immutable triples, one per color space:
//!
//! - [`RgbColor`] - gamma-encoded (or linear) CIE RGB, nominally [0, 1]
//! - [`XyzColor`] - CIE XYZ tristimulus values, Y is luminance
//! - [`XyyColor`] - chromaticity (x, y) plus luminance Y
//!
//! [`Color`] wraps any of them so a [`Pipeline`](crate::Pipeline) can carry
//! values between steps.
//!
//! # 8-bit form
//!
//! 8-bit RGB is a display convenience, not a separate type:
//!
//! ```
//! use xyy_color::RgbColor;
//!
//! let rgb = RgbColor::from_8bit([255, 0, 51]);
//! assert_eq!(rgb.g, 0.0);
//! assert!((rgb.b - 0.2).abs() < 1e-12);
//! assert_eq!(rgb.to_8bit(), [255, 0, 51]);
//! ```

use std::fmt;
use xyy_math::Vec3;

/// Maximum 8-bit channel value.
pub const MAX_8BIT: f64 = 255.0;

/// RGB color, components nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbColor {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl RgbColor {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new RGB color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates from 8-bit channels (`raw / 255`).
    #[inline]
    pub fn from_8bit(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb.map(|c| c as f64 / MAX_8BIT);
        Self::new(r, g, b)
    }

    /// Converts to 8-bit channels as `round(channel * 255)`.
    ///
    /// Out-of-range channels saturate to 0 or 255; NaN maps to 0.
    #[inline]
    pub fn to_8bit(self) -> [u8; 3] {
        self.to_array().map(|c| (c * MAX_8BIT).round().clamp(0.0, MAX_8BIT) as u8)
    }

    /// Components as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Creates from `[r, g, b]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// True if every component lies in [0, 1].
    pub fn is_in_unit_range(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// True if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        Vec3::from(self).is_finite()
    }
}

/// CIE XYZ tristimulus values.
///
/// Non-negative in principle; not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyzColor {
    /// X
    pub x: f64,
    /// Y (luminance)
    pub y: f64,
    /// Z
    pub z: f64,
}

impl XyzColor {
    /// All-zero XYZ (black).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates new XYZ values.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as `[X, Y, Z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from `[X, Y, Z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// `X + Y + Z`, the chromaticity denominator.
    #[inline]
    pub const fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// True if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        Vec3::from(self).is_finite()
    }
}

/// Chromaticity (x, y) plus luminance Y.
///
/// The third chromaticity coordinate is implicit: `z = 1 - x - y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyyColor {
    /// Chromaticity x
    pub x: f64,
    /// Chromaticity y
    pub y: f64,
    /// Luminance Y, carried through from XYZ
    pub luminance: f64,
}

impl XyyColor {
    /// Creates new xyY values.
    #[inline]
    pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self { x, y, luminance }
    }

    /// Implicit chromaticity `z = 1 - x - y`.
    #[inline]
    pub const fn z(self) -> f64 {
        1.0 - self.x - self.y
    }

    /// Components as `[x, y, Y]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.luminance]
    }

    /// Creates from `[x, y, Y]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// True if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        Vec3::from_array(self.to_array()).is_finite()
    }
}

macro_rules! impl_triple_conversions {
    ($ty:ty) => {
        impl From<[f64; 3]> for $ty {
            #[inline]
            fn from(a: [f64; 3]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$ty> for [f64; 3] {
            #[inline]
            fn from(c: $ty) -> [f64; 3] {
                c.to_array()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let [a, b, c] = self.to_array();
                write!(f, "{:.6} {:.6} {:.6}", a, b, c)
            }
        }
    };
}

impl_triple_conversions!(RgbColor);
impl_triple_conversions!(XyzColor);
impl_triple_conversions!(XyyColor);

impl From<RgbColor> for Vec3 {
    #[inline]
    fn from(c: RgbColor) -> Vec3 {
        Vec3::from_array(c.to_array())
    }
}

impl From<Vec3> for RgbColor {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<XyzColor> for Vec3 {
    #[inline]
    fn from(c: XyzColor) -> Vec3 {
        Vec3::from_array(c.to_array())
    }
}

impl From<Vec3> for XyzColor {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::from_array(v.to_array())
    }
}

/// The color spaces a [`Color`] can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// RGB
    Rgb,
    /// CIE XYZ
    Xyz,
    /// CIE xyY
    Xyy,
}

impl Space {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Xyz => "XYZ",
            Self::Xyy => "xyY",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value in any supported color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB value
    Rgb(RgbColor),
    /// XYZ value
    Xyz(XyzColor),
    /// xyY value
    Xyy(XyyColor),
}

impl Color {
    /// The space this value lives in.
    pub const fn space(&self) -> Space {
        match self {
            Self::Rgb(_) => Space::Rgb,
            Self::Xyz(_) => Space::Xyz,
            Self::Xyy(_) => Space::Xyy,
        }
    }

    /// Components as a plain triple.
    pub const fn to_array(&self) -> [f64; 3] {
        match self {
            Self::Rgb(c) => c.to_array(),
            Self::Xyz(c) => c.to_array(),
            Self::Xyy(c) => c.to_array(),
        }
    }
}

impl From<RgbColor> for Color {
    fn from(c: RgbColor) -> Self {
        Self::Rgb(c)
    }
}

impl From<XyzColor> for Color {
    fn from(c: XyzColor) -> Self {
        Self::Xyz(c)
    }
}

impl From<XyyColor> for Color {
    fn from(c: XyyColor) -> Self {
        Self::Xyy(c)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => fmt::Display::fmt(c, f),
            Self::Xyz(c) => fmt::Display::fmt(c, f),
            Self::Xyy(c) => fmt::Display::fmt(c, f),
        }
    }
}
