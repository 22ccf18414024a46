//! sRGB-style piecewise gamma curve with a configurable exponent.
//!
//! The curve combines a linear segment near black with a power segment.
//! Unlike the fixed IEC 61966-2-1 curve, the exponent is a parameter:
//! a non-positive exponent disables the curve and values pass through.
//!
//! # Formula
//!
//! ```text
//! decode (encoded -> linear):
//!     if V <= 0.04045:  L = V / 12.92
//!     else:             L = ((V + 0.055) / 1.055)^gamma
//!
//! encode (linear -> encoded):
//!     if L > 0.0031308: V = 1.055 * L^(1/gamma) - 0.055
//!     else:             V = L * 12.92
//!     then V < floor -> 0, V > 1 -> 1
//! ```
//!
//! # Range
//!
//! - Input/Output: [0, 1]

/// Exponent value that disables gamma correction.
pub const DISABLED: f64 = 0.0;

/// Typical sRGB-like exponent.
pub const SRGB_GAMMA: f64 = 2.4;

/// Encoded values at or below this use the linear segment when decoding.
pub const DECODE_BREAK: f64 = 0.04045;

/// Linear values above this use the power segment when encoding.
pub const ENCODE_BREAK: f64 = 0.0031308;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f64 = 12.92;

const POWER_SCALE: f64 = 1.055;
const POWER_OFFSET: f64 = 0.055;

/// Encoded values below this floor are forced to black.
///
/// A floor of 0.0 gives a symmetric [0, 1] clamp.
pub const REFERENCE_BLACK_FLOOR: f64 = 0.1;

/// Returns true if `gamma` turns the curve on.
#[inline]
pub fn is_enabled(gamma: f64) -> bool {
    gamma > 0.0
}

/// Decodes one gamma-encoded channel to linear.
///
/// # Example
///
/// ```rust
/// use xyy_transfer::gamma::decode;
///
/// let linear = decode(0.5, 2.4);
/// assert!((linear - 0.214).abs() < 0.001);
///
/// // Disabled: pass-through
/// assert_eq!(decode(0.5, 0.0), 0.5);
/// ```
#[inline]
pub fn decode(v: f64, gamma: f64) -> f64 {
    if !is_enabled(gamma) {
        return v;
    }
    if v <= DECODE_BREAK {
        v / LINEAR_SLOPE
    } else {
        ((v + POWER_OFFSET) / POWER_SCALE).powf(gamma)
    }
}

/// Applies the encode curve without clamping.
#[inline]
pub fn encode_unclamped(l: f64, gamma: f64) -> f64 {
    if !is_enabled(gamma) {
        return l;
    }
    if l > ENCODE_BREAK {
        POWER_SCALE * l.powf(1.0 / gamma) - POWER_OFFSET
    } else {
        l * LINEAR_SLOPE
    }
}

/// Clamps an encoded value: below `floor` becomes 0, above 1 becomes 1.
#[inline]
pub fn clamp_encoded(v: f64, floor: f64) -> f64 {
    if v < floor {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Encodes one linear channel and clamps with the given black floor.
///
/// With the curve disabled the value is returned untouched, no clamping.
///
/// # Example
///
/// ```rust
/// use xyy_transfer::gamma::encode_with_floor;
///
/// // 0.005 encodes to ~0.065: kept with a zero floor
/// assert!(encode_with_floor(0.005, 2.4, 0.0) > 0.06);
/// // ...but snapped to black with the reference floor
/// assert_eq!(encode_with_floor(0.005, 2.4, 0.1), 0.0);
/// ```
#[inline]
pub fn encode_with_floor(l: f64, gamma: f64, floor: f64) -> f64 {
    if !is_enabled(gamma) {
        return l;
    }
    clamp_encoded(encode_unclamped(l, gamma), floor)
}

/// Encodes one linear channel using [`REFERENCE_BLACK_FLOOR`].
///
/// # Example
///
/// ```rust
/// use xyy_transfer::gamma::encode;
///
/// let encoded = encode(0.214, 2.4);
/// assert!((encoded - 0.5).abs() < 0.001);
/// assert_eq!(encode(2.0, 2.4), 1.0);
/// ```
#[inline]
pub fn encode(l: f64, gamma: f64) -> f64 {
    encode_with_floor(l, gamma, REFERENCE_BLACK_FLOOR)
}

/// Decodes an RGB triplet.
#[inline]
pub fn decode_rgb(rgb: [f64; 3], gamma: f64) -> [f64; 3] {
    rgb.map(|v| decode(v, gamma))
}

/// Encodes an RGB triplet with the given black floor.
#[inline]
pub fn encode_rgb(rgb: [f64; 3], gamma: f64, floor: f64) -> [f64; 3] {
    rgb.map(|v| encode_with_floor(v, gamma, floor))
}

/// Gamma exponent bundled with its black floor.
///
/// # Example
///
/// ```rust
/// use xyy_transfer::GammaCodec;
///
/// let codec = GammaCodec::new(2.4);
/// let linear = codec.decode(0.5);
/// assert!((codec.encode(linear) - 0.5).abs() < 1e-12);
///
/// assert!(!GammaCodec::DISABLED.is_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaCodec {
    /// Curve exponent; `<= 0` disables the curve.
    pub gamma: f64,
    /// Encoded values below this are forced to 0.
    pub black_floor: f64,
}

impl GammaCodec {
    /// Pass-through codec.
    pub const DISABLED: Self = Self::new(DISABLED);

    /// Creates a codec with the reference black floor.
    #[inline]
    pub const fn new(gamma: f64) -> Self {
        Self {
            gamma,
            black_floor: REFERENCE_BLACK_FLOOR,
        }
    }

    /// Replaces the black floor.
    #[inline]
    pub const fn with_black_floor(mut self, floor: f64) -> Self {
        self.black_floor = floor;
        self
    }

    /// True when the curve is applied.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        is_enabled(self.gamma)
    }

    /// Decodes one channel.
    #[inline]
    pub fn decode(&self, v: f64) -> f64 {
        decode(v, self.gamma)
    }

    /// Encodes and clamps one channel.
    #[inline]
    pub fn encode(&self, l: f64) -> f64 {
        encode_with_floor(l, self.gamma, self.black_floor)
    }

    /// Decodes an RGB triplet.
    #[inline]
    pub fn decode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        decode_rgb(rgb, self.gamma)
    }

    /// Encodes and clamps an RGB triplet.
    #[inline]
    pub fn encode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        encode_rgb(rgb, self.gamma, self.black_floor)
    }
}

impl Default for GammaCodec {
    fn default() -> Self {
        Self::DISABLED
    }
}
