//! Conversion settings threaded through every transform.

use xyy_transfer::{GammaCodec, REFERENCE_BLACK_FLOOR};
use xyy_transfer::gamma::DISABLED;

/// Settings for RGB <-> XYZ conversion.
///
/// Defaults: gamma correction off and a 0.1 black floor for gamma-encoded
/// output.
///
/// # Example
///
/// ```rust
/// use xyy_color::ConvertConfig;
///
/// let cfg = ConvertConfig::default().with_gamma(2.4).with_black_floor(0.0);
/// assert!(cfg.codec().is_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertConfig {
    /// Gamma exponent; `<= 0` disables decode/encode and the output clamp.
    pub gamma: f64,
    /// Encoded RGB below this is forced to 0 (only with gamma enabled).
    pub black_floor: f64,
}

impl ConvertConfig {
    /// Gamma correction disabled, reference black floor.
    pub const DEFAULT: Self = Self {
        gamma: DISABLED,
        black_floor: REFERENCE_BLACK_FLOOR,
    };

    /// Sets the gamma exponent.
    pub const fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the black floor.
    pub const fn with_black_floor(mut self, floor: f64) -> Self {
        self.black_floor = floor;
        self
    }

    /// Gamma codec for these settings.
    pub const fn codec(&self) -> GammaCodec {
        GammaCodec::new(self.gamma).with_black_floor(self.black_floor)
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_gamma() {
        let cfg = ConvertConfig::default();
        assert_eq!(cfg.gamma, 0.0);
        assert_eq!(cfg.black_floor, 0.1);
        assert!(!cfg.codec().is_enabled());
    }

    #[test]
    fn test_codec_carries_floor() {
        let codec = ConvertConfig::default().with_gamma(2.2).with_black_floor(0.05).codec();
        assert_eq!(codec.gamma, 2.2);
        assert_eq!(codec.black_floor, 0.05);
    }
}
