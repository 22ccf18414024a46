//! # xyy-primaries
//!
//! Fixed matrices and white points for CIE RGB under reference white E.
//!
//! The conversion matrices are not configurable: RGB is always CIE RGB with
//! the equal-energy illuminant, so white `(1, 1, 1)` maps to `X = Y = Z = 1`.
//!
//! # Contents
//!
//! | Item | Meaning |
//! |------|---------|
//! | [`CIE_RGB_TO_XYZ`] | Linear CIE RGB -> XYZ |
//! | [`XYZ_TO_CIE_RGB`] | XYZ -> linear CIE RGB, exact inverse of the above |
//! | [`XYZ_TO_CIE_RGB_PUBLISHED`] | The 7-digit published inverse table |
//! | [`REFERENCE_WHITE_XYZ`] | White used when chromaticity is undefined |
//! | [`REFERENCE_WHITE_XY`] | Its chromaticity |
//!
//! # Usage
//!
//! ```rust
//! use xyy_primaries::{CIE_RGB_TO_XYZ, XYZ_TO_CIE_RGB};
//! use xyy_math::Vec3;
//!
//! let xyz = CIE_RGB_TO_XYZ * Vec3::ONE;
//! assert!((xyz.x - 1.0).abs() < 1e-12);
//!
//! let back = XYZ_TO_CIE_RGB * xyz;
//! assert!((back.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `xyy-color` - RGB <-> XYZ and XYZ -> xyY transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use xyy_math::{Mat3, Vec3};

// ============================================================================
// Matrices
// ============================================================================

/// CIE RGB (reference white E) to XYZ.
///
/// Every row sums to 1.0, so equal RGB maps to equal XYZ.
pub const CIE_RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4887180, 0.3106803, 0.2006017],
    [0.1762044, 0.8129847, 0.0108109],
    [0.0000000, 0.0102048, 0.9897952],
]);

/// XYZ to CIE RGB (reference white E).
///
/// Derived at compile time as the inverse of [`CIE_RGB_TO_XYZ`], so a
/// forward-then-inverse transform is an identity to f64 precision. Agrees
/// with [`XYZ_TO_CIE_RGB_PUBLISHED`] to within 3e-7 per element.
pub const XYZ_TO_CIE_RGB: Mat3 = match CIE_RGB_TO_XYZ.inverse() {
    Some(m) => m,
    None => panic!("CIE RGB matrix is singular"),
};

/// Published 7-digit XYZ to CIE RGB table.
///
/// Rounded independently of the forward matrix; the product with
/// [`CIE_RGB_TO_XYZ`] deviates from identity by ~1e-7.
pub const XYZ_TO_CIE_RGB_PUBLISHED: Mat3 = Mat3::from_rows([
    [2.3706743, -0.9000405, -0.4706338],
    [-0.5138850, 1.4253036, 0.0885814],
    [0.0052982, -0.0146949, 1.0093968],
]);

// ============================================================================
// White points
// ============================================================================

/// Reference white as XYZ (Y = 1).
///
/// Used as the chromaticity of black, where `X + Y + Z = 0` leaves x and y
/// undefined. Numerically this is the D50 white.
pub const REFERENCE_WHITE_XYZ: Vec3 = Vec3::new(0.964221, 1.0, 0.825211);

/// Chromaticity of [`REFERENCE_WHITE_XYZ`], approximately (0.34567, 0.35850).
pub const REFERENCE_WHITE_XY: (f64, f64) = xyz_to_xy(REFERENCE_WHITE_XYZ);

/// Chromaticity of the equal-energy illuminant E.
pub const E_XY: (f64, f64) = (1.0 / 3.0, 1.0 / 3.0);

/// Projects XYZ onto the chromaticity plane.
///
/// The caller guarantees `X + Y + Z != 0`.
pub const fn xyz_to_xy(xyz: Vec3) -> (f64, f64) {
    let sum = xyz.sum();
    (xyz.x / sum, xyz.y / sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rows_sum_to_one() {
        for i in 0..3 {
            assert_abs_diff_eq!(CIE_RGB_TO_XYZ.row(i).sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_white_maps_to_equal_energy() {
        let xyz = CIE_RGB_TO_XYZ * Vec3::ONE;
        assert_abs_diff_eq!(xyz.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(xyz.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(xyz.z, 1.0, epsilon = 1e-12);
        let (x, y) = xyz_to_xy(xyz);
        assert_abs_diff_eq!(x, E_XY.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, E_XY.1, epsilon = 1e-12);
    }

    #[test]
    fn test_derived_inverse_is_exact() {
        let product = XYZ_TO_CIE_RGB * CIE_RGB_TO_XYZ;
        assert!(product.max_abs_diff(&Mat3::IDENTITY) < 1e-13);
    }

    #[test]
    fn test_derived_inverse_matches_published() {
        assert!(XYZ_TO_CIE_RGB.max_abs_diff(&XYZ_TO_CIE_RGB_PUBLISHED) < 5e-7);
    }

    #[test]
    fn test_published_inverse_is_approximate() {
        let product = XYZ_TO_CIE_RGB_PUBLISHED * CIE_RGB_TO_XYZ;
        let err = product.max_abs_diff(&Mat3::IDENTITY);
        assert!(err < 2e-7, "err={}", err);
    }

    #[test]
    fn test_reference_white_xy() {
        let (x, y) = REFERENCE_WHITE_XY;
        assert_abs_diff_eq!(x, 0.345669, epsilon = 1e-6);
        assert_abs_diff_eq!(y, 0.358496, epsilon = 1e-6);
        assert!(x + y < 1.0);
    }
}
