//! This file provides the constants used for color space conversion. Every conversion in this crate
//! happens under the D65 white point, the one sRGB itself is defined under, so no chromatic
//! adaptation is ever needed. The matrices are stored row-major and applied with [`mat_mul`].

/// D65 white point in CIE XYZ, normalized so that Y is 1.
pub const D65_WHITE_POINT: [f64; 3] = [0.95047, 1.00000, 1.08883];

/// Linear sRGB to CIE XYZ (D65).
pub const STANDARD_RGB_TO_XYZ_MAT: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// CIE XYZ (D65) to linear sRGB.
pub const XYZ_TO_STANDARD_RGB_MAT: [[f64; 3]; 3] = [
    [03.2406, -1.5372, -0.4986],
    [-0.9689, 01.8758, 00.0415],
    [00.0557, -0.2040, 01.0570],
];

/// The sRGB companding curve switches from linear to a power law at this encoded value.
pub const SRGB_ENCODED_KNEE: f64 = 0.04045;

/// The same switch point, in linear light.
pub const SRGB_LINEAR_KNEE: f64 = 0.0031308;

/// The CIELAB nonlinearity switches from a cube root to a linear segment below this value of t,
/// which is (6/29)^3.
pub const CIELAB_EPSILON: f64 = 216.0 / 24389.0;

/// Multiplies a row-major 3x3 matrix by a column vector.
pub fn mat_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let mut out = [0.; 3];
    for (i, row) in m.iter().enumerate() {
        out[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
    out
}

/// Undoes sRGB gamma: maps an encoded channel in [0, 1] to linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_ENCODED_KNEE {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to a linear-light channel. Negative input stays negative so that
/// out-of-gamut values remain detectable by the caller.
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= SRGB_LINEAR_KNEE {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_invert_each_other() {
        let v = [0.3, 0.5, 0.7];
        let back = mat_mul(&XYZ_TO_STANDARD_RGB_MAT, mat_mul(&STANDARD_RGB_TO_XYZ_MAT, v));
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() <= 1e-3);
        }
    }

    #[test]
    fn test_white_maps_to_d65() {
        let xyz = mat_mul(&STANDARD_RGB_TO_XYZ_MAT, [1., 1., 1.]);
        for i in 0..3 {
            assert!((xyz[i] - D65_WHITE_POINT[i]).abs() <= 1e-3);
        }
    }

    #[test]
    fn test_gamma_round_trip() {
        for &c in &[0., 0.02, 0.04045, 0.2, 0.5, 0.9, 1.] {
            assert!((linear_to_srgb(srgb_to_linear(c)) - c).abs() <= 1e-6);
        }
    }
}
