//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. Every color the engine synthesizes is first
//! described here, because equal steps in L and C look like equal steps to a viewer.

use thiserror::Error;

use super::cielabcolor::CIELABColor;
use crate::color::{Color, RGBColor, XYZColor};
use crate::coord::Coord;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
/// # Example
///
/// ```
/// # use worldview_hue::colors::CIELCHColor;
/// // a deep red: well inside the sRGB gamut
/// let red = CIELCHColor{l: 40., c: 60., h: 30.};
/// let rgb = red.try_to_rgb().unwrap();
/// assert!(rgb.r > rgb.g && rgb.r > rgb.b);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHColor {
    /// The lightness component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component: distance from the gray of the same lightness. Perceptually even, and
    /// roughly 0 to 150 for physically possible colors, though for most lightness values the
    /// displayable maximum is much smaller.
    pub c: f64,
    /// The hue component, in degrees. 90 is yellow, 180 green, 270 blue and 360 red.
    pub h: f64,
}

/// A failure to turn an LCH triple into an sRGB color. Only non-finite input or output can cause
/// one: finite colors outside the gamut are mapped, not rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Some component of the color, before or after conversion, was NaN or infinite.
    #[error("LCH({l}, {c}, {h}) has no finite sRGB representation")]
    NonFinite {
        /// Requested lightness.
        l: f64,
        /// Requested chroma.
        c: f64,
        /// Requested hue.
        h: f64,
    },
}

impl CIELCHColor {
    /// The same color with its hue wrapped into [0, 360).
    pub fn with_normalized_hue(self) -> CIELCHColor {
        CIELCHColor {
            h: self.h.rem_euclid(360.0),
            ..self
        }
    }

    /// Converts to sRGB without any gamut handling: channels may fall outside [0, 1]. Fails only if
    /// the input or the result is not finite.
    pub fn try_to_rgb(&self) -> Result<RGBColor, ConversionError> {
        let err = ConversionError::NonFinite {
            l: self.l,
            c: self.c,
            h: self.h,
        };
        if !Coord::from(*self).is_finite() {
            return Err(err);
        }
        let rgb: RGBColor = self.convert();
        if rgb.r.is_finite() && rgb.g.is_finite() && rgb.b.is_finite() {
            Ok(rgb)
        } else {
            Err(err)
        }
    }
}

impl Color for CIELCHColor {
    /// Converts from XYZ to LCH by way of CIELAB.
    fn from_xyz(xyz: XYZColor) -> CIELCHColor {
        let lab = CIELABColor::from_xyz(xyz);
        // radius is sqrt(a^2 + b^2), angle is atan2(b, a)
        let c = lab.b.hypot(lab.a);
        let h = lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0);
        CIELCHColor { l: lab.l, c, h }
    }
    /// Converts from LCH back to XYZ by way of CIELAB.
    fn to_xyz(&self) -> XYZColor {
        let (sin, cos) = self.h.to_radians().sin_cos();
        CIELABColor {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
        .to_xyz()
    }
}

impl From<Coord> for CIELCHColor {
    fn from(c: Coord) -> CIELCHColor {
        CIELCHColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<CIELCHColor> for Coord {
    fn from(lch: CIELCHColor) -> Coord {
        Coord {
            x: lch.l,
            y: lch.c,
            z: lch.h,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lch_xyz_round_trip() {
        let xyz = XYZColor{x: 0.2, y: 0.42, z: 0.23};
        let lch: CIELCHColor = xyz.convert();
        let xyz2: XYZColor = lch.convert();
        assert!((xyz.x - xyz2.x).abs() <= 1e-9);
        assert!((xyz.y - xyz2.y).abs() <= 1e-9);
        assert!((xyz.z - xyz2.z).abs() <= 1e-9);
    }

    #[test]
    fn test_hue_is_wrapped() {
        // a blue: atan2 is negative here, so the hue must have been wrapped
        let blue: CIELCHColor = RGBColor{r: 0., g: 0., b: 1.}.convert();
        assert!(blue.h >= 0. && blue.h < 360.);
        assert!((blue.h - 306.3).abs() <= 1.);
        let wrapped = CIELCHColor{l: 50., c: 10., h: -30.}.with_normalized_hue();
        assert!((wrapped.h - 330.).abs() <= 1e-9);
    }

    #[test]
    fn test_non_finite_is_an_error() {
        let bad = CIELCHColor{l: f64::NAN, c: 10., h: 20.};
        assert!(bad.try_to_rgb().is_err());
        let inf = CIELCHColor{l: 50., c: f64::INFINITY, h: 20.};
        assert!(inf.try_to_rgb().is_err());
    }

    #[test]
    fn test_gray_has_no_chroma() {
        let gray = CIELCHColor{l: 50., c: 0., h: 123.}.try_to_rgb().unwrap();
        assert!((gray.r - gray.g).abs() <= 1e-3);
        assert!((gray.g - gray.b).abs() <= 1e-3);
    }
}
