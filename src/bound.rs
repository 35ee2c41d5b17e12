//! This module describes the Bound trait, which describes which values a color space's components
//! may take, and the gamut mapping that brings a perceptual color inside sRGB. The sRGB gamut only
//! supports channel values between 0 and 1, and a CIELCH color with high chroma can easily ask for
//! more than that. Rather than fail, such a color is desaturated: lightness and hue are kept,
//! chroma is reduced until the color is displayable, and whatever rounding error remains is
//! clipped.

use crate::color::{Color, RGBColor};
use crate::colors::{CIELCHColor, ConversionError};
use crate::coord::Coord;

/// How far outside [0, 1] a channel may stray and still count as displayable. Clipping absorbs the
/// rest, and it is well under one 8-bit step.
pub const GAMUT_TOLERANCE: f64 = 1e-3;

/// Bisection steps used when searching for the largest displayable chroma. 24 halvings of a
/// chroma range under 200 leave an error far below anything visible.
pub const GAMUT_BISECTION_STEPS: usize = 24;

/// Describes a color space in which the components have explicit bounds. For example, an sRGB
/// color can't have negative channels, and CIELCH lightness can't go past 100.
/// # Example
/// ```
/// # use worldview_hue::bound::Bound;
/// # use worldview_hue::color::RGBColor;
/// let out_of_bounds = RGBColor{r: 0.1, g: -0.2, b: 1.2};
/// assert_eq!(RGBColor::clamp(out_of_bounds), RGBColor{r: 0.1, g: 0., b: 1.});
/// ```
pub trait Bound: Color + Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] of bounds on each component, in
    /// the order they appear in the Coord representation. Unbounded sides use infinity.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the bounds.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let mut point_vals = [0.; 3];
        for (i, &component) in [point.x, point.y, point.z].iter().enumerate() {
            let (min, max) = ranges[i];
            point_vals[i] = if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            };
        }
        Coord {
            x: point_vals[0],
            y: point_vals[1],
            z: point_vals[2],
        }
    }
    /// Returns the color with every component clamped to its bounds. A color already in bounds is
    /// returned unchanged.
    fn clamp(color: Self) -> Self {
        Self::from(Self::clamp_coord(color.into()))
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(rgb: RGBColor) -> Coord {
        Coord {
            x: rgb.r,
            y: rgb.g,
            z: rgb.b,
        }
    }
}

// hue is wrapped rather than clamped, see `with_normalized_hue`
impl Bound for CIELCHColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 100.), (0., std::f64::INFINITY), (0., 360.)]
    }
}

/// The outcome of mapping a CIELCH color into sRGB.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GamutMapping {
    /// The color as it was asked for, with hue wrapped and lightness/chroma clamped to their
    /// bounds.
    pub requested: CIELCHColor,
    /// The color actually produced: same lightness and hue, chroma reduced if needed.
    pub mapped: CIELCHColor,
    /// The displayable result, with every channel in [0, 1].
    pub rgb: RGBColor,
    /// True if chroma had to be reduced.
    pub desaturated: bool,
}

/// Maps a CIELCH color into the sRGB gamut. Colors already displayable pass through; otherwise
/// chroma is bisected down toward gray, which is always displayable, until the largest chroma that
/// fits is found. Lightness and hue never change. The result is clipped to [0, 1] to absorb
/// floating-point slack.
///
/// # Errors
/// Returns [`ConversionError::NonFinite`] if any component is NaN or infinite.
///
/// # Example
/// ```
/// # use worldview_hue::bound::map_into_srgb;
/// # use worldview_hue::colors::CIELCHColor;
/// // no display can show a red this saturated
/// let vivid = CIELCHColor{l: 80., c: 140., h: 25.};
/// let mapping = map_into_srgb(vivid).unwrap();
/// assert!(mapping.desaturated);
/// assert!(mapping.mapped.c < 140.);
/// assert_eq!(mapping.mapped.l, 80.);
/// ```
pub fn map_into_srgb(color: CIELCHColor) -> Result<GamutMapping, ConversionError> {
    let requested = CIELCHColor::clamp(color.with_normalized_hue());
    let rgb = requested.try_to_rgb()?;
    if rgb.in_gamut(GAMUT_TOLERANCE) {
        return Ok(GamutMapping {
            requested,
            mapped: requested,
            rgb: RGBColor::clamp(rgb),
            desaturated: false,
        });
    }

    let mut lo = 0.;
    let mut hi = requested.c;
    for _ in 0..GAMUT_BISECTION_STEPS {
        let mid = (lo + hi) / 2.;
        let candidate = CIELCHColor { c: mid, ..requested };
        if candidate.try_to_rgb()?.in_gamut(GAMUT_TOLERANCE) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let mapped = CIELCHColor { c: lo, ..requested };
    debug!(
        "desaturated LCH({:.2}, {:.2}, {:.2}) to chroma {:.2}",
        requested.l, requested.c, requested.h, lo
    );
    Ok(GamutMapping {
        requested,
        mapped,
        rgb: RGBColor::clamp(mapped.try_to_rgb()?),
        desaturated: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one_bounds() {
        let color1 = RGBColor{r: 0.1, g: -0.2, b: 1.2};
        assert_eq!(RGBColor::clamp(color1), RGBColor{r: 0.1, g: 0., b: 1.});
    }

    #[test]
    fn test_lch_bounds() {
        let lch = CIELCHColor{l: 120., c: -5., h: 40.};
        assert_eq!(CIELCHColor::clamp(lch), CIELCHColor{l: 100., c: 0., h: 40.});
    }

    #[test]
    fn test_in_gamut_passes_through() {
        let muted = CIELCHColor{l: 50., c: 10., h: 200.};
        let mapping = map_into_srgb(muted).unwrap();
        assert!(!mapping.desaturated);
        assert_eq!(mapping.mapped, muted);
        assert!(mapping.rgb.in_gamut(0.));
    }

    #[test]
    fn test_out_of_gamut_is_desaturated_not_rejected() {
        for &h in &[0., 25., 90., 140., 220., 275., 310.] {
            for &l in &[5., 30., 60., 95.] {
                let mapping = map_into_srgb(CIELCHColor{l, c: 160., h}).unwrap();
                assert!(mapping.desaturated);
                assert_eq!(mapping.mapped.l, l);
                assert_eq!(mapping.mapped.h, h);
                assert!(mapping.mapped.c < 160.);
                assert!(mapping.rgb.in_gamut(0.));
            }
        }
    }

    #[test]
    fn test_extreme_lightness() {
        let white = map_into_srgb(CIELCHColor{l: 100., c: 50., h: 90.}).unwrap();
        assert_eq!(white.rgb.quantized(), RGBColor::WHITE);
        let black = map_into_srgb(CIELCHColor{l: 0., c: 50., h: 90.}).unwrap();
        assert_eq!(black.rgb.quantized(), RGBColor::BLACK);
    }

    #[test]
    fn test_non_finite_fails() {
        assert!(map_into_srgb(CIELCHColor{l: f64::NAN, c: 0., h: 0.}).is_err());
    }
}
