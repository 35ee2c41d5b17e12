//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB), a device-independent space with an
//! L value for lightness and two opponent color axes. Here it is always relative to the D65 white
//! point, matching sRGB, so conversion never needs a chromatic adaptation step.

use crate::color::{Color, XYZColor};
use crate::consts::{CIELAB_EPSILON, D65_WHITE_POINT};
use crate::coord::Coord;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CIELABColor {
    /// Lightness: 0 is black and 100 is diffuse white.
    pub l: f64,
    /// The green (negative) to magenta (positive) axis. Most visible colors fall between -128 and
    /// 127.
    pub a: f64,
    /// The blue (negative) to yellow (positive) axis, with the same conventional range as `a`.
    pub b: f64,
}

impl Color for CIELABColor {
    fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let f = |t: f64| {
            if t > CIELAB_EPSILON {
                t.cbrt()
            } else {
                let delta: f64 = 6.0 / 29.0;
                t / (3.0 * delta * delta) + 4.0 / 29.0
            }
        };
        let fx = f(xyz.x / D65_WHITE_POINT[0]);
        let fy = f(xyz.y / D65_WHITE_POINT[1]);
        let fz = f(xyz.z / D65_WHITE_POINT[2]);
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    fn to_xyz(&self) -> XYZColor {
        let f_inv = |t: f64| {
            let delta: f64 = 6.0 / 29.0;
            if t > delta {
                t * t * t
            } else {
                3.0 * delta * delta * (t - 4.0 / 29.0)
            }
        };
        let fy = (self.l + 16.0) / 116.0;
        XYZColor {
            x: D65_WHITE_POINT[0] * f_inv(fy + self.a / 500.0),
            y: D65_WHITE_POINT[1] * f_inv(fy),
            z: D65_WHITE_POINT[2] * f_inv(fy - self.b / 200.0),
        }
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(lab: CIELABColor) -> Coord {
        Coord {
            x: lab.l,
            y: lab.a,
            z: lab.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::RGBColor;

    #[test]
    fn test_cielab_xyz_round_trip() {
        let xyz = XYZColor{x: 0.4, y: 0.2, z: 0.6};
        let xyz2 = CIELABColor::from_xyz(xyz).to_xyz();
        assert!((xyz.x - xyz2.x).abs() <= 1e-9);
        assert!((xyz.y - xyz2.y).abs() <= 1e-9);
        assert!((xyz.z - xyz2.z).abs() <= 1e-9);
    }

    #[test]
    fn test_white_and_black() {
        let white: CIELABColor = RGBColor::WHITE.convert();
        assert!((white.l - 100.).abs() <= 0.1);
        assert!(white.a.abs() <= 0.1);
        assert!(white.b.abs() <= 0.1);
        let black: CIELABColor = RGBColor::BLACK.convert();
        assert!(black.l.abs() <= 1e-9);
    }

    #[test]
    fn test_reference_red() {
        // sRGB red is about L 53.2, a 80.1, b 67.2 under D65
        let red: CIELABColor = RGBColor{r: 1., g: 0., b: 0.}.convert();
        assert!((red.l - 53.24).abs() <= 0.1);
        assert!((red.a - 80.09).abs() <= 0.3);
        assert!((red.b - 67.20).abs() <= 0.3);
    }
}
