//! This file defines the [`Color`] trait, the hub color space [`XYZColor`] that every conversion
//! passes through, and [`RGBColor`], the only representation that leaves the engine. An
//! `RGBColor` is written out as a lowercase `#rrggbb` string or as a 24-bit packed integer.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

use crate::consts::{
    linear_to_srgb, mat_mul, srgb_to_linear, STANDARD_RGB_TO_XYZ_MAT, XYZ_TO_STANDARD_RGB_MAT,
};

lazy_static! {
    static ref HEX_DIGITS: Regex = Regex::new("^[0-9a-fA-F]+$").expect("static regex is valid");
}

/// A point in the CIE 1931 XYZ color space under the D65 white point, with Y normalized so that
/// reference white has Y = 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct XYZColor {
    /// The X axis, loosely a mix of the long- and medium-wavelength cone responses.
    pub x: f64,
    /// The Y axis: luminance.
    pub y: f64,
    /// The Z axis, loosely the short-wavelength cone response.
    pub z: f64,
}

/// Any color representation that can be converted to and from CIE XYZ. Converting between two
/// arbitrary spaces goes through XYZ, which is what [`Color::convert`] does.
pub trait Color: Sized {
    /// Builds this color from a point in XYZ.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Projects this color into XYZ.
    fn to_xyz(&self) -> XYZColor;
    /// Converts to any other color space.
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

/// An error in parsing a hex color code. Every variant carries the input that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RGBParseError {
    /// The input was the empty string.
    #[error("empty string is not a hex color")]
    Empty,
    /// The input did not begin with `#`.
    #[error("hex color {0:?} must start with '#'")]
    MissingHash(String),
    /// The input had a digit count other than 3 or 6 after the `#`.
    #[error("hex color {0:?} must have 3 or 6 digits after '#'")]
    InvalidLength(String),
    /// The input had characters after the `#` that are not hex digits.
    #[error("hex color {0:?} contains characters that are not hex digits")]
    InvalidDigits(String),
}

/// A color in the sRGB space. Each channel is stored as a float, where 0 is none of that primary
/// and 1 is all of it. Channels outside [0, 1] represent colors outside the sRGB gamut; they are
/// only ever seen inside conversions, since output goes through [`Bound`](crate::bound::Bound)
/// clamping first.
///
/// # Example
/// ```
/// # use worldview_hue::color::RGBColor;
/// let violet = RGBColor::from_hex_code("#7C3AED").unwrap();
/// assert_eq!(violet.int_rgb_tup(), (124, 58, 237));
/// assert_eq!(violet.to_string(), "#7c3aed");
/// assert_eq!(violet.to_packed(), 0x7c3aed);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl Color for RGBColor {
    /// Converts from XYZ without clamping: the result can have channels outside [0, 1] if the
    /// color is out of gamut.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let lin = mat_mul(&XYZ_TO_STANDARD_RGB_MAT, [xyz.x, xyz.y, xyz.z]);
        RGBColor {
            r: linear_to_srgb(lin[0]),
            g: linear_to_srgb(lin[1]),
            b: linear_to_srgb(lin[2]),
        }
    }
    fn to_xyz(&self) -> XYZColor {
        let lin = [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ];
        let xyz = mat_mul(&STANDARD_RGB_TO_XYZ_MAT, lin);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

// channel in [0, 1] to 0-255, clamping anything outside; NaN ends up as 0
fn quantize(c: f64) -> u8 {
    (c.max(0.).min(1.) * 255.).round() as u8
}

impl RGBColor {
    /// Pure white, the light overlay label.
    pub const WHITE: RGBColor = RGBColor { r: 1., g: 1., b: 1. };
    /// Pure black, the dark overlay label.
    pub const BLACK: RGBColor = RGBColor { r: 0., g: 0., b: 0. };

    /// Parses a hex code of the form `#rrggbb` or the CSS shorthand `#rgb`. Digits may be in
    /// either case. Anything else is rejected with an error naming the problem.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        if hex.is_empty() {
            return Err(RGBParseError::Empty);
        }
        let digits = if hex.starts_with('#') {
            &hex[1..]
        } else {
            return Err(RGBParseError::MissingHash(hex.to_string()));
        };
        let count = digits.chars().count();
        if count != 3 && count != 6 {
            return Err(RGBParseError::InvalidLength(hex.to_string()));
        }
        if !HEX_DIGITS.is_match(digits) {
            return Err(RGBParseError::InvalidDigits(hex.to_string()));
        }
        // "abc" means "aabbcc"
        let full: String = if count == 3 {
            digits.chars().flat_map(|c| vec![c, c]).collect()
        } else {
            digits.to_string()
        };
        let packed = u32::from_str_radix(&full, 16)
            .map_err(|_| RGBParseError::InvalidDigits(hex.to_string()))?;
        Ok(RGBColor::from_packed(packed))
    }

    /// Builds a color from a 24-bit packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub fn from_packed(packed: u32) -> RGBColor {
        let r = ((packed >> 16) & 0xff) as u8;
        let g = ((packed >> 8) & 0xff) as u8;
        let b = (packed & 0xff) as u8;
        RGBColor::from((r, g, b))
    }

    /// The 24-bit packed `0xRRGGBB` value of this color after rounding each channel.
    pub fn to_packed(&self) -> u32 {
        let (r, g, b) = self.int_rgb_tup();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Each channel rounded to the nearest 0-255 integer, clamping out-of-range values.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Snaps every channel to the nearest 8-bit level, so that the color is exactly what its hex
    /// code says.
    pub fn quantized(&self) -> RGBColor {
        RGBColor::from(self.int_rgb_tup())
    }

    /// True if every channel lies in [0, 1] give or take `tolerance`.
    pub fn in_gamut(&self, tolerance: f64) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|&c| c >= -tolerance && c <= 1. + tolerance)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r) / 255.,
            g: f64::from(g) / 255.,
            b: f64::from(b) / 255.,
        }
    }
}

impl fmt::Display for RGBColor {
    /// Lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (r, g, b) = self.int_rgb_tup();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

impl Serialize for RGBColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RGBColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RGBColor, D::Error> {
        let s = String::deserialize(deserializer)?;
        RGBColor::from_hex_code(&s).map_err(de::Error::custom)
    }
}
