//! This file implements HSL, a simple hexagonal transformation of sRGB into a cylinder. It has none
//! of the perceptual uniformity of CIELCH, but every HSL color with lightness and saturation in
//! [0, 1] lands inside the sRGB gamut with no searching. That makes it the engine's last resort:
//! when a perceptual conversion can't produce a color, the synthesizer builds one from the hue and
//! lightness alone in this space.
//!
//! Converting gray into HSL gives a hue of 0 degrees, although any hue could be used in its place.

use crate::color::{Color, RGBColor, XYZColor};

/// A color in the HSL color space, a direct transformation of sRGB.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HSLColor {
    /// The hue component, in degrees. Anything outside [0, 360) is wrapped into that range.
    pub h: f64,
    /// The saturation component, between 0 and 1.
    pub s: f64,
    /// The lightness component, between 0 and 1: the average of the largest and smallest RGB
    /// channels.
    pub l: f64,
}

impl HSLColor {
    /// Builds the HSL form of an sRGB color.
    pub fn from_rgb(rgb: RGBColor) -> HSLColor {
        // a hexagonal projection: radius is the largest component minus the smallest
        let components = [rgb.r, rgb.g, rgb.b];
        let max_c = components.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min_c = components.iter().cloned().fold(f64::INFINITY, f64::min);
        let chroma = max_c - min_c;

        let hue = if chroma == 0.0 {
            0.0
        } else if max_c == rgb.r {
            (((rgb.g - rgb.b) / chroma).rem_euclid(6.0)) * 60.0
        } else if max_c == rgb.g {
            ((rgb.b - rgb.r) / chroma) * 60.0 + 120.0
        } else {
            ((rgb.r - rgb.g) / chroma) * 60.0 + 240.0
        };

        let lightness = (max_c + min_c) / 2.0;
        let saturation = if lightness >= 1.0 || lightness <= 0.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        HSLColor {
            h: hue,
            s: saturation,
            l: lightness,
        }
    }

    /// Converts straight to sRGB. Saturation and lightness are clamped to [0, 1] first, so the
    /// result is always inside the gamut.
    pub fn to_rgb(&self) -> RGBColor {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.max(0.0).min(1.0);
        let l = self.l.max(0.0).min(1.0);
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        // the second-largest channel before the lightness offset is added
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h <= 60.0 {
            (chroma, x, 0.0)
        } else if h <= 120.0 {
            (x, chroma, 0.0)
        } else if h <= 180.0 {
            (0.0, chroma, x)
        } else if h <= 240.0 {
            (0.0, x, chroma)
        } else if h <= 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = l - chroma / 2.0;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

impl Color for HSLColor {
    fn from_xyz(xyz: XYZColor) -> HSLColor {
        HSLColor::from_rgb(RGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_rgb().to_xyz()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_from_rgb() {
        let red_hsl = HSLColor::from_rgb(RGBColor{r: 1., g: 0., b: 0.});
        assert!(red_hsl.h.abs() <= 0.0001);
        assert!((red_hsl.s - 1.0).abs() <= 0.0001);
        assert!((red_hsl.l - 0.5).abs() <= 0.0001);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(HSLColor{h: 0., s: 1., l: 0.5}.to_rgb().to_string(), "#ff0000");
        assert_eq!(HSLColor{h: 120., s: 1., l: 0.25}.to_rgb().to_string(), "#008000");
        assert_eq!(HSLColor{h: 240., s: 0.5, l: 0.5}.to_rgb().to_string(), "#4040bf");
        // hue wraps
        assert_eq!(HSLColor{h: 600., s: 0.5, l: 0.5}.to_rgb(), HSLColor{h: 240., s: 0.5, l: 0.5}.to_rgb());
    }

    #[test]
    fn test_out_of_range_stays_in_gamut() {
        let rgb = HSLColor{h: -30., s: 3., l: 1.4}.to_rgb();
        assert!(rgb.in_gamut(1e-9));
        let gray = HSLColor::from_rgb(RGBColor{r: 0.5, g: 0.5, b: 0.5});
        assert_eq!(gray.h, 0.);
        assert_eq!(gray.s, 0.);
    }
}
